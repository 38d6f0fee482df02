//! Drift-correction integration tests
//!
//! Two thresholds coexist: the continuous per-frame path corrects above
//! 0.10s, the lenient periodic check above 0.15s. Both hard-correct by
//! reseeking the transport to the expected clip-local time.

use approx::assert_relative_eq;

mod helpers;
use helpers::*;

/// Reference case: expected clip-local 3.3s, transport reports 3.0s.
/// Drift 0.3 > 0.15 makes the periodic check reseek to 3.3.
#[test]
fn test_periodic_check_corrects_drift() {
    let scene = SceneFixture::new();
    let (_id, transport) = scene.add_source(positional_between(10.0, 20.0));
    scene.clock.set_playing(true);

    scene.clock.set_time(13.3);
    scene.engine.tick();
    transport.set_time(3.0); // transport lagging 0.3s behind

    scene.engine.run_periodic_check();
    assert_relative_eq!(transport.time(), 3.3, epsilon = 1e-9);
}

/// Drift below both thresholds is left alone by both paths.
#[test]
fn test_small_drift_is_tolerated() {
    let scene = SceneFixture::new();
    let (_id, transport) = scene.add_source(positional_between(10.0, 20.0));
    scene.clock.set_playing(true);

    scene.clock.set_time(13.3);
    scene.engine.tick();
    transport.set_time(3.25); // 0.05s off

    scene.engine.run_periodic_check();
    assert_eq!(transport.time(), 3.25);
    scene.engine.tick();
    assert_eq!(transport.time(), 3.25);
}

/// Drift between the two thresholds: the periodic check tolerates it, the
/// continuous per-frame path corrects it.
#[test]
fn test_continuous_path_is_stricter() {
    let scene = SceneFixture::new();
    let (_id, transport) = scene.add_source(positional_between(10.0, 20.0));
    scene.clock.set_playing(true);

    scene.clock.set_time(13.3);
    scene.engine.tick();
    transport.set_time(3.18); // 0.12s off: > 0.10, < 0.15

    scene.engine.run_periodic_check();
    assert_eq!(transport.time(), 3.18, "lenient check should not correct");

    scene.engine.tick();
    assert_relative_eq!(transport.time(), 3.3, epsilon = 1e-9);
}

/// The periodic check never runs corrections while the master is paused.
#[test]
fn test_periodic_check_idle_while_paused() {
    let scene = SceneFixture::new();
    let (_id, transport) = scene.add_source(positional_between(10.0, 20.0));
    scene.clock.set_playing(true);

    scene.clock.set_time(15.0);
    scene.engine.tick();
    scene.clock.set_playing(false);
    scene.engine.tick();

    transport.set_time(1.0); // wildly off, but the master is paused
    scene.engine.run_periodic_check();
    assert_eq!(transport.time(), 1.0);
}

/// A failed correction seek leaves drift standing; playback continues and a
/// later check corrects it.
#[test]
fn test_failed_correction_retries_naturally() {
    let scene = SceneFixture::new();
    let (_id, transport) = scene.add_source(positional_between(10.0, 20.0));
    scene.clock.set_playing(true);

    scene.clock.set_time(13.3);
    scene.engine.tick();
    transport.set_time(3.0);

    transport.fail_commands(true);
    scene.engine.run_periodic_check();
    assert_eq!(transport.time(), 3.0, "failed seek must not move the clip");
    assert!(!transport.is_paused(), "source must keep playing");

    transport.fail_commands(false);
    scene.engine.run_periodic_check();
    assert_relative_eq!(transport.time(), 3.3, epsilon = 1e-9);
}

/// Window flips driven by master seeks hold regardless of whether the
/// periodic checker runs between, before, or after the ticks.
#[test]
fn test_state_flip_independent_of_periodic_interleaving() {
    let scene = SceneFixture::new();
    let (_id, transport) = scene.add_source(positional_between(10.0, 20.0));
    scene.clock.set_playing(true);

    scene.clock.set_time(15.0);
    scene.engine.run_periodic_check(); // before any tick: must be harmless
    scene.engine.tick();
    assert!(!transport.is_paused());

    // Master seeks backward out of the window; checker fires first.
    scene.clock.set_time(5.0);
    scene.engine.run_periodic_check();
    scene.engine.tick();
    assert!(transport.is_paused());

    // Forward again; checker fires after the tick this time.
    scene.clock.set_time(12.0);
    scene.engine.tick();
    scene.engine.run_periodic_check();
    assert!(!transport.is_paused());
    assert_eq!(transport.time(), 2.0);
}
