//! Engine lifecycle integration tests
//!
//! Builder validation, registration failures, bulk transport commands,
//! volume control, diagnostics, and teardown.

use sfera::prelude::*;

mod helpers;
use helpers::*;

#[test]
fn test_builder_requires_collaborators() {
    assert!(SferaEngine::builder().build().is_err());

    let clock = ClockFixture::new();
    assert!(SferaEngine::builder().clock(clock.shared()).build().is_err());
}

#[test]
fn test_builder_pushes_initial_master_gain() {
    let clock = ClockFixture::new();
    let probe = RenderProbe::new();
    let engine = SferaEngine::builder()
        .clock(clock.shared())
        .renderer(Box::new(probe.backend()))
        .master_volume(0.5)
        .build()
        .unwrap();

    assert_eq!(probe.calls(), vec![RenderCall::MasterGain(0.5)]);
    assert_eq!(engine.master_volume(), 0.5);
}

#[test]
fn test_builder_rejects_bad_master_gain() {
    let clock = ClockFixture::new();
    let probe = RenderProbe::new();
    assert!(SferaEngine::builder()
        .clock(clock.shared())
        .renderer(Box::new(probe.backend()))
        .master_volume(-1.0)
        .build()
        .is_err());
}

#[test]
fn test_ids_are_monotonic_insertion_order() {
    let scene = SceneFixture::new();
    let (a, _) = scene.add_source(positional_between(0.0, 10.0));
    let (b, _) = scene.add_source(positional_between(5.0, 15.0));
    let (c, _) = scene.add_source(ambisonic_with_offset(Rotation::IDENTITY));

    assert!(a < b && b < c);

    let info = scene.engine.sources_info();
    assert_eq!(info.len(), 3);
    assert_eq!(info[0].id, a);
    assert_eq!(info[2].id, c);
    assert_eq!(info[0].name, "engine.wav");
    assert_eq!(info[2].name, "field.ogg");
}

#[test]
fn test_degenerate_window_rejected_at_registration() {
    let scene = SceneFixture::new();
    let mut config = positional_between(0.0, 10.0);
    config.window = Some(TimeWindow {
        start: 10.0,
        end: 10.0,
    });

    let transport = TransportProbe::new();
    assert!(scene.engine.add_source(config, transport.handle()).is_err());
    assert_eq!(scene.engine.source_count(), 0);
}

/// Play/stop/seek bulk commands behave like a player's transport bar.
#[test]
fn test_bulk_transport_commands() {
    let scene = SceneFixture::new();
    let (_early, early_t) = scene.add_source(positional_between(0.0, 10.0));
    let (_late, late_t) = scene.add_source(positional_between(30.0, 40.0));
    scene.clock.set_playing(true);
    scene.clock.set_time(2.0);

    scene.engine.transport().play();
    assert!(!early_t.is_paused(), "in-window source should start");
    assert!(late_t.is_paused(), "out-of-window source should wait");
    assert_eq!(early_t.time(), 2.0);

    scene.engine.transport().pause();
    assert!(early_t.is_paused());
    assert_eq!(early_t.time(), 2.0, "pause must not move the clip");

    // Stop is the only path that rewinds.
    scene.engine.transport().stop();
    assert_eq!(early_t.time(), 0.0);

    // Seek realigns clip-local positions; the next tick restarts playback.
    scene.engine.transport().seek(35.0);
    scene.clock.set_time(35.0);
    assert_eq!(late_t.time(), 5.0);
    scene.engine.tick();
    assert!(!late_t.is_paused());
    assert!(early_t.is_paused());
}

#[test]
fn test_source_volume_override_via_engine() {
    let scene = SceneFixture::new();
    let (id, _transport) = scene.add_source(positional_between(0.0, 10.0));
    scene.clock.set_playing(true);

    scene.engine.tick_at(1.0);
    scene.engine.set_source_volume(id, 0.3).unwrap();
    assert_eq!(last_gain(&scene.probe, id), Some(0.3));

    // Static volume: the override survives subsequent ticks.
    scene.engine.tick_at(2.0);
    assert_eq!(last_gain(&scene.probe, id), Some(0.3));

    assert!(scene.engine.set_source_volume(id, f32::NAN).is_err());
    assert!(scene
        .engine
        .set_source_volume(SourceId::new(99), 0.5)
        .is_err());
}

#[test]
fn test_master_volume_roundtrip() {
    let scene = SceneFixture::new();
    scene.engine.set_master_volume(0.25).unwrap();
    assert_eq!(scene.engine.master_volume(), 0.25);
    assert!(scene
        .probe
        .calls()
        .contains(&RenderCall::MasterGain(0.25)));

    assert!(scene.engine.set_master_volume(-0.5).is_err());
    assert_eq!(scene.engine.master_volume(), 0.25);
}

/// One broken source must not silence the rest of the scene.
#[test]
fn test_partial_failure_isolation() {
    let scene = SceneFixture::new();
    let (bad, _bad_t) = scene.add_source(positional_between(0.0, 10.0));
    let (good, good_t) = scene.add_source(positional_between(0.0, 10.0));
    scene.clock.set_playing(true);

    scene.probe.fail_gain_for(bad);
    scene.engine.tick_at(1.0);

    assert_eq!(last_gain(&scene.probe, good), Some(1.0));
    assert!(!good_t.is_paused());

    // The broken source recovers once the renderer does: state is re-derived
    // every tick, nothing was permanently disabled.
    scene.probe.clear_failures();
    scene.engine.tick_at(1.5);
    assert_eq!(last_gain(&scene.probe, bad), Some(1.0));
}

#[test]
fn test_shutdown_releases_everything() {
    let scene = SceneFixture::new();
    let (id, transport) = scene.add_source(positional_between(0.0, 10.0));
    scene.clock.set_playing(true);
    scene.engine.tick_at(1.0);
    assert!(!transport.is_paused());

    scene.engine.shutdown();
    assert!(transport.is_paused());
    assert!(scene
        .probe
        .calls()
        .iter()
        .any(|c| matches!(c, RenderCall::Detach(d) if *d == id)));
    assert_eq!(scene.engine.source_count(), 0);

    // Post-shutdown driving is inert.
    scene.probe.clear();
    scene.engine.tick_at(2.0);
    scene.engine.run_periodic_check();
    assert!(scene.probe.calls().is_empty());
}
