//! Test helpers and fixtures for Sfera integration tests
//!
//! Built around the deterministic collaborators from `sfera::testing`: a
//! hand-driven master clock, a recording renderer probe, and scripted media
//! transports whose clip positions only move when commanded (or when a test
//! injects drift).
#![allow(dead_code)]

use sfera::prelude::*;
pub use sfera::testing::{ClockFixture, RenderCall, RenderProbe, TransportProbe};

/// A complete scene under test: engine plus handles to all collaborators.
pub struct SceneFixture {
    pub clock: ClockFixture,
    pub probe: RenderProbe,
    pub engine: SferaEngine,
}

impl SceneFixture {
    pub fn new() -> Self {
        let clock = ClockFixture::new();
        let probe = RenderProbe::new();
        let engine = SferaEngine::builder()
            .clock(clock.shared())
            .renderer(Box::new(probe.backend()))
            .build()
            .expect("failed to build test engine");
        Self {
            clock,
            probe,
            engine,
        }
    }

    /// Register a source, returning its id and the transport's shared probe.
    pub fn add_source(&self, config: SourceConfig) -> (SourceId, TransportProbe) {
        let transport = TransportProbe::new();
        let id = self
            .engine
            .add_source(config, transport.handle())
            .expect("failed to register source");
        (id, transport)
    }
}

/// Positional test source parked a couple of meters away.
pub fn positional_between(start: f64, end: f64) -> SourceConfig {
    SourceConfig::positional(
        "clips/engine.wav",
        Attribute::Static(Vector3::new(1.0, 0.0, -2.0)),
    )
    .with_window(TimeWindow::new(start, end).expect("bad test window"))
}

/// Whole-timeline ambisonic test source with a fixed rotation offset.
pub fn ambisonic_with_offset(offset: Rotation) -> SourceConfig {
    SourceConfig::ambisonic("clips/field.ogg", Attribute::Static(offset))
}

/// Most recent gain emitted for a source, if any.
pub fn last_gain(probe: &RenderProbe, id: SourceId) -> Option<f32> {
    probe.calls().iter().rev().find_map(|c| match c {
        RenderCall::Gain(g_id, gain) if *g_id == id => Some(*gain),
        _ => None,
    })
}

/// Most recent position emitted for a source, if any.
pub fn last_position(probe: &RenderProbe, id: SourceId) -> Option<Vector3> {
    probe.calls().iter().rev().find_map(|c| match c {
        RenderCall::Position(p_id, pos) if *p_id == id => Some(*pos),
        _ => None,
    })
}

/// Most recent rotation matrix emitted for a source, if any.
pub fn last_matrix(probe: &RenderProbe, id: SourceId) -> Option<[f32; 16]> {
    probe.calls().iter().rev().find_map(|c| match c {
        RenderCall::RotationMatrix(m_id, m) if *m_id == id => Some(*m),
        _ => None,
    })
}
