//! Source configuration and validation.

use serde::{Deserialize, Serialize};

use crate::{Attribute, Error, Result, Rotation, TimeWindow, Vector3};

/// How a source is spatialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    /// A point source placed in 3-D space and panned by distance/direction.
    Positional,
    /// A sound field rotated as a whole via a rotation matrix.
    Ambisonic,
}

/// Kind-specific spatial parameters, mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpatialParams {
    Positional { position: Attribute<Vector3> },
    Ambisonic { rotation: Attribute<Rotation> },
}

impl SpatialParams {
    pub fn kind(&self) -> SourceKind {
        match self {
            SpatialParams::Positional { .. } => SourceKind::Positional,
            SpatialParams::Ambisonic { .. } => SourceKind::Ambisonic,
        }
    }
}

/// Everything needed to register one audio clip with the scheduler.
///
/// `window: None` means the source is eligible for the whole timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Clip path or URL; the final path component doubles as the display
    /// name in diagnostics.
    pub path: String,
    pub window: Option<TimeWindow>,
    pub volume: Attribute<f32>,
    pub spatial: SpatialParams,
}

impl SourceConfig {
    /// Positional source at unit volume over the whole timeline.
    pub fn positional(path: impl Into<String>, position: Attribute<Vector3>) -> Self {
        Self {
            path: path.into(),
            window: None,
            volume: Attribute::Static(1.0),
            spatial: SpatialParams::Positional { position },
        }
    }

    /// Ambisonic source at unit volume over the whole timeline.
    pub fn ambisonic(path: impl Into<String>, rotation: Attribute<Rotation>) -> Self {
        Self {
            path: path.into(),
            window: None,
            volume: Attribute::Static(1.0),
            spatial: SpatialParams::Ambisonic { rotation },
        }
    }

    pub fn with_window(mut self, window: TimeWindow) -> Self {
        self.window = Some(window);
        self
    }

    pub fn with_volume(mut self, volume: Attribute<f32>) -> Self {
        self.volume = volume;
        self
    }

    /// Display name derived from the clip path.
    pub fn display_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Effective window: the configured one, or the whole timeline.
    pub fn effective_window(&self) -> TimeWindow {
        self.window.unwrap_or_else(TimeWindow::whole)
    }

    /// Reject bad windows and non-finite parameters before they can reach
    /// evaluation. A degenerate window would divide by zero in the
    /// interpolator; it must never get past here.
    pub fn validate(&self) -> Result<()> {
        if let Some(window) = self.window {
            window.validate()?;
        }

        for gain in attribute_values(&self.volume) {
            if !gain.is_finite() || gain < 0.0 {
                return Err(Error::InvalidGain(gain));
            }
        }

        match &self.spatial {
            SpatialParams::Positional { position } => {
                if !attribute_values(position).iter().all(Vector3::is_finite) {
                    return Err(Error::NonFinite("source position"));
                }
            }
            SpatialParams::Ambisonic { rotation } => {
                if !attribute_values(rotation).iter().all(Rotation::is_finite) {
                    return Err(Error::NonFinite("source rotation"));
                }
            }
        }

        Ok(())
    }
}

fn attribute_values<T: Copy>(attr: &Attribute<T>) -> Vec<T> {
    match attr {
        Attribute::Static(v) => vec![*v],
        Attribute::Ramp { from, to } => vec![*from, *to],
    }
}
