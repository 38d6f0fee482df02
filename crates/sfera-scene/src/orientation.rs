//! Listener orientation feed.

use std::sync::Arc;

use arc_swap::ArcSwap;
use sfera_core::Rotation;

/// Adapter pushing camera-orientation samples into a scheduler.
///
/// Holds the scheduler's orientation cell; each submission overwrites the
/// whole rotation (no partial updates) and takes effect on the next tick.
/// Cloneable and lock-free, so a camera callback may feed it without ever
/// touching the scheduler itself.
#[derive(Clone)]
pub struct ListenerFeed {
    orientation: Arc<ArcSwap<Rotation>>,
}

impl ListenerFeed {
    pub(crate) fn new(orientation: Arc<ArcSwap<Rotation>>) -> Self {
        Self { orientation }
    }

    /// Store an orientation already expressed in scheduler convention
    /// (radians, yaw about vertical).
    pub fn submit(&self, rotation: Rotation) {
        self.orientation.store(Arc::new(rotation));
    }

    /// Convert a camera rig's rotation attribute to listener orientation.
    ///
    /// Camera rigs report degrees about the x (lateral), y (vertical) and
    /// z (longitudinal) axes with the opposite sign convention: looking
    /// right is negative y on the rig but positive yaw here.
    pub fn submit_camera_degrees(&self, x_deg: f32, y_deg: f32, z_deg: f32) {
        self.submit(Rotation::new(
            -y_deg.to_radians(),
            -x_deg.to_radians(),
            -z_deg.to_radians(),
        ));
    }

    /// The most recently submitted orientation.
    pub fn current(&self) -> Rotation {
        **self.orientation.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use core::f32::consts::FRAC_PI_2;

    fn feed() -> ListenerFeed {
        ListenerFeed::new(Arc::new(ArcSwap::new(Arc::new(Rotation::IDENTITY))))
    }

    #[test]
    fn submit_overwrites_wholesale() {
        let feed = feed();
        feed.submit(Rotation::new(1.0, 2.0, 3.0));
        feed.submit(Rotation::new(0.5, 0.0, 0.0));
        assert_eq!(feed.current(), Rotation::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn camera_degrees_negate_and_remap() {
        let feed = feed();
        // Rig turned 90 degrees left about vertical -> listener yaw +90deg...
        // the rig's y is the vertical axis and the sign flips.
        feed.submit_camera_degrees(0.0, -90.0, 0.0);
        let r = feed.current();
        assert_relative_eq!(r.yaw, FRAC_PI_2, epsilon = 1e-6);
        assert_relative_eq!(r.pitch, 0.0);
        assert_relative_eq!(r.roll, 0.0);

        // Rig pitched down 45 degrees about x -> positive listener pitch.
        feed.submit_camera_degrees(-45.0, 0.0, 0.0);
        assert_relative_eq!(feed.current().pitch, FRAC_PI_2 / 2.0, epsilon = 1e-6);
    }
}
