//! Rotation and placement math for spatial sources.
//!
//! Coordinates are right-handed with distances in meters: positive `x` is to
//! the listener's right, positive `y` is up, positive `z` is behind the
//! listener. Angles are radians everywhere; [`Rotation::from_degrees`] exists
//! for hosts that sample camera attributes in degrees.

use serde::{Deserialize, Serialize};

/// A point or direction in listener space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Place a point by distance/azimuth/elevation.
    ///
    /// Azimuth 0 is straight ahead, positive to the right; elevation 0 is the
    /// horizontal plane. Straight ahead maps to negative `z`.
    pub fn from_polar(distance: f32, azimuth: f32, elevation: f32) -> Self {
        Self {
            x: distance * elevation.cos() * azimuth.sin(),
            y: distance * elevation.sin(),
            z: -distance * elevation.cos() * azimuth.cos(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// An orientation as Euler angles in radians.
///
/// Yaw rotates about the vertical axis, pitch about the lateral axis, roll
/// about the longitudinal axis. Matrix conversion composes
/// `Rz(roll) * Rx(pitch) * Ry(yaw)` with yaw outermost; a different order
/// rotates the sound field audibly wrong, so the layout below is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl Rotation {
    pub const IDENTITY: Self = Self {
        yaw: 0.0,
        pitch: 0.0,
        roll: 0.0,
    };

    pub const fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self { yaw, pitch, roll }
    }

    pub fn from_degrees(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self {
            yaw: yaw.to_radians(),
            pitch: pitch.to_radians(),
            roll: roll.to_radians(),
        }
    }

    /// Compose a listener orientation with a per-source offset.
    ///
    /// This is the angle-wise sum, not a matrix product. The approximation is
    /// kept deliberately: renderers downstream were voiced against it, and
    /// the angle-sum is total over all inputs. It degrades near +/-90 degrees
    /// pitch (gimbal lock); that inaccuracy is accepted.
    pub fn compose(self, local: Rotation) -> Rotation {
        Rotation {
            yaw: self.yaw + local.yaw,
            pitch: self.pitch + local.pitch,
            roll: self.roll + local.roll,
        }
    }

    /// 3x3 rotation matrix, column-major.
    pub fn to_matrix3(self) -> [f32; 9] {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        let (sr, cr) = self.roll.sin_cos();

        [
            cy * cp,
            sy * cp,
            -sp,
            cy * sp * sr - sy * cr,
            sy * sp * sr + cy * cr,
            cp * sr,
            cy * sp * cr + sy * sr,
            sy * sp * cr - cy * sr,
            cp * cr,
        ]
    }

    /// 4x4 rotation matrix, column-major, as ambisonic renderers expect.
    pub fn to_matrix4(self) -> [f32; 16] {
        let m = self.to_matrix3();

        [
            m[0], m[1], m[2], 0.0, m[3], m[4], m[5], 0.0, m[6], m[7], m[8], 0.0, 0.0, 0.0, 0.0,
            1.0,
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.yaw.is_finite() && self.pitch.is_finite() && self.roll.is_finite()
    }
}

/// Forward and up vectors for a listener at the given yaw/pitch.
///
/// Positional hosts that drive a point-source panner orient the listener from
/// these instead of a rotation matrix. Roll does not move the forward vector,
/// so it takes no part here.
pub fn listener_basis(yaw: f32, pitch: f32) -> ([f32; 3], [f32; 3]) {
    let forward = [
        yaw.sin() * pitch.cos(),
        pitch.sin(),
        -yaw.cos() * pitch.cos(),
    ];

    let up_pitch = pitch + core::f32::consts::FRAC_PI_2;
    let up = [
        yaw.sin() * up_pitch.cos(),
        up_pitch.sin(),
        -yaw.cos() * up_pitch.cos(),
    ];

    (forward, up)
}
