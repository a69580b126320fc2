/// Euler-angle orientation and rotation matrices
use nalgebra::{Matrix4, Vector3};

/// Orientation as roll, pitch and yaw angles (in degrees)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
}

impl Orientation {
    pub fn new(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self { roll, pitch, yaw }
    }

    pub fn zero() -> Self {
        Self {
            roll: 0.0,
            pitch: 0.0,
            yaw: 0.0,
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::zero()
    }
}

/// Transform builder for 3D rotations
pub struct Transform;

impl Transform {
    /// Create a rotation matrix from an orientation.
    ///
    /// Angles are applied intrinsically in X, Y', Z'' order: roll about X
    /// first, then pitch about the rotated Y, then yaw about the rotated Z.
    /// As a world-frame composition this is `Rx * Ry * Rz`.
    pub fn rotation_matrix(orientation: &Orientation) -> Matrix4<f32> {
        let rx = Matrix4::new_rotation(Vector3::new(orientation.roll.to_radians(), 0.0, 0.0));
        let ry = Matrix4::new_rotation(Vector3::new(0.0, orientation.pitch.to_radians(), 0.0));
        let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, orientation.yaw.to_radians()));

        rx * ry * rz
    }
}
