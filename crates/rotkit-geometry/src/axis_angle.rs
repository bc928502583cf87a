//! Axis-angle rotation container delegating conversions to the kernel.

use crate::vector::Vector3;
use rotkit_rotation::axis_angle as conv;
use rotkit_rotation::{quaternion, rotation_matrix, rotation_vector, yaw_pitch_roll};
use serde::{Deserialize, Serialize};

/// A rotation stored as a unit axis and an angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAngle {
    /// Unit rotation axis.
    pub axis: Vector3,
    /// Rotation angle in radians.
    pub angle: f64,
}

impl AxisAngle {
    /// The canonical zero rotation.
    pub const IDENTITY: Self = Self {
        axis: Vector3 {
            x: 1.0,
            y: 0.0,
            z: 0.0,
        },
        angle: 0.0,
    };

    /// Convert a quaternion `[x, y, z, s]`.
    pub fn from_quaternion(quaternion: &[f64; 4]) -> Self {
        let (axis, angle) = conv::axis_angle_from_quaternion(quaternion);
        Self {
            axis: Vector3::from_array(&axis),
            angle,
        }
    }

    /// Convert a rotation vector.
    pub fn from_rotation_vector(rotation_vector: &Vector3) -> Self {
        let (axis, angle) = conv::axis_angle_from_rotation_vector(&rotation_vector.to_array());
        Self {
            axis: Vector3::from_array(&axis),
            angle,
        }
    }

    /// Convert a row-major rotation matrix.
    pub fn from_rotation_matrix(matrix: &[[f64; 3]; 3]) -> Self {
        let (axis, angle) = conv::axis_angle_from_rotation_matrix(matrix);
        Self {
            axis: Vector3::from_array(&axis),
            angle,
        }
    }

    /// Convert a yaw-pitch-roll rotation.
    pub fn from_yaw_pitch_roll(yaw: f64, pitch: f64, roll: f64) -> Self {
        let (axis, angle) = conv::axis_angle_from_yaw_pitch_roll(yaw, pitch, roll);
        Self {
            axis: Vector3::from_array(&axis),
            angle,
        }
    }

    /// The rotation as a unit quaternion `[x, y, z, s]`.
    pub fn to_quaternion(&self) -> [f64; 4] {
        quaternion::quaternion_from_axis_angle(&self.axis.to_array(), self.angle)
    }

    /// The rotation as a rotation vector.
    pub fn to_rotation_vector(&self) -> Vector3 {
        Vector3::from_array(&rotation_vector::rotation_vector_from_axis_angle(
            &self.axis.to_array(),
            self.angle,
        ))
    }

    /// The rotation as a row-major rotation matrix.
    pub fn to_rotation_matrix(&self) -> [[f64; 3]; 3] {
        rotation_matrix::rotation_matrix_from_axis_angle(&self.axis.to_array(), self.angle)
    }

    /// The rotation as `[yaw, pitch, roll]` angles.
    ///
    /// All three angles are NaN when the rotation is gimbal locked.
    pub fn to_yaw_pitch_roll(&self) -> [f64; 3] {
        yaw_pitch_roll::yaw_pitch_roll_from_axis_angle(&self.axis.to_array(), self.angle)
    }
}
