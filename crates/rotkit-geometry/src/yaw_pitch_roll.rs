//! Yaw-pitch-roll container delegating conversions to the kernel.

use crate::vector::Vector3;
use rotkit_rotation::yaw_pitch_roll as conv;
use rotkit_rotation::{quaternion, rotation_matrix, rotation_vector};
use serde::{Deserialize, Serialize};

/// A rotation stored as Euler Z-Y-X angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YawPitchRoll {
    /// Rotation around z, applied first.
    pub yaw: f64,
    /// Rotation around the rotated y.
    pub pitch: f64,
    /// Rotation around the twice-rotated x, applied last.
    pub roll: f64,
}

impl YawPitchRoll {
    /// The zero rotation.
    pub const ZERO: Self = Self {
        yaw: 0.0,
        pitch: 0.0,
        roll: 0.0,
    };

    /// Convert a row-major rotation matrix.
    ///
    /// All three angles come back NaN when the matrix pitches into the
    /// gimbal-lock margin around `+-pi/2`.
    pub fn from_rotation_matrix(matrix: &[[f64; 3]; 3]) -> Self {
        let [yaw, pitch, roll] = conv::yaw_pitch_roll_from_rotation_matrix(matrix);
        Self { yaw, pitch, roll }
    }

    /// Convert a quaternion `[x, y, z, s]`.
    pub fn from_quaternion(quaternion: &[f64; 4]) -> Self {
        let [yaw, pitch, roll] = conv::yaw_pitch_roll_from_quaternion(quaternion);
        Self { yaw, pitch, roll }
    }

    /// Convert an axis-angle rotation.
    pub fn from_axis_angle(axis: &Vector3, angle: f64) -> Self {
        let [yaw, pitch, roll] = conv::yaw_pitch_roll_from_axis_angle(&axis.to_array(), angle);
        Self { yaw, pitch, roll }
    }

    /// Convert a rotation vector.
    pub fn from_rotation_vector(rotation_vector: &Vector3) -> Self {
        let [yaw, pitch, roll] =
            conv::yaw_pitch_roll_from_rotation_vector(&rotation_vector.to_array());
        Self { yaw, pitch, roll }
    }

    /// True when the decomposition failed at a pitch pole or on NaN
    /// input.
    pub fn contains_nan(&self) -> bool {
        self.yaw.is_nan() || self.pitch.is_nan() || self.roll.is_nan()
    }

    /// The rotation as a unit quaternion `[x, y, z, s]`.
    pub fn to_quaternion(&self) -> [f64; 4] {
        quaternion::quaternion_from_yaw_pitch_roll(self.yaw, self.pitch, self.roll)
    }

    /// The rotation as a row-major rotation matrix.
    pub fn to_rotation_matrix(&self) -> [[f64; 3]; 3] {
        rotation_matrix::rotation_matrix_from_yaw_pitch_roll(self.yaw, self.pitch, self.roll)
    }

    /// The rotation as a rotation vector.
    pub fn to_rotation_vector(&self) -> Vector3 {
        Vector3::from_array(&rotation_vector::rotation_vector_from_yaw_pitch_roll(
            self.yaw, self.pitch, self.roll,
        ))
    }
}
