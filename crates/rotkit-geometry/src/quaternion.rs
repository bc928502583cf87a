//! Unit quaternion container delegating conversions to the kernel.

use crate::axis_angle::AxisAngle;
use crate::vector::Vector3;
use crate::yaw_pitch_roll::YawPitchRoll;
use rotkit_rotation::{quaternion as conv, rotation_matrix, rotation_vector, yaw_pitch_roll};
use serde::{Deserialize, Serialize};

/// A rotation stored as a quaternion `(x, y, z, s)` with the scalar
/// part last.
///
/// The constructors that convert from another representation always
/// produce a unit quaternion. `new` stores what it is given; callers
/// feeding raw components are expected to keep them normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    /// First vector component.
    pub x: f64,
    /// Second vector component.
    pub y: f64,
    /// Third vector component.
    pub z: f64,
    /// Scalar component.
    pub s: f64,
}

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        s: 1.0,
    };

    /// Create a quaternion from its four components.
    pub fn new(x: f64, y: f64, z: f64, s: f64) -> Self {
        Self { x, y, z, s }
    }

    /// Create a quaternion from an `[x, y, z, s]` array.
    pub fn from_array(array: &[f64; 4]) -> Self {
        Self::new(array[0], array[1], array[2], array[3])
    }

    /// The components as an `[x, y, z, s]` array.
    pub fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.z, self.s]
    }

    /// Convert an axis-angle rotation.
    pub fn from_axis_angle(axis_angle: &AxisAngle) -> Self {
        Self::from_array(&conv::quaternion_from_axis_angle(
            &axis_angle.axis.to_array(),
            axis_angle.angle,
        ))
    }

    /// Convert a rotation vector.
    pub fn from_rotation_vector(rotation_vector: &Vector3) -> Self {
        Self::from_array(&conv::quaternion_from_rotation_vector(
            &rotation_vector.to_array(),
        ))
    }

    /// Convert a row-major rotation matrix.
    pub fn from_rotation_matrix(matrix: &[[f64; 3]; 3]) -> Self {
        Self::from_array(&conv::quaternion_from_rotation_matrix(matrix))
    }

    /// Convert a yaw-pitch-roll rotation.
    pub fn from_yaw_pitch_roll(ypr: &YawPitchRoll) -> Self {
        Self::from_array(&conv::quaternion_from_yaw_pitch_roll(
            ypr.yaw, ypr.pitch, ypr.roll,
        ))
    }

    /// The rotation as an axis-angle value.
    pub fn to_axis_angle(&self) -> AxisAngle {
        let (axis, angle) = rotkit_rotation::axis_angle::axis_angle_from_quaternion(&self.to_array());
        AxisAngle {
            axis: Vector3::from_array(&axis),
            angle,
        }
    }

    /// The rotation as a rotation vector.
    pub fn to_rotation_vector(&self) -> Vector3 {
        Vector3::from_array(&rotation_vector::rotation_vector_from_quaternion(
            &self.to_array(),
        ))
    }

    /// The rotation as a row-major rotation matrix.
    pub fn to_rotation_matrix(&self) -> [[f64; 3]; 3] {
        rotation_matrix::rotation_matrix_from_quaternion(&self.to_array())
    }

    /// The rotation as a yaw-pitch-roll value.
    ///
    /// All three angles are NaN when the rotation is gimbal locked.
    pub fn to_yaw_pitch_roll(&self) -> YawPitchRoll {
        let [yaw, pitch, roll] =
            yaw_pitch_roll::yaw_pitch_roll_from_quaternion(&self.to_array());
        YawPitchRoll { yaw, pitch, roll }
    }

    /// Squared norm of the four components.
    pub fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.s * self.s
    }

    /// Norm of the four components, 1 for a well-formed rotation.
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// The quaternion scaled back onto the unit sphere.
    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        Self::new(self.x / norm, self.y / norm, self.z / norm, self.s / norm)
    }

    /// The conjugate, which inverts a unit quaternion.
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.s)
    }

    /// The inverse rotation, valid for non-unit quaternions as well.
    pub fn inverse(&self) -> Self {
        let norm_sq = self.norm_squared();
        Self::new(
            -self.x / norm_sq,
            -self.y / norm_sq,
            -self.z / norm_sq,
            self.s / norm_sq,
        )
    }

    /// Rotate a vector by this quaternion.
    pub fn rotate(&self, v: &Vector3) -> Vector3 {
        let qv = Vector3::new(self.x, self.y, self.z);
        let t = qv.cross(v) * (2.0 / self.norm_squared());
        *v + t * self.s + qv.cross(&t)
    }
}

impl std::ops::Mul for Quaternion {
    type Output = Self;

    /// Hamilton product; `a * b` rotates by `b` first, then by `a`.
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.s * rhs.x + rhs.s * self.x + self.y * rhs.z - self.z * rhs.y,
            self.s * rhs.y + rhs.s * self.y + self.z * rhs.x - self.x * rhs.z,
            self.s * rhs.z + rhs.s * self.z + self.x * rhs.y - self.y * rhs.x,
            self.s * rhs.s - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}
