//! Yaw-pitch-roll (Euler Z-Y-X) extraction from rotation matrix,
//! quaternion, axis-angle, and rotation vector components.
//!
//! The decomposition reads `yaw = atan2(m10, m00)`,
//! `pitch = asin(-m20)` and `roll = atan2(m21, m22)` off the Z-Y-X
//! matrix entries, with each source representation supplying those five
//! entries in closed form rather than through an intermediate matrix.
//!
//! The decomposition is only unique while the pitch stays strictly away
//! from the `+-pi/2` poles. Whenever the value driving the pitch formula
//! falls outside `(MIN_PITCH_ANGLE, MAX_PITCH_ANGLE)`, all three angles
//! come back NaN; a partially valid triple would be misleading.

use crate::axis_angle::axis_angle_from_rotation_vector;
use crate::util::{contains_nan, norm3};

/// Largest pitch angle the Z-Y-X decomposition reports, a small margin
/// inside `pi/2`.
pub const MAX_PITCH_ANGLE: f64 = std::f64::consts::FRAC_PI_2 - 1.0e-7;

/// Smallest pitch angle the Z-Y-X decomposition reports, a small margin
/// inside `-pi/2`.
pub const MIN_PITCH_ANGLE: f64 = -MAX_PITCH_ANGLE;

/// Decompose the five Z-Y-X matrix entries that drive the three angles.
///
/// The pitch bound is checked in sine space so a source built exactly at
/// the bound survives the round trip through `sin`.
fn yaw_pitch_roll_from_entries(m00: f64, m10: f64, m20: f64, m21: f64, m22: f64) -> [f64; 3] {
    if contains_nan(&[m00, m10, m20, m21, m22]) {
        return [f64::NAN; 3];
    }

    let sin_pitch = -m20;
    let sin_bound = MAX_PITCH_ANGLE.sin();
    if !(sin_pitch >= -sin_bound && sin_pitch <= sin_bound) {
        return [f64::NAN; 3];
    }

    [m10.atan2(m00), sin_pitch.asin(), m21.atan2(m22)]
}

/// Compute the yaw-pitch-roll of a row-major rotation matrix.
///
/// Returns `[NaN, NaN, NaN]` when the rotation pitches to within the
/// safety margin of `+-pi/2` (gimbal lock) or when any consumed entry is
/// NaN.
///
/// Example:
/// ```
/// use rotkit_rotation::yaw_pitch_roll::yaw_pitch_roll_from_rotation_matrix;
///
/// let identity = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
/// assert_eq!(yaw_pitch_roll_from_rotation_matrix(&identity), [0.0, 0.0, 0.0]);
/// ```
pub fn yaw_pitch_roll_from_rotation_matrix(matrix: &[[f64; 3]; 3]) -> [f64; 3] {
    let [[m00, _, _], [m10, _, _], [m20, m21, m22]] = *matrix;
    yaw_pitch_roll_from_entries(m00, m10, m20, m21, m22)
}

/// Compute the yaw-pitch-roll of a quaternion `[x, y, z, s]`.
///
/// The five driving matrix entries are derived algebraically from the
/// quaternion components, divided by the squared norm so a non-unit
/// quaternion decomposes like its normalized counterpart. The all-zero
/// quaternion yields `[0, 0, 0]`.
pub fn yaw_pitch_roll_from_quaternion(quaternion: &[f64; 4]) -> [f64; 3] {
    let [qx, qy, qz, qs] = *quaternion;
    if contains_nan(quaternion) {
        return [f64::NAN; 3];
    }

    let norm_sq = qx * qx + qy * qy + qz * qz + qs * qs;
    if norm_sq == 0.0 {
        return [0.0; 3];
    }
    let scale = 2.0 / norm_sq;

    let m00 = 1.0 - scale * (qy * qy + qz * qz);
    let m10 = scale * (qx * qy + qs * qz);
    let m20 = scale * (qx * qz - qs * qy);
    let m21 = scale * (qy * qz + qs * qx);
    let m22 = 1.0 - scale * (qx * qx + qy * qy);

    yaw_pitch_roll_from_entries(m00, m10, m20, m21, m22)
}

/// Compute the yaw-pitch-roll of an axis-angle rotation.
///
/// The axis is normalized internally; a zero axis yields `[0, 0, 0]`.
pub fn yaw_pitch_roll_from_axis_angle(axis: &[f64; 3], angle: f64) -> [f64; 3] {
    let [ax, ay, az] = *axis;
    if contains_nan(&[ax, ay, az, angle]) {
        return [f64::NAN; 3];
    }

    let norm = norm3(ax, ay, az);
    if norm == 0.0 {
        return [0.0; 3];
    }
    let (ux, uy, uz) = (ax / norm, ay / norm, az / norm);

    let cos = angle.cos();
    let sin = angle.sin();
    let versine = 1.0 - cos;

    let m00 = cos + ux * ux * versine;
    let m10 = ux * uy * versine + uz * sin;
    let m20 = ux * uz * versine - uy * sin;
    let m21 = uy * uz * versine + ux * sin;
    let m22 = cos + uz * uz * versine;

    yaw_pitch_roll_from_entries(m00, m10, m20, m21, m22)
}

/// Compute the yaw-pitch-roll of a rotation vector, composing through
/// the axis-angle form.
pub fn yaw_pitch_roll_from_rotation_vector(rotation_vector: &[f64; 3]) -> [f64; 3] {
    let (axis, angle) = axis_angle_from_rotation_vector(rotation_vector);
    yaw_pitch_roll_from_axis_angle(&axis, angle)
}

/// Extract only the yaw angle of a row-major rotation matrix.
pub fn yaw_from_rotation_matrix(matrix: &[[f64; 3]; 3]) -> f64 {
    matrix[1][0].atan2(matrix[0][0])
}

/// Extract only the pitch angle of a row-major rotation matrix.
///
/// Returns NaN inside the gimbal-lock margin, like the full
/// decomposition.
pub fn pitch_from_rotation_matrix(matrix: &[[f64; 3]; 3]) -> f64 {
    let sin_pitch = -matrix[2][0];
    let sin_bound = MAX_PITCH_ANGLE.sin();
    if !(sin_pitch >= -sin_bound && sin_pitch <= sin_bound) {
        return f64::NAN;
    }
    sin_pitch.asin()
}

/// Extract only the roll angle of a row-major rotation matrix.
pub fn roll_from_rotation_matrix(matrix: &[[f64; 3]; 3]) -> f64 {
    matrix[2][1].atan2(matrix[2][2])
}

/// Extract only the yaw angle of a quaternion `[x, y, z, s]`.
pub fn yaw_from_quaternion(quaternion: &[f64; 4]) -> f64 {
    let [qx, qy, qz, qs] = *quaternion;
    let m10 = 2.0 * (qx * qy + qs * qz);
    let m00 = qs * qs + qx * qx - qy * qy - qz * qz;
    m10.atan2(m00)
}

/// Extract only the pitch angle of a quaternion `[x, y, z, s]`.
///
/// Returns NaN inside the gimbal-lock margin, like the full
/// decomposition.
pub fn pitch_from_quaternion(quaternion: &[f64; 4]) -> f64 {
    let [qx, qy, qz, qs] = *quaternion;
    let norm_sq = qx * qx + qy * qy + qz * qz + qs * qs;
    if norm_sq == 0.0 {
        return 0.0;
    }

    let sin_pitch = 2.0 * (qs * qy - qx * qz) / norm_sq;
    let sin_bound = MAX_PITCH_ANGLE.sin();
    if !(sin_pitch >= -sin_bound && sin_pitch <= sin_bound) {
        return f64::NAN;
    }
    sin_pitch.asin()
}

/// Extract only the roll angle of a quaternion `[x, y, z, s]`.
pub fn roll_from_quaternion(quaternion: &[f64; 4]) -> f64 {
    let [qx, qy, qz, qs] = *quaternion;
    let m21 = 2.0 * (qy * qz + qs * qx);
    let m22 = qs * qs + qz * qz - qx * qx - qy * qy;
    m21.atan2(m22)
}
