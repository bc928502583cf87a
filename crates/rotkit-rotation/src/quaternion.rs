//! Unit quaternion extraction from axis-angle, rotation vector,
//! rotation matrix, and yaw-pitch-roll components.
//!
//! Quaternions are `[x, y, z, s]` arrays with the scalar part last.

use crate::axis_angle::{axis_angle_from_rotation_vector, axis_angle_from_yaw_pitch_roll};
use crate::util::{contains_nan, norm3};

/// The identity quaternion `[0, 0, 0, 1]`.
const IDENTITY: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

/// Compute the unit quaternion of an axis-angle rotation.
///
/// The axis does not need to be normalized; it is normalized internally.
/// A zero axis yields the identity quaternion, and any NaN input
/// component yields a NaN quaternion.
///
/// Example:
/// ```
/// use rotkit_rotation::quaternion::quaternion_from_axis_angle;
///
/// let q = quaternion_from_axis_angle(&[0.0, 0.0, 2.0], std::f64::consts::PI);
/// // half turn around z
/// assert!((q[2] - 1.0).abs() < 1e-12);
/// assert!(q[3].abs() < 1e-12);
/// ```
pub fn quaternion_from_axis_angle(axis: &[f64; 3], angle: f64) -> [f64; 4] {
    let [ux, uy, uz] = *axis;
    if contains_nan(&[ux, uy, uz, angle]) {
        return [f64::NAN; 4];
    }

    let norm = norm3(ux, uy, uz);
    if norm == 0.0 {
        return IDENTITY;
    }

    let half_angle = 0.5 * angle;
    let sin_scale = half_angle.sin() / norm;
    [
        ux * sin_scale,
        uy * sin_scale,
        uz * sin_scale,
        half_angle.cos(),
    ]
}

/// Compute the unit quaternion of a rotation vector, composing through
/// the axis-angle form.
pub fn quaternion_from_rotation_vector(rotation_vector: &[f64; 3]) -> [f64; 4] {
    let (axis, angle) = axis_angle_from_rotation_vector(rotation_vector);
    quaternion_from_axis_angle(&axis, angle)
}

/// Compute the unit quaternion of a row-major rotation matrix.
///
/// Uses the stable branch selection: when the trace is positive the
/// scalar part is the pivot; otherwise the largest diagonal entry picks
/// the vector component to pivot on, so no branch divides by a value
/// that cancellation could have driven towards zero. The remaining
/// components follow from the off-diagonal sums and differences.
///
/// Any NaN entry yields a NaN quaternion.
///
/// # Arguments
///
/// * `matrix` - Row-major rotation matrix entries.
///
/// # Returns
///
/// A unit quaternion `[x, y, z, s]` with `s >= 0` when the trace is
/// positive.
pub fn quaternion_from_rotation_matrix(matrix: &[[f64; 3]; 3]) -> [f64; 4] {
    let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = *matrix;
    if contains_nan(&[m00, m01, m02, m10, m11, m12, m20, m21, m22]) {
        return [f64::NAN; 4];
    }

    let trace = m00 + m11 + m22;
    if trace > 0.0 {
        let pivot = (trace + 1.0).sqrt() * 2.0;
        [
            (m21 - m12) / pivot,
            (m02 - m20) / pivot,
            (m10 - m01) / pivot,
            0.25 * pivot,
        ]
    } else if m00 > m11 && m00 > m22 {
        let pivot = (1.0 + m00 - m11 - m22).sqrt() * 2.0;
        [
            0.25 * pivot,
            (m01 + m10) / pivot,
            (m02 + m20) / pivot,
            (m21 - m12) / pivot,
        ]
    } else if m11 > m22 {
        let pivot = (1.0 + m11 - m00 - m22).sqrt() * 2.0;
        [
            (m01 + m10) / pivot,
            0.25 * pivot,
            (m12 + m21) / pivot,
            (m02 - m20) / pivot,
        ]
    } else {
        let pivot = (1.0 + m22 - m00 - m11).sqrt() * 2.0;
        [
            (m02 + m20) / pivot,
            (m12 + m21) / pivot,
            0.25 * pivot,
            (m10 - m01) / pivot,
        ]
    }
}

/// Compute the unit quaternion of a yaw-pitch-roll triple, composing
/// through the axis-angle form.
pub fn quaternion_from_yaw_pitch_roll(yaw: f64, pitch: f64, roll: f64) -> [f64; 4] {
    let (axis, angle) = axis_angle_from_yaw_pitch_roll(yaw, pitch, roll);
    quaternion_from_axis_angle(&axis, angle)
}
