//! Rotation matrix synthesis from axis-angle, quaternion, and
//! yaw-pitch-roll components.
//!
//! This is the only synthesis direction in the crate: every angle value
//! is representable as a matrix, so none of these paths needs a
//! singularity branch.

use crate::util::{contains_nan, norm3, zyx_matrix_entries};

const IDENTITY: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

const NAN_MATRIX: [[f64; 3]; 3] = [[f64::NAN; 3]; 3];

/// Compute the rotation matrix of an axis-angle rotation with
/// Rodrigues' formula in closed form.
///
/// The axis does not need to be normalized; it is normalized internally.
/// A zero axis yields the identity matrix, and any NaN input component
/// yields a matrix of NaNs.
///
/// # Arguments
///
/// * `axis` - The axis of rotation.
/// * `angle` - The angle of rotation in radians.
///
/// # Returns
///
/// The row-major rotation matrix.
///
/// Example:
/// ```
/// use rotkit_rotation::rotation_matrix::rotation_matrix_from_axis_angle;
///
/// let m = rotation_matrix_from_axis_angle(&[0.0, 0.0, 1.0], std::f64::consts::FRAC_PI_2);
/// // a quarter turn around z maps x onto y
/// assert!((m[1][0] - 1.0).abs() < 1e-12);
/// assert!((m[0][1] + 1.0).abs() < 1e-12);
/// ```
pub fn rotation_matrix_from_axis_angle(axis: &[f64; 3], angle: f64) -> [[f64; 3]; 3] {
    let [ax, ay, az] = *axis;
    if contains_nan(&[ax, ay, az, angle]) {
        return NAN_MATRIX;
    }

    let norm = norm3(ax, ay, az);
    if norm == 0.0 {
        return IDENTITY;
    }
    let (ux, uy, uz) = (ax / norm, ay / norm, az / norm);

    let cos = angle.cos();
    let sin = angle.sin();
    let versine = 1.0 - cos;

    let xy = ux * uy * versine;
    let xz = ux * uz * versine;
    let yz = uy * uz * versine;

    [
        [
            cos + ux * ux * versine,
            xy - uz * sin,
            xz + uy * sin,
        ],
        [
            xy + uz * sin,
            cos + uy * uy * versine,
            yz - ux * sin,
        ],
        [
            xz - uy * sin,
            yz + ux * sin,
            cos + uz * uz * versine,
        ],
    ]
}

/// Compute the rotation matrix of a quaternion `[x, y, z, s]`.
///
/// The bilinear entry formulas are divided by the squared norm, so a
/// non-unit quaternion produces the same matrix as its normalized
/// counterpart. The all-zero quaternion yields the identity matrix, and
/// any NaN component yields a matrix of NaNs.
pub fn rotation_matrix_from_quaternion(quaternion: &[f64; 4]) -> [[f64; 3]; 3] {
    let [qx, qy, qz, qs] = *quaternion;
    if contains_nan(quaternion) {
        return NAN_MATRIX;
    }

    let norm_sq = qx * qx + qy * qy + qz * qz + qs * qs;
    if norm_sq == 0.0 {
        return IDENTITY;
    }
    let scale = 2.0 / norm_sq;

    let xx = scale * qx * qx;
    let yy = scale * qy * qy;
    let zz = scale * qz * qz;
    let xy = scale * qx * qy;
    let xz = scale * qx * qz;
    let yz = scale * qy * qz;
    let sx = scale * qs * qx;
    let sy = scale * qs * qy;
    let sz = scale * qs * qz;

    [
        [1.0 - yy - zz, xy - sz, xz + sy],
        [xy + sz, 1.0 - xx - zz, yz - sx],
        [xz - sy, yz + sx, 1.0 - xx - yy],
    ]
}

/// Compute the rotation matrix of a yaw-pitch-roll triple as the Z-Y-X
/// elementary product, expanded algebraically into the nine entries.
pub fn rotation_matrix_from_yaw_pitch_roll(yaw: f64, pitch: f64, roll: f64) -> [[f64; 3]; 3] {
    if contains_nan(&[yaw, pitch, roll]) {
        return NAN_MATRIX;
    }
    zyx_matrix_entries(yaw, pitch, roll)
}
