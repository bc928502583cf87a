//! Rotation vector (scaled axis) extraction from axis-angle,
//! quaternion, rotation matrix, and yaw-pitch-roll components.
//!
//! A rotation vector points along the rotation axis and has the angle
//! as its magnitude, so the zero vector is the identity rotation.

use crate::axis_angle::{
    axis_angle_from_quaternion, axis_angle_from_rotation_matrix_with_tol,
    axis_angle_from_yaw_pitch_roll,
};
use crate::tol::ConversionTol;
use crate::util::contains_nan;

/// Compute the rotation vector of an axis-angle rotation.
///
/// The axis is scaled by the angle as given; a non-unit axis is
/// tolerated and scales the result accordingly, matching the tolerance
/// of the axis-angle converters for non-unit input.
pub fn rotation_vector_from_axis_angle(axis: &[f64; 3], angle: f64) -> [f64; 3] {
    let [ux, uy, uz] = *axis;
    if contains_nan(&[ux, uy, uz, angle]) {
        return [f64::NAN; 3];
    }
    [ux * angle, uy * angle, uz * angle]
}

/// Compute the rotation vector of a quaternion `[x, y, z, s]`.
///
/// Scale-invariant like the axis-angle extraction it composes through;
/// the identity quaternion yields the zero vector.
pub fn rotation_vector_from_quaternion(quaternion: &[f64; 4]) -> [f64; 3] {
    let (axis, angle) = axis_angle_from_quaternion(quaternion);
    rotation_vector_from_axis_angle(&axis, angle)
}

/// Compute the rotation vector of a row-major rotation matrix.
///
/// Uses [`ConversionTol::default`] for the trace singularity windows;
/// see [`rotation_vector_from_rotation_matrix_with_tol`].
pub fn rotation_vector_from_rotation_matrix(matrix: &[[f64; 3]; 3]) -> [f64; 3] {
    rotation_vector_from_rotation_matrix_with_tol(matrix, &ConversionTol::default())
}

/// Compute the rotation vector of a row-major rotation matrix with
/// explicit tolerances.
///
/// The axis-angle regime logic does the heavy lifting; this path leans
/// on its half-turn branch the hardest, since the magnitude of a 180
/// degree rotation cannot be recovered from the vanishing off-diagonal
/// differences. The identity matrix yields the zero vector.
pub fn rotation_vector_from_rotation_matrix_with_tol(
    matrix: &[[f64; 3]; 3],
    tol: &ConversionTol,
) -> [f64; 3] {
    let (axis, angle) = axis_angle_from_rotation_matrix_with_tol(matrix, tol);
    rotation_vector_from_axis_angle(&axis, angle)
}

/// Compute the rotation vector of a yaw-pitch-roll triple, composing
/// through the axis-angle form.
pub fn rotation_vector_from_yaw_pitch_roll(yaw: f64, pitch: f64, roll: f64) -> [f64; 3] {
    let (axis, angle) = axis_angle_from_yaw_pitch_roll(yaw, pitch, roll);
    rotation_vector_from_axis_angle(&axis, angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quaternion::quaternion_from_axis_angle;
    use crate::rotation_matrix::rotation_matrix_from_axis_angle;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_from_axis_angle() {
        let rv = rotation_vector_from_axis_angle(&[0.0, 1.0, 0.0], 0.75);
        assert_relative_eq!(rv[1], 0.75, epsilon = 1e-15);
        assert_relative_eq!(rv[0], 0.0, epsilon = 1e-15);
        assert_relative_eq!(rv[2], 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_from_axis_angle_keeps_axis_scale() {
        let rv = rotation_vector_from_axis_angle(&[0.0, 2.0, 0.0], 0.75);
        assert_relative_eq!(rv[1], 1.5, epsilon = 1e-15);
    }

    #[test]
    fn test_from_quaternion_round_trip() {
        let axis = [0.0, 0.6, 0.8];
        let angle = 2.4;
        let q = quaternion_from_axis_angle(&axis, angle);
        let rv = rotation_vector_from_quaternion(&q);
        for i in 0..3 {
            assert_relative_eq!(rv[i], axis[i] * angle, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_identity_sources_give_zero_vector() {
        assert_eq!(
            rotation_vector_from_quaternion(&[0.0, 0.0, 0.0, 1.0]),
            [0.0; 3]
        );
        let identity = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert_eq!(rotation_vector_from_rotation_matrix(&identity), [0.0; 3]);
        assert_eq!(rotation_vector_from_yaw_pitch_roll(0.0, 0.0, 0.0), [0.0; 3]);
    }

    #[test]
    fn test_from_matrix_half_turn_magnitude() {
        // the half-turn branch has to recover the magnitude pi from the
        // diagonal alone
        let m = rotation_matrix_from_axis_angle(&[0.0, 0.0, 1.0], PI);
        let rv = rotation_vector_from_rotation_matrix(&m);
        assert_relative_eq!(rv[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(rv[1], 0.0, epsilon = 1e-12);
        assert_relative_eq!(rv[2].abs(), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_from_matrix_generic_round_trip() {
        let axis = [2.0 / 3.0, -1.0 / 3.0, 2.0 / 3.0];
        let angle = 1.3;
        let m = rotation_matrix_from_axis_angle(&axis, angle);
        let rv = rotation_vector_from_rotation_matrix(&m);
        for i in 0..3 {
            assert_relative_eq!(rv[i], axis[i] * angle, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_nan_propagation() {
        let rv = rotation_vector_from_axis_angle(&[1.0, 0.0, 0.0], f64::NAN);
        assert!(rv.iter().all(|c| c.is_nan()));

        let rv = rotation_vector_from_quaternion(&[0.0, 0.0, f64::NAN, 1.0]);
        assert!(rv.iter().all(|c| c.is_nan()));

        let mut m = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        m[0][0] = f64::NAN;
        let rv = rotation_vector_from_rotation_matrix(&m);
        assert!(rv.iter().all(|c| c.is_nan()));

        let rv = rotation_vector_from_yaw_pitch_roll(0.0, 0.0, f64::NAN);
        assert!(rv.iter().all(|c| c.is_nan()));
    }
}
