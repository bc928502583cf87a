//! Axis-angle extraction from quaternion, rotation vector, rotation
//! matrix, and yaw-pitch-roll components.
//!
//! Every function returns a `([ux, uy, uz], angle)` pair with a unit
//! axis, except for the canonical zero rotation `([1, 0, 0], 0)`.

use crate::tol::ConversionTol;
use crate::util::{contains_nan, norm3, zyx_matrix_entries};

/// Canonical axis-angle value of the zero rotation.
const ZERO_ROTATION: ([f64; 3], f64) = ([1.0, 0.0, 0.0], 0.0);

const NAN_AXIS_ANGLE: ([f64; 3], f64) = ([f64::NAN; 3], f64::NAN);

/// Regime of a rotation matrix relative to the two trace singularities
/// of the axis-angle decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TraceRegime {
    /// `trace ~ 3`, the rotation is the identity.
    Identity,
    /// Trace away from both singular values.
    Generic,
    /// `trace ~ -1`, the rotation is a half turn.
    Antipodal,
}

fn classify_trace(trace: f64, tol: &ConversionTol) -> TraceRegime {
    if 3.0 - trace < tol.identity_trace {
        TraceRegime::Identity
    } else if trace + 1.0 < tol.antipodal_trace {
        TraceRegime::Antipodal
    } else {
        TraceRegime::Generic
    }
}

/// Compute the axis-angle of a quaternion `[x, y, z, s]`.
///
/// The quaternion does not need to be normalized: the angle is recovered
/// as `2 * atan2(|v|, s)` where `v` is the vector part, which is
/// invariant under positive scaling of all four components. The returned
/// angle lies in `(-pi, pi]` with its sign tied to the sign of `s`.
///
/// A zero vector part yields the canonical zero rotation; any NaN
/// component yields NaN axis and angle.
///
/// Example:
/// ```
/// use rotkit_rotation::axis_angle::axis_angle_from_quaternion;
///
/// let h = std::f64::consts::FRAC_1_SQRT_2;
/// // quarter turn around x
/// let (axis, angle) = axis_angle_from_quaternion(&[h, 0.0, 0.0, h]);
/// assert!((axis[0] - 1.0).abs() < 1e-12);
/// assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn axis_angle_from_quaternion(quaternion: &[f64; 4]) -> ([f64; 3], f64) {
    let [qx, qy, qz, qs] = *quaternion;
    if contains_nan(quaternion) {
        return NAN_AXIS_ANGLE;
    }

    let vector_norm = norm3(qx, qy, qz);
    if vector_norm == 0.0 {
        return ZERO_ROTATION;
    }

    let mut angle = 2.0 * vector_norm.atan2(qs);
    if angle > std::f64::consts::PI {
        angle -= 2.0 * std::f64::consts::PI;
    }

    (
        [qx / vector_norm, qy / vector_norm, qz / vector_norm],
        angle,
    )
}

/// Compute the axis-angle of a rotation vector `[rx, ry, rz]`.
///
/// The magnitude of the vector is the angle, its direction is the axis.
/// The zero vector yields the canonical zero rotation.
pub fn axis_angle_from_rotation_vector(rotation_vector: &[f64; 3]) -> ([f64; 3], f64) {
    let [rx, ry, rz] = *rotation_vector;
    if contains_nan(rotation_vector) {
        return NAN_AXIS_ANGLE;
    }

    let angle = norm3(rx, ry, rz);
    if angle == 0.0 {
        return ZERO_ROTATION;
    }

    ([rx / angle, ry / angle, rz / angle], angle)
}

/// Compute the axis-angle of a row-major rotation matrix.
///
/// Uses [`ConversionTol::default`] for the trace singularity windows;
/// see [`axis_angle_from_rotation_matrix_with_tol`].
pub fn axis_angle_from_rotation_matrix(matrix: &[[f64; 3]; 3]) -> ([f64; 3], f64) {
    axis_angle_from_rotation_matrix_with_tol(matrix, &ConversionTol::default())
}

/// Compute the axis-angle of a row-major rotation matrix with explicit
/// tolerances.
///
/// The angle is `acos((trace - 1) / 2)`, clamped against rounding, and
/// always non-negative. The axis is recovered in one of three regimes:
///
/// - `trace ~ 3`: the canonical zero rotation is returned directly, so
///   nothing is divided by `sin(angle) ~ 0`;
/// - generic: the axis is the normalized vector of off-diagonal
///   differences `(m21 - m12, m02 - m20, m10 - m01)`, which points along
///   the rotation sense of the positive angle;
/// - `trace ~ -1`: the differences vanish, so the axis is recovered from
///   the diagonal instead, pivoting on the largest diagonal entry and
///   resolving the other two components from the off-diagonal sums.
///
/// Any NaN entry yields NaN axis and angle.
///
/// # Arguments
///
/// * `matrix` - Row-major rotation matrix entries.
/// * `tol` - Widths of the two singular trace windows.
///
/// # Returns
///
/// The `(axis, angle)` pair with `angle` in `[0, pi]`.
pub fn axis_angle_from_rotation_matrix_with_tol(
    matrix: &[[f64; 3]; 3],
    tol: &ConversionTol,
) -> ([f64; 3], f64) {
    let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = *matrix;
    if contains_nan(&[m00, m01, m02, m10, m11, m12, m20, m21, m22]) {
        return NAN_AXIS_ANGLE;
    }

    let trace = m00 + m11 + m22;
    let angle = (0.5 * (trace - 1.0)).clamp(-1.0, 1.0).acos();

    match classify_trace(trace, tol) {
        TraceRegime::Identity => ZERO_ROTATION,
        TraceRegime::Generic => {
            let dx = m21 - m12;
            let dy = m02 - m20;
            let dz = m10 - m01;
            let norm = norm3(dx, dy, dz);
            ([dx / norm, dy / norm, dz / norm], angle)
        }
        TraceRegime::Antipodal => {
            // The off-diagonal differences are all ~ 0 here. For a half
            // turn R = 2*u*u^T - I, so the diagonal gives the axis
            // magnitudes and the off-diagonal sums give the products
            // u_i*u_j. The largest diagonal entry is the safe pivot: its
            // sqrt argument is at least 4/3 for a unit axis.
            let (ux, uy, uz) = if m00 >= m11 && m00 >= m22 {
                let ux = 0.5 * (1.0 + m00 - m11 - m22).sqrt();
                (ux, (m01 + m10) / (4.0 * ux), (m02 + m20) / (4.0 * ux))
            } else if m11 >= m22 {
                let uy = 0.5 * (1.0 + m11 - m00 - m22).sqrt();
                ((m01 + m10) / (4.0 * uy), uy, (m12 + m21) / (4.0 * uy))
            } else {
                let uz = 0.5 * (1.0 + m22 - m00 - m11).sqrt();
                ((m02 + m20) / (4.0 * uz), (m12 + m21) / (4.0 * uz), uz)
            };
            let norm = norm3(ux, uy, uz);
            ([ux / norm, uy / norm, uz / norm], angle)
        }
    }
}

/// Compute the axis-angle of a yaw-pitch-roll triple.
///
/// The Z-Y-X matrix entries are composed in closed form and decomposed
/// through the matrix path.
pub fn axis_angle_from_yaw_pitch_roll(yaw: f64, pitch: f64, roll: f64) -> ([f64; 3], f64) {
    if contains_nan(&[yaw, pitch, roll]) {
        return NAN_AXIS_ANGLE;
    }
    axis_angle_from_rotation_matrix(&zyx_matrix_entries(yaw, pitch, roll))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_classify_trace() {
        let tol = ConversionTol::default();
        assert_eq!(classify_trace(3.0, &tol), TraceRegime::Identity);
        assert_eq!(classify_trace(3.0 + 1e-15, &tol), TraceRegime::Identity);
        assert_eq!(classify_trace(-1.0, &tol), TraceRegime::Antipodal);
        assert_eq!(classify_trace(-1.0 - 1e-15, &tol), TraceRegime::Antipodal);
        assert_eq!(classify_trace(1.0, &tol), TraceRegime::Generic);
        assert_eq!(classify_trace(2.999, &tol), TraceRegime::Generic);
        assert_eq!(classify_trace(-0.999, &tol), TraceRegime::Generic);
    }

    #[test]
    fn test_from_quaternion_quarter_turn() {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let (axis, angle) = axis_angle_from_quaternion(&[0.0, h, 0.0, h]);
        assert_relative_eq!(axis[1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(angle, FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_from_quaternion_scale_invariance() {
        let q = [0.3, -0.1, 0.7, 0.5];
        let scaled = [3.0 * q[0], 3.0 * q[1], 3.0 * q[2], 3.0 * q[3]];
        let (axis_a, angle_a) = axis_angle_from_quaternion(&q);
        let (axis_b, angle_b) = axis_angle_from_quaternion(&scaled);
        assert_relative_eq!(angle_a, angle_b, epsilon = 1e-12);
        for i in 0..3 {
            assert_relative_eq!(axis_a[i], axis_b[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_from_quaternion_negative_scalar_gives_negative_angle() {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let (axis, angle) = axis_angle_from_quaternion(&[h, 0.0, 0.0, -h]);
        assert_relative_eq!(axis[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(angle, -FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_from_quaternion_zero_vector_is_canonical() {
        let (axis, angle) = axis_angle_from_quaternion(&[0.0, 0.0, 0.0, 1.0]);
        assert_eq!(axis, [1.0, 0.0, 0.0]);
        assert_eq!(angle, 0.0);

        // any finite scalar with a zero vector part is still the identity
        let (axis, angle) = axis_angle_from_quaternion(&[0.0, 0.0, 0.0, -2.5]);
        assert_eq!(axis, [1.0, 0.0, 0.0]);
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_from_rotation_vector() {
        let (axis, angle) = axis_angle_from_rotation_vector(&[0.0, 0.0, 0.5]);
        assert_relative_eq!(axis[2], 1.0, epsilon = 1e-12);
        assert_relative_eq!(angle, 0.5, epsilon = 1e-12);

        let (axis, angle) = axis_angle_from_rotation_vector(&[0.0, 0.0, 0.0]);
        assert_eq!(axis, [1.0, 0.0, 0.0]);
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_from_matrix_identity() {
        let m = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let (axis, angle) = axis_angle_from_rotation_matrix(&m);
        assert_eq!(axis, [1.0, 0.0, 0.0]);
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_from_matrix_quarter_turn_x() {
        let m = [[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]];
        let (axis, angle) = axis_angle_from_rotation_matrix(&m);
        assert_relative_eq!(axis[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(axis[1], 0.0, epsilon = 1e-12);
        assert_relative_eq!(axis[2], 0.0, epsilon = 1e-12);
        assert_relative_eq!(angle, FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_from_matrix_half_turn_diagonal_axis() {
        // half turn around (1, 1, 0) / sqrt(2)
        let m = [[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]];
        let (axis, angle) = axis_angle_from_rotation_matrix(&m);
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(angle, PI, epsilon = 1e-12);
        assert_relative_eq!(axis[0], h, epsilon = 1e-12);
        assert_relative_eq!(axis[1], h, epsilon = 1e-12);
        assert_relative_eq!(axis[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_from_matrix_half_turn_pivots() {
        // half turns around each basis axis exercise all three pivots
        let cases = [
            ([[1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, -1.0]], 0),
            ([[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]], 1),
            ([[-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]], 2),
        ];
        for (m, axis_index) in cases {
            let (axis, angle) = axis_angle_from_rotation_matrix(&m);
            assert_relative_eq!(angle, PI, epsilon = 1e-12);
            for (i, axis_i) in axis.iter().enumerate() {
                let expected = if i == axis_index { 1.0 } else { 0.0 };
                assert_relative_eq!(*axis_i, expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_from_yaw_pitch_roll_pure_yaw() {
        let (axis, angle) = axis_angle_from_yaw_pitch_roll(0.7, 0.0, 0.0);
        assert_relative_eq!(axis[2], 1.0, epsilon = 1e-12);
        assert_relative_eq!(angle, 0.7, epsilon = 1e-12);
    }

    #[test]
    fn test_nan_propagation() {
        let (axis, angle) = axis_angle_from_quaternion(&[f64::NAN, 0.0, 0.0, 1.0]);
        assert!(axis.iter().all(|c| c.is_nan()) && angle.is_nan());

        let (axis, angle) = axis_angle_from_rotation_vector(&[0.0, f64::NAN, 0.0]);
        assert!(axis.iter().all(|c| c.is_nan()) && angle.is_nan());

        let mut m = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        m[2][1] = f64::NAN;
        let (axis, angle) = axis_angle_from_rotation_matrix(&m);
        assert!(axis.iter().all(|c| c.is_nan()) && angle.is_nan());

        let (axis, angle) = axis_angle_from_yaw_pitch_roll(0.1, f64::NAN, 0.2);
        assert!(axis.iter().all(|c| c.is_nan()) && angle.is_nan());
    }
}
