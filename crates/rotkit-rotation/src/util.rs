//! Shared component-level helpers for the conversion modules.

/// Returns true if any of the given components is NaN.
pub(crate) fn contains_nan(components: &[f64]) -> bool {
    components.iter().any(|c| c.is_nan())
}

/// Euclidean norm of a 3-component vector.
pub(crate) fn norm3(x: f64, y: f64, z: f64) -> f64 {
    (x * x + y * y + z * z).sqrt()
}

/// Entries of the Z-Y-X rotation matrix `Rz(yaw) * Ry(pitch) * Rx(roll)`,
/// expanded algebraically so no matrix product runs at runtime.
pub(crate) fn zyx_matrix_entries(yaw: f64, pitch: f64, roll: f64) -> [[f64; 3]; 3] {
    let (sy, cy) = yaw.sin_cos();
    let (sp, cp) = pitch.sin_cos();
    let (sr, cr) = roll.sin_cos();

    [
        [cy * cp, cy * sp * sr - sy * cr, cy * sp * cr + sy * sr],
        [sy * cp, sy * sp * sr + cy * cr, sy * sp * cr - cy * sr],
        [-sp, cp * sr, cp * cr],
    ]
}
