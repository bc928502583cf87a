//! Rigid-body transform: a rotation matrix plus a translation vector.
//!
//! The rotation part can be built from any representation the kernel
//! understands; composition and inversion are plain matrix algebra on
//! top of it. Batch point transformation goes through faer so the
//! matrix product runs over the whole point set at once.

use crate::axis_angle::AxisAngle;
use crate::quaternion::Quaternion;
use crate::vector::{Point3, Vector3};
use crate::yaw_pitch_roll::YawPitchRoll;
use rotkit_rotation::rotation_matrix::rotation_matrix_from_yaw_pitch_roll;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for the container layer.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// Batch transformation requires pre-allocated storage of matching
    /// size.
    #[error("mismatched point buffer lengths: source {src} != destination {dst}")]
    MismatchedBufferLengths {
        /// Number of source points.
        src: usize,
        /// Number of destination slots.
        dst: usize,
    },
}

/// A rigid-body transform `p_dst = R * p_src + t`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidTransform {
    /// Row-major rotation matrix.
    pub rotation: [[f64; 3]; 3],
    /// Translation vector.
    pub translation: Vector3,
}

impl RigidTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        rotation: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        translation: Vector3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        },
    };

    /// Create a transform from a rotation matrix and a translation.
    ///
    /// The matrix is stored as given; use [`is_rotation_matrix`] first
    /// when the source is untrusted.
    pub fn new(rotation: [[f64; 3]; 3], translation: Vector3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Create a transform rotating by a quaternion.
    pub fn from_quaternion(quaternion: &Quaternion, translation: Vector3) -> Self {
        Self::new(quaternion.to_rotation_matrix(), translation)
    }

    /// Create a transform rotating by an axis-angle value.
    pub fn from_axis_angle(axis_angle: &AxisAngle, translation: Vector3) -> Self {
        Self::new(axis_angle.to_rotation_matrix(), translation)
    }

    /// Create a transform rotating by yaw-pitch-roll angles.
    pub fn from_yaw_pitch_roll(ypr: &YawPitchRoll, translation: Vector3) -> Self {
        Self::new(
            rotation_matrix_from_yaw_pitch_roll(ypr.yaw, ypr.pitch, ypr.roll),
            translation,
        )
    }

    /// Compose with another transform; `self` is applied last.
    pub fn compose(&self, rhs: &Self) -> Self {
        let mut rotation = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
                    rotation[i][j] += self.rotation[i][k] * rhs.rotation[k][j];
                }
            }
        }
        let translation = self.rotate_vector(&rhs.translation) + self.translation;
        Self::new(rotation, translation)
    }

    /// The inverse transform, using that the rotation inverse is its
    /// transpose.
    pub fn inverse(&self) -> Self {
        let r = &self.rotation;
        let transposed = [
            [r[0][0], r[1][0], r[2][0]],
            [r[0][1], r[1][1], r[2][1]],
            [r[0][2], r[1][2], r[2][2]],
        ];
        let t = &self.translation;
        let translation = Vector3::new(
            -(transposed[0][0] * t.x + transposed[0][1] * t.y + transposed[0][2] * t.z),
            -(transposed[1][0] * t.x + transposed[1][1] * t.y + transposed[1][2] * t.z),
            -(transposed[2][0] * t.x + transposed[2][1] * t.y + transposed[2][2] * t.z),
        );
        Self::new(transposed, translation)
    }

    /// Rotate a vector, ignoring the translation part.
    pub fn rotate_vector(&self, v: &Vector3) -> Vector3 {
        let r = &self.rotation;
        Vector3::new(
            r[0][0] * v.x + r[0][1] * v.y + r[0][2] * v.z,
            r[1][0] * v.x + r[1][1] * v.y + r[1][2] * v.z,
            r[2][0] * v.x + r[2][1] * v.y + r[2][2] * v.z,
        )
    }

    /// Transform a single point.
    pub fn transform_point(&self, point: &Point3) -> Point3 {
        let rotated = self.rotate_vector(&Vector3::new(point.x, point.y, point.z));
        Point3::new(
            rotated.x + self.translation.x,
            rotated.y + self.translation.y,
            rotated.z + self.translation.z,
        )
    }

    /// Transform a batch of points into pre-allocated storage.
    ///
    /// # Arguments
    ///
    /// * `src_points` - Points to transform.
    /// * `dst_points` - Pre-allocated storage of the same length.
    ///
    /// Example:
    ///
    /// ```
    /// use rotkit_geometry::{RigidTransform, Vector3};
    ///
    /// let transform = RigidTransform::new(
    ///     [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    ///     Vector3::new(1.0, 0.0, 0.0),
    /// );
    /// let src = vec![[0.0, 2.0, 0.0]];
    /// let mut dst = vec![[0.0; 3]; src.len()];
    /// transform.transform_points(&src, &mut dst).unwrap();
    /// assert_eq!(dst[0], [1.0, 2.0, 0.0]);
    /// ```
    pub fn transform_points(
        &self,
        src_points: &[[f64; 3]],
        dst_points: &mut [[f64; 3]],
    ) -> Result<(), GeometryError> {
        if src_points.len() != dst_points.len() {
            return Err(GeometryError::MismatchedBufferLengths {
                src: src_points.len(),
                dst: dst_points.len(),
            });
        }
        if src_points.is_empty() {
            return Ok(());
        }

        let rotation = faer::Mat::<f64>::from_fn(3, 3, |i, j| self.rotation[i][j]);

        let points_in_src = {
            let src_slice = unsafe {
                std::slice::from_raw_parts(src_points.as_ptr() as *const f64, src_points.len() * 3)
            };
            // SAFETY: src_slice views the same memory as src_points, one
            // row of 3 coordinates per point
            faer::mat::from_row_major_slice(src_slice, src_points.len(), 3)
        };

        let mut points_in_dst = {
            let dst_slice = unsafe {
                std::slice::from_raw_parts_mut(
                    dst_points.as_mut_ptr() as *mut f64,
                    dst_points.len() * 3,
                )
            };
            // SAFETY: dst_slice views the same memory as dst_points; the
            // column-major 3xN view makes each point a column
            faer::mat::from_column_major_slice_mut(dst_slice, 3, dst_points.len())
        };

        faer::linalg::matmul::matmul(
            &mut points_in_dst,
            rotation.as_ref(),
            points_in_src.transpose(),
            None,
            1.0,
            faer::Parallelism::None,
        );

        let (tx, ty, tz) = (self.translation.x, self.translation.y, self.translation.z);
        for mut col in points_in_dst.col_iter_mut() {
            col.write(0, col.read(0) + tx);
            col.write(1, col.read(1) + ty);
            col.write(2, col.read(2) + tz);
        }

        Ok(())
    }
}

/// Check whether a matrix is a rotation: unit rows, orthogonal rows,
/// and determinant +1, each within `tol`.
pub fn is_rotation_matrix(matrix: &[[f64; 3]; 3], tol: f64) -> bool {
    for i in 0..3 {
        let row_norm_sq: f64 = matrix[i].iter().map(|e| e * e).sum();
        if (row_norm_sq - 1.0).abs() > tol {
            return false;
        }
        for j in (i + 1)..3 {
            let dot: f64 = (0..3).map(|k| matrix[i][k] * matrix[j][k]).sum();
            if dot.abs() > tol {
                return false;
            }
        }
    }

    let m = matrix;
    let det = m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0]);
    (det - 1.0).abs() <= tol
}
