#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! The types in this crate hold rotation components and delegate every
//! conversion to [`rotkit_rotation`]; none of them adds numerical logic
//! of its own. They exist so callers can pass rotations around as
//! values, compose rigid-body transforms, and apply them to points.

/// Axis-angle rotation container.
pub mod axis_angle;

/// Unit quaternion container.
pub mod quaternion;

/// Rigid-body transform and batch point transformation.
pub mod rigid;

/// Vector and point value types.
pub mod vector;

/// Yaw-pitch-roll container.
pub mod yaw_pitch_roll;

pub use axis_angle::AxisAngle;
pub use quaternion::Quaternion;
pub use rigid::{GeometryError, RigidTransform};
pub use vector::{Point3, Vector3};
pub use yaw_pitch_roll::YawPitchRoll;
