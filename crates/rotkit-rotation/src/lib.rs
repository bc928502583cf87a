#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Every conversion in this crate is a stateless free function over raw
//! `f64` components: quaternions are `[x, y, z, s]` arrays, rotation
//! matrices are row-major `[[f64; 3]; 3]`, rotation vectors are
//! `[f64; 3]`, and axis-angle values are an `([f64; 3], f64)` pair.
//! No container types are involved, so every function can be called (and
//! tested) independently of whatever wraps it.
//!
//! Invalid input is handled as data, not as an error path:
//!
//! - a NaN in any consumed input component makes every output component
//!   NaN, never a partial result;
//! - degenerate but valid input (zero quaternion vector part, zero
//!   rotation vector, identity matrix) maps to the canonical identity
//!   value of the target representation;
//! - a yaw-pitch-roll decomposition at or beyond the pitch poles yields
//!   NaN for all three angles, because the decomposition is not unique
//!   there. See [`yaw_pitch_roll::MAX_PITCH_ANGLE`].

/// Axis-angle extraction from the other representations.
pub mod axis_angle;

/// Unit quaternion extraction from the other representations.
pub mod quaternion;

/// Rotation matrix synthesis from the other representations.
pub mod rotation_matrix;

/// Rotation vector (scaled axis) extraction.
pub mod rotation_vector;

/// Yaw-pitch-roll (Euler Z-Y-X) extraction.
pub mod yaw_pitch_roll;

mod tol;
mod util;

pub use tol::ConversionTol;
