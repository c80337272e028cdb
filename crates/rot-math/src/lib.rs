//! Rotation math for graphics and simulation code.
//!
//! This crate provides the rotation-representation layer of a linear-algebra
//! stack: a quaternion value type and the conversions between the common ways
//! of writing down a 3D rotation:
//!
//! - [`Quat`] - quaternion algebra (Hamilton product, conjugate, inverse,
//!   normalization) and vector rotation
//! - Axis-angle and Euler-angle construction ([`Quat::from_axis_angle`],
//!   [`Quat::from_euler`])
//! - Rotation-matrix conversion in both directions ([`Quat::to_matrix3`],
//!   [`Quat::from_matrix3`])
//! - Interpolation ([`Quat::lerp`], [`Quat::nlerp`], [`Quat::slerp`])
//! - Affine transform [`compose`] / [`decompose`] into translation, Euler
//!   rotation, and scale
//!
//! Vector and matrix plumbing comes from [`nalgebra`]; this crate only owns
//! the quaternion and the conversion policy.
//!
//! # Conventions
//!
//! One convention is used everywhere: **column-vector application**
//! (`v' = M · v`), right-handed axes, angles in degrees at the API surface,
//! and normalize-before-convert. Euler angles are pitch (X), yaw (Y),
//! roll (Z), composed in the fixed order `roll * yaw * pitch`.
//!
//! Quaternions `q` and `-q` represent the same rotation, so round-trips
//! through a matrix recover the input only up to sign.
//!
//! # Example
//!
//! ```
//! use nalgebra::Vector3;
//! use rot_math::Quat;
//!
//! let start = Quat::identity();
//! let end = Quat::from_axis_angle(&Vector3::y(), 90.0);
//!
//! // Halfway along the shortest arc: 45 degrees of yaw.
//! let halfway = Quat::slerp(&start, &end, 0.5);
//! let v = halfway.rotate_vector(&Vector3::x());
//! assert!((v.x - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-10);
//! ```
//!
//! # Errors
//!
//! Degenerate inputs (zero-length quaternions, zero-scale transforms) surface
//! as [`MathError`] rather than silent NaN. Component indexing out of range
//! panics, like slice indexing; [`Quat::get`] is the fallible twin.

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod convert;
mod decompose;
mod error;
mod interp;
mod quat;

pub use decompose::{Decomposition, compose, decompose};
pub use error::MathError;
pub use quat::Quat;

// Re-export the collaborator types for convenience.
pub use nalgebra::{Matrix3, Matrix4, Vector3, Vector4};
