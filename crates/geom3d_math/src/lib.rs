//! 3D Geometry Library
//!
//! This crate provides vector, rotation matrix, quaternion and polyhedron
//! types for rigid-body math, generic over the scalar type.
//!
//! ## Core Types
//!
//! - [`Vector3`] - 3D vector with x, y, z components
//! - [`Quaternion`] - (w, x, y, z) rotation representation
//! - [`RotationMatrix3`] - 3x3 linear map with quaternion conversion
//! - [`Polyhedron`] - Owned vertex set with arbitrary-axis rotation
//!
//! ## Scalars
//!
//! Every type is generic over a [`Scalar`]: `i32`, `f32` or `f64`. The
//! `i`/`f`/`d` suffixed aliases name the three instantiations.

mod error;
mod scalar;
mod vec3;
mod quaternion;
pub mod matrix3;
pub mod polyhedron;

pub use error::GeometryError;
pub use scalar::Scalar;
pub use vec3::Vector3;
pub use quaternion::Quaternion;
pub use matrix3::RotationMatrix3;
pub use polyhedron::{Polyhedron, Polyhedroni, Polyhedronf, Polyhedrond, MIN_VERTICES};

/// Integer vector
pub type Vector3i = Vector3<i32>;
/// Single-precision vector
pub type Vector3f = Vector3<f32>;
/// Double-precision vector
pub type Vector3d = Vector3<f64>;

/// Integer quaternion
pub type Quaternioni = Quaternion<i32>;
/// Single-precision quaternion
pub type Quaternionf = Quaternion<f32>;
/// Double-precision quaternion
pub type Quaterniond = Quaternion<f64>;

/// Integer matrix
pub type RotationMatrix3i = RotationMatrix3<i32>;
/// Single-precision matrix
pub type RotationMatrix3f = RotationMatrix3<f32>;
/// Double-precision matrix
pub type RotationMatrix3d = RotationMatrix3<f64>;
