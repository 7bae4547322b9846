//! geom3d - templated 3D geometry toolkit
//!
//! Re-exports the math types and provides the layered configuration used by
//! the `geom3d` driver.

pub mod config;

pub use geom3d_math as math;
pub use geom3d_math::{
    GeometryError, Polyhedron, Polyhedrond, Polyhedronf, Polyhedroni, Quaternion,
    RotationMatrix3, Scalar, Vector3, MIN_VERTICES,
};
