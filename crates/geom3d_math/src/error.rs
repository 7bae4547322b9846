//! Geometry error types

use std::fmt;

/// Error type for geometry operations
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Too few vertices supplied to build a polyhedron
    InvalidArgument {
        /// Number of vertices supplied
        count: usize,
        /// Minimum number of vertices required
        min: usize,
    },
    /// Vertex index outside `0..len`
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of stored vertices
        len: usize,
    },
    /// Matrix has no inverse
    SingularMatrix {
        /// Determinant that failed the singularity check
        determinant: f64,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidArgument { count, min } => write!(
                f,
                "Invalid argument: polyhedron needs at least {} vertices, got {}",
                min, count
            ),
            GeometryError::IndexOutOfRange { index, len } => write!(
                f,
                "Vertex index {} out of range for polyhedron with {} vertices",
                index, len
            ),
            GeometryError::SingularMatrix { determinant } => {
                write!(f, "Singular matrix (determinant {})", determinant)
            }
        }
    }
}

impl std::error::Error for GeometryError {}
