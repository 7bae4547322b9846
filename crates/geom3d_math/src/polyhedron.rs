//! Polyhedron as a collection of 3D points
//!
//! A [`Polyhedron`] owns its vertex sequence exclusively. There is no face or
//! edge topology; the only geometric operation is rigid rotation about an
//! arbitrary axis through an arbitrary pivot.

use bytemuck::Pod;

use crate::{GeometryError, RotationMatrix3, Scalar, Vector3};

/// Minimum number of vertices a polyhedron can hold
pub const MIN_VERTICES: usize = 4;

/// A polyhedron described by its vertices
///
/// Always holds at least [`MIN_VERTICES`] vertices. Mutating calls take
/// `&mut self`; share across threads behind a lock (e.g. `Mutex<Polyhedron<T>>`).
#[derive(Clone, Debug, PartialEq)]
pub struct Polyhedron<T> {
    vertices: Vec<Vector3<T>>,
}

impl<T: Scalar> Default for Polyhedron<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Polyhedron<T> {
    /// Create the default tetrahedron:
    /// `(-1,-1,0)`, `(1,-1,0)`, `(0,1,0)`, `(0,0,1)`
    pub fn new() -> Self {
        let o = T::one();
        let z = T::zero();
        Self {
            vertices: vec![
                Vector3::new(-o, -o, z),
                Vector3::new(o, -o, z),
                Vector3::new(z, o, z),
                Vector3::new(z, z, o),
            ],
        }
    }

    /// Create a polyhedron from a list of points.
    ///
    /// Falls back to the default tetrahedron when fewer than [`MIN_VERTICES`]
    /// points are supplied. Use [`Polyhedron::try_from_points`] to observe the failure.
    pub fn from_points(points: &[Vector3<T>]) -> Self {
        match Self::try_from_points(points) {
            Ok(polyhedron) => polyhedron,
            Err(e) => {
                log::warn!("{}. Using default tetrahedron.", e);
                Self::new()
            }
        }
    }

    /// Create a polyhedron from a list of points, failing with
    /// [`GeometryError::InvalidArgument`] if there are too few.
    pub fn try_from_points(points: &[Vector3<T>]) -> Result<Self, GeometryError> {
        Self::check_count(points.len())?;
        Ok(Self {
            vertices: points.to_vec(),
        })
    }

    /// Number of vertices
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// All vertices in order
    #[inline]
    pub fn vertices(&self) -> &[Vector3<T>] {
        &self.vertices
    }

    /// Replace every vertex with a copy of `points`.
    ///
    /// On [`GeometryError::InvalidArgument`] the current vertices are kept as they were.
    pub fn set_vertices(&mut self, points: &[Vector3<T>]) -> Result<(), GeometryError> {
        Self::check_count(points.len())?;
        log::debug!(
            "Replacing {} polyhedron vertices with {}",
            self.vertices.len(),
            points.len()
        );
        self.vertices = points.to_vec();
        Ok(())
    }

    /// Copy of the vertex at `index`, or `None` if out of range
    #[inline]
    pub fn vertex(&self, index: usize) -> Option<Vector3<T>> {
        self.vertices.get(index).copied()
    }

    /// Copy the vertex at `index` into `out`.
    ///
    /// `out` is left unmodified on [`GeometryError::IndexOutOfRange`].
    pub fn get_vertex(&self, index: usize, out: &mut Vector3<T>) -> Result<(), GeometryError> {
        let v = self.vertex(index).ok_or(GeometryError::IndexOutOfRange {
            index,
            len: self.vertices.len(),
        })?;
        out.set_value(v.x, v.y, v.z);
        Ok(())
    }

    /// Rotate every vertex by `angle` radians about the line through `point`
    /// with direction `axis`.
    ///
    /// `axis` must be unit length; it is not normalized here, and a non-unit
    /// axis adds a scale to the rotation. Each vertex becomes
    /// `point + M * (v - point)` where `M` is the quaternion rotation matrix.
    ///
    /// If any intermediate value overflows `T` (integer vertices near the
    /// type's limits) nothing is written and the vertices stay as they were.
    pub fn rotate(&mut self, axis: Vector3<T>, point: Vector3<T>, angle: f64) {
        let Some(matrix) = RotationMatrix3::from_axis_angle(axis, angle) else {
            log::warn!(
                "Rotation by {} rad about {:?} is not representable, vertices left unchanged",
                angle,
                axis
            );
            return;
        };

        // Translate to origin, rotate, translate back
        let rotated: Option<Vec<_>> = self
            .vertices
            .iter()
            .map(|&v| {
                matrix
                    .checked_mult_matrix_vec(v.checked_sub(point)?)?
                    .checked_add(point)
            })
            .collect();

        let Some(rotated) = rotated else {
            log::warn!(
                "Rotation by {} rad about {:?} overflows the vertex type, vertices left unchanged",
                angle,
                axis
            );
            return;
        };
        self.vertices = rotated;

        log::debug!(
            "Rotated {} vertices by {} rad about {:?} through {:?}",
            self.vertices.len(),
            angle,
            axis,
            point
        );
    }

    fn check_count(count: usize) -> Result<(), GeometryError> {
        if count < MIN_VERTICES {
            return Err(GeometryError::InvalidArgument {
                count,
                min: MIN_VERTICES,
            });
        }
        Ok(())
    }
}

impl<T: Scalar + Pod> Polyhedron<T> {
    /// Raw bytes of the vertex buffer (tightly packed `x, y, z` triples)
    #[inline]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl<T: Scalar> TryFrom<Vec<Vector3<T>>> for Polyhedron<T> {
    type Error = GeometryError;

    fn try_from(vertices: Vec<Vector3<T>>) -> Result<Self, Self::Error> {
        Self::check_count(vertices.len())?;
        Ok(Self { vertices })
    }
}

/// Integer polyhedron
pub type Polyhedroni = Polyhedron<i32>;
/// Single-precision polyhedron
pub type Polyhedronf = Polyhedron<f32>;
/// Double-precision polyhedron
pub type Polyhedrond = Polyhedron<f64>;
