//! 3x3 rotation matrix
//!
//! Row-major 3x3 linear map on [`Vector3`]. Built from nine scalars or from a
//! [`Quaternion`]; applied to vectors with [`RotationMatrix3::mult_matrix_vec`].
//!
//! Comparisons (`is_identity`, `equals`, `==`) are exact. Use
//! [`RotationMatrix3::approx_eq`] when floating-point drift matters.

use crate::{GeometryError, Quaternion, Scalar, Vector3};

/// 3x3 matrix (row-major)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationMatrix3<T> {
    m: [[T; 3]; 3],
}

impl<T: Scalar> Default for RotationMatrix3<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> RotationMatrix3<T> {
    /// Create a matrix from nine scalars in row-major order
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(
        m00: T, m01: T, m02: T,
        m10: T, m11: T, m12: T,
        m20: T, m21: T, m22: T,
    ) -> Self {
        Self {
            m: [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]],
        }
    }

    /// Create a matrix from its rows
    #[inline]
    pub fn from_rows(m: [[T; 3]; 3]) -> Self {
        Self { m }
    }

    /// Identity matrix
    pub fn identity() -> Self {
        let o = T::one();
        let z = T::zero();
        Self::new(o, z, z, z, o, z, z, z, o)
    }

    /// Reset this matrix to the identity
    pub fn make_identity(&mut self) {
        *self = Self::identity();
    }

    /// Rotation matrix for a quaternion `(q0, q1, q2, q3) = (w, x, y, z)`:
    ///
    /// ```text
    /// | q0²+q1²-q2²-q3²   2(q1q2 - q0q3)    2(q1q3 + q0q2)  |
    /// | 2(q2q1 + q0q3)    q0²-q1²+q2²-q3²   2(q2q3 - q0q1)  |
    /// | 2(q3q1 - q0q2)    2(q3q2 + q0q1)    q0²-q1²-q2²+q3² |
    /// ```
    ///
    /// The result is orthonormal only if `q` has unit norm.
    pub fn from_quaternion(q: &Quaternion<T>) -> Self {
        let [q0, q1, q2, q3] = q.components();
        let two = T::two();

        Self::new(
            q0.sqr() + q1.sqr() - q2.sqr() - q3.sqr(),
            two * (q1 * q2 - q0 * q3),
            two * (q1 * q3 + q0 * q2),
            two * (q2 * q1 + q0 * q3),
            q0.sqr() - q1.sqr() + q2.sqr() - q3.sqr(),
            two * (q2 * q3 - q0 * q1),
            two * (q3 * q1 - q0 * q2),
            two * (q3 * q2 + q0 * q1),
            q0.sqr() - q1.sqr() - q2.sqr() + q3.sqr(),
        )
    }

    /// Overwrite this matrix with the rotation described by `q`
    pub fn set_rotate(&mut self, q: &Quaternion<T>) {
        *self = Self::from_quaternion(q);
    }

    /// Rotation of `angle` radians about `axis` (expected to be unit length)
    ///
    /// Returns `None` if the intermediate quaternion is not representable in `T`.
    pub fn from_axis_angle(axis: Vector3<T>, angle: f64) -> Option<Self> {
        Quaternion::from_axis_angle(axis, angle).map(|q| Self::from_quaternion(&q))
    }

    /// Entry at `row`, `col`
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.m[row][col]
    }

    /// Rows of the matrix
    #[inline]
    pub fn rows(&self) -> [[T; 3]; 3] {
        self.m
    }

    /// True iff the diagonal is exactly one and everything else exactly zero
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Exact elementwise comparison
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Elementwise comparison with an absolute tolerance
    pub fn approx_eq(&self, other: &Self, tolerance: T) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(&a, &b)| (a - b).abs() <= tolerance)
    }

    /// Determinant
    pub fn determinant(&self) -> T {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Transposed copy
    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Self::new(
            m[0][0], m[1][0], m[2][0],
            m[0][1], m[1][1], m[2][1],
            m[0][2], m[1][2], m[2][2],
        )
    }

    /// Largest absolute entry
    pub fn max_abs(&self) -> T {
        self.m
            .iter()
            .flatten()
            .fold(T::zero(), |acc, &x| if x.abs() > acc { x.abs() } else { acc })
    }

    /// Replace this matrix with its inverse.
    ///
    /// Fails with [`GeometryError::SingularMatrix`] when
    /// `|det| <= T::epsilon() * max|m_ij|³`, leaving the matrix untouched.
    /// The cutoff scales with the matrix, so `1e-5 * I` still inverts.
    /// Integer matrices (epsilon 0) are singular only at `det == 0` and divide
    /// with truncation.
    pub fn inverse(&mut self) -> Result<(), GeometryError> {
        let det = self.determinant();
        let scale = self.max_abs();
        if det.abs() <= T::epsilon() * scale * scale * scale {
            return Err(GeometryError::SingularMatrix {
                determinant: det.as_f64(),
            });
        }

        let m = &self.m;
        // Adjugate (transposed cofactors) over the determinant
        let inv = Self::new(
            (m[1][1] * m[2][2] - m[1][2] * m[2][1]) / det,
            (m[0][2] * m[2][1] - m[0][1] * m[2][2]) / det,
            (m[0][1] * m[1][2] - m[0][2] * m[1][1]) / det,
            (m[1][2] * m[2][0] - m[1][0] * m[2][2]) / det,
            (m[0][0] * m[2][2] - m[0][2] * m[2][0]) / det,
            (m[0][2] * m[1][0] - m[0][0] * m[1][2]) / det,
            (m[1][0] * m[2][1] - m[1][1] * m[2][0]) / det,
            (m[0][1] * m[2][0] - m[0][0] * m[2][1]) / det,
            (m[0][0] * m[1][1] - m[0][1] * m[1][0]) / det,
        );

        *self = inv;
        Ok(())
    }

    /// Matrix-vector product `M * v`, `None` if an integer product or sum overflows
    pub fn checked_mult_matrix_vec(&self, v: Vector3<T>) -> Option<Vector3<T>> {
        let row = |r: &[T; 3]| -> Option<T> {
            let sum = r[0].checked_mul(v.x)?.checked_add(r[1].checked_mul(v.y)?)?;
            sum.checked_add(r[2].checked_mul(v.z)?)
        };
        Some(Vector3::new(row(&self.m[0])?, row(&self.m[1])?, row(&self.m[2])?))
    }

    /// Matrix-vector product `M * v`
    ///
    /// Integer overflow panics in debug builds; see [`Self::checked_mult_matrix_vec`].
    #[inline]
    pub fn mult_matrix_vec(&self, v: Vector3<T>) -> Vector3<T> {
        let m = &self.m;
        Vector3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }
}

impl<T: Scalar> std::ops::Index<(usize, usize)> for RotationMatrix3<T> {
    type Output = T;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.m[row][col]
    }
}

impl<T: Scalar> std::ops::Mul<Vector3<T>> for RotationMatrix3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        self.mult_matrix_vec(v)
    }
}

/// Matrix product: `(a * b) * v == a * (b * v)`
impl<T: Scalar> std::ops::Mul for RotationMatrix3<T> {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        let mut m = [[T::zero(); 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).fold(T::zero(), |acc, k| acc + self.m[i][k] * other.m[k][j]);
            }
        }
        Self { m }
    }
}
