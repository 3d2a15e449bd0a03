//! 3×4 affine transform matrices for model skeletons.
//!
//! A [`Matrix3x4`] packs the transform of a bone or scene node into twelve
//! `f32` elements: a 3×3 rotation/scale block in columns 0-2 and a
//! translation column at index 3. Applied to a point it computes
//! `p' = R * p + T`, the bottom `[0, 0, 0, 1]` row of the equivalent 4×4
//! homogeneous matrix being implicit.
//!
//! # Storage Layout
//!
//! Elements are stored flat, row-major: the element at row `r`, column `c`
//! lives at index `r * 4 + c`. Serialized model assets persist exactly this
//! order, so the layout is a binary contract, not an implementation detail.
//!
//! ```text
//! | M11 M12 M13 | M14 |      rotation/scale block R: columns 0-2
//! | M21 M22 M23 | M24 |      translation T:          column 3
//! | M31 M32 M33 | M34 |
//! ```
//!
//! # Construction Rule
//!
//! The default value is the identity transform (R = I, T = 0). Every factory
//! starts from that identity and overwrites only the entries it names:
//! [`rotate_x`](Matrix3x4::rotate_x) touches four rotation entries and
//! leaves M11 at its identity value of 1, [`translate`](Matrix3x4::translate)
//! writes only column 3, and so on. None of them starts from a zeroed
//! matrix.
//!
//! # Composing Transforms
//!
//! Transforms compose by multiplication, rightmost factor applied first:
//!
//! ```
//! use armature_math::{Matrix3x4, Vector3};
//!
//! let parent = Matrix3x4::translate(Vector3::new(0.0, 1.0, 0.0));
//! let local = Matrix3x4::rotate_z(0.25);
//!
//! // local rotation first, then the parent offset
//! let bone = parent.multiply(&local);
//! assert_eq!(bone.translation(), Vector3::new(0.0, 1.0, 0.0));
//! ```
//!
//! # Inverting Transforms
//!
//! [`invert`](Matrix3x4::invert) is a fast path for matrices whose rotation
//! block has orthogonal basis columns (rigid transforms, possibly with
//! per-axis scale). It rebuilds the rotation as normalized transposed
//! columns and the translation as negated projections, which silently
//! discards scale and produces meaningless output for sheared input. It is
//! not a general matrix inverse.

use crate::errors::{MathError, MathResult};
use crate::matrix::Vector3;
use std::fmt;

/// A 3×4 affine transform: rotation/scale block plus translation column,
/// stored flat in row-major order.
///
/// Values are `Copy`; operations return new matrices and never alias the
/// operand's storage.
///
/// ```
/// use armature_math::{Matrix3x4, Vector3};
///
/// let m = Matrix3x4::rotate_y(1.2);
/// let p = m.transform_point(Vector3::new(0.5, 0.0, 0.0));
/// assert!((p.magnitude() - 0.5).abs() < 1e-6); // rotation preserves length
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x4 {
    elements: [f32; 12],
}

impl Matrix3x4 {
    /// Returns the identity affine transform: R = I, T = 0.
    ///
    /// The identity is the neutral element of [`multiply`](Self::multiply)
    /// and the start value every factory overwrites.
    pub fn identity() -> Self {
        Self {
            elements: [
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
            ],
        }
    }

    /// Returns the all-zero 3×4 matrix.
    ///
    /// The default value is the identity, so this clears the three diagonal
    /// entries the identity sets; everything else is already zero.
    pub fn empty() -> Self {
        let mut m = Self::identity();
        m.set_m11(0.0);
        m.set_m22(0.0);
        m.set_m33(0.0);
        m
    }

    /// Creates a matrix from a flat row-major element array.
    pub fn from_array(elements: [f32; 12]) -> Self {
        Self { elements }
    }

    /// Returns the flat row-major element array.
    ///
    /// This is the layout any external serialization layer persists;
    /// element `(r, c)` is at index `r * 4 + c`.
    pub fn elements(&self) -> &[f32; 12] {
        &self.elements
    }

    /// Returns the element at `(row, col)`, row in `[0, 2]`, col in `[0, 3]`.
    ///
    /// Out-of-range indices return
    /// [`MathError::IndexOutOfBounds`](crate::MathError::IndexOutOfBounds).
    /// For panicking access use the indexer: `m[(row, col)]`.
    pub fn get(&self, row: usize, col: usize) -> MathResult<f32> {
        if row > 2 || col > 3 {
            return Err(MathError::index_out_of_bounds("3x4", row, col));
        }
        Ok(self.elements[row * 4 + col])
    }

    /// Sets the element at `(row, col)`, row in `[0, 2]`, col in `[0, 3]`.
    ///
    /// Out-of-range indices return
    /// [`MathError::IndexOutOfBounds`](crate::MathError::IndexOutOfBounds).
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> MathResult<()> {
        if row > 2 || col > 3 {
            return Err(MathError::index_out_of_bounds("3x4", row, col));
        }
        self.elements[row * 4 + col] = value;
        Ok(())
    }

    // Named element accessors. M<r><c> addresses row r, column c (1-based)
    // through the same storage as the (row, col) indexer.

    #[inline]
    pub fn m11(&self) -> f32 {
        self[(0, 0)]
    }
    #[inline]
    pub fn set_m11(&mut self, value: f32) {
        self[(0, 0)] = value;
    }
    #[inline]
    pub fn m12(&self) -> f32 {
        self[(0, 1)]
    }
    #[inline]
    pub fn set_m12(&mut self, value: f32) {
        self[(0, 1)] = value;
    }
    #[inline]
    pub fn m13(&self) -> f32 {
        self[(0, 2)]
    }
    #[inline]
    pub fn set_m13(&mut self, value: f32) {
        self[(0, 2)] = value;
    }
    #[inline]
    pub fn m14(&self) -> f32 {
        self[(0, 3)]
    }
    #[inline]
    pub fn set_m14(&mut self, value: f32) {
        self[(0, 3)] = value;
    }

    #[inline]
    pub fn m21(&self) -> f32 {
        self[(1, 0)]
    }
    #[inline]
    pub fn set_m21(&mut self, value: f32) {
        self[(1, 0)] = value;
    }
    #[inline]
    pub fn m22(&self) -> f32 {
        self[(1, 1)]
    }
    #[inline]
    pub fn set_m22(&mut self, value: f32) {
        self[(1, 1)] = value;
    }
    #[inline]
    pub fn m23(&self) -> f32 {
        self[(1, 2)]
    }
    #[inline]
    pub fn set_m23(&mut self, value: f32) {
        self[(1, 2)] = value;
    }
    #[inline]
    pub fn m24(&self) -> f32 {
        self[(1, 3)]
    }
    #[inline]
    pub fn set_m24(&mut self, value: f32) {
        self[(1, 3)] = value;
    }

    #[inline]
    pub fn m31(&self) -> f32 {
        self[(2, 0)]
    }
    #[inline]
    pub fn set_m31(&mut self, value: f32) {
        self[(2, 0)] = value;
    }
    #[inline]
    pub fn m32(&self) -> f32 {
        self[(2, 1)]
    }
    #[inline]
    pub fn set_m32(&mut self, value: f32) {
        self[(2, 1)] = value;
    }
    #[inline]
    pub fn m33(&self) -> f32 {
        self[(2, 2)]
    }
    #[inline]
    pub fn set_m33(&mut self, value: f32) {
        self[(2, 2)] = value;
    }
    #[inline]
    pub fn m34(&self) -> f32 {
        self[(2, 3)]
    }
    #[inline]
    pub fn set_m34(&mut self, value: f32) {
        self[(2, 3)] = value;
    }

    /// Builds a rotation about the X axis by `angle` radians.
    ///
    /// Starting from the identity, overwrites the four entries of the YZ
    /// submatrix; M11 keeps its identity value of 1 (the rotation axis) and
    /// the translation column stays zero:
    ///
    /// ```text
    /// | 1     0        0     |
    /// | 0   cos(a)   sin(a)  |
    /// | 0  -sin(a)   cos(a)  |
    /// ```
    ///
    /// Positive angles rotate counterclockwise when looking from +X toward
    /// the origin:
    ///
    /// ```
    /// use armature_math::{Matrix3x4, Vector3};
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// // [0, 1, 0] rotates to [0, 0, -1] at 90 degrees
    /// let p = Matrix3x4::rotate_x(FRAC_PI_2).transform_point(Vector3::y_axis());
    /// assert!(p.x.abs() < 1e-6);
    /// assert!(p.y.abs() < 1e-6);
    /// assert!((p.z + 1.0).abs() < 1e-6);
    /// ```
    pub fn rotate_x(angle: f32) -> Self {
        let (sin, cos) = libm::sincosf(angle);

        let mut m = Self::identity();
        m.set_m22(cos);
        m.set_m23(sin);
        m.set_m32(-sin);
        m.set_m33(cos);
        m
    }

    /// Builds a rotation about the Y axis by `angle` radians.
    ///
    /// Starting from the identity, overwrites the four entries of the XZ
    /// submatrix; M22 keeps its identity value of 1:
    ///
    /// ```text
    /// | cos(a)   0  -sin(a) |
    /// |   0      1     0    |
    /// | sin(a)   0   cos(a) |
    /// ```
    pub fn rotate_y(angle: f32) -> Self {
        let (sin, cos) = libm::sincosf(angle);

        let mut m = Self::identity();
        m.set_m11(cos);
        m.set_m13(-sin);
        m.set_m31(sin);
        m.set_m33(cos);
        m
    }

    /// Builds a rotation about the Z axis by `angle` radians.
    ///
    /// Starting from the identity, overwrites the four entries of the XY
    /// submatrix; M33 keeps its identity value of 1:
    ///
    /// ```text
    /// |  cos(a)   sin(a)   0 |
    /// | -sin(a)   cos(a)   0 |
    /// |    0        0      1 |
    /// ```
    pub fn rotate_z(angle: f32) -> Self {
        let (sin, cos) = libm::sincosf(angle);

        let mut m = Self::identity();
        m.set_m11(cos);
        m.set_m12(sin);
        m.set_m21(-sin);
        m.set_m22(cos);
        m
    }

    /// Builds a pure translation by `offset`.
    ///
    /// The rotation block stays at its identity value; only column 3 is
    /// written.
    ///
    /// ```
    /// use armature_math::{Matrix3x4, Vector3};
    ///
    /// let m = Matrix3x4::translate(Vector3::new(1.0, 2.0, 3.0));
    /// assert_eq!(m.m14(), 1.0);
    /// assert_eq!(m.m11(), 1.0); // rotation block untouched
    /// ```
    pub fn translate(offset: Vector3) -> Self {
        let mut m = Self::identity();
        m.set_m14(offset.x);
        m.set_m24(offset.y);
        m.set_m34(offset.z);
        m
    }

    /// Builds a pure per-axis scale.
    ///
    /// Overwrites the three diagonal entries of the rotation block with the
    /// scale factors; the translation column stays zero.
    ///
    /// ```
    /// use armature_math::{Matrix3x4, Vector3};
    ///
    /// let m = Matrix3x4::scale(Vector3::new(2.0, 3.0, 4.0));
    /// let p = m.transform_point(Vector3::new(1.0, 1.0, 1.0));
    /// assert_eq!(p, Vector3::new(2.0, 3.0, 4.0));
    /// ```
    pub fn scale(scale: Vector3) -> Self {
        let mut m = Self::identity();
        m.set_m11(scale.x);
        m.set_m22(scale.y);
        m.set_m33(scale.z);
        m
    }

    /// Multiplies this transform by another, returning the composition.
    ///
    /// The result applies `rhs` first, then `self`:
    /// `p' = self.R * (rhs.R * p + rhs.T) + self.T`. The rotation block is
    /// the 3×3 product `self.R * rhs.R`; the translation column is
    /// `self.R * rhs.T + self.T`. Neither operand is modified.
    ///
    /// You can also use the `*` operator: `a * b` or `&a * &b`.
    ///
    /// ```
    /// use armature_math::{Matrix3x4, Vector3};
    ///
    /// let a = Matrix3x4::translate(Vector3::new(1.0, 0.0, 0.0));
    /// let b = Matrix3x4::translate(Vector3::new(0.0, 2.0, 0.0));
    /// assert_eq!(a.multiply(&b).translation(), Vector3::new(1.0, 2.0, 0.0));
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut result = [0.0; 12];

        for (i, cell) in result.iter_mut().enumerate() {
            let (row, col) = (i / 4, i % 4);
            for k in 0..3 {
                *cell += self[(row, k)] * rhs[(k, col)];
            }
            // The implicit bottom row [0, 0, 0, 1] contributes the lhs
            // translation to the translation column.
            if col == 3 {
                *cell += self[(row, 3)];
            }
        }

        Self::from_array(result)
    }

    /// Computes the inverse, assuming an orthogonal rotation block.
    ///
    /// This is a specialized fast path, not a general matrix inverse:
    ///
    /// 1. The three basis columns of the rotation block are extracted and
    ///    scaled to unit length. Any per-axis scale is discarded at this
    ///    step rather than inverted, so `invert(scale(s))` is the identity,
    ///    not `scale(1/s)`.
    /// 2. The normalized columns become the rows of the inverse rotation
    ///    (the transpose), and each new translation component is the negated
    ///    dot product of its row with the original translation.
    ///
    /// The result is only meaningful when the rotation block's columns are
    /// mutually orthogonal (a rigid transform, possibly scaled). Sheared or
    /// otherwise non-orthogonal blocks are not detected and produce output
    /// that is not an inverse.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DegenerateTransform`](crate::MathError::DegenerateTransform)
    /// when a basis column has zero length, which would otherwise divide by
    /// zero during normalization. Near-zero columns are not rejected.
    ///
    /// ```
    /// use armature_math::{Matrix3x4, Vector3};
    ///
    /// let m = Matrix3x4::translate(Vector3::new(1.0, 2.0, 3.0));
    /// let inv = m.invert().unwrap();
    /// assert_eq!(inv.translation(), Vector3::new(-1.0, -2.0, -3.0));
    /// ```
    pub fn invert(&self) -> MathResult<Self> {
        // Basis columns of the rotation block become the rows of the
        // inverse.
        let mut rows = [
            Vector3::new(self.m11(), self.m21(), self.m31()),
            Vector3::new(self.m12(), self.m22(), self.m32()),
            Vector3::new(self.m13(), self.m23(), self.m33()),
        ];

        for (i, row) in rows.iter_mut().enumerate() {
            let length = row.magnitude();
            if length == 0.0 {
                return Err(MathError::degenerate_transform(
                    "invert",
                    &format!("zero-length basis column {} in rotation block", i),
                ));
            }
            *row = *row * (1.0 / length);
        }

        let translation = self.translation();

        let mut out = Self::identity();
        for (i, row) in rows.iter().enumerate() {
            out[(i, 0)] = row.x;
            out[(i, 1)] = row.y;
            out[(i, 2)] = row.z;
            out[(i, 3)] = -row.dot(&translation);
        }

        Ok(out)
    }

    /// Applies the full affine map to a point: `R * p + T`.
    pub fn transform_point(&self, point: Vector3) -> Vector3 {
        Vector3::new(
            self.m11() * point.x + self.m12() * point.y + self.m13() * point.z + self.m14(),
            self.m21() * point.x + self.m22() * point.y + self.m23() * point.z + self.m24(),
            self.m31() * point.x + self.m32() * point.y + self.m33() * point.z + self.m34(),
        )
    }

    /// Applies only the rotation/scale block to a direction: `R * v`.
    ///
    /// Directions are not offset by the translation column; use
    /// [`transform_point`](Self::transform_point) for positions.
    pub fn transform_vector(&self, vector: Vector3) -> Vector3 {
        Vector3::new(
            self.m11() * vector.x + self.m12() * vector.y + self.m13() * vector.z,
            self.m21() * vector.x + self.m22() * vector.y + self.m23() * vector.z,
            self.m31() * vector.x + self.m32() * vector.y + self.m33() * vector.z,
        )
    }

    /// Returns the translation column (M14, M24, M34) as a vector.
    #[inline]
    pub fn translation(&self) -> Vector3 {
        Vector3::new(self.m14(), self.m24(), self.m34())
    }

    /// Returns the maximum absolute difference between corresponding
    /// elements.
    ///
    /// Useful for tolerance comparisons in tests and asset validation.
    ///
    /// ```
    /// use armature_math::Matrix3x4;
    ///
    /// let a = Matrix3x4::identity();
    /// let mut b = Matrix3x4::identity();
    /// b.set_m12(0.125);
    /// assert_eq!(a.max_difference(&b), 0.125);
    /// ```
    pub fn max_difference(&self, other: &Self) -> f32 {
        let mut max_diff: f32 = 0.0;

        for (a, b) in self.elements.iter().zip(other.elements.iter()) {
            max_diff = max_diff.max((a - b).abs());
        }

        max_diff
    }
}

impl Default for Matrix3x4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Matrix3x4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&Matrix3x4> for Matrix3x4 {
    type Output = Matrix3x4;

    fn mul(self, rhs: &Matrix3x4) -> Matrix3x4 {
        self.multiply(rhs)
    }
}

impl std::ops::Mul<Matrix3x4> for &Matrix3x4 {
    type Output = Matrix3x4;

    fn mul(self, rhs: Matrix3x4) -> Matrix3x4 {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&Matrix3x4> for &Matrix3x4 {
    type Output = Matrix3x4;

    fn mul(self, rhs: &Matrix3x4) -> Matrix3x4 {
        self.multiply(rhs)
    }
}

impl std::ops::Index<(usize, usize)> for Matrix3x4 {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        if row > 2 || col > 3 {
            panic!("Matrix3x4 index out of bounds: ({}, {})", row, col);
        }
        &self.elements[row * 4 + col]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Matrix3x4 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        if row > 2 || col > 3 {
            panic!("Matrix3x4 index out of bounds: ({}, {})", row, col);
        }
        &mut self.elements[row * 4 + col]
    }
}

impl fmt::Display for Matrix3x4 {
    /// Renders all twelve entries as three rows of labeled, left-justified
    /// cells: `M11: <value>` padded to 16 characters, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..4 {
                write!(f, "M{}{}: {:<16}", row + 1, col + 1, self[(row, col)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
