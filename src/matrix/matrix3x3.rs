//! 3×3 matrix storage for model data.
//!
//! [`Matrix3x3`] is a plain numeric grid: nine `f32` elements in row-major
//! order, zero-initialized, addressed by `(row, col)`. It carries no
//! algebraic operations. Model files store raw 3×3 blocks (normal-transform
//! tables, texture coordinate generators) that only need to round-trip
//! through storage and print legibly while debugging; the affine math lives
//! on [`Matrix3x4`](super::Matrix3x4).
//!
//! # Storage Layout
//!
//! Elements are stored flat, row-major: the element at row `r`, column `c`
//! lives at index `r * 3 + c`. This index order is the wire contract for
//! serialized assets and must not change.

use crate::errors::{MathError, MathResult};
use std::fmt;

/// A 3×3 matrix of `f32` elements, stored flat in row-major order.
///
/// Created zero-filled; mutated only through indexed writes.
///
/// ```
/// use armature_math::Matrix3x3;
///
/// let mut m = Matrix3x3::new();
/// m[(0, 0)] = 2.5;
/// assert_eq!(m[(0, 0)], 2.5);
/// assert_eq!(m[(2, 2)], 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Matrix3x3 {
    elements: [f32; 9],
}

impl Matrix3x3 {
    /// Creates the zero matrix.
    pub fn new() -> Self {
        Self { elements: [0.0; 9] }
    }

    /// Creates a matrix from a flat row-major element array.
    pub fn from_array(elements: [f32; 9]) -> Self {
        Self { elements }
    }

    /// Returns the flat row-major element array.
    ///
    /// This is the layout any external serialization layer persists;
    /// element `(r, c)` is at index `r * 3 + c`.
    pub fn elements(&self) -> &[f32; 9] {
        &self.elements
    }

    /// Returns the element at `(row, col)`, both in `[0, 2]`.
    ///
    /// Out-of-range indices return
    /// [`MathError::IndexOutOfBounds`](crate::MathError::IndexOutOfBounds).
    /// For panicking access use the indexer: `m[(row, col)]`.
    pub fn get(&self, row: usize, col: usize) -> MathResult<f32> {
        if row > 2 || col > 2 {
            return Err(MathError::index_out_of_bounds("3x3", row, col));
        }
        Ok(self.elements[row * 3 + col])
    }

    /// Sets the element at `(row, col)`, both in `[0, 2]`.
    ///
    /// Out-of-range indices return
    /// [`MathError::IndexOutOfBounds`](crate::MathError::IndexOutOfBounds).
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> MathResult<()> {
        if row > 2 || col > 2 {
            return Err(MathError::index_out_of_bounds("3x3", row, col));
        }
        self.elements[row * 3 + col] = value;
        Ok(())
    }
}

impl std::ops::Index<(usize, usize)> for Matrix3x3 {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        if row > 2 || col > 2 {
            panic!("Matrix3x3 index out of bounds: ({}, {})", row, col);
        }
        &self.elements[row * 3 + col]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Matrix3x3 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        if row > 2 || col > 2 {
            panic!("Matrix3x3 index out of bounds: ({}, {})", row, col);
        }
        &mut self.elements[row * 3 + col]
    }
}

impl fmt::Display for Matrix3x3 {
    /// Renders all nine entries as three rows of labeled, left-justified
    /// cells: `M11: <value>` padded to 16 characters, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                write!(f, "M{}{}: {:<16}", row + 1, col + 1, self[(row, col)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
