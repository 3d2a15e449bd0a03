//! Error types for matrix operations.
//!
//! This module provides the unified error type [`MathError`] covering the two
//! failure modes this crate defines: addressing a matrix cell outside its
//! bounds, and inverting a transform whose rotation block has collapsed.
//!
//! # Error Categories
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`IndexOutOfBounds`](MathError::IndexOutOfBounds) | Checked `get`/`set` with a row or column outside the matrix |
//! | [`DegenerateTransform`](MathError::DegenerateTransform) | [`Matrix3x4::invert`](crate::Matrix3x4::invert) on a zero-length basis column |
//!
//! Every other operation in the crate is a total function: composition,
//! factories, and element formatting have no error path.
//!
//! # Usage
//!
//! Fallible functions return [`MathResult<T>`], which is
//! `Result<T, MathError>`:
//!
//! ```
//! use armature_math::{Matrix3x4, MathError};
//!
//! let m = Matrix3x4::identity();
//! match m.get(5, 0) {
//!     Err(MathError::IndexOutOfBounds { row, col, .. }) => {
//!         assert_eq!((row, col), (5, 0));
//!     }
//!     other => panic!("expected an index error, got {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Unified error type for matrix operations.
///
/// Use the constructor methods
/// ([`index_out_of_bounds`](Self::index_out_of_bounds),
/// [`degenerate_transform`](Self::degenerate_transform)) for consistent
/// error creation.
#[derive(Error, Debug)]
pub enum MathError {
    /// Row or column index outside the matrix bounds.
    #[error("index ({row}, {col}) out of bounds for {shape} matrix")]
    IndexOutOfBounds {
        shape: &'static str,
        row: usize,
        col: usize,
    },

    /// Transform whose rotation block cannot be inverted.
    #[error("degenerate transform in {operation}: {message}")]
    DegenerateTransform {
        operation: &'static str,
        message: String,
    },
}

/// Convenience alias for `Result<T, MathError>`.
pub type MathResult<T> = Result<T, MathError>;

impl MathError {
    /// Creates an [`IndexOutOfBounds`](Self::IndexOutOfBounds) error.
    ///
    /// `shape` names the matrix layout the indices were checked against,
    /// e.g. `"3x4"`.
    pub fn index_out_of_bounds(shape: &'static str, row: usize, col: usize) -> Self {
        Self::IndexOutOfBounds { shape, row, col }
    }

    /// Creates a [`DegenerateTransform`](Self::DegenerateTransform) error.
    pub fn degenerate_transform(operation: &'static str, reason: &str) -> Self {
        Self::DegenerateTransform {
            operation,
            message: reason.to_string(),
        }
    }
}
