//! Fixed-size linear algebra for skeletal 3D model transforms.
//!
//! `armature-math` provides the small matrix and vector types used to pose
//! bones and scene nodes in 3D model assets: a 3×4 affine transform
//! ([`Matrix3x4`]), a plain 3×3 element container ([`Matrix3x3`]), and a
//! three-component vector ([`Vector3`]). Element storage is flat, row-major
//! `f32`, matching the layout serialized model formats persist.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`matrix`] | 3×4 affine transforms, 3×3 containers, 3D vectors |
//! | [`errors`] | [`MathError`] and [`MathResult`] |
//!
//! # Posing a Node
//!
//! Transforms are built from factories, composed by multiplication with the
//! rightmost factor applied first, and undone with the specialized inverse:
//!
//! ```
//! use armature_math::{Matrix3x4, Vector3};
//! use std::f32::consts::FRAC_PI_2;
//!
//! // Rotate a quarter turn about Z, then lift one unit in z.
//! let pose = Matrix3x4::translate(Vector3::new(0.0, 0.0, 1.0))
//!     .multiply(&Matrix3x4::rotate_z(FRAC_PI_2));
//!
//! let p = pose.transform_point(Vector3::x_axis());
//! assert!(p.x.abs() < 1e-6);
//! assert!((p.y + 1.0).abs() < 1e-6);
//! assert!((p.z - 1.0).abs() < 1e-6);
//!
//! // A rigid pose inverts cleanly.
//! let back = pose.invert().unwrap().transform_point(p);
//! assert!((back.x - 1.0).abs() < 1e-6);
//! ```
//!
//! # Re-exports
//!
//! The working types are re-exported at the crate root:
//!
//! ```
//! use armature_math::{Matrix3x3, Matrix3x4, Vector3};
//! use armature_math::{MathError, MathResult};
//! ```
//!
//! # Design Notes
//!
//! - **Row-major flat storage**: element `(r, c)` of a matrix lives at flat
//!   index `r * width + c`. Asset files persist that exact order, so the
//!   layout is part of the binary contract.
//!
//! - **`f32` elements**: matches the precision of GPU vertex pipelines and
//!   the model formats these transforms are read from and written to.
//!
//! - **Identity as the base value**: `Matrix3x4::default()` is the identity
//!   transform, and every factory overwrites entries of the identity rather
//!   than filling a zeroed matrix.
//!
//! - **Specialized inverse**: [`Matrix3x4::invert`] assumes an orthogonal
//!   rotation block and discards scale. It refuses zero-length basis
//!   columns with [`MathError::DegenerateTransform`] instead of dividing by
//!   zero.
//!
//! # Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for all three types. Matrices
//!   serialize as their flat row-major element arrays.

pub mod errors;
pub mod matrix;

pub use errors::{MathError, MathResult};
pub use matrix::{Matrix3x3, Matrix3x4, Vector3};
