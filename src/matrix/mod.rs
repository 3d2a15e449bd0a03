//! Matrix and vector containers for skeletal transforms.
//!
//! [`Matrix3x4`] is the working type: an affine transform with rotation,
//! translation, and scale factories, composition, and a specialized inverse
//! for orthogonal rotation blocks. [`Matrix3x3`] is a plain 3×3 element
//! container with no arithmetic of its own, and [`Vector3`] is the
//! three-component value both operate on. All matrix storage is flat and
//! row-major.

mod matrix3x3;
mod matrix3x4;
#[cfg(feature = "serde")]
mod serde_;
mod vector3;

pub use matrix3x3::Matrix3x3;
pub use matrix3x4::Matrix3x4;
pub use vector3::Vector3;
