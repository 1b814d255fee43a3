//! cardan: a transform-algebra kernel for 3D rendering pipelines.
//!
//! Fixed-size, column-major matrices (2x2, 3x3, 4x4), vectors (2/3/4
//! components) and unit quaternions, with composition of rotation,
//! translation, scale and projection into single matrices ready for upload
//! to a graphics backend. All operations are synchronous pure computations
//! over caller-owned value types; in-place operators take `&mut self` and
//! snapshot everything they read before writing.

pub mod error;
pub mod prelude;
pub mod types;

pub use error::AlgebraError;
pub use types::{FloatingPoint, Matrix2, Matrix3, Matrix4, Quaternion, Vector2, Vector3, Vector4};
