// src/types/mod.rs
// Numeric value types: the matrix engines and their vector/quaternion
// collaborators.

pub mod matrix2;
pub mod matrix3;
pub mod matrix4;
pub mod quaternion;
pub mod traits;
pub mod vector;

pub use matrix2::Matrix2;
pub use matrix3::Matrix3;
pub use matrix4::Matrix4;
pub use quaternion::Quaternion;
pub use traits::FloatingPoint;
pub use vector::{Vector2, Vector3, Vector4};
