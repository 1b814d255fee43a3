//! Prelude for cardan
//!
//! Re-exports all value types, the scalar trait, and the conversion error
//! for convenient glob import.

pub use crate::error::AlgebraError;
pub use crate::types::traits::FloatingPoint;
pub use crate::types::{Matrix2, Matrix3, Matrix4, Quaternion, Vector2, Vector3, Vector4};

// Common type aliases for frequently used instantiations
pub type Matrix2F32 = Matrix2<f32>;
pub type Matrix2F64 = Matrix2<f64>;
pub type Matrix3F32 = Matrix3<f32>;
pub type Matrix3F64 = Matrix3<f64>;
pub type Matrix4F32 = Matrix4<f32>;
pub type Matrix4F64 = Matrix4<f64>;
pub type Vector3F32 = Vector3<f32>;
pub type Vector3F64 = Vector3<f64>;
pub type QuaternionF32 = Quaternion<f32>;
pub type QuaternionF64 = Quaternion<f64>;
