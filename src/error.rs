// src/error.rs
// Typed errors for the fallible conversion boundary. The transform
// operations themselves are total and never return these.

use thiserror::Error;

use crate::types::traits::FloatingPoint;
use crate::types::{Matrix2, Matrix3, Matrix4, Quaternion, Vector2, Vector3, Vector4};

/// Errors produced at the slice-conversion boundary.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AlgebraError {
    /// A component slice had the wrong number of elements for the target
    /// type.
    #[error("component slice has length {got}, expected {expected}")]
    SliceLength { expected: usize, got: usize },
}

fn components<T: FloatingPoint, const N: usize>(slice: &[T]) -> Result<[T; N], AlgebraError> {
    if slice.len() != N {
        return Err(AlgebraError::SliceLength { expected: N, got: slice.len() });
    }
    let mut out = [T::zero(); N];
    out.copy_from_slice(slice);
    Ok(out)
}

impl<T: FloatingPoint> TryFrom<&[T]> for Matrix2<T> {
    type Error = AlgebraError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        Ok(Matrix2::new(components::<T, 4>(slice)?))
    }
}

impl<T: FloatingPoint> TryFrom<&[T]> for Matrix3<T> {
    type Error = AlgebraError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        Ok(Matrix3::new(components::<T, 9>(slice)?))
    }
}

impl<T: FloatingPoint> TryFrom<&[T]> for Matrix4<T> {
    type Error = AlgebraError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        Ok(Matrix4::new(components::<T, 16>(slice)?))
    }
}

impl<T: FloatingPoint> TryFrom<&[T]> for Vector2<T> {
    type Error = AlgebraError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        let c = components::<T, 2>(slice)?;
        Ok(Vector2::new(c[0], c[1]))
    }
}

impl<T: FloatingPoint> TryFrom<&[T]> for Vector3<T> {
    type Error = AlgebraError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        let c = components::<T, 3>(slice)?;
        Ok(Vector3::new(c[0], c[1], c[2]))
    }
}

impl<T: FloatingPoint> TryFrom<&[T]> for Vector4<T> {
    type Error = AlgebraError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        let c = components::<T, 4>(slice)?;
        Ok(Vector4::new(c[0], c[1], c[2], c[3]))
    }
}

impl<T: FloatingPoint> TryFrom<&[T]> for Quaternion<T> {
    type Error = AlgebraError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        let c = components::<T, 4>(slice)?;
        Ok(Quaternion::new(c[0], c[1], c[2], c[3]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_slice_roundtrip() {
        let m = Matrix3::<f32>::from_rotation(0.4);
        let back = Matrix3::<f32>::try_from(m.as_slice()).unwrap();
        assert_eq!(m, back);
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        let short = [1.0f32, 2.0, 3.0];
        let err = Matrix4::<f32>::try_from(&short[..]).unwrap_err();
        assert_eq!(err, AlgebraError::SliceLength { expected: 16, got: 3 });
        assert_eq!(
            err.to_string(),
            "component slice has length 3, expected 16"
        );
    }

    #[test]
    fn test_vector_and_quaternion_conversions() {
        let v = Vector3::<f64>::try_from(&[1.0f64, 2.0, 3.0][..]).unwrap();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));

        let q = Quaternion::<f32>::try_from(&[0.0f32, 0.0, 0.0, 1.0][..]).unwrap();
        assert_eq!(q, Quaternion::identity());

        assert!(Vector2::<f32>::try_from(&[1.0f32][..]).is_err());
        assert!(Vector4::<f32>::try_from(&[1.0f32; 5][..]).is_err());
    }
}
