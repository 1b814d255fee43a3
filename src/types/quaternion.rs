// src/types/quaternion.rs
// Unit-quaternion value type consumed by the matrix engines.

use serde::{Deserialize, Serialize};

use super::traits::FloatingPoint;
use super::vector::Vector3;

/// Quaternion with components (x, y, z, w), w being the scalar part.
///
/// Every matrix-construction routine that accepts a Quaternion assumes it is
/// unit length. That precondition is documented, never runtime-checked: a
/// non-unit quaternion silently produces a scaled/skewed matrix. Callers
/// hold the responsibility, typically by going through `normalize`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quaternion<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T> Serialize for Quaternion<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z, &self.w).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Quaternion<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z, w) = <(T, T, T, T)>::deserialize(deserializer)?;
        Ok(Quaternion { x, y, z, w })
    }
}

impl<T: FloatingPoint> Quaternion<T> {
    /// Construct a new Quaternion from raw components
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// The identity rotation (0, 0, 0, 1)
    pub fn identity() -> Self {
        Self { x: T::zero(), y: T::zero(), z: T::zero(), w: T::one() }
    }

    /// Build a rotation of `rad` radians around `axis`. The axis is expected
    /// to be unit length; the result is unit length when it is.
    pub fn from_axis_angle(axis: &Vector3<T>, rad: T) -> Self {
        let half = rad * T::half();
        let s = half.sin();
        Self {
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
            w: half.cos(),
        }
    }

    /// Return the squared norm (avoids sqrt)
    pub fn squared_length(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Return the norm
    pub fn length(&self) -> T {
        self.squared_length().sqrt()
    }

    /// Dot product of two quaternions
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Return a unit-norm copy. A zero quaternion stays zero.
    pub fn normalize(&self) -> Self {
        let len = self.squared_length();
        if len > T::zero() {
            let inv = T::one() / len.sqrt();
            Self::new(self.x * inv, self.y * inv, self.z * inv, self.w * inv)
        } else {
            *self
        }
    }
}

impl<T: FloatingPoint> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

// Conversions between Quaternion<T> and tuples / arrays

impl<T: FloatingPoint> From<(T, T, T, T)> for Quaternion<T> {
    fn from(tuple: (T, T, T, T)) -> Self {
        Self { x: tuple.0, y: tuple.1, z: tuple.2, w: tuple.3 }
    }
}

impl<T: FloatingPoint> From<Quaternion<T>> for (T, T, T, T) {
    fn from(q: Quaternion<T>) -> Self {
        (q.x, q.y, q.z, q.w)
    }
}

impl<T: FloatingPoint> From<[T; 4]> for Quaternion<T> {
    fn from(array: [T; 4]) -> Self {
        Self { x: array[0], y: array[1], z: array[2], w: array[3] }
    }
}

impl<T: FloatingPoint> From<Quaternion<T>> for [T; 4] {
    fn from(q: Quaternion<T>) -> Self {
        [q.x, q.y, q.z, q.w]
    }
}
