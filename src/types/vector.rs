// src/types/vector.rs
// Vector2 / Vector3 / Vector4 generic implementations with default precision f32.
// Uses the FloatingPoint trait from super::traits.

use core::ops::{Add, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};

use super::matrix3::Matrix3;
use super::matrix4::Matrix4;
use super::quaternion::Quaternion;
use super::traits::FloatingPoint;

/// Vector2 is a simple 2D vector type with template-able numeric type.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector2<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
}

/// Vector3 is a simple 3D vector type with template-able numeric type.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector3<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// Vector4 is a 4-component vector, the homogeneous companion of Vector3.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector4<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

// Conditional impls for serde (tuple form, matching the on-wire shape of the
// plain component sequence).

impl<T> Serialize for Vector2<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Vector2<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y) = <(T, T)>::deserialize(deserializer)?;
        Ok(Vector2 { x, y })
    }
}

impl<T> Serialize for Vector3<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Vector3<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(T, T, T)>::deserialize(deserializer)?;
        Ok(Vector3 { x, y, z })
    }
}

impl<T> Serialize for Vector4<T>
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

impl<'de, T> Deserialize<'de> for Vector4<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z, w) = <(T, T, T, T)>::deserialize(deserializer)?;
        Ok(Vector4 { x, y, z, w })
    }
}

impl<T: FloatingPoint> Vector2<T> {
    /// Construct a new Vector2
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self { x: T::zero(), y: T::zero() }
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self { x: T::one(), y: T::one() }
    }

    /// Return the squared length (avoids sqrt)
    pub fn squared_length(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// Return the Euclidean length
    pub fn length(&self) -> T {
        self.squared_length().sqrt()
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Return a unit-length copy. A zero vector stays zero.
    pub fn normalize(&self) -> Self {
        let len = self.squared_length();
        if len > T::zero() {
            let inv = T::one() / len.sqrt();
            Self::new(self.x * inv, self.y * inv)
        } else {
            *self
        }
    }
}

impl<T: FloatingPoint> Vector3<T> {
    /// Construct a new Vector3
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self { x: T::zero(), y: T::zero(), z: T::zero() }
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self { x: T::one(), y: T::one(), z: T::one() }
    }

    /// Return the squared length (avoids sqrt)
    pub fn squared_length(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Return the Euclidean length
    pub fn length(&self) -> T {
        self.squared_length().sqrt()
    }

    /// Squared Euclidean distance to another vector
    pub fn squared_distance(&self, other: &Self) -> T {
        (*other - *self).squared_length()
    }

    /// Euclidean distance to another vector
    pub fn distance(&self, other: &Self) -> T {
        self.squared_distance(other).sqrt()
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product (right-handed)
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Return a unit-length copy. A zero vector stays zero.
    pub fn normalize(&self) -> Self {
        let len = self.squared_length();
        if len > T::zero() {
            let inv = T::one() / len.sqrt();
            Self::new(self.x * inv, self.y * inv, self.z * inv)
        } else {
            *self
        }
    }

    /// Angle between two vectors in radians; the cosine is clamped to
    /// [-1, 1] before acos so rounding noise cannot produce NaN.
    pub fn angle(&self, other: &Self) -> T {
        let denom = self.length() * other.length();
        let mut cosine = if denom > T::zero() {
            self.dot(other) / denom
        } else {
            T::zero()
        };
        if cosine > T::one() {
            cosine = T::one();
        }
        if cosine < -T::one() {
            cosine = -T::one();
        }
        cosine.acos()
    }

    /// Rotate this point around a line parallel to the X axis passing
    /// through `origin`, by `rad` radians.
    pub fn rotate_x(&self, origin: &Self, rad: T) -> Self {
        let px = self.x - origin.x;
        let py = self.y - origin.y;
        let pz = self.z - origin.z;
        let s = rad.sin();
        let c = rad.cos();

        Self::new(
            px + origin.x,
            py * c - pz * s + origin.y,
            py * s + pz * c + origin.z,
        )
    }

    /// Rotate this point around a line parallel to the Y axis passing
    /// through `origin`, by `rad` radians.
    pub fn rotate_y(&self, origin: &Self, rad: T) -> Self {
        let px = self.x - origin.x;
        let py = self.y - origin.y;
        let pz = self.z - origin.z;
        let s = rad.sin();
        let c = rad.cos();

        Self::new(
            pz * s + px * c + origin.x,
            py + origin.y,
            pz * c - px * s + origin.z,
        )
    }

    /// Rotate this point around a line parallel to the Z axis passing
    /// through `origin`, by `rad` radians.
    pub fn rotate_z(&self, origin: &Self, rad: T) -> Self {
        let px = self.x - origin.x;
        let py = self.y - origin.y;
        let pz = self.z - origin.z;
        let s = rad.sin();
        let c = rad.cos();

        Self::new(
            px * c - py * s + origin.x,
            px * s + py * c + origin.y,
            pz + origin.z,
        )
    }

    /// Transform by a 3x3 matrix.
    pub fn transform_mat3(&self, m: &Matrix3<T>) -> Self {
        let a = &m.data;
        Self::new(
            self.x * a[0] + self.y * a[3] + self.z * a[6],
            self.x * a[1] + self.y * a[4] + self.z * a[7],
            self.x * a[2] + self.y * a[5] + self.z * a[8],
        )
    }

    /// Transform by a 4x4 matrix. The 4th component is implicitly 1; the
    /// result is divided by the transformed w, with w == 0 treated as 1.
    pub fn transform_mat4(&self, m: &Matrix4<T>) -> Self {
        let a = &m.data;
        let mut w = a[3] * self.x + a[7] * self.y + a[11] * self.z + a[15];
        if w == T::zero() {
            w = T::one();
        }
        Self::new(
            (a[0] * self.x + a[4] * self.y + a[8] * self.z + a[12]) / w,
            (a[1] * self.x + a[5] * self.y + a[9] * self.z + a[13]) / w,
            (a[2] * self.x + a[6] * self.y + a[10] * self.z + a[14]) / w,
        )
    }

    /// Rotate by a unit quaternion: v + 2 * (q.w * (q.xyz x v) + q.xyz x (q.xyz x v)).
    pub fn transform_quat(&self, q: &Quaternion<T>) -> Self {
        let u = Vector3::new(q.x, q.y, q.z);
        let uv = u.cross(self);
        let uuv = u.cross(&uv);
        Self::new(
            self.x + (uv.x * q.w + uuv.x) * T::two(),
            self.y + (uv.y * q.w + uuv.y) * T::two(),
            self.z + (uv.z * q.w + uuv.z) * T::two(),
        )
    }
}

impl<T: FloatingPoint> Vector4<T> {
    /// Construct a new Vector4
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self { x: T::zero(), y: T::zero(), z: T::zero(), w: T::zero() }
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self { x: T::one(), y: T::one(), z: T::one(), w: T::one() }
    }

    /// Return the squared length (avoids sqrt)
    pub fn squared_length(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Return the Euclidean length
    pub fn length(&self) -> T {
        self.squared_length().sqrt()
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Return a unit-length copy. A zero vector stays zero.
    pub fn normalize(&self) -> Self {
        let len = self.squared_length();
        if len > T::zero() {
            let inv = T::one() / len.sqrt();
            Self::new(self.x * inv, self.y * inv, self.z * inv, self.w * inv)
        } else {
            *self
        }
    }

    /// Transform by a 4x4 matrix. No perspective divide; w flows through.
    pub fn transform_mat4(&self, m: &Matrix4<T>) -> Self {
        let a = &m.data;
        Self::new(
            a[0] * self.x + a[4] * self.y + a[8] * self.z + a[12] * self.w,
            a[1] * self.x + a[5] * self.y + a[9] * self.z + a[13] * self.w,
            a[2] * self.x + a[6] * self.y + a[10] * self.z + a[14] * self.w,
            a[3] * self.x + a[7] * self.y + a[11] * self.z + a[15] * self.w,
        )
    }
}

// Operator impls

impl<T: FloatingPoint> Add for Vector2<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: FloatingPoint> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<T: FloatingPoint> Mul<T> for Vector2<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl<T: FloatingPoint> Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: FloatingPoint> Add for Vector3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: FloatingPoint> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: FloatingPoint> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl<T: FloatingPoint> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: FloatingPoint> Add for Vector4<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z, self.w + other.w)
    }
}

impl<T: FloatingPoint> Sub for Vector4<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z, self.w - other.w)
    }
}

impl<T: FloatingPoint> Mul<T> for Vector4<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar, self.w * scalar)
    }
}

impl<T: FloatingPoint> Neg for Vector4<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

// Conversions between vectors and tuples / arrays

impl<T: FloatingPoint> From<(T, T)> for Vector2<T> {
    fn from(tuple: (T, T)) -> Self {
        Self { x: tuple.0, y: tuple.1 }
    }
}

impl<T: FloatingPoint> From<Vector2<T>> for (T, T) {
    fn from(v: Vector2<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T: FloatingPoint> From<[T; 2]> for Vector2<T> {
    fn from(array: [T; 2]) -> Self {
        Self { x: array[0], y: array[1] }
    }
}

impl<T: FloatingPoint> From<Vector2<T>> for [T; 2] {
    fn from(v: Vector2<T>) -> Self {
        [v.x, v.y]
    }
}

impl<T: FloatingPoint> From<(T, T, T)> for Vector3<T> {
    fn from(tuple: (T, T, T)) -> Self {
        Self { x: tuple.0, y: tuple.1, z: tuple.2 }
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for (T, T, T) {
    fn from(v: Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

impl<T: FloatingPoint> From<[T; 3]> for Vector3<T> {
    fn from(array: [T; 3]) -> Self {
        Self { x: array[0], y: array[1], z: array[2] }
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<T: FloatingPoint> From<&[T; 3]> for Vector3<T> {
    fn from(array: &[T; 3]) -> Self {
        Self { x: array[0], y: array[1], z: array[2] }
    }
}

impl<T: FloatingPoint> From<&Vector3<T>> for [T; 3] {
    fn from(v: &Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<T: FloatingPoint> From<(T, T, T, T)> for Vector4<T> {
    fn from(tuple: (T, T, T, T)) -> Self {
        Self { x: tuple.0, y: tuple.1, z: tuple.2, w: tuple.3 }
    }
}

impl<T: FloatingPoint> From<Vector4<T>> for (T, T, T, T) {
    fn from(v: Vector4<T>) -> Self {
        (v.x, v.y, v.z, v.w)
    }
}

impl<T: FloatingPoint> From<[T; 4]> for Vector4<T> {
    fn from(array: [T; 4]) -> Self {
        Self { x: array[0], y: array[1], z: array[2], w: array[3] }
    }
}

impl<T: FloatingPoint> From<Vector4<T>> for [T; 4] {
    fn from(v: Vector4<T>) -> Self {
        [v.x, v.y, v.z, v.w]
    }
}
