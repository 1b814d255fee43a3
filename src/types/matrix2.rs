// src/types/matrix2.rs
// 2x2 matrix, column-major, in-place operator discipline shared with the
// 3x3/4x4 engines.

use serde::{Deserialize, Serialize};

use super::traits::FloatingPoint;
use super::vector::Vector2;

/// Matrix2 is a 2x2 matrix stored as a flat column-major array:
/// `data[col * 2 + row]`.
///
/// In-place operators mutate `self` (the receiving matrix). Every element an
/// operation both reads and writes is captured into locals before the first
/// write, so `self` never observes a half-updated state mid-computation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix2<T: FloatingPoint = f32> {
    pub data: [T; 4],
}

impl<T> Serialize for Matrix2<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.data.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Matrix2<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <[T; 4]>::deserialize(deserializer)?;
        Ok(Matrix2 { data })
    }
}

impl<T: FloatingPoint> Matrix2<T> {
    /// Construct from a flat column-major array
    pub fn new(data: [T; 4]) -> Self {
        Self { data }
    }

    /// The multiplicative identity
    pub fn identity() -> Self {
        let o = T::one();
        let z = T::zero();
        Self { data: [o, z, z, o] }
    }

    /// Set the components; `mCR` is column C, row R.
    pub fn set(&mut self, m00: T, m01: T, m10: T, m11: T) {
        self.data = [m00, m01, m10, m11];
    }

    /// Build a rotation matrix for `rad` radians (CCW positive)
    pub fn from_rotation(rad: T) -> Self {
        let s = rad.sin();
        let c = rad.cos();
        Self { data: [c, s, -s, c] }
    }

    /// Build a scaling matrix from a 2D scale vector
    pub fn from_scaling(v: &Vector2<T>) -> Self {
        let z = T::zero();
        Self { data: [v.x, z, z, v.y] }
    }

    /// Transpose in place
    pub fn transpose(&mut self) {
        let a1 = self.data[1];
        self.data[1] = self.data[2];
        self.data[2] = a1;
    }

    /// Signed determinant; pure, no mutation
    pub fn determinant(&self) -> T {
        self.data[0] * self.data[3] - self.data[2] * self.data[1]
    }

    /// Invert in place. If the determinant is exactly zero the matrix is
    /// left unchanged and `false` is returned.
    pub fn invert(&mut self) -> bool {
        let a0 = self.data[0];
        let a1 = self.data[1];
        let a2 = self.data[2];
        let a3 = self.data[3];

        let det = a0 * a3 - a2 * a1;
        if det == T::zero() {
            return false;
        }
        let det = T::one() / det;

        self.data[0] = a3 * det;
        self.data[1] = -a1 * det;
        self.data[2] = -a2 * det;
        self.data[3] = a0 * det;
        true
    }

    /// Replace with the adjugate (transposed cofactor matrix)
    pub fn adjoint(&mut self) {
        let a0 = self.data[0];
        self.data[0] = self.data[3];
        self.data[1] = -self.data[1];
        self.data[2] = -self.data[2];
        self.data[3] = a0;
    }

    /// Right-multiply: `self = self * b`
    pub fn multiply(&mut self, b: &Matrix2<T>) {
        let a0 = self.data[0];
        let a1 = self.data[1];
        let a2 = self.data[2];
        let a3 = self.data[3];
        let b0 = b.data[0];
        let b1 = b.data[1];
        let b2 = b.data[2];
        let b3 = b.data[3];

        self.data[0] = a0 * b0 + a2 * b1;
        self.data[1] = a1 * b0 + a3 * b1;
        self.data[2] = a0 * b2 + a2 * b3;
        self.data[3] = a1 * b2 + a3 * b3;
    }

    /// Right-multiply by a rotation of `rad` radians
    pub fn rotate(&mut self, rad: T) {
        let a0 = self.data[0];
        let a1 = self.data[1];
        let a2 = self.data[2];
        let a3 = self.data[3];
        let s = rad.sin();
        let c = rad.cos();

        self.data[0] = a0 * c + a2 * s;
        self.data[1] = a1 * c + a3 * s;
        self.data[2] = a0 * -s + a2 * c;
        self.data[3] = a1 * -s + a3 * c;
    }

    /// Right-multiply by a scaling of `v`
    pub fn scale(&mut self, v: &Vector2<T>) {
        self.data[0] = self.data[0] * v.x;
        self.data[1] = self.data[1] * v.x;
        self.data[2] = self.data[2] * v.y;
        self.data[3] = self.data[3] * v.y;
    }

    /// Frobenius norm
    pub fn frob(&self) -> T {
        let mut sum = T::zero();
        for &e in &self.data {
            sum = sum + e * e;
        }
        sum.sqrt()
    }

    /// Elementwise add
    pub fn add(&mut self, b: &Matrix2<T>) {
        for i in 0..4 {
            self.data[i] = self.data[i] + b.data[i];
        }
    }

    /// Elementwise subtract
    pub fn subtract(&mut self, b: &Matrix2<T>) {
        for i in 0..4 {
            self.data[i] = self.data[i] - b.data[i];
        }
    }

    /// Multiply each element by a scalar
    pub fn multiply_scalar(&mut self, s: T) {
        for i in 0..4 {
            self.data[i] = self.data[i] * s;
        }
    }

    /// `self[i] += b[i] * scale` for each element
    pub fn multiply_scalar_and_add(&mut self, b: &Matrix2<T>, scale: T) {
        for i in 0..4 {
            self.data[i] = self.data[i] + b.data[i] * scale;
        }
    }

    /// Row accessor (row index, then across the columns)
    pub fn row(&self, idx: usize) -> [T; 2] {
        [self.data[idx], self.data[2 + idx]]
    }

    /// Column accessor
    pub fn column(&self, idx: usize) -> [T; 2] {
        [self.data[idx * 2], self.data[idx * 2 + 1]]
    }

    /// Flat column-major component view, ready for upload
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: FloatingPoint> Default for Matrix2<T> {
    fn default() -> Self {
        Self::identity()
    }
}
