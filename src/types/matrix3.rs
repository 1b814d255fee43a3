// src/types/matrix3.rs
// 3x3 matrix engine: 2D affine transforms in homogeneous form, plus the
// normal-matrix derivation from a 4x4.

use core::fmt;
use serde::{Deserialize, Serialize};

use super::matrix2::Matrix2;
use super::matrix4::Matrix4;
use super::quaternion::Quaternion;
use super::traits::FloatingPoint;
use super::vector::Vector2;

/// Matrix3 is a 3x3 matrix stored as a flat column-major array:
/// `data[col * 3 + row]`.
///
/// It represents 2D affine transforms (homogeneous 3x3) or 3D
/// normal-transform matrices. In-place operators mutate `self`; every element
/// an operation both reads and writes is snapshotted into locals before the
/// first write. Constructors taking a Quaternion assume unit norm and never
/// normalize.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix3<T: FloatingPoint = f32> {
    pub data: [T; 9],
}

impl<T> Serialize for Matrix3<T>
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

impl<'de, T> Deserialize<'de> for Matrix3<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <[T; 9]>::deserialize(deserializer)?;
        Ok(Matrix3 { data })
    }
}

impl<T: FloatingPoint> Matrix3<T> {
    /// Construct from a flat column-major array
    pub fn new(data: [T; 9]) -> Self {
        Self { data }
    }

    /// The multiplicative identity
    pub fn identity() -> Self {
        let o = T::one();
        let z = T::zero();
        Self { data: [o, z, z, z, o, z, z, z, o] }
    }

    /// Set the components; `mCR` is column C, row R (column-major order).
    #[allow(clippy::too_many_arguments)]
    pub fn set(&mut self, m00: T, m01: T, m02: T, m10: T, m11: T, m12: T, m20: T, m21: T, m22: T) {
        self.data = [m00, m01, m02, m10, m11, m12, m20, m21, m22];
    }

    /// Copy the upper-left 3x3 block of a 4x4 matrix, verbatim.
    pub fn from_mat4(a: &Matrix4<T>) -> Self {
        let m = &a.data;
        Self {
            data: [m[0], m[1], m[2], m[4], m[5], m[6], m[8], m[9], m[10]],
        }
    }

    /// Embed a 2x2 linear part; last row and column stay identity.
    pub fn from_mat2(a: &Matrix2<T>) -> Self {
        let z = T::zero();
        let m = &a.data;
        Self {
            data: [m[0], m[1], z, m[2], m[3], z, z, z, T::one()],
        }
    }

    /// Identity followed by a 2D translation, as one closed-form init
    pub fn from_translation(v: &Vector2<T>) -> Self {
        let o = T::one();
        let z = T::zero();
        Self { data: [o, z, z, z, o, z, v.x, v.y, o] }
    }

    /// Identity followed by a 2D rotation (CCW positive, right-handed frame)
    pub fn from_rotation(rad: T) -> Self {
        let s = rad.sin();
        let c = rad.cos();
        let o = T::one();
        let z = T::zero();
        Self { data: [c, s, z, -s, c, z, z, z, o] }
    }

    /// Identity followed by a 2D scaling
    pub fn from_scaling(v: &Vector2<T>) -> Self {
        let z = T::zero();
        Self { data: [v.x, z, z, z, v.y, z, z, z, T::one()] }
    }

    /// Rotation matrix from a unit quaternion. Does not normalize; a
    /// non-unit input yields a scaled/skewed result.
    pub fn from_quat(q: &Quaternion<T>) -> Self {
        let x2 = q.x + q.x;
        let y2 = q.y + q.y;
        let z2 = q.z + q.z;

        let xx = q.x * x2;
        let yx = q.y * x2;
        let yy = q.y * y2;
        let zx = q.z * x2;
        let zy = q.z * y2;
        let zz = q.z * z2;
        let wx = q.w * x2;
        let wy = q.w * y2;
        let wz = q.w * z2;

        let o = T::one();
        Self {
            data: [
                o - yy - zz,
                yx + wz,
                zx - wy,
                yx - wz,
                o - xx - zz,
                zy + wx,
                zx + wy,
                zy - wx,
                o - xx - yy,
            ],
        }
    }

    /// Derive the normal-transform matrix (inverse-transpose of the
    /// upper-left 3x3 block of `a`). If that block is singular, `self` is
    /// left holding the copied block, untransposed, and `false` is returned.
    pub fn normal_from_mat4(&mut self, a: &Matrix4<T>) -> bool {
        *self = Self::from_mat4(a);
        if !self.invert() {
            return false;
        }
        self.transpose();
        true
    }

    /// 2D pixel-to-clip projection from viewport dimensions (closed form,
    /// flips Y so pixel space grows downward).
    pub fn projection(width: T, height: T) -> Self {
        let z = T::zero();
        let o = T::one();
        Self {
            data: [T::two() / width, z, z, z, -T::two() / height, z, -o, o, o],
        }
    }

    /// Transpose in place; off-diagonal pairs swapped, no extra buffer.
    pub fn transpose(&mut self) {
        let a01 = self.data[1];
        let a02 = self.data[2];
        let a12 = self.data[5];
        self.data[1] = self.data[3];
        self.data[2] = self.data[6];
        self.data[3] = a01;
        self.data[5] = self.data[7];
        self.data[6] = a02;
        self.data[7] = a12;
    }

    /// Signed determinant via cofactor expansion; pure, no mutation.
    pub fn determinant(&self) -> T {
        let a = &self.data;
        let (a00, a01, a02) = (a[0], a[1], a[2]);
        let (a10, a11, a12) = (a[3], a[4], a[5]);
        let (a20, a21, a22) = (a[6], a[7], a[8]);

        a00 * (a22 * a11 - a12 * a21)
            + a01 * (-a22 * a10 + a12 * a20)
            + a02 * (a21 * a10 - a11 * a20)
    }

    /// Invert in place via the adjugate. If the determinant is exactly zero
    /// the matrix is left unchanged and `false` is returned; callers that
    /// need to detect near-singularity compute `determinant` themselves.
    pub fn invert(&mut self) -> bool {
        let a = &self.data;
        let (a00, a01, a02) = (a[0], a[1], a[2]);
        let (a10, a11, a12) = (a[3], a[4], a[5]);
        let (a20, a21, a22) = (a[6], a[7], a[8]);

        let b01 = a22 * a11 - a12 * a21;
        let b11 = -a22 * a10 + a12 * a20;
        let b21 = a21 * a10 - a11 * a20;

        let det = a00 * b01 + a01 * b11 + a02 * b21;
        if det == T::zero() {
            return false;
        }
        let det = T::one() / det;

        self.data[0] = b01 * det;
        self.data[1] = (-a22 * a01 + a02 * a21) * det;
        self.data[2] = (a12 * a01 - a02 * a11) * det;
        self.data[3] = b11 * det;
        self.data[4] = (a22 * a00 - a02 * a20) * det;
        self.data[5] = (-a12 * a00 + a02 * a10) * det;
        self.data[6] = b21 * det;
        self.data[7] = (-a21 * a00 + a01 * a20) * det;
        self.data[8] = (a11 * a00 - a01 * a10) * det;
        true
    }

    /// Replace with the adjugate (transposed cofactor matrix)
    pub fn adjoint(&mut self) {
        let a = &self.data;
        let (a00, a01, a02) = (a[0], a[1], a[2]);
        let (a10, a11, a12) = (a[3], a[4], a[5]);
        let (a20, a21, a22) = (a[6], a[7], a[8]);

        self.data[0] = a11 * a22 - a12 * a21;
        self.data[1] = a02 * a21 - a01 * a22;
        self.data[2] = a01 * a12 - a02 * a11;
        self.data[3] = a12 * a20 - a10 * a22;
        self.data[4] = a00 * a22 - a02 * a20;
        self.data[5] = a02 * a10 - a00 * a12;
        self.data[6] = a10 * a21 - a11 * a20;
        self.data[7] = a01 * a20 - a00 * a21;
        self.data[8] = a00 * a11 - a01 * a10;
    }

    /// Right-multiply: `self = self * b`
    pub fn multiply(&mut self, b: &Matrix3<T>) {
        let a = &self.data;
        let (a00, a01, a02) = (a[0], a[1], a[2]);
        let (a10, a11, a12) = (a[3], a[4], a[5]);
        let (a20, a21, a22) = (a[6], a[7], a[8]);

        let m = &b.data;
        let (b00, b01, b02) = (m[0], m[1], m[2]);
        let (b10, b11, b12) = (m[3], m[4], m[5]);
        let (b20, b21, b22) = (m[6], m[7], m[8]);

        self.data[0] = b00 * a00 + b01 * a10 + b02 * a20;
        self.data[1] = b00 * a01 + b01 * a11 + b02 * a21;
        self.data[2] = b00 * a02 + b01 * a12 + b02 * a22;
        self.data[3] = b10 * a00 + b11 * a10 + b12 * a20;
        self.data[4] = b10 * a01 + b11 * a11 + b12 * a21;
        self.data[5] = b10 * a02 + b11 * a12 + b12 * a22;
        self.data[6] = b20 * a00 + b21 * a10 + b22 * a20;
        self.data[7] = b20 * a01 + b21 * a11 + b22 * a21;
        self.data[8] = b20 * a02 + b21 * a12 + b22 * a22;
    }

    /// Right-multiply by a 2D translation
    pub fn translate(&mut self, v: &Vector2<T>) {
        let a = &self.data;
        let (a00, a01, a02) = (a[0], a[1], a[2]);
        let (a10, a11, a12) = (a[3], a[4], a[5]);
        let (a20, a21, a22) = (a[6], a[7], a[8]);

        self.data[6] = v.x * a00 + v.y * a10 + a20;
        self.data[7] = v.x * a01 + v.y * a11 + a21;
        self.data[8] = v.x * a02 + v.y * a12 + a22;
    }

    /// Right-multiply by a 2D rotation of `rad` radians (CCW positive)
    pub fn rotate(&mut self, rad: T) {
        let a = &self.data;
        let (a00, a01, a02) = (a[0], a[1], a[2]);
        let (a10, a11, a12) = (a[3], a[4], a[5]);
        let s = rad.sin();
        let c = rad.cos();

        self.data[0] = c * a00 + s * a10;
        self.data[1] = c * a01 + s * a11;
        self.data[2] = c * a02 + s * a12;
        self.data[3] = c * a10 - s * a00;
        self.data[4] = c * a11 - s * a01;
        self.data[5] = c * a12 - s * a02;
    }

    /// Right-multiply by a 2D scaling
    pub fn scale(&mut self, v: &Vector2<T>) {
        self.data[0] = self.data[0] * v.x;
        self.data[1] = self.data[1] * v.x;
        self.data[2] = self.data[2] * v.x;
        self.data[3] = self.data[3] * v.y;
        self.data[4] = self.data[4] * v.y;
        self.data[5] = self.data[5] * v.y;
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
    pub fn add(&mut self, b: &Matrix3<T>) {
        for i in 0..9 {
            self.data[i] = self.data[i] + b.data[i];
        }
    }

    /// Elementwise subtract
    pub fn subtract(&mut self, b: &Matrix3<T>) {
        for i in 0..9 {
            self.data[i] = self.data[i] - b.data[i];
        }
    }

    /// Multiply each element by a scalar
    pub fn multiply_scalar(&mut self, s: T) {
        for i in 0..9 {
            self.data[i] = self.data[i] * s;
        }
    }

    /// `self[i] += b[i] * scale` for each element
    pub fn multiply_scalar_and_add(&mut self, b: &Matrix3<T>, scale: T) {
        for i in 0..9 {
            self.data[i] = self.data[i] + b.data[i] * scale;
        }
    }

    /// Row accessor (row index, then across the columns)
    pub fn row(&self, idx: usize) -> [T; 3] {
        [self.data[idx], self.data[3 + idx], self.data[6 + idx]]
    }

    /// Column accessor
    pub fn column(&self, idx: usize) -> [T; 3] {
        [self.data[idx * 3], self.data[idx * 3 + 1], self.data[idx * 3 + 2]]
    }

    /// Flat column-major component view, ready for upload
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Log the matrix at DEBUG level, row by row.
    pub fn dump(&self) {
        tracing::debug!(matrix = %self, "mat3");
    }
}

impl<T: FloatingPoint> Default for Matrix3<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: FloatingPoint> fmt::Display for Matrix3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..3 {
            let row = self.row(r);
            writeln!(f, "[{} {} {}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
