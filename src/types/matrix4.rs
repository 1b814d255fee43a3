// src/types/matrix4.rs
// 4x4 matrix engine: 3D affine and projective transforms, projection/view
// construction, and decomposition back into translation/scale/rotation.

use core::fmt;
use serde::{Deserialize, Serialize};

use super::quaternion::Quaternion;
use super::traits::FloatingPoint;
use super::vector::Vector3;

/// Matrix4 is a 4x4 matrix stored as a flat column-major array:
/// `data[col * 4 + row]`. An affine transform carries the last row
/// `[0, 0, 0, 1]`; projective transforms are unrestricted.
///
/// In-place operators mutate `self` (the receiving matrix); every element an
/// operation both reads and writes is snapshotted into locals before the
/// first write. Constructors taking a Quaternion assume unit norm and never
/// normalize. Invalid floats pass through untouched; the engine never
/// scrubs NaN or infinity out of its operands.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix4<T: FloatingPoint = f32> {
    pub data: [T; 16],
}

impl<T> Serialize for Matrix4<T>
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

impl<'de, T> Deserialize<'de> for Matrix4<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <[T; 16]>::deserialize(deserializer)?;
        Ok(Matrix4 { data })
    }
}

impl<T: FloatingPoint> Matrix4<T> {
    /// Construct from a flat column-major array
    pub fn new(data: [T; 16]) -> Self {
        Self { data }
    }

    /// The multiplicative identity
    pub fn identity() -> Self {
        let o = T::one();
        let z = T::zero();
        Self {
            data: [o, z, z, z, z, o, z, z, z, z, o, z, z, z, z, o],
        }
    }

    /// Set the components; `mCR` is column C, row R (column-major order).
    #[allow(clippy::too_many_arguments)]
    pub fn set(
        &mut self,
        m00: T, m01: T, m02: T, m03: T,
        m10: T, m11: T, m12: T, m13: T,
        m20: T, m21: T, m22: T, m23: T,
        m30: T, m31: T, m32: T, m33: T,
    ) {
        self.data = [
            m00, m01, m02, m03, m10, m11, m12, m13, m20, m21, m22, m23, m30, m31, m32, m33,
        ];
    }

    /// Identity followed by a translation, as one closed-form init
    pub fn from_translation(v: &Vector3<T>) -> Self {
        let mut m = Self::identity();
        m.data[12] = v.x;
        m.data[13] = v.y;
        m.data[14] = v.z;
        m
    }

    /// Identity followed by a scaling
    pub fn from_scaling(v: &Vector3<T>) -> Self {
        let z = T::zero();
        Self {
            data: [
                v.x, z, z, z, z, v.y, z, z, z, z, v.z, z, z, z, z, T::one(),
            ],
        }
    }

    /// Identity followed by a rotation of `rad` radians around `axis`. The
    /// axis is normalized as part of the construction; a zero-length axis is
    /// the caller's responsibility and produces non-finite entries.
    pub fn from_rotation(rad: T, axis: &Vector3<T>) -> Self {
        let len = T::one() / axis.length();
        let x = axis.x * len;
        let y = axis.y * len;
        let z = axis.z * len;

        let s = rad.sin();
        let c = rad.cos();
        let t = T::one() - c;
        let zero = T::zero();

        Self {
            data: [
                x * x * t + c,
                y * x * t + z * s,
                z * x * t - y * s,
                zero,
                x * y * t - z * s,
                y * y * t + c,
                z * y * t + x * s,
                zero,
                x * z * t + y * s,
                y * z * t - x * s,
                z * z * t + c,
                zero,
                zero,
                zero,
                zero,
                T::one(),
            ],
        }
    }

    /// Closed-form rotation around the X axis
    pub fn from_x_rotation(rad: T) -> Self {
        let s = rad.sin();
        let c = rad.cos();
        let o = T::one();
        let z = T::zero();
        Self {
            data: [o, z, z, z, z, c, s, z, z, -s, c, z, z, z, z, o],
        }
    }

    /// Closed-form rotation around the Y axis
    pub fn from_y_rotation(rad: T) -> Self {
        let s = rad.sin();
        let c = rad.cos();
        let o = T::one();
        let z = T::zero();
        Self {
            data: [c, z, -s, z, z, o, z, z, s, z, c, z, z, z, z, o],
        }
    }

    /// Closed-form rotation around the Z axis
    pub fn from_z_rotation(rad: T) -> Self {
        let s = rad.sin();
        let c = rad.cos();
        let o = T::one();
        let z = T::zero();
        Self {
            data: [c, s, z, z, -s, c, z, z, z, z, o, z, z, z, z, o],
        }
    }

    /// Pure rotation from a unit quaternion; translation column zero, last
    /// row identity.
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
        let z = T::zero();
        Self {
            data: [
                o - yy - zz,
                yx + wz,
                zx - wy,
                z,
                yx - wz,
                o - xx - zz,
                zy + wx,
                z,
                zx + wy,
                zy - wx,
                o - xx - yy,
                z,
                z,
                z,
                z,
                o,
            ],
        }
    }

    /// `T(v) * R(q)` fused into one closed-form expression, no intermediate
    /// matrix multiplication.
    pub fn from_rotation_translation(q: &Quaternion<T>, v: &Vector3<T>) -> Self {
        let mut m = Self::from_quat(q);
        m.data[12] = v.x;
        m.data[13] = v.y;
        m.data[14] = v.z;
        m
    }

    /// `T(v) * R(q) * S(s)` fused: each rotation column scaled by the
    /// matching scale component, translation assigned directly.
    pub fn from_rotation_translation_scale(
        q: &Quaternion<T>,
        v: &Vector3<T>,
        s: &Vector3<T>,
    ) -> Self {
        let mut m = Self::from_quat(q);
        for r in 0..3 {
            m.data[r] = m.data[r] * s.x;
            m.data[4 + r] = m.data[4 + r] * s.y;
            m.data[8 + r] = m.data[8 + r] * s.z;
        }
        m.data[12] = v.x;
        m.data[13] = v.y;
        m.data[14] = v.z;
        m
    }

    /// `T(v) * T(o) * R(q) * S(s) * T(-o)` fused: rotation and scale applied
    /// about the origin point `o`.
    pub fn from_rotation_translation_scale_origin(
        q: &Quaternion<T>,
        v: &Vector3<T>,
        s: &Vector3<T>,
        o: &Vector3<T>,
    ) -> Self {
        let mut m = Self::from_rotation_translation_scale(q, v, s);
        let a = m.data;
        m.data[12] = v.x + o.x - (a[0] * o.x + a[4] * o.y + a[8] * o.z);
        m.data[13] = v.y + o.y - (a[1] * o.x + a[5] * o.y + a[9] * o.z);
        m.data[14] = v.z + o.z - (a[2] * o.x + a[6] * o.y + a[10] * o.z);
        m
    }

    /// Transpose in place; off-diagonal pairs swapped, no extra buffer.
    pub fn transpose(&mut self) {
        let a01 = self.data[1];
        let a02 = self.data[2];
        let a03 = self.data[3];
        let a12 = self.data[6];
        let a13 = self.data[7];
        let a23 = self.data[11];

        self.data[1] = self.data[4];
        self.data[2] = self.data[8];
        self.data[3] = self.data[12];
        self.data[4] = a01;
        self.data[6] = self.data[9];
        self.data[7] = self.data[13];
        self.data[8] = a02;
        self.data[9] = a12;
        self.data[11] = self.data[14];
        self.data[12] = a03;
        self.data[13] = a13;
        self.data[14] = a23;
    }

    /// Signed determinant via cofactor expansion; pure, no mutation.
    pub fn determinant(&self) -> T {
        let a = &self.data;
        let (a00, a01, a02, a03) = (a[0], a[1], a[2], a[3]);
        let (a10, a11, a12, a13) = (a[4], a[5], a[6], a[7]);
        let (a20, a21, a22, a23) = (a[8], a[9], a[10], a[11]);
        let (a30, a31, a32, a33) = (a[12], a[13], a[14], a[15]);

        let b00 = a00 * a11 - a01 * a10;
        let b01 = a00 * a12 - a02 * a10;
        let b02 = a00 * a13 - a03 * a10;
        let b03 = a01 * a12 - a02 * a11;
        let b04 = a01 * a13 - a03 * a11;
        let b05 = a02 * a13 - a03 * a12;
        let b06 = a20 * a31 - a21 * a30;
        let b07 = a20 * a32 - a22 * a30;
        let b08 = a20 * a33 - a23 * a30;
        let b09 = a21 * a32 - a22 * a31;
        let b10 = a21 * a33 - a23 * a31;
        let b11 = a22 * a33 - a23 * a32;

        b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06
    }

    /// Invert in place via the adjugate. If the determinant is exactly zero
    /// the matrix is left unchanged and `false` is returned; callers that
    /// need to detect near-singularity compute `determinant` themselves.
    pub fn invert(&mut self) -> bool {
        let a = &self.data;
        let (a00, a01, a02, a03) = (a[0], a[1], a[2], a[3]);
        let (a10, a11, a12, a13) = (a[4], a[5], a[6], a[7]);
        let (a20, a21, a22, a23) = (a[8], a[9], a[10], a[11]);
        let (a30, a31, a32, a33) = (a[12], a[13], a[14], a[15]);

        let b00 = a00 * a11 - a01 * a10;
        let b01 = a00 * a12 - a02 * a10;
        let b02 = a00 * a13 - a03 * a10;
        let b03 = a01 * a12 - a02 * a11;
        let b04 = a01 * a13 - a03 * a11;
        let b05 = a02 * a13 - a03 * a12;
        let b06 = a20 * a31 - a21 * a30;
        let b07 = a20 * a32 - a22 * a30;
        let b08 = a20 * a33 - a23 * a30;
        let b09 = a21 * a32 - a22 * a31;
        let b10 = a21 * a33 - a23 * a31;
        let b11 = a22 * a33 - a23 * a32;

        let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
        if det == T::zero() {
            return false;
        }
        let det = T::one() / det;

        self.data[0] = (a11 * b11 - a12 * b10 + a13 * b09) * det;
        self.data[1] = (a02 * b10 - a01 * b11 - a03 * b09) * det;
        self.data[2] = (a31 * b05 - a32 * b04 + a33 * b03) * det;
        self.data[3] = (a22 * b04 - a21 * b05 - a23 * b03) * det;
        self.data[4] = (a12 * b08 - a10 * b11 - a13 * b07) * det;
        self.data[5] = (a00 * b11 - a02 * b08 + a03 * b07) * det;
        self.data[6] = (a32 * b02 - a30 * b05 - a33 * b01) * det;
        self.data[7] = (a20 * b05 - a22 * b02 + a23 * b01) * det;
        self.data[8] = (a10 * b10 - a11 * b08 + a13 * b06) * det;
        self.data[9] = (a01 * b08 - a00 * b10 - a03 * b06) * det;
        self.data[10] = (a30 * b04 - a31 * b02 + a33 * b00) * det;
        self.data[11] = (a21 * b02 - a20 * b04 - a23 * b00) * det;
        self.data[12] = (a11 * b07 - a10 * b09 - a12 * b06) * det;
        self.data[13] = (a00 * b09 - a01 * b07 + a02 * b06) * det;
        self.data[14] = (a31 * b01 - a30 * b03 - a32 * b00) * det;
        self.data[15] = (a20 * b03 - a21 * b01 + a22 * b00) * det;
        true
    }

    /// Replace with the adjugate (transposed signed cofactor matrix)
    pub fn adjoint(&mut self) {
        let a = &self.data;
        let (a00, a01, a02, a03) = (a[0], a[1], a[2], a[3]);
        let (a10, a11, a12, a13) = (a[4], a[5], a[6], a[7]);
        let (a20, a21, a22, a23) = (a[8], a[9], a[10], a[11]);
        let (a30, a31, a32, a33) = (a[12], a[13], a[14], a[15]);

        let b00 = a00 * a11 - a01 * a10;
        let b01 = a00 * a12 - a02 * a10;
        let b02 = a00 * a13 - a03 * a10;
        let b03 = a01 * a12 - a02 * a11;
        let b04 = a01 * a13 - a03 * a11;
        let b05 = a02 * a13 - a03 * a12;
        let b06 = a20 * a31 - a21 * a30;
        let b07 = a20 * a32 - a22 * a30;
        let b08 = a20 * a33 - a23 * a30;
        let b09 = a21 * a32 - a22 * a31;
        let b10 = a21 * a33 - a23 * a31;
        let b11 = a22 * a33 - a23 * a32;

        self.data[0] = a11 * b11 - a12 * b10 + a13 * b09;
        self.data[1] = a02 * b10 - a01 * b11 - a03 * b09;
        self.data[2] = a31 * b05 - a32 * b04 + a33 * b03;
        self.data[3] = a22 * b04 - a21 * b05 - a23 * b03;
        self.data[4] = a12 * b08 - a10 * b11 - a13 * b07;
        self.data[5] = a00 * b11 - a02 * b08 + a03 * b07;
        self.data[6] = a32 * b02 - a30 * b05 - a33 * b01;
        self.data[7] = a20 * b05 - a22 * b02 + a23 * b01;
        self.data[8] = a10 * b10 - a11 * b08 + a13 * b06;
        self.data[9] = a01 * b08 - a00 * b10 - a03 * b06;
        self.data[10] = a30 * b04 - a31 * b02 + a33 * b00;
        self.data[11] = a21 * b02 - a20 * b04 - a23 * b00;
        self.data[12] = a11 * b07 - a10 * b09 - a12 * b06;
        self.data[13] = a00 * b09 - a01 * b07 + a02 * b06;
        self.data[14] = a31 * b01 - a30 * b03 - a32 * b00;
        self.data[15] = a20 * b03 - a21 * b01 + a22 * b00;
    }

    /// Right-multiply: `self = self * b`
    pub fn multiply(&mut self, b: &Matrix4<T>) {
        let a = self.data;

        for col in 0..4 {
            let (b0, b1, b2, b3) = (
                b.data[col * 4],
                b.data[col * 4 + 1],
                b.data[col * 4 + 2],
                b.data[col * 4 + 3],
            );
            for row in 0..4 {
                self.data[col * 4 + row] =
                    b0 * a[row] + b1 * a[4 + row] + b2 * a[8 + row] + b3 * a[12 + row];
            }
        }
    }

    /// Right-multiply by a translation
    pub fn translate(&mut self, v: &Vector3<T>) {
        self.translate_xyz(v.x, v.y, v.z);
    }

    /// Right-multiply by a translation given as three scalars
    pub fn translate_xyz(&mut self, x: T, y: T, z: T) {
        let a = self.data;
        self.data[12] = a[0] * x + a[4] * y + a[8] * z + a[12];
        self.data[13] = a[1] * x + a[5] * y + a[9] * z + a[13];
        self.data[14] = a[2] * x + a[6] * y + a[10] * z + a[14];
        self.data[15] = a[3] * x + a[7] * y + a[11] * z + a[15];
    }

    /// Right-multiply by a scaling
    pub fn scale(&mut self, v: &Vector3<T>) {
        for r in 0..4 {
            self.data[r] = self.data[r] * v.x;
            self.data[4 + r] = self.data[4 + r] * v.y;
            self.data[8 + r] = self.data[8 + r] * v.z;
        }
    }

    /// Right-multiply by a rotation of `rad` radians around `axis`
    /// (Rodrigues construction). The axis is normalized as part of the
    /// construction; a zero-length axis is the caller's responsibility and
    /// produces non-finite entries.
    pub fn rotate(&mut self, rad: T, axis: &Vector3<T>) {
        let len = T::one() / axis.length();
        let x = axis.x * len;
        let y = axis.y * len;
        let z = axis.z * len;

        let s = rad.sin();
        let c = rad.cos();
        let t = T::one() - c;

        let a = &self.data;
        let (a00, a01, a02, a03) = (a[0], a[1], a[2], a[3]);
        let (a10, a11, a12, a13) = (a[4], a[5], a[6], a[7]);
        let (a20, a21, a22, a23) = (a[8], a[9], a[10], a[11]);

        let b00 = x * x * t + c;
        let b01 = y * x * t + z * s;
        let b02 = z * x * t - y * s;
        let b10 = x * y * t - z * s;
        let b11 = y * y * t + c;
        let b12 = z * y * t + x * s;
        let b20 = x * z * t + y * s;
        let b21 = y * z * t - x * s;
        let b22 = z * z * t + c;

        self.data[0] = a00 * b00 + a10 * b01 + a20 * b02;
        self.data[1] = a01 * b00 + a11 * b01 + a21 * b02;
        self.data[2] = a02 * b00 + a12 * b01 + a22 * b02;
        self.data[3] = a03 * b00 + a13 * b01 + a23 * b02;
        self.data[4] = a00 * b10 + a10 * b11 + a20 * b12;
        self.data[5] = a01 * b10 + a11 * b11 + a21 * b12;
        self.data[6] = a02 * b10 + a12 * b11 + a22 * b12;
        self.data[7] = a03 * b10 + a13 * b11 + a23 * b12;
        self.data[8] = a00 * b20 + a10 * b21 + a20 * b22;
        self.data[9] = a01 * b20 + a11 * b21 + a21 * b22;
        self.data[10] = a02 * b20 + a12 * b21 + a22 * b22;
        self.data[11] = a03 * b20 + a13 * b21 + a23 * b22;
    }

    /// Right-multiply by a rotation around the X axis
    pub fn rotate_x(&mut self, rad: T) {
        let s = rad.sin();
        let c = rad.cos();

        let a = &self.data;
        let (a10, a11, a12, a13) = (a[4], a[5], a[6], a[7]);
        let (a20, a21, a22, a23) = (a[8], a[9], a[10], a[11]);

        self.data[4] = a10 * c + a20 * s;
        self.data[5] = a11 * c + a21 * s;
        self.data[6] = a12 * c + a22 * s;
        self.data[7] = a13 * c + a23 * s;
        self.data[8] = a20 * c - a10 * s;
        self.data[9] = a21 * c - a11 * s;
        self.data[10] = a22 * c - a12 * s;
        self.data[11] = a23 * c - a13 * s;
    }

    /// Right-multiply by a rotation around the Y axis
    pub fn rotate_y(&mut self, rad: T) {
        let s = rad.sin();
        let c = rad.cos();

        let a = &self.data;
        let (a00, a01, a02, a03) = (a[0], a[1], a[2], a[3]);
        let (a20, a21, a22, a23) = (a[8], a[9], a[10], a[11]);

        self.data[0] = a00 * c - a20 * s;
        self.data[1] = a01 * c - a21 * s;
        self.data[2] = a02 * c - a22 * s;
        self.data[3] = a03 * c - a23 * s;
        self.data[8] = a00 * s + a20 * c;
        self.data[9] = a01 * s + a21 * c;
        self.data[10] = a02 * s + a22 * c;
        self.data[11] = a03 * s + a23 * c;
    }

    /// Right-multiply by a rotation around the Z axis
    pub fn rotate_z(&mut self, rad: T) {
        let s = rad.sin();
        let c = rad.cos();

        let a = &self.data;
        let (a00, a01, a02, a03) = (a[0], a[1], a[2], a[3]);
        let (a10, a11, a12, a13) = (a[4], a[5], a[6], a[7]);

        self.data[0] = a00 * c + a10 * s;
        self.data[1] = a01 * c + a11 * s;
        self.data[2] = a02 * c + a12 * s;
        self.data[3] = a03 * c + a13 * s;
        self.data[4] = a10 * c - a00 * s;
        self.data[5] = a11 * c - a01 * s;
        self.data[6] = a12 * c - a02 * s;
        self.data[7] = a13 * c - a03 * s;
    }

    /// Extract the translation column, verbatim. Valid for any affine
    /// matrix regardless of how it was built.
    pub fn translation(&self) -> Vector3<T> {
        Vector3::new(self.data[12], self.data[13], self.data[14])
    }

    /// Extract the per-axis scale as the length of each column of the
    /// upper-left 3x3 block. Correct only when that block is a rotation
    /// scaled by positive factors (no shear; sign is unrecoverable from
    /// column lengths).
    pub fn scaling(&self) -> Vector3<T> {
        let a = &self.data;
        Vector3::new(
            (a[0] * a[0] + a[1] * a[1] + a[2] * a[2]).sqrt(),
            (a[4] * a[4] + a[5] * a[5] + a[6] * a[6]).sqrt(),
            (a[8] * a[8] + a[9] * a[9] + a[10] * a[10]).sqrt(),
        )
    }

    /// Extract the rotation as a quaternion: each column of the 3x3 block is
    /// divided by its scale, then the orthonormal result is converted with
    /// the trace-based algorithm, branching on the largest diagonal element
    /// for stability. The designed inverse of
    /// `from_rotation_translation_scale` for unit q and positive s; answers
    /// match the supplied quaternion up to sign.
    pub fn rotation(&self) -> Quaternion<T> {
        let scale = self.scaling();
        let is1 = T::one() / scale.x;
        let is2 = T::one() / scale.y;
        let is3 = T::one() / scale.z;

        let a = &self.data;
        let sm11 = a[0] * is1;
        let sm12 = a[1] * is1;
        let sm13 = a[2] * is1;
        let sm21 = a[4] * is2;
        let sm22 = a[5] * is2;
        let sm23 = a[6] * is2;
        let sm31 = a[8] * is3;
        let sm32 = a[9] * is3;
        let sm33 = a[10] * is3;

        let trace = sm11 + sm22 + sm33;
        let quarter = T::half() * T::half();

        if trace > T::zero() {
            let s = (trace + T::one()).sqrt() * T::two();
            Quaternion::new(
                (sm23 - sm32) / s,
                (sm31 - sm13) / s,
                (sm12 - sm21) / s,
                quarter * s,
            )
        } else if sm11 > sm22 && sm11 > sm33 {
            let s = (T::one() + sm11 - sm22 - sm33).sqrt() * T::two();
            Quaternion::new(
                quarter * s,
                (sm12 + sm21) / s,
                (sm31 + sm13) / s,
                (sm23 - sm32) / s,
            )
        } else if sm22 > sm33 {
            let s = (T::one() + sm22 - sm11 - sm33).sqrt() * T::two();
            Quaternion::new(
                (sm12 + sm21) / s,
                quarter * s,
                (sm23 + sm32) / s,
                (sm31 - sm13) / s,
            )
        } else {
            let s = (T::one() + sm33 - sm11 - sm22).sqrt() * T::two();
            Quaternion::new(
                (sm31 + sm13) / s,
                (sm23 + sm32) / s,
                quarter * s,
                (sm12 - sm21) / s,
            )
        }
    }

    /// Perspective frustum from its six plane bounds, OpenGL-style clip
    /// convention (z in [-1, 1], looking down -Z).
    pub fn frustum(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let rl = T::one() / (right - left);
        let tb = T::one() / (top - bottom);
        let nf = T::one() / (near - far);
        let z = T::zero();
        let n2 = near * T::two();

        Self {
            data: [
                n2 * rl,
                z,
                z,
                z,
                z,
                n2 * tb,
                z,
                z,
                (right + left) * rl,
                (top + bottom) * tb,
                (far + near) * nf,
                -T::one(),
                z,
                z,
                far * near * T::two() * nf,
                z,
            ],
        }
    }

    /// Perspective projection from vertical field of view, aspect ratio and
    /// near/far planes. `None`, a zero, or a non-finite far plane selects
    /// the limiting form as far approaches infinity; no far-dependent term
    /// is ever divided by a zero or near-infinite quantity.
    pub fn perspective(fovy: T, aspect: T, near: T, far: Option<T>) -> Self {
        let f = T::one() / (fovy * T::half()).tan();
        let z = T::zero();

        let mut m = Self {
            data: [
                f / aspect,
                z,
                z,
                z,
                z,
                f,
                z,
                z,
                z,
                z,
                -T::one(),
                -T::one(),
                z,
                z,
                -T::two() * near,
                z,
            ],
        };

        if let Some(far) = far {
            if far != T::zero() && far.is_finite() {
                let nf = T::one() / (near - far);
                m.data[10] = (far + near) * nf;
                m.data[14] = T::two() * far * near * nf;
            }
        }
        m
    }

    /// Orthographic projection from its six plane bounds
    pub fn ortho(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let lr = T::one() / (left - right);
        let bt = T::one() / (bottom - top);
        let nf = T::one() / (near - far);
        let z = T::zero();

        Self {
            data: [
                -T::two() * lr,
                z,
                z,
                z,
                z,
                -T::two() * bt,
                z,
                z,
                z,
                z,
                T::two() * nf,
                z,
                (left + right) * lr,
                (top + bottom) * bt,
                (far + near) * nf,
                T::one(),
            ],
        }
    }

    /// View matrix looking from `eye` toward `center` with the given up
    /// direction (right-handed basis, camera looking down -Z). When eye and
    /// center coincide within the degenerate-input threshold the identity is
    /// returned instead of dividing by a near-zero length.
    pub fn look_at(eye: &Vector3<T>, center: &Vector3<T>, up: &Vector3<T>) -> Self {
        let eps = T::epsilon();
        if (eye.x - center.x).abs() < eps
            && (eye.y - center.y).abs() < eps
            && (eye.z - center.z).abs() < eps
        {
            return Self::identity();
        }

        let fwd = (*eye - *center).normalize();
        let right = up.cross(&fwd).normalize();
        let true_up = fwd.cross(&right);

        let z = T::zero();
        Self {
            data: [
                right.x,
                true_up.x,
                fwd.x,
                z,
                right.y,
                true_up.y,
                fwd.y,
                z,
                right.z,
                true_up.z,
                fwd.z,
                z,
                -right.dot(eye),
                -true_up.dot(eye),
                -fwd.dot(eye),
                T::one(),
            ],
        }
    }

    /// Orientation matrix that makes an object at `eye` face `target`: the
    /// opposite forward convention from `look_at`, and the matrix carries
    /// `eye` as its translation instead of the inverted view translation.
    pub fn target_to(eye: &Vector3<T>, target: &Vector3<T>, up: &Vector3<T>) -> Self {
        let fwd = (*eye - *target).normalize();
        let right = up.cross(&fwd).normalize();
        let true_up = fwd.cross(&right);

        let z = T::zero();
        Self {
            data: [
                right.x,
                right.y,
                right.z,
                z,
                true_up.x,
                true_up.y,
                true_up.z,
                z,
                fwd.x,
                fwd.y,
                fwd.z,
                z,
                eye.x,
                eye.y,
                eye.z,
                T::one(),
            ],
        }
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
    pub fn add(&mut self, b: &Matrix4<T>) {
        for i in 0..16 {
            self.data[i] = self.data[i] + b.data[i];
        }
    }

    /// Elementwise subtract
    pub fn subtract(&mut self, b: &Matrix4<T>) {
        for i in 0..16 {
            self.data[i] = self.data[i] - b.data[i];
        }
    }

    /// Multiply each element by a scalar
    pub fn multiply_scalar(&mut self, s: T) {
        for i in 0..16 {
            self.data[i] = self.data[i] * s;
        }
    }

    /// `self[i] += b[i] * scale` for each element
    pub fn multiply_scalar_and_add(&mut self, b: &Matrix4<T>, scale: T) {
        for i in 0..16 {
            self.data[i] = self.data[i] + b.data[i] * scale;
        }
    }

    /// Row accessor (row index, then across the columns)
    pub fn row(&self, idx: usize) -> [T; 4] {
        [
            self.data[idx],
            self.data[4 + idx],
            self.data[8 + idx],
            self.data[12 + idx],
        ]
    }

    /// Column accessor
    pub fn column(&self, idx: usize) -> [T; 4] {
        [
            self.data[idx * 4],
            self.data[idx * 4 + 1],
            self.data[idx * 4 + 2],
            self.data[idx * 4 + 3],
        ]
    }

    /// Flat column-major component view, ready for upload
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Log the matrix at DEBUG level, row by row.
    pub fn dump(&self) {
        tracing::debug!(matrix = %self, "mat4");
    }
}

impl<T: FloatingPoint> Default for Matrix4<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: FloatingPoint> fmt::Display for Matrix4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..4 {
            let row = self.row(r);
            writeln!(f, "[{} {} {} {}]", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &Matrix4<f32>, b: &Matrix4<f32>, tol: f32) {
        for i in 0..16 {
            assert!(
                (a.data[i] - b.data[i]).abs() < tol,
                "element {} differs: {} vs {}",
                i,
                a.data[i],
                b.data[i]
            );
        }
    }

    fn sample_affine() -> Matrix4<f32> {
        let q = Quaternion::from_axis_angle(&Vector3::new(0.0f32, 1.0, 0.0), 0.7);
        Matrix4::from_rotation_translation_scale(
            &q,
            &Vector3::new(1.0, -2.0, 3.0),
            &Vector3::new(2.0, 3.0, 0.5),
        )
    }

    #[test]
    fn test_identity_determinant() {
        assert_eq!(Matrix4::<f32>::identity().determinant(), 1.0);
        assert_eq!(Matrix4::<f64>::identity().determinant(), 1.0);
    }

    #[test]
    fn test_transpose_involution_exact() {
        let m = sample_affine();
        let mut t = m;
        t.transpose();
        t.transpose();
        assert_eq!(t, m);
    }

    #[test]
    fn test_invert_roundtrip() {
        let m = sample_affine();

        let mut inv = m;
        assert!(inv.invert());

        let mut prod = m;
        prod.multiply(&inv);
        assert_close(&prod, &Matrix4::identity(), 1e-5);

        let mut twice = inv;
        assert!(twice.invert());
        assert_close(&twice, &m, 1e-4);
    }

    #[test]
    fn test_singular_invert_is_noop() {
        let mut m = Matrix4::<f32>::from_scaling(&Vector3::new(1.0, 0.0, 1.0));
        let before = m;
        assert!(!m.invert());
        assert_eq!(m, before);
    }

    #[test]
    fn test_adjoint_times_matrix_is_det_identity() {
        let m = sample_affine();
        let det = m.determinant();

        let mut adj = m;
        adj.adjoint();
        let mut prod = m;
        prod.multiply(&adj);

        let mut expected = Matrix4::<f32>::identity();
        expected.multiply_scalar(det);
        assert_close(&prod, &expected, 1e-3);
    }

    #[test]
    fn test_inplace_transforms_match_constructors() {
        let v = Vector3::new(1.0f32, 2.0, 3.0);
        let mut m = Matrix4::<f32>::identity();
        m.translate(&v);
        assert_eq!(m, Matrix4::from_translation(&v));

        let mut t = Matrix4::<f32>::identity();
        t.translate_xyz(1.0, 2.0, 3.0);
        assert_eq!(t, m);

        let mut s = Matrix4::<f32>::identity();
        s.scale(&v);
        assert_eq!(s, Matrix4::from_scaling(&v));

        let axis = Vector3::new(1.0f32, 2.0, -1.0);
        let mut r = Matrix4::<f32>::identity();
        r.rotate(0.9, &axis);
        assert_close(&r, &Matrix4::from_rotation(0.9, &axis), 1e-6);

        let mut rx = Matrix4::<f32>::identity();
        rx.rotate_x(0.4);
        assert_close(&rx, &Matrix4::from_x_rotation(0.4), 1e-6);

        let mut ry = Matrix4::<f32>::identity();
        ry.rotate_y(0.4);
        assert_close(&ry, &Matrix4::from_y_rotation(0.4), 1e-6);

        let mut rz = Matrix4::<f32>::identity();
        rz.rotate_z(0.4);
        assert_close(&rz, &Matrix4::from_z_rotation(0.4), 1e-6);
    }

    #[test]
    fn test_axis_rotate_matches_general_rotate() {
        let mut general = Matrix4::<f32>::identity();
        general.rotate(0.6, &Vector3::new(0.0, 0.0, 1.0));
        assert_close(&general, &Matrix4::from_z_rotation(0.6), 1e-6);
    }

    #[test]
    fn test_from_rotation_translation_equals_composition() {
        let q = Quaternion::from_axis_angle(&Vector3::new(1.0f32, 0.0, 0.0), 1.1);
        let v = Vector3::new(4.0f32, 5.0, 6.0);

        let fused = Matrix4::from_rotation_translation(&q, &v);

        let mut composed = Matrix4::from_translation(&v);
        composed.multiply(&Matrix4::from_quat(&q));
        assert_close(&fused, &composed, 1e-6);
    }

    #[test]
    fn test_from_rotation_translation_scale_equals_composition() {
        let q = Quaternion::from_axis_angle(&Vector3::new(0.0f32, 1.0, 0.0), -0.8);
        let v = Vector3::new(1.0f32, 2.0, 3.0);
        let s = Vector3::new(2.0f32, 0.5, 3.0);

        let fused = Matrix4::from_rotation_translation_scale(&q, &v, &s);

        let mut composed = Matrix4::from_translation(&v);
        composed.multiply(&Matrix4::from_quat(&q));
        composed.scale(&s);
        assert_close(&fused, &composed, 1e-6);
    }

    #[test]
    fn test_from_rotation_translation_scale_origin_equals_composition() {
        let q = Quaternion::from_axis_angle(&Vector3::new(0.0f32, 0.0, 1.0), 0.5);
        let v = Vector3::new(1.0f32, 1.0, 0.0);
        let s = Vector3::new(2.0f32, 2.0, 2.0);
        let o = Vector3::new(3.0f32, -1.0, 2.0);

        let fused = Matrix4::from_rotation_translation_scale_origin(&q, &v, &s, &o);

        let mut composed = Matrix4::from_translation(&v);
        composed.translate(&o);
        composed.multiply(&Matrix4::from_quat(&q));
        composed.scale(&s);
        composed.translate(&-o);
        assert_close(&fused, &composed, 1e-5);
    }

    #[test]
    fn test_decomposition_roundtrip() {
        let q = Quaternion::from_axis_angle(&Vector3::new(0.0f32, 1.0, 0.0), 0.7);
        let v = Vector3::new(1.0f32, -2.0, 3.0);
        let s = Vector3::new(2.0f32, 3.0, 0.5);
        let m = Matrix4::from_rotation_translation_scale(&q, &v, &s);

        // Translation is recovered exactly.
        assert_eq!(m.translation(), v);

        let rs = m.scaling();
        assert!((rs.x - s.x).abs() < 1e-5);
        assert!((rs.y - s.y).abs() < 1e-5);
        assert!((rs.z - s.z).abs() < 1e-5);

        // Rotation matches up to sign: q and -q are the same rotation.
        let rq = m.rotation();
        let dot = rq.dot(&q).abs();
        assert!((dot - 1.0).abs() < 1e-5, "quaternion mismatch, |dot| = {}", dot);
    }

    #[test]
    fn test_rotation_trace_branches() {
        // Near-pi rotations about each principal axis exercise the three
        // non-trace branches of the quaternion extraction.
        for axis in [
            Vector3::new(1.0f32, 0.0, 0.0),
            Vector3::new(0.0f32, 1.0, 0.0),
            Vector3::new(0.0f32, 0.0, 1.0),
        ] {
            let q = Quaternion::from_axis_angle(&axis, 3.1);
            let m = Matrix4::from_quat(&q);
            let rq = m.rotation();
            let dot = rq.dot(&q).abs();
            assert!((dot - 1.0).abs() < 1e-4, "axis {:?}: |dot| = {}", axis, dot);
        }
    }

    #[test]
    fn test_frustum_matches_perspective() {
        let fovy = 1.0f32;
        let near = 0.5f32;
        let far = 100.0f32;
        let aspect = 1.5f32;

        let top = near * (fovy / 2.0).tan();
        let right = top * aspect;
        let fr = Matrix4::frustum(-right, right, -top, top, near, far);
        let p = Matrix4::perspective(fovy, aspect, near, Some(far));
        assert_close(&fr, &p, 1e-5);
    }

    #[test]
    fn test_perspective_infinite_far_is_limit() {
        let fovy = 0.9f32;
        let aspect = 1.25f32;
        let near = 0.1f32;

        for inf in [
            Matrix4::perspective(fovy, aspect, near, None),
            Matrix4::perspective(fovy, aspect, near, Some(0.0)),
            Matrix4::perspective(fovy, aspect, near, Some(f32::INFINITY)),
        ] {
            for &e in inf.as_slice() {
                assert!(e.is_finite());
            }
            let limit = Matrix4::perspective(fovy, aspect, near, Some(1e7));
            assert_close(&inf, &limit, 1e-4);
        }
    }

    #[test]
    fn test_ortho_maps_bounds() {
        use crate::types::vector::Vector3;
        let m = Matrix4::ortho(-2.0f32, 2.0, -1.0, 1.0, 0.1, 10.0);
        let p = Vector3::new(2.0f32, 1.0, -10.0).transform_mat4(&m);
        assert!((p.x - 1.0).abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);
        assert!((p.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_look_at_camera_space() {
        let view = Matrix4::look_at(
            &Vector3::new(0.0f32, 0.0, 5.0),
            &Vector3::new(0.0f32, 0.0, 0.0),
            &Vector3::new(0.0f32, 1.0, 0.0),
        );
        let p = Vector3::new(0.0f32, 0.0, 0.0).transform_mat4(&view);
        assert!(p.x.abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
        assert!((p.z + 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_look_at_degenerate_returns_identity() {
        let eye = Vector3::new(1.0f32, 2.0, 3.0);
        let view = Matrix4::look_at(&eye, &eye, &Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(view, Matrix4::identity());
    }

    #[test]
    fn test_target_to_carries_eye_translation() {
        let eye = Vector3::new(0.0f32, 0.0, 5.0);
        let m = Matrix4::target_to(
            &eye,
            &Vector3::new(0.0f32, 0.0, 0.0),
            &Vector3::new(0.0f32, 1.0, 0.0),
        );
        assert_eq!(m.translation(), eye);

        // Facing down -Z from +5: the matrix maps object-local -Z forward
        // toward the target, so a point ahead of the object lands nearer.
        let ahead = Vector3::new(0.0f32, 0.0, -1.0).transform_mat4(&m);
        assert!((ahead.z - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_look_at_target_to_conventions_differ() {
        let eye = Vector3::new(0.0f32, 0.0, 5.0);
        let center = Vector3::new(0.0f32, 0.0, 0.0);
        let up = Vector3::new(0.0f32, 1.0, 0.0);

        let mut view = Matrix4::look_at(&eye, &center, &up);
        let target = Matrix4::target_to(&eye, &center, &up);
        // target_to is the inverse of the view matrix for the same basis.
        assert!(view.invert());
        assert_close(&view, &target, 1e-6);
    }

    #[test]
    fn test_frob_and_elementwise_ops() {
        let id = Matrix4::<f32>::identity();
        assert!((id.frob() - 2.0).abs() < 1e-6);

        let mut a = Matrix4::new([1.0f32; 16]);
        let b = Matrix4::new([2.0f32; 16]);
        a.multiply_scalar_and_add(&b, 0.5);
        assert_eq!(a.data, [2.0; 16]);
        a.subtract(&b);
        assert_eq!(a.data, [0.0; 16]);
        a.add(&b);
        assert_eq!(a.data, [2.0; 16]);
        a.multiply_scalar(0.5);
        assert_eq!(a.data, [1.0; 16]);
    }

    #[test]
    fn test_set_row_column_accessors() {
        let mut m = Matrix4::<f32>::identity();
        m.set(
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0,
        );
        assert_eq!(m.column(0), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.row(0), [1.0, 5.0, 9.0, 13.0]);
        assert_eq!(m.as_slice().len(), 16);
    }

    #[test]
    fn test_bincode_roundtrip() {
        use bincode;
        let m = sample_affine();
        let encoded = bincode::serialize(&m).unwrap();
        let decoded: Matrix4<f32> = bincode::deserialize(&encoded).unwrap();
        assert_eq!(m, decoded);
    }
}
