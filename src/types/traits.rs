// src/types/traits.rs
// FloatingPoint scalar abstraction shared by every vector/matrix type.

/// FloatingPoint is the scalar abstraction for the numeric types.
///
/// Note: We require Copy, PartialOrd and the basic arithmetic ops on Self,
/// plus the transcendental functions the transform engines need (sqrt for
/// lengths and norms, sin/cos/tan for rotations and projections, acos for
/// angles between vectors).
pub trait FloatingPoint:
Copy + PartialOrd
+ core::fmt::Debug
+ core::fmt::Display
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
+ core::ops::Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn two() -> Self;
    fn half() -> Self;

    /// Degenerate-input threshold used by the view-matrix constructors
    /// (1e-6 for both precisions). Element equality stays exact; this is
    /// never used to compare matrices.
    fn epsilon() -> Self;

    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn acos(self) -> Self;
    fn abs(self) -> Self;
    fn is_finite(self) -> bool;
}

impl FloatingPoint for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn two() -> Self { 2.0 }
    fn half() -> Self { 0.5 }
    fn epsilon() -> Self { 1e-6 }
    fn sqrt(self) -> Self { self.sqrt() }
    fn sin(self) -> Self { self.sin() }
    fn cos(self) -> Self { self.cos() }
    fn tan(self) -> Self { self.tan() }
    fn acos(self) -> Self { self.acos() }
    fn abs(self) -> Self { self.abs() }
    fn is_finite(self) -> bool { self.is_finite() }
}

impl FloatingPoint for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn two() -> Self { 2.0 }
    fn half() -> Self { 0.5 }
    fn epsilon() -> Self { 1e-6 }
    fn sqrt(self) -> Self { self.sqrt() }
    fn sin(self) -> Self { self.sin() }
    fn cos(self) -> Self { self.cos() }
    fn tan(self) -> Self { self.tan() }
    fn acos(self) -> Self { self.acos() }
    fn abs(self) -> Self { self.abs() }
    fn is_finite(self) -> bool { self.is_finite() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe<T: FloatingPoint>() -> T {
        (T::one() + T::one()).sqrt()
    }

    #[test]
    fn test_constants_and_ops_f32() {
        assert_eq!(f32::zero(), 0.0);
        assert_eq!(f32::one(), 1.0);
        assert_eq!(f32::two(), 2.0);
        assert_eq!(f32::half(), 0.5);
        assert!((probe::<f32>() - 2.0f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_constants_and_ops_f64() {
        assert_eq!(f64::zero(), 0.0);
        assert_eq!(f64::one(), 1.0);
        assert!((probe::<f64>() - 2.0f64.sqrt()).abs() < 1e-12);
        assert!(f64::one().is_finite());
        assert!(!(f64::one() / f64::zero()).is_finite());
    }
}
