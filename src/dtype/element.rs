//! Real trait for the floating-point widths the kernels run at

use super::{DType, F64x2};
use bytemuck::{Pod, Zeroable};
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Trait for real number types a special-function kernel can be
/// instantiated at.
///
/// A kernel written against `Real` is monomorphized per width, so every
/// intermediate product stays in the caller's precision.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - plain values, shareable across threads
/// - `Pod + Zeroable` - safe memory transmutation (bytemuck)
/// - `Zero + One` - additive and multiplicative identities (num-traits)
/// - `Add + Sub + Mul + Div + Neg` - arithmetic operations (Output = Self)
/// - `PartialOrd` - comparison for domain checks
pub trait Real:
    Copy
    + Send
    + Sync
    + Pod
    + Zeroable
    + 'static
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + PartialOrd
    + fmt::Debug
    + fmt::Display
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// One past the largest binary exponent, as in `f64::MAX_EXP`
    const MAX_EXP: i32;

    /// Convert a non-negative index to this type, rounding if it does not fit
    fn from_u32(v: u32) -> Self;

    /// Convert from f64, rounding to nearest
    fn from_f64(v: f64) -> Self;

    /// Convert to f64, rounding to nearest
    fn to_f64(self) -> f64;

    /// Square root, NaN for negative input
    fn sqrt(self) -> Self;

    /// Absolute value
    fn abs(self) -> Self;

    /// True unless the value is infinite or NaN
    fn is_finite(self) -> bool;

    /// Simultaneous sine and cosine
    fn sin_cos(self) -> (Self, Self);

    /// π at this precision
    fn pi() -> Self;

    /// Distance from 1.0 to the next representable value
    fn epsilon() -> Self;

    /// 2^e, exact for |e| < `MAX_EXP`
    #[inline]
    fn exp2i(e: i32) -> Self {
        Self::from_f64(2f64.powi(e))
    }
}

impl Real for f64 {
    const DTYPE: DType = DType::F64;
    const MAX_EXP: i32 = f64::MAX_EXP;

    #[inline]
    fn from_u32(v: u32) -> Self {
        f64::from(v)
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    #[inline]
    fn sin_cos(self) -> (Self, Self) {
        f64::sin_cos(self)
    }

    #[inline]
    fn pi() -> Self {
        std::f64::consts::PI
    }

    #[inline]
    fn epsilon() -> Self {
        f64::EPSILON
    }
}

impl Real for f32 {
    const DTYPE: DType = DType::F32;
    const MAX_EXP: i32 = f32::MAX_EXP;

    #[inline]
    fn from_u32(v: u32) -> Self {
        v as f32
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }

    #[inline]
    fn abs(self) -> Self {
        f32::abs(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }

    #[inline]
    fn sin_cos(self) -> (Self, Self) {
        f32::sin_cos(self)
    }

    #[inline]
    fn pi() -> Self {
        std::f32::consts::PI
    }

    #[inline]
    fn epsilon() -> Self {
        f32::EPSILON
    }
}

impl Real for F64x2 {
    const DTYPE: DType = DType::F64x2;
    const MAX_EXP: i32 = f64::MAX_EXP;

    #[inline]
    fn from_u32(v: u32) -> Self {
        F64x2::from(v)
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        F64x2::from(v)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        F64x2::to_f64(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        F64x2::sqrt(self)
    }

    #[inline]
    fn abs(self) -> Self {
        F64x2::abs(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        F64x2::is_finite(self)
    }

    #[inline]
    fn sin_cos(self) -> (Self, Self) {
        F64x2::sin_cos(self)
    }

    #[inline]
    fn pi() -> Self {
        F64x2::PI
    }

    #[inline]
    fn epsilon() -> Self {
        F64x2::EPSILON
    }
}

// ============================================================================
// Half-precision floating point types (requires "f16" feature)
// ============================================================================
//
// Arithmetic on half types rounds back to 16 bits after every operation, so
// the kernels still run at half precision end-to-end. Only the elementary
// functions go through f32, which is exact enough to round correctly.

#[cfg(feature = "f16")]
macro_rules! impl_real_half {
    ($ty:ty, $dtype:expr, $max_exp:expr) => {
        impl Real for $ty {
            const DTYPE: DType = $dtype;
            const MAX_EXP: i32 = $max_exp;

            #[inline]
            fn from_u32(v: u32) -> Self {
                <$ty>::from_f32(v as f32)
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                <$ty>::from_f64(v)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                <$ty>::to_f64(self)
            }

            #[inline]
            fn sqrt(self) -> Self {
                <$ty>::from_f32(self.to_f32().sqrt())
            }

            #[inline]
            fn abs(self) -> Self {
                <$ty>::from_f32(self.to_f32().abs())
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }

            #[inline]
            fn sin_cos(self) -> (Self, Self) {
                let (s, c) = self.to_f32().sin_cos();
                (<$ty>::from_f32(s), <$ty>::from_f32(c))
            }

            #[inline]
            fn pi() -> Self {
                <$ty>::PI
            }

            #[inline]
            fn epsilon() -> Self {
                <$ty>::EPSILON
            }
        }
    };
}

#[cfg(feature = "f16")]
impl_real_half!(half::f16, DType::F16, 16);

#[cfg(feature = "f16")]
impl_real_half!(half::bf16, DType::BF16, 128);

#[cfg(test)]
mod tests {
    use super::*;

    fn dtype_of<T: Real>() -> DType {
        T::DTYPE
    }

    #[test]
    fn test_dtype_mapping() {
        assert_eq!(dtype_of::<f32>(), DType::F32);
        assert_eq!(dtype_of::<f64>(), DType::F64);
        assert_eq!(dtype_of::<F64x2>(), DType::F64x2);
    }

    #[test]
    fn test_epsilon_matches_mantissa_digits() {
        fn check<T: Real>() {
            let expected = 2f64.powi(1 - T::DTYPE.mantissa_digits() as i32);
            assert_eq!(T::epsilon().to_f64(), expected, "{}", T::DTYPE);
        }
        check::<f32>();
        check::<f64>();
        // double-double loses one bit to the sign of the tail
        assert_eq!(<F64x2 as Real>::epsilon().to_f64(), 2f64.powi(-104));
    }

    #[test]
    fn test_exp2i_is_exact_at_half_range() {
        fn check<T: Real>() {
            let h = T::MAX_EXP / 2;
            let up = T::exp2i(h);
            assert!(up.is_finite(), "{}", T::DTYPE);
            assert_eq!((up * T::exp2i(-h)).to_f64(), 1.0, "{}", T::DTYPE);
            assert_eq!(up.to_f64(), 2f64.powi(h), "{}", T::DTYPE);
        }
        check::<f32>();
        check::<f64>();
        check::<F64x2>();
    }

    #[test]
    fn test_large_index_conversion() {
        assert_eq!(<f64 as Real>::from_u32(u32::MAX), 4_294_967_295.0);
        assert_eq!(<F64x2 as Real>::from_u32(u32::MAX).to_f64(), 4_294_967_295.0);
        assert_eq!(<f32 as Real>::from_u32(u32::MAX), 4_294_967_296.0);
    }

    #[cfg(feature = "f16")]
    #[test]
    fn test_half_types() {
        assert_eq!(dtype_of::<half::f16>(), DType::F16);
        assert_eq!(dtype_of::<half::bf16>(), DType::BF16);
        let four = <half::f16 as Real>::from_u32(4);
        assert_eq!(Real::sqrt(four).to_f32(), 2.0);
    }
}
