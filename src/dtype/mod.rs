//! Working precisions for the special-function kernels
//!
//! This module provides the `DType` enum naming every floating-point width a
//! kernel can be instantiated at, the [`Real`] trait the kernels are generic
//! over, and the double-double [`F64x2`] type that stands in for an extended
//! (`long double`-class) precision.

mod element;
pub mod extended;

pub use element::Real;
pub use extended::F64x2;

use std::fmt;

// ============================================================================
// DType Enum
// ============================================================================

/// Floating-point widths supported by the kernels
///
/// The discriminant values are stable and ordered by increasing precision.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
#[repr(u8)]
pub enum DType {
    /// 16-bit brain floating point (requires "f16" feature)
    BF16 = 0,
    /// 16-bit floating point, IEEE 754 binary16 (requires "f16" feature)
    F16 = 1,
    /// 32-bit floating point (single precision)
    F32 = 2,
    /// 64-bit floating point (double precision)
    F64 = 3,
    /// Double-double: unevaluated sum of two f64 (extended precision)
    F64x2 = 4,
}

impl DType {
    /// Size of one value in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::F64x2 => 16,
            Self::F64 => 8,
            Self::F32 => 4,
            Self::F16 | Self::BF16 => 2,
        }
    }

    /// Number of binary digits in the significand, hidden bit included
    ///
    /// For `F64x2` this is the nominal 2 × 53 bits; the effective precision
    /// is slightly lower near the underflow threshold.
    #[inline]
    pub const fn mantissa_digits(self) -> u32 {
        match self {
            Self::BF16 => 8,
            Self::F16 => 11,
            Self::F32 => f32::MANTISSA_DIGITS,
            Self::F64 => f64::MANTISSA_DIGITS,
            Self::F64x2 => 2 * f64::MANTISSA_DIGITS,
        }
    }

    /// Short lowercase name
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BF16 => "bf16",
            Self::F16 => "f16",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::F64x2 => "f64x2",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
