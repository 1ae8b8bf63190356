//! Double-double extended precision
//!
//! Rust has no native `long double`. [`F64x2`] represents a real number as
//! the unevaluated sum `hi + lo` of two `f64` with `|lo| <= ulp(hi) / 2`,
//! which gives roughly 106 significant bits (about 32 decimal digits) with
//! the exponent range of `f64`.
//!
//! # Example
//!
//! ```
//! use legendre::dtype::F64x2;
//!
//! let third = F64x2::ONE / F64x2::from(3.0);
//! let back = third * F64x2::from(3.0);
//! assert!((back - F64x2::ONE).abs() <= F64x2::EPSILON * F64x2::from(4.0));
//! ```
//!
//! # References
//! - Hida, Li & Bailey, "Library for Double-Double and Quad-Double Arithmetic" (QD)
//! - Dekker, "A floating-point technique for extending the available precision" (1971)

use bytemuck::{Pod, Zeroable};
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

// ============================================================================
// Error-free transformations
// ============================================================================

/// `a + b` as `(s, e)` with `s = fl(a + b)` and `a + b = s + e` exactly.
#[inline]
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let e = (a - (s - bb)) + (b - bb);
    (s, e)
}

/// Like [`two_sum`], requires `|a| >= |b|`.
#[inline]
fn quick_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let e = b - (s - a);
    (s, e)
}

/// `a * b` as `(p, e)` with `a * b = p + e` exactly.
#[inline]
fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let e = a.mul_add(b, -p);
    (p, e)
}

// ============================================================================
// Argument reduction
// ============================================================================

/// 2/π
const TWO_OVER_PI: F64x2 = F64x2 {
    hi: 0.636_619_772_367_581_4,
    lo: -3.935_735_335_036_497e-17,
};

/// 2^-128
const TWO_POW_NEG_128: f64 = 2.938_735_877_055_719e-39;

/// Binary digits of 2/π after the point, most significant first.
///
/// Enough for the window [`reduce_f64`] reads at the largest f64 exponent.
const TWO_OVER_PI_BITS: [u64; 20] = [
    0xa2f9_836e_4e44_1529,
    0xfc27_57d1_f534_ddc0,
    0xdb62_9599_3c43_9041,
    0xfe51_63ab_debb_c561,
    0xb724_6e3a_424d_d2e0,
    0x0649_2eea_09d1_921c,
    0xfe1d_eb1c_b129_a73e,
    0xe882_35f5_2ebb_4484,
    0xe99c_7026_b45f_7e41,
    0x3991_d639_8353_39f4,
    0x9c84_5f8b_bdf9_283b,
    0x1ff8_97ff_de05_980f,
    0xef2f_118b_5a0a_6d1f,
    0x6d36_7ecf_27cb_09b7,
    0x4f46_3f66_9e5f_ea2d,
    0x7527_bac7_ebe5_f17b,
    0x3d07_39f7_8a52_92ea,
    0x6bfb_5fb1_1f8d_5d08,
    0x5603_3046_fc7b_6bab,
    0xf0cf_bc20_9af4_361d,
];

/// 64 digits of 2/π starting at digit `start` (the first digit is 1).
#[inline]
fn two_over_pi_window(start: u32) -> u64 {
    let idx = ((start - 1) / 64) as usize;
    let off = (start - 1) % 64;
    let head = TWO_OVER_PI_BITS[idx];
    if off == 0 {
        head
    } else {
        (head << off) | (TWO_OVER_PI_BITS[idx + 1] >> (64 - off))
    }
}

/// `g / 2^128` for `g <= 2^127`, correct to the last bit of the pair.
fn fraction_from_bits(g: u128) -> F64x2 {
    let lead = g as f64;
    let lead_int = lead as u128;
    let rest = if lead_int >= g {
        -((lead_int - g) as i128)
    } else {
        (g - lead_int) as i128
    };
    let mid = rest as f64;
    let tail = (rest - mid as i128) as f64;
    (F64x2::from_sum(lead, mid) + F64x2::from(tail)) * F64x2::from(TWO_POW_NEG_128)
}

/// `d · 2/π` as a quadrant and a fraction in `[-1/2, 1/2]` (below 1 the
/// fraction is returned unrounded).
///
/// Payne-Hanek: with `|d| = M · 2^e`, digits of 2/π worth 4 or more after
/// scaling only add multiples of 4 and are skipped. The next 192 digits are
/// multiplied by `M` exactly in integers, leaving two quadrant bits and a
/// 128-bit fraction.
fn reduce_f64(d: f64) -> (i64, F64x2) {
    if d.abs() < 1.0 {
        return (0, F64x2::from(d) * TWO_OVER_PI);
    }

    let bits = d.abs().to_bits();
    let mant = u128::from((bits & ((1u64 << 52) - 1)) | (1u64 << 52));
    let e = ((bits >> 52) & 0x7ff) as i32 - 1075;
    let start = (e - 1).max(1) as u32;

    // 53 x 192 bit product, as two 128-bit halves
    let acc = mant * u128::from(two_over_pi_window(start + 128));
    let r0 = acc as u64;
    let acc = (acc >> 64) + mant * u128::from(two_over_pi_window(start + 64));
    let r1 = acc as u64;
    let high = (acc >> 64) + mant * u128::from(two_over_pi_window(start));
    let low = u128::from(r0) | (u128::from(r1) << 64);

    // units digit of the product sits at bit `point`, in 190..=245
    let point = (start as i32 + 191 - e) as u32;
    let shr = |n: u32| -> u128 {
        if n >= 128 {
            high >> (n - 128)
        } else {
            (low >> n) | (high << (128 - n))
        }
    };

    let quadrant = (shr(point) & 3) as i64;
    let frac_bits = shr(point - 128);
    let (quadrant, frac) = if frac_bits >> 127 == 1 {
        (quadrant + 1, -fraction_from_bits(frac_bits.wrapping_neg()))
    } else {
        (quadrant, fraction_from_bits(frac_bits))
    };

    if d < 0.0 {
        (-quadrant, -frac)
    } else {
        (quadrant, frac)
    }
}

// ============================================================================
// F64x2 Type
// ============================================================================

/// Double-double floating point value (`hi + lo`).
///
/// - Precision: ~106 bits, epsilon 2^-104 ≈ 4.93e-32
/// - Range: same as `f64`
/// - Overflow: an infinite leading term is returned as `±∞` with `lo = 0`
#[derive(Copy, Clone, Default, PartialEq)]
#[repr(C)]
pub struct F64x2 {
    hi: f64,
    lo: f64,
}

// Safety: F64x2 is two f64 with repr(C) and no padding
unsafe impl Pod for F64x2 {}
unsafe impl Zeroable for F64x2 {}

impl F64x2 {
    /// Zero value
    pub const ZERO: Self = Self { hi: 0.0, lo: 0.0 };
    /// One value
    pub const ONE: Self = Self { hi: 1.0, lo: 0.0 };
    /// π
    pub const PI: Self = Self {
        hi: 3.141_592_653_589_793,
        lo: 1.224_646_799_147_353_2e-16,
    };
    /// π/2
    pub const FRAC_PI_2: Self = Self {
        hi: 1.570_796_326_794_896_6,
        lo: 6.123_233_995_736_766e-17,
    };
    /// Machine epsilon, 2^-104
    pub const EPSILON: Self = Self {
        hi: 4.930_380_657_631_324e-32,
        lo: 0.0,
    };
    /// Not a number
    pub const NAN: Self = Self {
        hi: f64::NAN,
        lo: f64::NAN,
    };
    /// Positive infinity
    pub const INFINITY: Self = Self {
        hi: f64::INFINITY,
        lo: 0.0,
    };
    /// Negative infinity
    pub const NEG_INFINITY: Self = Self {
        hi: f64::NEG_INFINITY,
        lo: 0.0,
    };

    /// Exact sum of two f64.
    #[inline]
    pub fn from_sum(a: f64, b: f64) -> Self {
        let (hi, lo) = two_sum(a, b);
        Self::renormalized(hi, lo)
    }

    /// Build from a leading term and a correction, collapsing non-finite
    /// leading terms so that `lo` never turns an overflow into NaN.
    #[inline]
    fn renormalized(hi: f64, lo: f64) -> Self {
        if hi.is_finite() {
            let (hi, lo) = quick_two_sum(hi, lo);
            Self { hi, lo }
        } else {
            Self { hi, lo: 0.0 }
        }
    }

    /// Leading component
    #[inline]
    pub const fn hi(self) -> f64 {
        self.hi
    }

    /// Trailing component
    #[inline]
    pub const fn lo(self) -> f64 {
        self.lo
    }

    /// Round to the nearest f64
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.hi + self.lo
    }

    /// Check if this value is NaN
    #[inline]
    pub fn is_nan(self) -> bool {
        self.hi.is_nan() || self.lo.is_nan()
    }

    /// Check if this value is neither infinite nor NaN
    #[inline]
    pub fn is_finite(self) -> bool {
        self.hi.is_finite() && self.lo.is_finite()
    }

    /// Check if the sign bit of the leading term is set
    #[inline]
    pub fn is_sign_negative(self) -> bool {
        self.hi.is_sign_negative()
    }

    /// Absolute value
    #[inline]
    pub fn abs(self) -> Self {
        if self.is_sign_negative() {
            -self
        } else {
            self
        }
    }

    /// Square root.
    ///
    /// One Newton correction on top of the f64 square root (Karp's method):
    /// `sqrt(a) ≈ y + (a - y²) / (2y)`.
    pub fn sqrt(self) -> Self {
        if self.hi == 0.0 {
            return self;
        }
        if self.hi < 0.0 || self.is_nan() {
            return Self::NAN;
        }
        if self.hi.is_infinite() {
            return Self::INFINITY;
        }

        let inv = 1.0 / self.hi.sqrt();
        let y = self.hi * inv;
        let y2 = Self::from(y) * Self::from(y);
        let correction = (self - y2).hi * (inv * 0.5);
        Self::from_sum(y, correction)
    }

    /// Simultaneous sine and cosine.
    ///
    /// Reduces the argument to `|r| <= π/4` with a Payne-Hanek reduction
    /// (quadrant kept mod 4), then sums the Taylor series. Accurate across
    /// the whole finite range.
    pub fn sin_cos(self) -> (Self, Self) {
        if !self.is_finite() {
            return (Self::NAN, Self::NAN);
        }

        let (quadrant, r) = if self.hi.abs() <= std::f64::consts::FRAC_PI_4 {
            (0, self)
        } else {
            self.reduce_half_pi()
        };
        let r2 = r * r;

        let mut sin = r;
        let mut term = r;
        for n in 1..=30u32 {
            let d = f64::from(2 * n) * f64::from(2 * n + 1);
            term = -(term * r2) / Self::from(d);
            sin = sin + term;
            if term.hi.abs() <= Self::EPSILON.hi * sin.hi.abs() {
                break;
            }
        }

        let mut cos = Self::ONE;
        let mut term = Self::ONE;
        for n in 1..=30u32 {
            let d = f64::from(2 * n - 1) * f64::from(2 * n);
            term = -(term * r2) / Self::from(d);
            cos = cos + term;
            if term.hi.abs() <= Self::EPSILON.hi * cos.hi.abs() {
                break;
            }
        }

        match quadrant.rem_euclid(4) {
            0 => (sin, cos),
            1 => (cos, -sin),
            2 => (-sin, -cos),
            _ => (-cos, sin),
        }
    }

    /// Split into `q · π/2 + r` with `|r| <= π/4`, returning `(q, r)`.
    ///
    /// Each component is multiplied by 2/π separately, so `lo` is reduced
    /// as carefully as `hi` even when it is itself huge.
    fn reduce_half_pi(self) -> (i64, Self) {
        let (q_hi, f_hi) = reduce_f64(self.hi);
        let (q_lo, f_lo) = reduce_f64(self.lo);
        let total = f_hi + f_lo;
        let k = total.hi.round();
        let frac = total - Self::from(k);
        // |k| <= 1
        (q_hi + q_lo + k as i64, frac * Self::FRAC_PI_2)
    }
}

impl From<f64> for F64x2 {
    #[inline]
    fn from(v: f64) -> Self {
        Self { hi: v, lo: 0.0 }
    }
}

impl From<u32> for F64x2 {
    #[inline]
    fn from(v: u32) -> Self {
        Self::from(f64::from(v))
    }
}

impl fmt::Debug for F64x2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F64x2({:e} + {:e})", self.hi, self.lo)
    }
}

impl fmt::Display for F64x2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

impl PartialOrd for F64x2 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.hi.partial_cmp(&other.hi)? {
            Ordering::Equal => self.lo.partial_cmp(&other.lo),
            ord => Some(ord),
        }
    }
}

impl Neg for F64x2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            hi: -self.hi,
            lo: -self.lo,
        }
    }
}

impl Add for F64x2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        let (s1, s2) = two_sum(self.hi, rhs.hi);
        if !s1.is_finite() {
            return Self::from(s1);
        }
        let (t1, t2) = two_sum(self.lo, rhs.lo);
        let (s1, s2) = quick_two_sum(s1, s2 + t1);
        Self::renormalized(s1, s2 + t2)
    }
}

impl Sub for F64x2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Mul for F64x2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let (p1, p2) = two_prod(self.hi, rhs.hi);
        if !p1.is_finite() {
            return Self::from(p1);
        }
        let p2 = p2 + (self.hi * rhs.lo + self.lo * rhs.hi);
        Self::renormalized(p1, p2)
    }
}

impl Div for F64x2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let q1 = self.hi / rhs.hi;
        if !q1.is_finite() {
            return Self::from(q1);
        }
        let r = self - rhs * Self::from(q1);
        let q2 = r.hi / rhs.hi;
        let r = r - rhs * Self::from(q2);
        let q3 = r.hi / rhs.hi;
        Self::renormalized(q1, q2) + Self::from(q3)
    }
}

impl Zero for F64x2 {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.hi == 0.0
    }
}

impl One for F64x2 {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_dd_close(a: F64x2, b: F64x2, tol: f64, msg: &str) {
        let diff = (a - b).abs().to_f64();
        let scale = b.abs().to_f64().max(1.0);
        assert!(
            diff <= tol * scale,
            "{}: expected {:?}, got {:?}, diff {}",
            msg,
            b,
            a,
            diff
        );
    }

    #[test]
    fn test_exact_sum_keeps_tail() {
        let x = F64x2::from_sum(1.0, 1e-20);
        assert_eq!(x.hi(), 1.0);
        assert_eq!(x.lo(), 1e-20);
        assert_eq!((x - F64x2::ONE).to_f64(), 1e-20);
    }

    #[test]
    fn test_division_roundtrip() {
        for d in [3.0, 7.0, 11.0, 0.1] {
            let q = F64x2::ONE / F64x2::from(d);
            assert_dd_close(q * F64x2::from(d), F64x2::ONE, 1e-31, "1/d * d");
        }
    }

    #[test]
    fn test_sqrt() {
        let two = F64x2::from(2.0);
        let r = two.sqrt();
        assert_dd_close(r * r, two, 1e-31, "sqrt(2)^2");
        assert_eq!(F64x2::from(0.25).sqrt(), F64x2::from(0.5));
        assert_eq!(F64x2::ZERO.sqrt(), F64x2::ZERO);
        assert!(F64x2::from(-1.0).sqrt().is_nan());
    }

    #[test]
    fn test_sin_cos_identity() {
        for x in [0.0, 0.3, 1.0, 2.5, -4.0, 10.0] {
            let (s, c) = F64x2::from(x).sin_cos();
            assert_dd_close(s * s + c * c, F64x2::ONE, 1e-30, "sin² + cos²");
            assert!((s.to_f64() - x.sin()).abs() < 1e-15);
            assert!((c.to_f64() - x.cos()).abs() < 1e-15);
        }
    }

    #[test]
    fn test_sin_cos_quadrants() {
        let (s, c) = F64x2::FRAC_PI_2.sin_cos();
        assert_dd_close(s, F64x2::ONE, 1e-31, "sin(π/2)");
        assert!(c.abs().to_f64() < 1e-32);

        let (s, c) = F64x2::PI.sin_cos();
        assert!(s.abs().to_f64() < 1e-31);
        assert_dd_close(c, -F64x2::ONE, 1e-31, "cos(π)");
    }

    #[test]
    fn test_sin_cos_large_arguments_match_f64() {
        for x in [1e6, -1e6, 1e20, 1e22, 1e300, -1e300, f64::MAX] {
            let (s, c) = F64x2::from(x).sin_cos();
            assert!((s.to_f64() - x.sin()).abs() < 1e-15, "sin({:e}) = {:?}", x, s);
            assert!((c.to_f64() - x.cos()).abs() < 1e-15, "cos({:e}) = {:?}", x, c);
            assert_dd_close(s * s + c * c, F64x2::ONE, 1e-30, "sin² + cos²");
        }
    }

    #[test]
    fn test_sin_cos_large_arguments_extended_digits() {
        let cases = [
            (
                F64x2::from(1e22),
                F64x2::from_sum(-0.852_200_849_767_188_8, -6.780_682_589_677_328e-18),
                F64x2::from_sum(0.523_214_785_395_139, -4.714_320_107_657_516e-17),
            ),
            (
                F64x2::from(1e300),
                F64x2::from_sum(-0.817_881_912_115_908_5, -4.781_358_374_403_26e-17),
                F64x2::from_sum(-0.575_386_111_957_549_1, 2.677_076_191_878_707e-17),
            ),
            (
                // 1e20 + 1e4 does not fit one f64, so the tail carries part of the angle
                F64x2::from_sum(1e20, 1e4),
                F64x2::from_sum(0.380_899_126_859_672_6, -8.335_615_458_103_046e-18),
                F64x2::from_sum(-0.924_616_599_006_063_2, -2.020_236_809_104_753e-18),
            ),
        ];
        for (x, sin, cos) in cases {
            let (s, c) = x.sin_cos();
            assert_dd_close(s, sin, 1e-29, "sin");
            assert_dd_close(c, cos, 1e-29, "cos");
        }
    }

    #[test]
    fn test_overflow_is_infinite_not_nan() {
        let big = F64x2::from(f64::MAX);
        let prod = big * F64x2::from(4.0);
        assert_eq!(prod, F64x2::INFINITY);
        let sum = big + big;
        assert_eq!(sum, F64x2::INFINITY);
        assert_eq!(-prod, F64x2::NEG_INFINITY);
        assert!(!prod.is_finite());
        assert!(!prod.is_nan());
    }

    #[test]
    fn test_ordering() {
        let a = F64x2::from_sum(1.0, 1e-20);
        let b = F64x2::ONE;
        assert!(a > b);
        assert!(-a < -b);
        assert!(F64x2::NAN.partial_cmp(&b).is_none());
    }

    #[test]
    fn test_pod_layout() {
        let x = F64x2::from_sum(1.0, 1e-20);
        let words: [f64; 2] = bytemuck::cast(x);
        assert_eq!(words, [1.0, 1e-20]);
        assert_eq!(<F64x2 as Zeroable>::zeroed(), F64x2::ZERO);
    }
}
