//! Legendre polynomials and associated Legendre functions
//!
//! - Legendre polynomials P_l(x)
//! - Associated Legendre functions P_l^m(x)
//! - Spherical associated Legendre functions Y_l^m(θ, 0)
//!
//! All kernels are generic over [`Real`] and infallible: argument checks
//! live in [`crate::ops::special`]. Overflow surfaces as ±∞.
//!
//! # References
//! - DLMF 14: Legendre and Related Functions
//! - DLMF 14.10: Recurrence Relations and Derivatives
//! - Abramowitz & Stegun 8.5, 8.6

use crate::dtype::Real;

/// Legendre polynomial P_l(x).
///
/// ```text
/// P_l(x) is the solution of (1-x²)y'' - 2xy' + l(l+1)y = 0
/// ```
///
/// # Properties
/// - P_l(1) = 1, P_l(-1) = (-1)^l
/// - P_0(x) = 1, P_1(x) = x
///
/// Defined for every real x; outside [-1, 1] it grows like x^l and
/// overflows to ±∞ for large l.
#[inline]
pub fn legendre_p_scalar<T: Real>(l: u32, x: T) -> T {
    legendre_p_assoc_scalar(l, 0, x)
}

/// Associated Legendre function P_l^m(x), Condon-Shortley phase included.
///
/// ```text
/// P_l^m(x) = (-1)^m (1-x²)^(m/2) d^m/dx^m P_l(x)
/// ```
///
/// # Properties
/// - Domain: x ∈ [-1, 1] for m ≥ 1, any real x for m = 0
/// - P_l^m(x) = 0 for m > l
/// - P_l^l(x) = (-1)^l (2l-1)!! (1-x²)^(l/2)
/// - P_l^m(-x) = (-1)^(l+m) P_l^m(x)
///
/// # Algorithm
/// 1. Start from the diagonal P_m^m(x) ([`assoc_legendre_diagonal`])
/// 2. Recur upward in degree ([`assoc_legendre_upward`])
///
/// Both stages carry a binary exponent beside the working value, so only
/// the final result can overflow, and then with its true sign.
pub fn legendre_p_assoc_scalar<T: Real>(l: u32, m: u32, x: T) -> T {
    if m > l {
        return T::zero();
    }
    if l == 0 {
        return T::one();
    }

    let (pmm, exp) = diagonal_scaled(m, x);
    // only a half type can overflow here, on (2m-1) itself
    if !pmm.is_finite() {
        return pmm;
    }
    if l == m {
        return scale_back(pmm, exp);
    }

    upward_scaled(l, m, x, pmm, exp)
}

/// Diagonal seed P_m^m(x) = (-1)^m (2m-1)!! (1-x²)^(m/2).
///
/// The half-integer power is built by repeated multiplication with
/// √(1-x²), the only square root in the whole evaluation. The sign and the
/// odd factors are folded into the same loop.
pub fn assoc_legendre_diagonal<T: Real>(m: u32, x: T) -> T {
    let (pmm, exp) = diagonal_scaled(m, x);
    scale_back(pmm, exp)
}

/// Upward recurrence in degree from the diagonal seed, for l > m.
///
/// ```text
/// P_{m+1}^m(x) = x (2m+1) P_m^m(x)
/// (k-m) P_k^m(x) = (2k-1) x P_{k-1}^m(x) - (k+m-1) P_{k-2}^m(x)
/// ```
///
/// Coefficients are formed in the working precision, so no integer
/// overflow for large degrees. Upward is the stable direction on
/// [-1, 1]: P_l^m is the dominant solution there.
pub fn assoc_legendre_upward<T: Real>(l: u32, m: u32, x: T, pmm: T) -> T {
    upward_scaled(l, m, x, pmm, 0)
}

// ============================================================================
// Exponent carrying
// ============================================================================
//
// A value is held as `v · 2^exp` with |v| kept at or below 2^(MAX_EXP/2).
// Multiplying by a power of two is exact, so the scaled recurrence rounds
// like the plain one. The headroom absorbs the coefficient products.

/// Binary exponent removed from the working values per rescale
#[inline]
fn rescale_step<T: Real>() -> i32 {
    T::MAX_EXP / 2
}

/// `v · 2^exp`, overflowing to ±∞ with the sign of `v`.
fn scale_back<T: Real>(mut v: T, mut exp: i64) -> T {
    let step = i64::from(rescale_step::<T>());
    while exp > 0 && v.is_finite() && v != T::zero() {
        let e = exp.min(step);
        v = v * T::exp2i(e as i32);
        exp -= e;
    }
    v
}

fn diagonal_scaled<T: Real>(m: u32, x: T) -> (T, i64) {
    let one = T::one();
    if m == 0 {
        return (one, 0);
    }

    // (1-x)(1+x) keeps full relative accuracy near |x| = 1
    let root = ((one - x) * (one + x)).sqrt();
    let two = one + one;
    let h = rescale_step::<T>();
    let (ceiling, down) = (T::exp2i(h), T::exp2i(-h));

    let mut pmm = one;
    let mut odd = one;
    let mut exp = 0i64;
    for _ in 0..m {
        if pmm.abs() > ceiling {
            pmm = pmm * down;
            exp += i64::from(h);
        }
        pmm = pmm * -(odd * root);
        odd = odd + two;
    }
    (pmm, exp)
}

fn upward_scaled<T: Real>(l: u32, m: u32, x: T, pmm: T, mut exp: i64) -> T {
    debug_assert!(l > m);

    let one = T::one();
    let m_r = T::from_u32(m);
    let h = rescale_step::<T>();
    let (ceiling, down) = (T::exp2i(h), T::exp2i(-h));

    let mut p_prev = pmm;
    let mut p_curr = x * (m_r + m_r + one) * pmm;

    for j in (m + 1)..l {
        if p_curr.abs() > ceiling || p_prev.abs() > ceiling {
            p_prev = p_prev * down;
            p_curr = p_curr * down;
            exp += i64::from(h);
        }

        let k = j + 1;
        let k_r = T::from_u32(k);
        let p_next = ((k_r + k_r - one) * x * p_curr - (k_r + m_r - one) * p_prev) / (k_r - m_r);

        if !p_next.is_finite() {
            // overflow despite the headroom needs |x| far above 1 (or a
            // half type); no root lies beyond x, so the sign follows x^(l-k)
            return if x < T::zero() && (l - k) % 2 == 1 {
                -p_next
            } else {
                p_next
            };
        }

        p_prev = p_curr;
        p_curr = p_next;
    }

    scale_back(p_curr, exp)
}

/// Spherical associated Legendre function Y_l^m(θ, 0).
///
/// ```text
/// Y_l^m(θ, 0) = sqrt((2l+1)/(4π) · (l-m)!/(l+m)!) · P_l^m(cos θ)
/// ```
///
/// Condon-Shortley phase included, consistent with
/// [`legendre_p_assoc_scalar`]. Returns 0 for m > l.
///
/// # Algorithm
/// Normalized recurrence, so no factorial ratio is ever formed:
///
/// ```text
/// Y_m^m     = (-1)^m sqrt((2m+1)/(4π) · (2m-1)!!/(2m)!!) sin^m θ
/// Y_{m+1}^m = cos θ · sqrt(2m+3) · Y_m^m
/// Y_k^m     = a_k (cos θ · Y_{k-1}^m - Y_{k-2}^m / a_{k-1})
/// a_k       = sqrt((4k²-1)/(k²-m²))
/// ```
pub fn sph_legendre_scalar<T: Real>(l: u32, m: u32, theta: T) -> T {
    if m > l {
        return T::zero();
    }

    let one = T::one();
    let two = one + one;
    let (sin_t, x) = theta.sin_cos();
    let m_r = T::from_u32(m);

    let mut ymm = one / (two * two * T::pi()).sqrt();
    for i in 1..=m {
        let i_r = T::from_u32(i);
        let ratio = (i_r + i_r - one) / (i_r + i_r);
        ymm = ymm * -(ratio.sqrt() * sin_t);
    }
    let ymm = ymm * (m_r + m_r + one).sqrt();
    if l == m {
        return ymm;
    }

    let ymp1 = x * (m_r + m_r + one + two).sqrt() * ymm;
    if l == m + 1 {
        return ymp1;
    }

    // a_k split into two factors of order 1 so half types do not overflow on k²
    let growth = |k: T| -> T {
        ((k + k - one) / (k - m_r) * ((k + k + one) / (k + m_r))).sqrt()
    };

    let mut y_prev = ymm;
    let mut y_curr = ymp1;
    let mut a_prev = growth(T::from_u32(m + 1));
    for j in (m + 1)..l {
        let k_r = T::from_u32(j + 1);
        let a_k = growth(k_r);
        let y_next = a_k * (x * y_curr - y_prev / a_prev);
        y_prev = y_curr;
        y_curr = y_next;
        a_prev = a_k;
    }

    y_curr
}
