//! Legendre-family special functions at every working precision
//!
//! Each function is generic over [`Real`], so the kernel is monomorphized at
//! the caller's width and never widens or narrows internally. Rust has no
//! overloading on argument width, so single- and extended-precision aliases
//! with the customary `f` and `l` suffixes forward to the same kernels.
//!
//! # Usage
//!
//! ```
//! use legendre::ops::special::{assoc_legendre, assoc_legendref, assoc_legendrel};
//! use legendre::dtype::F64x2;
//!
//! let d = assoc_legendre(2, 1, 0.5f64)?;
//! let f = assoc_legendref(2, 1, 0.5)?;
//! let e = assoc_legendrel(2, 1, F64x2::from(0.5))?;
//! assert!((d + 1.299038105676658).abs() < 1e-15);
//! assert!((f64::from(f) - d).abs() < 1e-6);
//! assert!((e.to_f64() - d).abs() < 1e-15);
//! # Ok::<(), legendre::error::Error>(())
//! ```
//!
//! # Available Functions
//!
//! - **Associated Legendre**: `assoc_legendre`, `assoc_legendref`, `assoc_legendrel`,
//!   `assoc_legendre_with_phase`
//! - **Legendre polynomials**: `legendre`, `legendref`, `legendrel`
//! - **Spherical Legendre**: `sph_legendre`, `sph_legendref`, `sph_legendrel`
//!
//! # Errors
//!
//! [`Error::Domain`] when the real argument is NaN or infinite, or when
//! |x| > 1 with m ≥ 1 (the seed (1-x²)^(m/2) is not real there). For m = 0
//! the Legendre polynomial is evaluated on the whole real line.

use crate::algorithm::special::{
    legendre_p_assoc_scalar, legendre_p_scalar, sph_legendre_scalar,
};
use crate::dtype::{F64x2, Real};
use crate::error::{Error, Result};

/// Sign convention for the associated Legendre functions
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Include (-1)^m (physics and DLMF convention)
    #[default]
    CondonShortley,
    /// Omit (-1)^m (the ISO C++ `std::assoc_legendre` convention)
    Omitted,
}

fn check_finite<T: Real>(op: &'static str, arg: &'static str, v: T) -> Result<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(Error::domain(op, arg, format!("must be finite, got {}", v), T::DTYPE))
    }
}

// ============================================================================
// Associated Legendre Functions
// ============================================================================

/// Associated Legendre function P_l^m(x) with the Condon-Shortley phase.
///
/// # Arguments
/// - `l`: degree
/// - `m`: order; m > l yields +0
/// - `x`: argument, |x| ≤ 1 unless m = 0
///
/// # Errors
/// [`Error::Domain`] for non-finite x, or |x| > 1 with 1 ≤ m ≤ l.
pub fn assoc_legendre<T: Real>(l: u32, m: u32, x: T) -> Result<T> {
    const OP: &str = "assoc_legendre";
    check_finite(OP, "x", x)?;
    if m > l {
        return Ok(T::zero());
    }
    if m > 0 && x.abs() > T::one() {
        return Err(Error::domain(
            OP,
            "x",
            format!("must satisfy |x| <= 1 for order m = {}, got {}", m, x),
            T::DTYPE,
        ));
    }
    Ok(legendre_p_assoc_scalar(l, m, x))
}

/// Associated Legendre function with an explicit sign convention.
///
/// `Phase::Omitted` returns (-1)^m P_l^m(x), the value the ISO C++
/// `std::assoc_legendre` defines.
pub fn assoc_legendre_with_phase<T: Real>(l: u32, m: u32, x: T, phase: Phase) -> Result<T> {
    let value = assoc_legendre(l, m, x)?;
    Ok(match phase {
        Phase::Omitted if m % 2 == 1 => -value,
        _ => value,
    })
}

/// Single precision [`assoc_legendre`].
#[inline]
pub fn assoc_legendref(l: u32, m: u32, x: f32) -> Result<f32> {
    assoc_legendre(l, m, x)
}

/// Extended precision [`assoc_legendre`].
#[inline]
pub fn assoc_legendrel(l: u32, m: u32, x: F64x2) -> Result<F64x2> {
    assoc_legendre(l, m, x)
}

// ============================================================================
// Legendre Polynomials
// ============================================================================

/// Legendre polynomial P_l(x) = P_l^0(x), for any finite real x.
///
/// # Errors
/// [`Error::Domain`] for non-finite x.
pub fn legendre<T: Real>(l: u32, x: T) -> Result<T> {
    check_finite("legendre", "x", x)?;
    Ok(legendre_p_scalar(l, x))
}

/// Single precision [`legendre`].
#[inline]
pub fn legendref(l: u32, x: f32) -> Result<f32> {
    legendre(l, x)
}

/// Extended precision [`legendre`].
#[inline]
pub fn legendrel(l: u32, x: F64x2) -> Result<F64x2> {
    legendre(l, x)
}

// ============================================================================
// Spherical Legendre Functions
// ============================================================================

/// Spherical associated Legendre function Y_l^m(θ, 0).
///
/// ```text
/// Y_l^m(θ, 0) = sqrt((2l+1)/(4π) · (l-m)!/(l+m)!) · P_l^m(cos θ)
/// ```
///
/// Condon-Shortley phase included. m > l yields +0.
///
/// # Errors
/// [`Error::Domain`] for non-finite θ.
pub fn sph_legendre<T: Real>(l: u32, m: u32, theta: T) -> Result<T> {
    check_finite("sph_legendre", "theta", theta)?;
    Ok(sph_legendre_scalar(l, m, theta))
}

/// Single precision [`sph_legendre`].
#[inline]
pub fn sph_legendref(l: u32, m: u32, theta: f32) -> Result<f32> {
    sph_legendre(l, m, theta)
}

/// Extended precision [`sph_legendre`].
#[inline]
pub fn sph_legendrel(l: u32, m: u32, theta: F64x2) -> Result<F64x2> {
    sph_legendre(l, m, theta)
}
