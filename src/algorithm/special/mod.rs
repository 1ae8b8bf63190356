//! Special mathematical functions for scientific computing
//!
//! # Functions Provided
//!
//! ## Legendre Functions
//! - [`legendre_p_scalar`] - Legendre polynomial P_l(x)
//! - [`legendre_p_assoc_scalar`] - Associated Legendre function P_l^m(x)
//! - [`sph_legendre_scalar`] - Spherical associated Legendre function Y_l^m(θ, 0)
//!
//! The building blocks of the associated kernel are public as well:
//! [`assoc_legendre_diagonal`] computes the seed P_m^m(x) and
//! [`assoc_legendre_upward`] advances it to the requested degree.
//!
//! # Sign Convention
//!
//! Every function includes the Condon-Shortley phase (-1)^m. The public
//! entry points in [`crate::ops::special`] can drop it on request.

pub mod scalar;

pub use scalar::*;
