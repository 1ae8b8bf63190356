//! # legendre
//!
//! **Associated Legendre functions at single, double and extended precision.**
//!
//! One generic kernel, instantiated per working precision, evaluates
//! P_l^m(x) by an upward recurrence in degree from the closed-form diagonal
//! P_m^m(x). The same kernel backs the Legendre polynomials P_l(x) and the
//! spherical associated Legendre functions Y_l^m(θ, 0).
//!
//! ## Quick Start
//!
//! ```
//! # #[cfg(feature = "math-spec-funcs")]
//! # {
//! use legendre::prelude::*;
//!
//! let p = assoc_legendre(2, 1, 0.5f64)?;          // -1.299038...
//! let q = assoc_legendref(2, 1, 0.5)?;            // f32
//! let r = assoc_legendrel(2, 1, F64x2::from(0.5))?; // double-double
//! assert!(p < 0.0 && q < 0.0 && r < F64x2::ZERO);
//! # }
//! # Ok::<(), legendre::error::Error>(())
//! ```
//!
//! ## Working Precisions
//!
//! | Width    | Rust type       | Alias suffix |
//! |----------|-----------------|--------------|
//! | single   | `f32`           | `f`          |
//! | double   | `f64`           | (none)       |
//! | extended | [`dtype::F64x2`] | `l`         |
//!
//! ## Feature Flags
//!
//! - `math-spec-funcs` (default): public entry points in [`ops`]
//! - `f16`: half-precision working types (`half::f16`, `half::bf16`)
//!
//! ## Conventions
//!
//! The Condon-Shortley phase (-1)^m is included: P_1^1(x) = -√(1-x²).
//! Use [`ops::special::assoc_legendre_with_phase`] with `Phase::Omitted`
//! for the ISO C++ convention.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod dtype;
pub mod error;
pub mod ops;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{DType, F64x2, Real};
    pub use crate::error::{Error, Result};

    #[cfg(feature = "math-spec-funcs")]
    pub use crate::ops::special::{
        Phase, assoc_legendre, assoc_legendre_with_phase, assoc_legendref, assoc_legendrel,
        legendre, legendref, legendrel, sph_legendre, sph_legendref, sph_legendrel,
    };
}
