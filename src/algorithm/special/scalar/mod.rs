//! Scalar implementations of special mathematical functions
//!
//! Kernels here are generic over [`crate::dtype::Real`] and monomorphized per
//! working precision. They assume validated arguments and never fail.
//!
//! # Algorithms
//!
//! - **legendre_p**: Three-term recurrence in degree
//! - **legendre_p_assoc**: Closed-form diagonal seed + upward recurrence
//! - **sph_legendre**: Normalized upward recurrence

mod orthogonal;

pub use orthogonal::*;
