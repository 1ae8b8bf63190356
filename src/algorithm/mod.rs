//! Numerical algorithms
//!
//! Kernels are written once, generic over the working precision, and
//! instantiated for each width by the public entry points in [`crate::ops`].
//!
//! ```text
//! ops::special::assoc_legendre::<T>     (validation, phase, width aliases)
//!          │
//!          ▼
//! algorithm::special::scalar            (generic kernels over T: Real)
//!          │
//!          ▼
//! dtype::Real for f32 / f64 / F64x2     (+ - * / sqrt at width T)
//! ```

pub mod special;
