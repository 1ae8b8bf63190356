//! Public entry points
//!
//! The functions in [`special`] validate arguments, pick the sign
//! convention and forward to the generic kernels in
//! [`crate::algorithm::special`]. They are compiled only with the
//! `math-spec-funcs` feature (on by default).
//!
//! ```text
//! assoc_legendre::<f32>   ─┐
//! assoc_legendre::<f64>   ─┼─► legendre_p_assoc_scalar::<T>
//! assoc_legendre::<F64x2> ─┘
//! ```

#[cfg(feature = "math-spec-funcs")]
pub mod special;

#[cfg(feature = "math-spec-funcs")]
pub use special::{
    Phase, assoc_legendre, assoc_legendre_with_phase, assoc_legendref, assoc_legendrel,
    legendre, legendref, legendrel, sph_legendre, sph_legendref, sph_legendrel,
};
