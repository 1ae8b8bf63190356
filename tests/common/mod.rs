//! Common test utilities
#![allow(dead_code)]

use legendre::dtype::Real;

/// Assert `actual` is within relative tolerance `rtol` of `expected`
///
/// The difference is formed at the working precision, so extended
/// precision results are not rounded to f64 before comparison. An exact
/// zero expectation requires an exact zero.
pub fn assert_rel_close<T: Real>(actual: T, expected: T, rtol: f64, msg: &str) {
    let diff = (actual - expected).abs().to_f64();
    let tol = rtol * expected.abs().to_f64();
    assert!(
        diff <= tol,
        "{} [{}]: expected {:?}, got {:?} (diff={:e}, tol={:e})",
        msg,
        T::DTYPE,
        expected,
        actual,
        diff,
        tol
    );
}

/// Assert `|actual - expected| <= atol`
pub fn assert_abs_close<T: Real>(actual: T, expected: T, atol: f64, msg: &str) {
    let diff = (actual - expected).abs().to_f64();
    assert!(
        diff <= atol,
        "{} [{}]: expected {:?}, got {:?} (diff={:e}, atol={:e})",
        msg,
        T::DTYPE,
        expected,
        actual,
        diff,
        atol
    );
}

/// (-1)^n at precision T
pub fn parity<T: Real>(n: u32) -> T {
    if n % 2 == 0 {
        T::one()
    } else {
        -T::one()
    }
}

/// sqrt((l+m)!/(l-m)!), the sup norm bound of P_l^m on [-1, 1]
pub fn sup_norm_bound(l: u32, m: u32) -> f64 {
    ((l - m + 1)..=(l + m))
        .map(f64::from)
        .product::<f64>()
        .sqrt()
}
