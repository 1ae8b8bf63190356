//! Error types for legendre

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using legendre's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when evaluating a special function
///
/// Overflow and underflow are not errors: they are reported through the
/// float representation (±∞, signed zero) like the host arithmetic does.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Argument outside the domain of the function
    #[error("Domain error in {op}: argument '{arg}' {reason} (at {dtype})")]
    Domain {
        /// The function being evaluated
        op: &'static str,
        /// The argument name
        arg: &'static str,
        /// Reason for rejection
        reason: String,
        /// Working precision of the call
        dtype: DType,
    },
}

impl Error {
    /// Create a domain error
    pub fn domain(
        op: &'static str,
        arg: &'static str,
        reason: impl Into<String>,
        dtype: DType,
    ) -> Self {
        Self::Domain {
            op,
            arg,
            reason: reason.into(),
            dtype,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_message() {
        let err = Error::domain("assoc_legendre", "x", "is not finite", DType::F64);
        assert_eq!(
            err.to_string(),
            "Domain error in assoc_legendre: argument 'x' is not finite (at f64)"
        );
    }
}
