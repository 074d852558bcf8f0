//! Errors raised while building polynomials from raw term data.

use thiserror::Error;

/// Malformed or incomplete term data.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InputError {
    /// The declared number of terms is negative.
    #[error("term count must be non-negative, got {0}")]
    NegativeCount(i64),

    /// Fewer terms were supplied than declared.
    #[error("expected {expected} terms, found {found}")]
    MissingTerms {
        /// Declared term count.
        expected: usize,
        /// Number of complete terms actually supplied.
        found: usize,
    },

    /// An exponent is negative.
    #[error("exponent must be non-negative, got {0}")]
    NegativeExponent(i64),

    /// An exponent does not fit the exponent type.
    #[error("exponent {0} is too large")]
    ExponentTooLarge(i64),

    /// A coefficient is infinite or NaN.
    #[error("coefficient must be finite, got {0}")]
    NonFiniteCoefficient(f64),

    /// A token could not be read as the expected number.
    #[error("invalid number {token:?} at token {position}")]
    InvalidNumber {
        /// Zero-based token index.
        position: usize,
        /// The offending token.
        token: String,
    },

    /// Polynomial text is malformed.
    #[error("syntax error at byte {position}: {message}")]
    Syntax {
        /// Byte offset into the input.
        position: usize,
        /// What was expected.
        message: String,
    },
}

impl InputError {
    pub(crate) fn syntax(position: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            position,
            message: message.into(),
        }
    }
}
