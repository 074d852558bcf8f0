//! # termpoly
//!
//! Sparse univariate polynomials with `f64` coefficients.
//!
//! Polynomials are stored as (coefficient, exponent) terms in canonical
//! form: descending exponents, like terms merged, near-zero coefficients
//! pruned. Addition is a linear merge of term lists; multiplication folds
//! cross terms through an exponent index and goes parallel for large
//! operands.
//!
//! ## Quick Start
//!
//! ```rust
//! use termpoly::prelude::*;
//!
//! let a = Polynomial::from_terms([(3.0, 2), (2.0, 1), (-5.0, 0)]).unwrap();
//! let b: Polynomial = "x + 4".parse().unwrap();
//!
//! assert_eq!(a.add(&b).to_string(), "3x^2 + 3x - 1");
//! assert_eq!(a.mul(&b).to_string(), "3x^3 + 14x^2 + 3x - 20");
//! assert_eq!(a.evaluate(2.0), 11.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use termpoly_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use termpoly_poly::{parse_counted, InputError, PolyConfig, Polynomial, Term, TermList};
}
