//! # termpoly-poly
//!
//! Sparse univariate polynomial arithmetic over `f64`.
//!
//! This crate provides:
//! - `Term` records and a growable `TermList` container
//! - `Polynomial`, kept in canonical form (descending exponents, like
//!   terms merged, near-zero coefficients pruned)
//! - Linear-merge addition and hash-indexed multiplication, with a
//!   rayon path for large products
//! - Evaluation, display and parsing
//!
//! ## Tolerance
//!
//! Coefficients with magnitude at or below `PolyConfig::epsilon`
//! (default `1e-9`) are treated as zero and removed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod format;
pub mod ops;
pub mod parse;
pub mod polynomial;
pub mod term;

#[cfg(test)]
mod proptests;

pub use config::PolyConfig;
pub use error::InputError;
pub use parse::parse_counted;
pub use polynomial::Polynomial;
pub use term::{Term, TermList};
