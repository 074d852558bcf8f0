//! Sparse univariate polynomials over `f64`.
//!
//! A [`Polynomial`] keeps its terms in canonical form at all times:
//! exponents strictly descending, no two terms sharing an exponent, and no
//! coefficient with magnitude at or below the configured epsilon. Every
//! constructor and every arithmetic operation re-establishes this form, so
//! structural equality and display are deterministic.
//!
//! Coefficients are finite on construction. Arithmetic that overflows
//! `f64` follows IEEE rules and can leave an infinite or NaN coefficient in
//! the result; [`Polynomial::is_finite`] detects that case.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::config::PolyConfig;
use crate::error::InputError;
use crate::term::{Term, TermList};

/// A sparse univariate polynomial with `f64` coefficients.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Polynomial {
    /// Terms in canonical order (descending exponent).
    terms: TermList,
}

impl Polynomial {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: TermList::new(),
        }
    }

    /// Creates the constant polynomial `c`.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self::monomial(c, 0)
    }

    /// Creates the polynomial `x`.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(1.0, 1)
    }

    /// Creates the monomial `c * x^e`.
    #[must_use]
    pub fn monomial(c: f64, e: u64) -> Self {
        std::iter::once(Term::new(c, e)).collect()
    }

    /// Builds a polynomial from (coefficient, exponent) pairs.
    ///
    /// Pairs may arrive in any order and may repeat exponents; like terms
    /// are summed and zero results dropped.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if an exponent is negative or exceeds
    /// `u32::MAX`, or a coefficient is not finite.
    pub fn from_terms<I>(pairs: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = (f64, i64)>,
    {
        Self::from_terms_with(pairs, &PolyConfig::default())
    }

    /// Like [`from_terms`](Self::from_terms) with an explicit configuration.
    ///
    /// # Errors
    ///
    /// See [`from_terms`](Self::from_terms).
    pub fn from_terms_with<I>(pairs: I, config: &PolyConfig) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = (f64, i64)>,
    {
        let pairs = pairs.into_iter();
        let mut terms = TermList::with_capacity(pairs.size_hint().0);
        for (coefficient, exponent) in pairs {
            let term = validate_term(coefficient, exponent)?;
            terms.push(term);
        }
        Ok(Self::from_raw(terms, config))
    }

    /// Builds a polynomial from a declared term count and its pairs.
    ///
    /// Only the first `count` pairs are read.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NegativeCount`] for a negative count,
    /// [`InputError::MissingTerms`] when fewer than `count` pairs are
    /// supplied, and the errors of [`from_terms`](Self::from_terms).
    pub fn from_counted<I>(count: i64, pairs: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = (f64, i64)>,
    {
        Self::from_counted_with(count, pairs, &PolyConfig::default())
    }

    /// Like [`from_counted`](Self::from_counted) with an explicit configuration.
    ///
    /// # Errors
    ///
    /// See [`from_counted`](Self::from_counted).
    pub fn from_counted_with<I>(
        count: i64,
        pairs: I,
        config: &PolyConfig,
    ) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = (f64, i64)>,
    {
        if count < 0 {
            return Err(InputError::NegativeCount(count));
        }
        let expected = usize::try_from(count).unwrap_or(usize::MAX);

        let pairs: Vec<(f64, i64)> = pairs.into_iter().take(expected).collect();
        if pairs.len() < expected {
            return Err(InputError::MissingTerms {
                expected,
                found: pairs.len(),
            });
        }

        Self::from_terms_with(pairs, config)
    }

    /// Sorts, merges like terms and prunes zeros.
    fn from_raw(mut terms: TermList, config: &PolyConfig) -> Self {
        normalize(&mut terms, config);
        Self { terms }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of non-zero terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.size()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the terms in descending exponent order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        self.terms.as_slice()
    }

    /// Returns the underlying term container.
    #[must_use]
    pub fn term_list(&self) -> &TermList {
        &self.terms
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<u64> {
        self.leading_term().map(|t| t.exponent)
    }

    /// Returns the term with the largest exponent.
    #[must_use]
    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.at(0)
    }

    /// Returns true if every coefficient is finite.
    ///
    /// Only `f64` overflow in arithmetic (e.g. squaring `1e200x`) can make
    /// this false.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.terms.iter().all(|t| t.coefficient.is_finite())
    }

    /// Returns the coefficient of `x^e` (zero if absent).
    #[must_use]
    pub fn coefficient(&self, e: u64) -> f64 {
        self.terms()
            .binary_search_by(|t| e.cmp(&t.exponent))
            .map_or(0.0, |i| self.terms()[i].coefficient)
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.add_with(other, &PolyConfig::default())
    }

    /// Adds two polynomials by merging their sorted term lists.
    #[must_use]
    pub fn add_with(&self, other: &Self, config: &PolyConfig) -> Self {
        let a = self.terms();
        let b = other.terms();
        let mut terms = TermList::with_capacity(a.len() + b.len());

        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            if a[i].exponent == b[j].exponent {
                let sum = a[i].coefficient + b[j].coefficient;
                if !config.is_zero(sum) {
                    terms.append(sum, a[i].exponent);
                }
                i += 1;
                j += 1;
            } else if a[i].exponent > b[j].exponent {
                push_nonzero(&mut terms, a[i], config);
                i += 1;
            } else {
                push_nonzero(&mut terms, b[j], config);
                j += 1;
            }
        }

        for &t in a[i..].iter().chain(&b[j..]) {
            push_nonzero(&mut terms, t, config);
        }

        Self { terms }
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|t| Term::new(-t.coefficient, t.exponent))
                .collect(),
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Subtracts two polynomials with an explicit configuration.
    #[must_use]
    pub fn sub_with(&self, other: &Self, config: &PolyConfig) -> Self {
        self.add_with(&other.neg(), config)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: f64) -> Self {
        self.scale_with(c, &PolyConfig::default())
    }

    /// Multiplies by a scalar with an explicit configuration.
    #[must_use]
    pub fn scale_with(&self, c: f64, config: &PolyConfig) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|t| Term::new(t.coefficient * c, t.exponent))
                .filter(|t| !config.is_zero(t.coefficient))
                .collect(),
        }
    }

    /// Multiplies two polynomials.
    ///
    /// # Panics
    ///
    /// Panics if a product exponent overflows `u64`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        self.mul_with(other, &PolyConfig::default())
    }

    /// Multiplies two polynomials with an explicit configuration.
    ///
    /// Every cross term is folded into an exponent-indexed accumulator. At
    /// or above `config.parallel_threshold` cross terms, each row of `self`
    /// is accumulated on the rayon pool and the rows are then merged in
    /// order, which yields the same sums as the sequential path.
    ///
    /// # Panics
    ///
    /// Panics if a product exponent overflows `u64`.
    #[must_use]
    #[tracing::instrument(skip_all, name = "Polynomial::mul", fields(lhs = self.len(), rhs = other.len()))]
    pub fn mul_with(&self, other: &Self, config: &PolyConfig) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let pairs = self.len().saturating_mul(other.len());
        let acc = if pairs >= config.parallel_threshold {
            debug!(pairs, "parallel cross-term accumulation");
            self.terms()
                .par_iter()
                .map(|a| ExponentAccumulator::row(a, other.terms()))
                .collect::<Vec<_>>()
                .into_iter()
                .fold(ExponentAccumulator::with_capacity(other.len()), |mut acc, row| {
                    acc.merge(row);
                    acc
                })
        } else {
            let mut acc = ExponentAccumulator::with_capacity(self.len() + other.len());
            for a in self.terms() {
                for b in other.terms() {
                    acc.add(a.mul(b));
                }
            }
            acc
        };

        Self::from_raw(acc.into_terms(), config)
    }

    /// Raises the polynomial to a non-negative integer power.
    ///
    /// # Panics
    ///
    /// Panics if a product exponent overflows `u64`.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::constant(1.0);
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base);
            }
        }

        result
    }

    /// Evaluates the polynomial at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms.iter().map(|t| t.eval(x)).sum()
    }

    /// Returns true if both polynomials have the same exponents and their
    /// coefficients differ by at most `tolerance`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.len() == other.len()
            && self.terms().iter().zip(other.terms()).all(|(a, b)| {
                a.exponent == b.exponent && (a.coefficient - b.coefficient).abs() <= tolerance
            })
    }

    /// Checks the canonical-form invariants.
    #[cfg(test)]
    pub(crate) fn is_canonical(&self, epsilon: f64) -> bool {
        self.terms().iter().all(|t| !t.is_negligible(epsilon))
            && self.terms().windows(2).all(|w| w[0].exponent > w[1].exponent)
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self::from_raw(iter.into_iter().collect(), &PolyConfig::default())
    }
}

/// Appends `term` unless its coefficient is zero under `config`.
fn push_nonzero(terms: &mut TermList, term: Term, config: &PolyConfig) {
    if !config.is_zero(term.coefficient) {
        terms.push(term);
    }
}

fn validate_term(coefficient: f64, exponent: i64) -> Result<Term, InputError> {
    if !coefficient.is_finite() {
        return Err(InputError::NonFiniteCoefficient(coefficient));
    }
    if exponent < 0 {
        return Err(InputError::NegativeExponent(exponent));
    }
    let exponent = u32::try_from(exponent).map_err(|_| InputError::ExponentTooLarge(exponent))?;
    Ok(Term::new(coefficient, u64::from(exponent)))
}

/// Sorts by descending exponent, sums like terms, prunes zeros.
fn normalize(terms: &mut TermList, config: &PolyConfig) {
    let v = terms.as_mut_vec();
    let input = v.len();
    v.sort_by(|a, b| b.exponent.cmp(&a.exponent));

    let mut write = 0;
    let mut read = 0;
    while read < v.len() {
        let exponent = v[read].exponent;
        let mut coefficient = v[read].coefficient;
        read += 1;
        while read < v.len() && v[read].exponent == exponent {
            coefficient += v[read].coefficient;
            read += 1;
        }
        if !config.is_zero(coefficient) {
            v[write] = Term::new(coefficient, exponent);
            write += 1;
        }
    }
    v.truncate(write);

    trace!(input, kept = write, "normalized terms");
}

/// Sums terms by exponent through an exponent-to-index map.
struct ExponentAccumulator {
    index: FxHashMap<u64, usize>,
    terms: TermList,
}

impl ExponentAccumulator {
    fn with_capacity(capacity: usize) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(capacity);
        Self {
            index,
            terms: TermList::with_capacity(capacity),
        }
    }

    /// Accumulates `a * b` for every `b`.
    fn row(a: &Term, others: &[Term]) -> Self {
        let mut acc = Self::with_capacity(others.len());
        for b in others {
            acc.add(a.mul(b));
        }
        acc
    }

    fn add(&mut self, term: Term) {
        match self.index.get(&term.exponent) {
            Some(&i) => self.terms.as_mut_vec()[i].coefficient += term.coefficient,
            None => {
                self.index.insert(term.exponent, self.terms.size());
                self.terms.push(term);
            }
        }
    }

    fn merge(&mut self, other: Self) {
        for term in other.terms.iter() {
            self.add(*term);
        }
    }

    fn into_terms(self) -> TermList {
        self.terms
    }
}
