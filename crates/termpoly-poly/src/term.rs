//! Terms and the growable term container.
//!
//! A [`Term`] is a single monomial `c * x^e`. A [`TermList`] is an ordered,
//! growable sequence of terms with amortized O(1) append. The list itself
//! places no constraints on its contents; canonical ordering and like-term
//! collection belong to [`Polynomial`](crate::Polynomial).

use smallvec::SmallVec;

/// Number of terms stored inline before a [`TermList`] spills to the heap.
const INLINE_TERMS: usize = 8;

/// A single monomial `coefficient * x^exponent`.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Term {
    /// The coefficient.
    pub coefficient: f64,
    /// The exponent of `x`.
    pub exponent: u64,
}

impl Term {
    /// Creates a new term.
    #[must_use]
    pub const fn new(coefficient: f64, exponent: u64) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// Returns true if the coefficient is within `epsilon` of zero.
    #[must_use]
    pub fn is_negligible(&self, epsilon: f64) -> bool {
        self.coefficient.abs() <= epsilon
    }

    /// Multiplies two terms.
    ///
    /// # Panics
    ///
    /// Panics if the exponent sum overflows `u64`. Constructed exponents fit
    /// `u32`, so the product of two constructed polynomials never does.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let exponent = self
            .exponent
            .checked_add(other.exponent)
            .unwrap_or_else(|| panic!("exponent overflow: {} + {}", self.exponent, other.exponent));
        Self::new(self.coefficient * other.coefficient, exponent)
    }

    /// Evaluates the term at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficient * pow_u64(x, self.exponent)
    }
}

impl From<(f64, u64)> for Term {
    fn from((coefficient, exponent): (f64, u64)) -> Self {
        Self::new(coefficient, exponent)
    }
}

/// Computes `x^n` by binary exponentiation.
///
/// `x^0` is 1 for every `x`, including 0 and NaN.
#[must_use]
pub fn pow_u64(x: f64, n: u64) -> f64 {
    let mut result = 1.0;
    let mut base = x;
    let mut exp = n;

    while exp > 0 {
        if exp & 1 == 1 {
            result *= base;
        }
        exp >>= 1;
        if exp > 0 {
            base *= base;
        }
    }

    result
}

/// An ordered, growable sequence of terms.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct TermList {
    terms: SmallVec<[Term; INLINE_TERMS]>,
}

impl TermList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            terms: SmallVec::new(),
        }
    }

    /// Creates an empty list with room for `capacity` terms.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            terms: SmallVec::with_capacity(capacity),
        }
    }

    /// Appends a term at the end.
    ///
    /// Exponents are not checked for duplicates.
    pub fn append(&mut self, coefficient: f64, exponent: u64) {
        self.terms.push(Term::new(coefficient, exponent));
    }

    /// Appends an existing term at the end.
    pub fn push(&mut self, term: Term) {
        self.terms.push(term);
    }

    /// Returns the number of stored terms.
    #[must_use]
    pub fn size(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if the list holds no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the term at position `i`, if any.
    #[must_use]
    pub fn at(&self, i: usize) -> Option<&Term> {
        self.terms.get(i)
    }

    /// Returns the terms as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Term] {
        &self.terms
    }

    /// Returns an iterator over the terms.
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// Returns mutable access to the terms.
    pub(crate) fn as_mut_vec(&mut self) -> &mut SmallVec<[Term; INLINE_TERMS]> {
        &mut self.terms
    }
}

impl FromIterator<Term> for TermList {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

impl Extend<Term> for TermList {
    fn extend<I: IntoIterator<Item = Term>>(&mut self, iter: I) {
        self.terms.extend(iter);
    }
}

impl<'a> IntoIterator for &'a TermList {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
