//! Human-readable rendering of polynomials.
//!
//! Terms print in canonical order, e.g. `3x^2 + 2x - 5`. A coefficient of
//! magnitude one is left implicit on non-constant terms (`x`, `-x^3`), and
//! the zero polynomial prints as `0`.

use std::fmt;

use crate::polynomial::Polynomial;
use crate::term::Term;

/// Writes `|c| x^e` without sign.
fn write_magnitude(f: &mut fmt::Formatter<'_>, term: &Term) -> fmt::Result {
    let magnitude = term.coefficient.abs();

    #[allow(clippy::float_cmp)]
    let implicit = magnitude == 1.0 && term.exponent != 0;
    if !implicit {
        write!(f, "{magnitude}")?;
    }

    match term.exponent {
        0 => Ok(()),
        1 => write!(f, "x"),
        e => write!(f, "x^{e}"),
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficient.is_sign_negative() {
            write!(f, "-")?;
        }
        write_magnitude(f, self)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = self.terms().iter();
        let Some(first) = terms.next() else {
            return write!(f, "0");
        };

        write!(f, "{first}")?;
        for term in terms {
            let sign = if term.coefficient < 0.0 { " - " } else { " + " };
            f.write_str(sign)?;
            write_magnitude(f, term)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::polynomial::Polynomial;
    use crate::term::Term;

    fn poly(pairs: &[(f64, i64)]) -> Polynomial {
        Polynomial::from_terms(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn test_zero() {
        assert_eq!(Polynomial::zero().to_string(), "0");
        assert_eq!(poly(&[(5.0, 3), (-5.0, 3)]).to_string(), "0");
    }

    #[test]
    fn test_basic() {
        assert_eq!(
            poly(&[(3.0, 2), (2.0, 1), (-5.0, 0)]).to_string(),
            "3x^2 + 2x - 5"
        );
        assert_eq!(
            poly(&[(3.0, 3), (14.0, 2), (3.0, 1), (-20.0, 0)]).to_string(),
            "3x^3 + 14x^2 + 3x - 20"
        );
    }

    #[test]
    fn test_unit_coefficients() {
        assert_eq!(poly(&[(1.0, 1), (4.0, 0)]).to_string(), "x + 4");
        assert_eq!(poly(&[(-1.0, 3), (-1.0, 1)]).to_string(), "-x^3 - x");
        assert_eq!(poly(&[(1.0, 0)]).to_string(), "1");
        assert_eq!(poly(&[(2.0, 2), (-1.0, 0)]).to_string(), "2x^2 - 1");
    }

    #[test]
    fn test_leading_negative() {
        assert_eq!(poly(&[(-3.0, 2), (1.0, 0)]).to_string(), "-3x^2 + 1");
        assert_eq!(poly(&[(-7.0, 0)]).to_string(), "-7");
    }

    #[test]
    fn test_fractional_coefficients() {
        assert_eq!(poly(&[(0.5, 2), (-1.25, 1)]).to_string(), "0.5x^2 - 1.25x");
        assert_eq!(poly(&[(1.0, 2000)]).to_string(), "x^2000");
    }

    #[test]
    fn test_term_display() {
        assert_eq!(Term::new(3.0, 2).to_string(), "3x^2");
        assert_eq!(Term::new(-1.0, 1).to_string(), "-x");
        assert_eq!(Term::new(-1.0, 0).to_string(), "-1");
    }
}
