//! Parsing raw term data into polynomials.
//!
//! Two input shapes are understood:
//! - counted term lists: a term count followed by that many
//!   `coefficient exponent` pairs, all whitespace separated
//!   (`"3  3 2  2 1  -5 0"`);
//! - polynomial text as produced by `Display` (`"3x^2 + 2x - 5"`), via
//!   [`str::parse`].

use std::str::FromStr;

use crate::config::PolyConfig;
use crate::error::InputError;
use crate::polynomial::Polynomial;

/// Parses a counted term list with the default configuration.
///
/// # Errors
///
/// Returns [`InputError`] if a token is not a number of the expected kind,
/// the count is negative, fewer pairs than declared are present, or a term
/// is rejected by [`Polynomial::from_terms`].
pub fn parse_counted(input: &str) -> Result<Polynomial, InputError> {
    parse_counted_with(input, &PolyConfig::default())
}

/// Parses a counted term list with an explicit configuration.
///
/// Tokens after the declared pairs are ignored.
///
/// # Errors
///
/// See [`parse_counted`].
pub fn parse_counted_with(input: &str, config: &PolyConfig) -> Result<Polynomial, InputError> {
    let mut tokens = input.split_whitespace().enumerate();

    let count: i64 = match tokens.next() {
        Some((position, token)) => parse_token(position, token)?,
        None => {
            return Err(InputError::InvalidNumber {
                position: 0,
                token: String::new(),
            })
        }
    };
    if count < 0 {
        return Err(InputError::NegativeCount(count));
    }
    let expected = usize::try_from(count).unwrap_or(usize::MAX);

    let mut pairs: Vec<(f64, i64)> = Vec::new();
    while pairs.len() < expected {
        let (Some((cp, coefficient)), Some((ep, exponent))) = (tokens.next(), tokens.next()) else {
            return Err(InputError::MissingTerms {
                expected,
                found: pairs.len(),
            });
        };
        pairs.push((parse_token(cp, coefficient)?, parse_token(ep, exponent)?));
    }

    Polynomial::from_terms_with(pairs, config)
}

fn parse_token<T: FromStr>(position: usize, token: &str) -> Result<T, InputError> {
    token.parse().map_err(|_| InputError::InvalidNumber {
        position,
        token: token.to_owned(),
    })
}

/// Parses polynomial text with an explicit configuration.
///
/// # Errors
///
/// Returns [`InputError::Syntax`] for malformed text and the errors of
/// [`Polynomial::from_terms`] for invalid terms.
pub fn parse_polynomial_with(input: &str, config: &PolyConfig) -> Result<Polynomial, InputError> {
    let pairs = TextParser::new(input).polynomial()?;
    Polynomial::from_terms_with(pairs, config)
}

impl FromStr for Polynomial {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_polynomial_with(s, &PolyConfig::default())
    }
}

/// Recursive-descent reader over polynomial text.
///
/// ```text
/// polynomial := [sign] term (sign term)*
/// term       := number ['*'] 'x' ['^' exponent] | 'x' ['^' exponent] | number
/// ```
struct TextParser<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> TextParser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src: src.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn eat(&mut self, b: u8) -> bool {
        self.skip_ws();
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn polynomial(&mut self) -> Result<Vec<(f64, i64)>, InputError> {
        let mut pairs = Vec::new();
        let mut sign = if self.eat(b'-') {
            -1.0
        } else {
            self.eat(b'+');
            1.0
        };

        loop {
            pairs.push(self.term(sign)?);
            self.skip_ws();
            sign = match self.peek() {
                None => break,
                Some(b'+') => 1.0,
                Some(b'-') => -1.0,
                Some(_) => return Err(InputError::syntax(self.pos, "expected '+' or '-'")),
            };
            self.pos += 1;
        }

        Ok(pairs)
    }

    fn term(&mut self, sign: f64) -> Result<(f64, i64), InputError> {
        self.skip_ws();
        let start = self.pos;
        let coefficient = self.number()?;

        if coefficient.is_some() && self.eat(b'*') {
            self.skip_ws();
            if self.peek() != Some(b'x') {
                return Err(InputError::syntax(self.pos, "expected 'x' after '*'"));
            }
        }

        if self.eat(b'x') {
            let exponent = if self.eat(b'^') { self.exponent()? } else { 1 };
            return Ok((sign * coefficient.unwrap_or(1.0), exponent));
        }

        match coefficient {
            Some(c) => Ok((sign * c, 0)),
            None => Err(InputError::syntax(start, "expected a number or 'x'")),
        }
    }

    fn number(&mut self) -> Result<Option<f64>, InputError> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit() || b == b'.') {
            self.pos += 1;
        }
        if self.pos == start {
            return Ok(None);
        }

        // Scientific notation, as long as digits follow.
        if matches!(self.peek(), Some(b'e' | b'E')) {
            let mut end = self.pos + 1;
            if matches!(self.src.get(end), Some(b'+' | b'-')) {
                end += 1;
            }
            if self.src.get(end).is_some_and(u8::is_ascii_digit) {
                self.pos = end;
                while self.peek().is_some_and(|b| b.is_ascii_digit()) {
                    self.pos += 1;
                }
            }
        }

        self.slice(start)
            .parse()
            .map(Some)
            .map_err(|_| InputError::syntax(start, "invalid number"))
    }

    fn exponent(&mut self) -> Result<i64, InputError> {
        self.skip_ws();
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        let digits = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == digits {
            return Err(InputError::syntax(self.pos, "expected an integer exponent"));
        }

        self.slice(start)
            .parse()
            .map_err(|_| InputError::syntax(start, "exponent out of range"))
    }

    fn slice(&self, start: usize) -> &'a str {
        // Only ASCII bytes are consumed, so the range is on char boundaries.
        let src: &'a [u8] = self.src;
        std::str::from_utf8(&src[start..self.pos]).unwrap_or_default()
    }
}
