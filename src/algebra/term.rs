//! # Term model
//!
//! A [`Term`] is one monomial: a numeric coefficient times a product of single-letter
//! variables raised to integer exponents, e.g. `-5x^2y`.
//!
//! Exponents live in an insertion-ordered map so that variables are printed in the order they
//! were first seen (`yx` stays `yx`). The order carries no algebraic meaning: like-term
//! comparison goes through [`Term::key`], which is order-free and ignores zero exponents.
use crate::algebra::errors::AlgebraError;
use crate::algebra::tokenizer::{Token, tokenize};
use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// decimal places used when no configuration is given
pub const DEFAULT_PRECISION: usize = 2;

/// most decimal places an f64 coefficient can carry meaningfully
pub const MAX_PRECISION: usize = 15;

/// order-free identity of a monomial: variables with non-zero exponents only
pub type MonomialKey = BTreeMap<char, i64>;

/// Rounds `value` to `precision` decimal places, `precision` capped at [`MAX_PRECISION`].
/// Never returns `-0.0`; values too large to scale are returned unchanged.
pub fn round_to(value: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / factor;
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub exponents: IndexMap<char, i64>,
}

impl Term {
    pub fn new(coefficient: f64, exponents: IndexMap<char, i64>) -> Self {
        Term {
            coefficient,
            exponents,
        }
    }

    pub fn constant(coefficient: f64) -> Self {
        Term::new(coefficient, IndexMap::new())
    }

    pub fn variable(name: char) -> Self {
        let mut exponents = IndexMap::new();
        exponents.insert(name, 1);
        Term::new(1.0, exponents)
    }

    /// like-term identity of this monomial
    pub fn key(&self) -> MonomialKey {
        self.exponents
            .iter()
            .filter(|(_, exp)| **exp != 0)
            .map(|(name, exp)| (*name, *exp))
            .collect()
    }

    /// true when the term depends on no variable (all exponents absent or zero)
    pub fn is_constant(&self) -> bool {
        self.exponents.values().all(|exp| *exp == 0)
    }

    /// true when the coefficient rounds to zero at `precision`
    pub fn is_zero(&self, precision: usize) -> bool {
        round_to(self.coefficient, precision) == 0.0
    }

    /// Parses a single monomial such as `-5x^2y`, `3`, `x^-1` or `-x`.
    ///
    /// Leading signs fold into the coefficient, a missing coefficient means 1 and a repeated
    /// variable accumulates its exponents (`xx^2` is `x^3`).
    pub fn parse_monomial(text: &str) -> Result<Term, AlgebraError> {
        let tokens = tokenize(text)?;
        let mut pos = 0;
        let mut sign = 1.0;
        loop {
            match tokens.get(pos) {
                Some(Token::Plus) => pos += 1,
                Some(Token::Minus) => {
                    sign = -sign;
                    pos += 1;
                }
                _ => break,
            }
        }
        let (term, consumed) = read_monomial(&tokens[pos..])?
            .ok_or_else(|| AlgebraError::malformed(format!("'{}' is not a monomial", text)))?;
        if let Some(extra) = tokens.get(pos + consumed) {
            return Err(AlgebraError::malformed(format!(
                "unexpected '{}' in monomial '{}'",
                extra, text
            )));
        }
        Ok(Term::new(sign * term.coefficient, term.exponents))
    }

    /// canonical ASCII variable run, `x^2y^-1`; zero exponents are kept as `^0`
    pub fn render_variables(&self) -> String {
        let mut out = String::new();
        for (name, exp) in &self.exponents {
            out.push(*name);
            if *exp != 1 {
                out.push_str(&format!("^{}", exp));
            }
        }
        out
    }

    /// Canonical text with an explicit leading sign (`+3x^2`, `-y`, `+0.33`, `+x^0`).
    /// A zero coefficient renders as an empty string; a unit coefficient is elided whenever a
    /// variable follows.
    pub fn render(&self, precision: usize) -> String {
        let coefficient = round_to(self.coefficient, precision);
        if coefficient == 0.0 {
            return String::new();
        }
        let sign = if coefficient < 0.0 { '-' } else { '+' };
        let magnitude = coefficient.abs();
        if magnitude == 1.0 && !self.exponents.is_empty() {
            format!("{}{}", sign, self.render_variables())
        } else {
            format!("{}{}{}", sign, magnitude, self.render_variables())
        }
    }
}

/// Reads one unsigned monomial from the head of `tokens`: `[number] (variable [power])*`.
/// Returns the term and the number of tokens consumed, or `None` when the head does not
/// start a monomial.
pub(crate) fn read_monomial(tokens: &[Token]) -> Result<Option<(Term, usize)>, AlgebraError> {
    let mut pos = 0;
    let mut coefficient = 1.0;
    let mut seen = false;
    if let Some(Token::Number(value)) = tokens.first() {
        coefficient = *value;
        pos = 1;
        seen = true;
    }
    let mut exponents: IndexMap<char, i64> = IndexMap::new();
    while let Some(Token::Variable(name)) = tokens.get(pos) {
        pos += 1;
        let exp = match tokens.get(pos) {
            Some(Token::Power(exp)) => {
                pos += 1;
                *exp
            }
            _ => 1,
        };
        let slot = exponents.entry(*name).or_insert(0);
        *slot = slot
            .checked_add(exp)
            .ok_or_else(|| AlgebraError::malformed(format!("exponent overflow on '{}'", name)))?;
        seen = true;
    }
    if let Some(Token::Power(exp)) = tokens.get(pos) {
        return Err(AlgebraError::malformed(format!(
            "exponent ^{} must follow a variable",
            exp
        )));
    }
    if !seen {
        return Ok(None);
    }
    Ok(Some((Term::new(coefficient, exponents), pos)))
}

impl FromStr for Term {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Term::parse_monomial(s)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = self.render(DEFAULT_PRECISION);
        match text.strip_prefix('+') {
            Some(rest) => write!(f, "{}", rest),
            None if text.is_empty() => write!(f, "0"),
            None => write!(f, "{}", text),
        }
    }
}
