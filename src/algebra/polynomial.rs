//! # Polynomial normalizer
//!
//! A [`Polynomial`] is an ordered sequence of [`Term`]s in which no two terms share an exponent
//! mapping. Every constructor folds like terms through [`combine`] and keeps the position of the
//! first occurrence, so output order is deterministic: the order in which monomials first appear
//! in the input (or in the cross product, for multiplication).
//!
//! # Example
//! ```
//! use RustedAlgebra::algebra::polynomial::normalize;
//! assert_eq!(normalize("3x-5x+2", 2).unwrap(), "-2x+2");
//! assert_eq!(normalize("2x*3x^-1y", 2).unwrap(), "6x^0y");
//! ```
use crate::algebra::errors::AlgebraError;
use crate::algebra::expression::Expr;
use crate::algebra::reducer::Reducer;
use crate::algebra::term::{DEFAULT_PRECISION, MonomialKey, Term};
use crate::algebra::term_algebra::{combine, divide, multiply};
use indexmap::IndexMap;
use itertools::Itertools;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// the empty sum
    pub fn zero() -> Self {
        Polynomial { terms: Vec::new() }
    }

    /// Folds `terms` by exponent mapping, dropping everything that annihilates.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = Term>,
    {
        let mut groups: IndexMap<MonomialKey, Vec<Term>> = IndexMap::new();
        for term in terms {
            groups.entry(term.key()).or_default().push(term);
        }
        let terms = groups
            .values()
            .filter_map(|like_terms| combine(like_terms))
            .collect();
        Polynomial { terms }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// the single term of a monomial, `None` for zero or multi-term polynomials
    pub fn as_monomial(&self) -> Option<&Term> {
        match self.terms.as_slice() {
            [single] => Some(single),
            _ => None,
        }
    }

    /// full cross product, every term of `self` against every term of `other`
    pub fn mul(&self, other: &Polynomial) -> Result<Polynomial, AlgebraError> {
        let products = self
            .terms
            .iter()
            .cartesian_product(other.terms.iter())
            .map(|(a, b)| multiply(a, b))
            .collect::<Result<Vec<Term>, AlgebraError>>()?;
        Ok(Polynomial::from_terms(products))
    }

    /// divides every term by one monomial
    pub fn div_monomial(&self, divisor: &Term) -> Result<Polynomial, AlgebraError> {
        let quotients = self
            .terms
            .iter()
            .map(|term| divide(term, divisor))
            .collect::<Result<Vec<Term>, AlgebraError>>()?;
        Ok(Polynomial::from_terms(quotients))
    }

    /// flips the sign of every term
    pub fn neg(&self) -> Polynomial {
        Polynomial {
            terms: self.terms.iter().map(|t| -t).collect(),
        }
    }

    pub fn add(&self, other: &Polynomial) -> Polynomial {
        Polynomial::from_terms(self.terms.iter().chain(other.terms.iter()).cloned())
    }

    /// canonical ASCII form, e.g. `3x^2-5x+7`; terms rounding to zero at `precision` are
    /// skipped and `"0"` is returned when nothing is left
    pub fn render(&self, precision: usize) -> String {
        let joined: String = self.terms.iter().map(|t| t.render(precision)).collect();
        let joined = joined.strip_prefix('+').unwrap_or(&joined);
        if joined.is_empty() {
            "0".to_string()
        } else {
            joined.to_string()
        }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(DEFAULT_PRECISION))
    }
}

/// Normalizes a flat (bracket-free) polynomial string into canonical form: monomial products
/// first, then monomial quotients, then like-term combination.
pub fn normalize(flat: &str, precision: usize) -> Result<String, AlgebraError> {
    let expr = Expr::parse(flat)?;
    if expr.has_groups() {
        return Err(AlgebraError::malformed(format!(
            "'{}' is not a flat polynomial",
            flat
        )));
    }
    let poly = Reducer::new(precision).reduce(&expr)?;
    Ok(poly.render(precision))
}
