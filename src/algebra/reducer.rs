//! # Grouped-expression reducer
//!
//! Reduces an [`Expr`] tree to one [`Polynomial`]. At every level of the tree the work is split
//! into four passes that always run in the same order:
//!
//! 1. **simplify** - every bracketed group is reduced on its own and normalized;
//! 2. **multiply** - adjacent factors are multiplied by full cross product;
//! 3. **divide** - the dividend is divided by each divisor in turn; a divisor must be a single
//!    non-zero monomial;
//! 4. **sum** - every summand becomes a [`GroupedOperand`]; `-` operands are negated term by term
//!    and the whole stream is folded into like terms.
//!
//! The reducer keeps counters of the work done; they are logged by the evaluator.
use crate::algebra::errors::AlgebraError;
use crate::algebra::expression::{Expr, Sign};
use crate::algebra::polynomial::Polynomial;
use crate::algebra::term::Term;
use log::{debug, warn};

/// a summand together with the sign joining it to its neighbours
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedOperand {
    pub sign: Sign,
    pub polynomial: Polynomial,
}

impl GroupedOperand {
    pub fn new(sign: Sign, polynomial: Polynomial) -> Self {
        GroupedOperand { sign, polynomial }
    }

    /// the operand with its sign applied: `-(a-b)` becomes `+(-a+b)`
    pub fn into_additive(self) -> Polynomial {
        match self.sign {
            Sign::Plus => self.polynomial,
            Sign::Minus => self.polynomial.neg(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReductionStats {
    pub groups_simplified: usize,
    pub products: usize,
    pub quotients: usize,
    pub operands_summed: usize,
    pub terms_merged: usize,
}

impl ReductionStats {
    pub fn as_rows(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("groups simplified", self.groups_simplified),
            ("products", self.products),
            ("quotients", self.quotients),
            ("operands summed", self.operands_summed),
            ("terms merged", self.terms_merged),
        ]
    }
}

pub struct Reducer {
    precision: usize,
    stats: ReductionStats,
}

impl Reducer {
    pub fn new(precision: usize) -> Self {
        Reducer {
            precision,
            stats: ReductionStats::default(),
        }
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn stats(&self) -> &ReductionStats {
        &self.stats
    }

    pub fn reduce(&mut self, expr: &Expr) -> Result<Polynomial, AlgebraError> {
        match expr {
            Expr::Term(term) => Ok(Polynomial::from_terms([term.clone()])),
            Expr::Group(inner) => self.simplify_pass(inner),
            Expr::Product(factors) => {
                let factors = factors
                    .iter()
                    .map(|factor| self.reduce(factor))
                    .collect::<Result<Vec<_>, _>>()?;
                self.multiply_pass(factors)
            }
            Expr::Quotient(dividend, divisors) => {
                let dividend = self.reduce(dividend)?;
                let divisors = divisors
                    .iter()
                    .map(|divisor| self.reduce(divisor))
                    .collect::<Result<Vec<_>, _>>()?;
                self.divide_pass(dividend, divisors)
            }
            Expr::Sum(summands) => {
                let mut operands = Vec::with_capacity(summands.len());
                for (sign, summand) in summands {
                    operands.push(GroupedOperand::new(*sign, self.reduce(summand)?));
                }
                Ok(self.sum_pass(operands))
            }
        }
    }

    /// reduces the interior of one bracketed group independently of its neighbours
    pub fn simplify_pass(&mut self, inner: &Expr) -> Result<Polynomial, AlgebraError> {
        let poly = self.reduce(inner)?;
        self.stats.groups_simplified += 1;
        debug!("simplify: ({}) -> ({})", inner, poly.render(self.precision));
        Ok(poly)
    }

    /// multiplies factors left to right, each step a full cross product
    pub fn multiply_pass(&mut self, factors: Vec<Polynomial>) -> Result<Polynomial, AlgebraError> {
        let mut factors = factors.into_iter();
        let Some(mut product) = factors.next() else {
            return Ok(Polynomial::from_terms([Term::constant(1.0)]));
        };
        for factor in factors {
            let next = product.mul(&factor)?;
            self.stats.products += 1;
            self.stats.terms_merged += (product.len() * factor.len()).saturating_sub(next.len());
            debug!(
                "multiply: ({})({}) -> ({})",
                product.render(self.precision),
                factor.render(self.precision),
                next.render(self.precision)
            );
            product = next;
        }
        Ok(product)
    }

    /// divides by each divisor in turn; every divisor must be one non-zero monomial
    pub fn divide_pass(
        &mut self,
        dividend: Polynomial,
        divisors: Vec<Polynomial>,
    ) -> Result<Polynomial, AlgebraError> {
        let mut quotient = dividend;
        for divisor in divisors {
            if divisor.is_zero() {
                warn!("divide: ({}) by zero", quotient.render(self.precision));
                return Err(AlgebraError::DivisionByZero);
            }
            let Some(monomial) = divisor.as_monomial() else {
                let divisor = divisor.render(self.precision);
                warn!("divide: multi-term divisor ({}) rejected", divisor);
                return Err(AlgebraError::UnsupportedDivision { divisor });
            };
            let next = quotient.div_monomial(monomial)?;
            self.stats.quotients += 1;
            debug!(
                "divide: ({})/({}) -> ({})",
                quotient.render(self.precision),
                divisor.render(self.precision),
                next.render(self.precision)
            );
            quotient = next;
        }
        Ok(quotient)
    }

    /// applies every operand's sign and folds the flattened term stream
    pub fn sum_pass(&mut self, operands: Vec<GroupedOperand>) -> Polynomial {
        let count = operands.len();
        let terms: Vec<Term> = operands
            .into_iter()
            .flat_map(|operand| operand.into_additive().terms().to_vec())
            .collect();
        let incoming = terms.len();
        let sum = Polynomial::from_terms(terms);
        self.stats.operands_summed += count;
        self.stats.terms_merged += incoming.saturating_sub(sum.len());
        debug!("sum: {} operands -> ({})", count, sum.render(self.precision));
        sum
    }
}
