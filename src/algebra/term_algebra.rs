//! Pure operations on [`Term`]s: monomial multiplication, monomial division and combination of
//! like terms. None of them mutates its inputs and none of them rounds: coefficients keep full
//! f64 precision until the term is rendered.
use crate::algebra::errors::AlgebraError;
use crate::algebra::term::Term;
use indexmap::IndexMap;
use log::trace;
use std::ops::Neg;

/// applies `op` to the exponents of every variable of `rhs`, starting from `lhs`
fn merge_exponents(
    lhs: &IndexMap<char, i64>,
    rhs: &IndexMap<char, i64>,
    op: fn(i64, i64) -> Option<i64>,
) -> Result<IndexMap<char, i64>, AlgebraError> {
    let mut exponents = lhs.clone();
    for (name, exp) in rhs {
        let slot = exponents.entry(*name).or_insert(0);
        *slot = op(*slot, *exp)
            .ok_or_else(|| AlgebraError::malformed(format!("exponent overflow on '{}'", name)))?;
    }
    Ok(exponents)
}

/// Product of two monomials. Exponents of shared variables are summed (`x^2 * x^3 = x^5`),
/// variables keep first-seen order with `a`'s variables first.
pub fn multiply(a: &Term, b: &Term) -> Result<Term, AlgebraError> {
    let exponents = merge_exponents(&a.exponents, &b.exponents, i64::checked_add)?;
    Ok(Term::new(a.coefficient * b.coefficient, exponents))
}

/// Quotient of two monomials. Exponents of `b` are subtracted per variable and may turn
/// negative (`1 / x = x^-1`).
pub fn divide(a: &Term, b: &Term) -> Result<Term, AlgebraError> {
    if b.coefficient == 0.0 {
        return Err(AlgebraError::DivisionByZero);
    }
    let exponents = merge_exponents(&a.exponents, &b.exponents, i64::checked_sub)?;
    Ok(Term::new(a.coefficient / b.coefficient, exponents))
}

/// Sums the coefficients of terms sharing one exponent mapping. The exponents of the first
/// term are kept. Returns `None` when the sum is zero, up to the f64 cancellation error of the
/// summands (`0.1+0.2-0.3` annihilates, `0.001` does not).
pub fn combine(terms: &[Term]) -> Option<Term> {
    let first = terms.first()?;
    debug_assert!(terms.iter().all(|t| t.key() == first.key()));
    let coefficient: f64 = terms.iter().map(|t| t.coefficient).sum();
    let largest = terms
        .iter()
        .map(|t| t.coefficient.abs())
        .fold(0.0_f64, f64::max);
    if coefficient.abs() <= f64::EPSILON * largest * terms.len() as f64 {
        trace!("terms {:?} annihilated", first.key());
        return None;
    }
    Some(Term::new(coefficient, first.exponents.clone()))
}

impl Neg for &Term {
    type Output = Term;

    fn neg(self) -> Self::Output {
        Term::new(-self.coefficient, self.exponents.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn t(text: &str) -> Term {
        Term::parse_monomial(text).unwrap()
    }

    #[test]
    fn test_multiply_sums_exponents() {
        let product = multiply(&t("2x^2y"), &t("-3x^3z")).unwrap();
        assert_eq!(product.coefficient, -6.0);
        assert_eq!(product.render(2), "-6x^5yz");
    }

    #[test]
    fn test_multiply_by_constant() {
        let product = multiply(&t("4"), &t("x")).unwrap();
        assert_eq!(product, t("4x"));
    }

    #[test]
    fn test_multiply_keeps_small_coefficients() {
        let product = multiply(&t("0.001x"), &t("1000")).unwrap();
        assert_relative_eq!(product.coefficient, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_exponent_overflow_is_an_error() {
        let big = Term::new(1.0, [('x', i64::MAX)].into_iter().collect());
        assert!(matches!(
            multiply(&big, &t("x")),
            Err(AlgebraError::MalformedTerm(_))
        ));
        let small = Term::new(1.0, [('x', i64::MIN)].into_iter().collect());
        assert!(matches!(
            divide(&small, &t("x")),
            Err(AlgebraError::MalformedTerm(_))
        ));
    }

    #[test]
    fn test_divide_subtracts_exponents() {
        let quotient = divide(&t("6x^2y"), &t("3x")).unwrap();
        assert_eq!(quotient.coefficient, 2.0);
        assert_eq!(quotient.render(2), "+2xy");
    }

    #[test]
    fn test_divide_produces_negative_exponent() {
        let quotient = divide(&t("1"), &t("x")).unwrap();
        assert_eq!(quotient.render(2), "+x^-1");
        // and it is re-multipliable
        let back = multiply(&quotient, &t("x^2")).unwrap();
        assert_eq!(back.render(2), "+x");
    }

    #[test]
    fn test_divide_to_zero_exponent() {
        let quotient = divide(&t("x"), &t("x")).unwrap();
        assert!(quotient.is_constant());
        assert_eq!(quotient.render(2), "+x^0");
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide(&t("x"), &t("0")), Err(AlgebraError::DivisionByZero));
        assert_eq!(divide(&t("x"), &t("0y")), Err(AlgebraError::DivisionByZero));
    }

    #[test]
    fn test_combine() {
        let sum = combine(&[t("2x"), t("3x"), t("-0.5x")]).unwrap();
        assert_relative_eq!(sum.coefficient, 4.5, epsilon = 1e-12);
        assert_eq!(sum.exponents, t("x").exponents);
    }

    #[test]
    fn test_combine_annihilates() {
        assert_eq!(combine(&[t("x"), t("-x")]), None);
        assert_eq!(combine(&[t("0.1"), t("0.2"), t("-0.3")]), None);
        assert_eq!(combine(&[t("0x")]), None);
        assert_eq!(combine(&[]), None);
    }

    #[test]
    fn test_combine_keeps_sub_precision_sums() {
        let sum = combine(&[t("0.001x")]).unwrap();
        assert_relative_eq!(sum.coefficient, 0.001, epsilon = 1e-15);
        let sum = combine(&[t("0.0015y"), t("-0.001y")]).unwrap();
        assert_relative_eq!(sum.coefficient, 0.0005, epsilon = 1e-15);
    }

    #[test]
    fn test_combine_is_order_independent() {
        let a = combine(&[t("1.5xy"), t("-2xy"), t("4xy")]).unwrap();
        let b = combine(&[t("4xy"), t("1.5xy"), t("-2xy")]).unwrap();
        assert_relative_eq!(a.coefficient, b.coefficient, epsilon = 1e-12);
    }

    #[test]
    fn test_neg() {
        assert_eq!(-&t("3x"), t("-3x"));
    }
}
