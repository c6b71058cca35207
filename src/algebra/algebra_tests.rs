//! end-to-end checks of `evaluate` on whole expressions
use crate::algebra::config::EvalConfig;
use crate::algebra::errors::AlgebraError;
use crate::algebra::evaluate::{Evaluator, evaluate};
use crate::algebra::polynomial::normalize;
use approx::assert_relative_eq;

fn canonical(input: &str) -> String {
    evaluate(input, false).unwrap()
}

#[test]
fn test_like_terms() {
    assert_eq!(evaluate("2x+3x", true).unwrap(), "5x");
}

#[test]
fn test_difference_of_squares() {
    assert_eq!(evaluate("(x+1)*(x-1)", true).unwrap(), "x² - 1");
    assert_eq!(evaluate("(x+1)(x-1)", true).unwrap(), "x² - 1");
}

#[test]
fn test_monomial_division() {
    assert_eq!(evaluate("x^2/x", true).unwrap(), "x");
    assert_eq!(evaluate("(6x^3y-3x^2)/(3x^2)", true).unwrap(), "2xy - 1");
}

#[test]
fn test_leading_negative_term() {
    assert_eq!(evaluate("3x-5x+2", true).unwrap(), "-2x + 2");
}

#[test]
fn test_negated_group() {
    assert_eq!(evaluate("(x+y)-(x-y)", true).unwrap(), "2y");
    assert_eq!(evaluate("-(x-y)", true).unwrap(), "-x + y");
}

#[test]
fn test_zero_results() {
    assert_eq!(evaluate("x-x", true).unwrap(), "0");
    assert_eq!(evaluate("(x+1)(x-1)-(x^2-1)", false).unwrap(), "0");
    assert_eq!(evaluate("0x+0", true).unwrap(), "0");
}

#[test]
fn test_division_by_zero() {
    assert_eq!(evaluate("x/0", true), Err(AlgebraError::DivisionByZero));
    assert_eq!(evaluate("(x+1)/(y-y)", true), Err(AlgebraError::DivisionByZero));
}

#[test]
fn test_multi_term_divisor_rejected() {
    let err = evaluate("(x+1)/(x+1)", true).unwrap_err();
    assert_eq!(
        err,
        AlgebraError::UnsupportedDivision {
            divisor: "x+1".to_string()
        }
    );
    assert!(err.to_string().contains("not implemented"));
}

#[test]
fn test_negative_exponents() {
    assert_eq!(evaluate("1/x", true).unwrap(), "x⁻¹");
    assert_eq!(evaluate("x^-2*x^3", false).unwrap(), "x");
}

#[test]
fn test_deep_nesting() {
    assert_eq!(evaluate("((x+1)(x+1))-(x^2)", true).unwrap(), "2x + 1");
    assert_eq!(evaluate("(((a)))", true).unwrap(), "a");
    assert_eq!(evaluate("2((x-(y-x))+y)", false).unwrap(), "4x");
}

#[test]
fn test_multivariate_order_follows_first_appearance() {
    assert_eq!(evaluate("y+x+2y", true).unwrap(), "3y + x");
    assert_eq!(evaluate("(a+b)(a-b)", true).unwrap(), "a² - b²");
    assert_eq!(evaluate("yx+xy", false).unwrap(), "2yx");
}

#[test]
fn test_decimal_coefficients() {
    assert_eq!(evaluate("0.5x+0.25x", false).unwrap(), "0.75x");
    assert_eq!(evaluate("x/3+x/3", false).unwrap(), "0.67x");
    let (poly, _) = Evaluator::default().reduce("x/3+x/3+x/3").unwrap();
    assert_relative_eq!(poly.terms()[0].coefficient, 1.0, epsilon = 1e-12);
}

#[test]
fn test_precision_survives_multiply_divide_chains() {
    assert_eq!(canonical("0.001x*1000"), "x");
    assert_eq!(canonical("(x/1000)(1000)"), "x");
    assert_eq!(canonical("(x/3)(3)"), "x");
    assert_eq!(canonical("(0.004x+1)(0.004x-1)*1000000"), "16x^2-1000000");
    // still hidden when the final coefficient is below display precision
    assert_eq!(canonical("0.001x+y"), "y");
    assert_eq!(evaluate("(x/1000)(1000)", true).unwrap(), "x");
}

#[test]
fn test_exponent_overflow_is_malformed() {
    for bad in [
        "x^9223372036854775807*x",
        "x^9223372036854775807x",
        "(x^9223372036854775807)(x)",
        "x^-9223372036854775807/x^2",
    ] {
        assert!(
            matches!(evaluate(bad, false), Err(AlgebraError::MalformedTerm(_))),
            "{} should overflow",
            bad
        );
    }
}

#[test]
fn test_precision_upper_bound() {
    let evaluator = Evaluator::new(EvalConfig {
        precision: 400,
        format_result: false,
        ..EvalConfig::default()
    });
    assert_eq!(evaluator.evaluate("x+x+1").unwrap(), "2x+1");
    assert!(EvalConfig::from_document("engine\n  precision: 16").is_err());
}

#[test]
fn test_malformed_expressions() {
    for bad in ["(x+1", "x+1)", "x+*y", "2^2", "x3", "x#y", "x^y", "x^"] {
        assert!(
            matches!(evaluate(bad, true), Err(AlgebraError::MalformedTerm(_))),
            "{} should be malformed",
            bad
        );
    }
}

#[test]
fn test_canonical_round_trip() {
    for input in [
        "(x+1)*(x-1)",
        "3x-5x+2",
        "(x+y)-(x-y)",
        "x^2/x",
        "1/x+x",
        "(a+2b)(a-b)(c)",
        "x/x",
        "x/3",
    ] {
        let once = canonical(input);
        assert_eq!(canonical(&once), once, "input {}", input);
    }
}

#[test]
fn test_distributivity() {
    for (a, b, c) in [("x", "1", "x"), ("2x^2", "-y", "3y"), ("a", "b", "a-b")] {
        let grouped = canonical(&format!("({}+{})*({})", a, b, c));
        let expanded = canonical(&format!("({})*({})+({})*({})", a, c, b, c));
        assert_eq!(grouped, expanded);
    }
}

#[test]
fn test_division_is_inverse_of_multiplication() {
    for (m, d) in [("x^2+3x-1", "x"), ("2a-b", "4ab^2"), ("7", "y")] {
        // display form hides the x^0 left behind by cancelled variables
        assert_eq!(
            evaluate(&format!("({})*({})/({})", m, d, d), true).unwrap(),
            evaluate(m, true).unwrap()
        );
    }
}

#[test]
fn test_combination_is_commutative() {
    let sorted_terms = |input: &str| {
        let (poly, _) = Evaluator::default().reduce(input).unwrap();
        let mut terms: Vec<String> = poly.terms().iter().map(|t| t.to_string()).collect();
        terms.sort();
        terms
    };
    assert_eq!(sorted_terms("2x+y-x+3"), sorted_terms("3+y-x+2x"));
    let a = Evaluator::default().reduce("1.5x-2x+4x").unwrap().0;
    let b = Evaluator::default().reduce("4x+1.5x-2x").unwrap().0;
    assert_relative_eq!(a.terms()[0].coefficient, b.terms()[0].coefficient, epsilon = 1e-12);
}

#[test]
fn test_normalize_is_idempotent_on_evaluated_output() {
    for input in ["(x+1)(x+2)", "(2x)/(4x^2)", "x-y+z"] {
        let canonical_form = canonical(input);
        assert_eq!(normalize(&canonical_form, 2).unwrap(), canonical_form);
    }
}

#[test]
fn test_precision_from_config() {
    let config = EvalConfig::from_document("engine\n  precision: 4\n  format: false").unwrap();
    let evaluator = Evaluator::new(config);
    assert_eq!(evaluator.evaluate("x/7").unwrap(), "0.1429x");
}
