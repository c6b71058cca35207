/// a module turns a String expression with signed, parenthesized multivariate polynomials into a normalized polynomial
///
///# Example
/// ```
/// use RustedAlgebra::algebra::evaluate::evaluate;
/// let input = "(x+y)-(x-y)";
/// let result = evaluate(input, true).unwrap();
/// assert_eq!(result, "2y");
/// println!("{} = {}", input, result);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod evaluate;
/// configuration of the evaluator (rounding precision, output form, logging), loadable from a task document
pub mod config;
/// error enum shared by all stages
pub mod errors;
/// lexer: raw string into tokens
pub mod tokenizer;
///____________________________________________________________________________________________________________________________
/// # Term model
/// 1) a monomial: coefficient and ordered map variable -> integer exponent
/// 2) parsing of a single monomial and its canonical rendering
/// 3) order-free like-term key
pub mod term;
/// multiplication, division and combination of monomials
pub mod term_algebra;
/// expression tree built by recursive descent
pub mod expression;
/// Polynomial: sequence of terms with like terms combined, and normalization of flat strings
pub mod polynomial;
/// reduction of an expression tree: simplify groups, multiply, divide, sum
pub mod reducer;
/// pretty printing with superscript exponents
pub mod formatter;
#[cfg(test)]
mod algebra_tests;
