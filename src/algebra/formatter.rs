//! Human-readable rendering of a [`Polynomial`]: `3x²y - 5x + 7`.
//!
//! Zero exponents are dropped, exponent 1 is left bare and every other exponent is written with
//! Unicode superscript glyphs. Terms after the first are joined with spaced ` + ` / ` - `.
use crate::algebra::polynomial::Polynomial;
use crate::algebra::term::{Term, round_to};

fn to_superscript(c: char) -> char {
    match c {
        '0' => '\u{2070}',
        '1' => '\u{b9}',
        '2' => '\u{b2}',
        '3' => '\u{b3}',
        '4' => '\u{2074}',
        '5' => '\u{2075}',
        '6' => '\u{2076}',
        '7' => '\u{2077}',
        '8' => '\u{2078}',
        '9' => '\u{2079}',
        '-' => '\u{207b}',
        other => other,
    }
}

/// `-12` -> `⁻¹²`
pub fn superscript(exp: i64) -> String {
    exp.to_string().chars().map(to_superscript).collect()
}

/// variables of a term with zero exponents skipped
fn display_variables(term: &Term) -> String {
    let mut out = String::new();
    for (name, exp) in &term.exponents {
        match *exp {
            0 => continue,
            1 => out.push(*name),
            exp => {
                out.push(*name);
                out.push_str(&superscript(exp));
            }
        }
    }
    out
}

/// unsigned body of one term: `2x²`, `y`, `1`
fn display_body(term: &Term, magnitude: f64) -> String {
    let variables = display_variables(term);
    if variables.is_empty() {
        magnitude.to_string()
    } else if magnitude == 1.0 {
        variables
    } else {
        format!("{}{}", magnitude, variables)
    }
}

pub fn format(poly: &Polynomial, precision: usize) -> String {
    let mut out = String::new();
    for term in poly.terms() {
        if term.is_zero(precision) {
            continue;
        }
        let coefficient = round_to(term.coefficient, precision);
        let negative = coefficient < 0.0;
        if out.is_empty() {
            if negative {
                out.push('-');
            }
        } else {
            out.push_str(if negative { " - " } else { " + " });
        }
        out.push_str(&display_body(term, coefficient.abs()));
    }
    if out.is_empty() { "0".to_string() } else { out }
}
