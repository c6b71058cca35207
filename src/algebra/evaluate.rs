//! Public entry point: string in, normalized polynomial string out.
//!
//! # Example
//! ```
//! use RustedAlgebra::algebra::evaluate::evaluate;
//! assert_eq!(evaluate("(x+1)*(x-1)", true).unwrap(), "x² - 1");
//! assert_eq!(evaluate("(x+1)*(x-1)", false).unwrap(), "x^2-1");
//! assert!(evaluate("x/0", true).is_err());
//! ```
use crate::algebra::config::EvalConfig;
use crate::algebra::errors::AlgebraError;
use crate::algebra::expression::Expr;
use crate::algebra::formatter::format;
use crate::algebra::polynomial::Polynomial;
use crate::algebra::reducer::{ReductionStats, Reducer};
use crate::algebra::tokenizer::strip_whitespace;
use log::{Level, debug, info, log_enabled};
use std::collections::HashMap;
use tabled::{builder::Builder, settings::Style};

/// Evaluates `expression` with default precision. `format_result` selects the display form
/// (`x² - 1`) over the canonical ASCII form (`x^2-1`).
pub fn evaluate(expression: &str, format_result: bool) -> Result<String, AlgebraError> {
    let config = EvalConfig {
        format_result,
        ..EvalConfig::default()
    };
    Evaluator::new(config).evaluate(expression)
}

#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    pub fn new(config: EvalConfig) -> Self {
        Evaluator { config }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Parses and reduces `expression`, returning the polynomial and the work counters.
    pub fn reduce(&self, expression: &str) -> Result<(Polynomial, ReductionStats), AlgebraError> {
        let compact = strip_whitespace(expression);
        let expr = Expr::parse(&compact)?;
        debug!("expression tree: {}", expr);
        let mut reducer = Reducer::new(self.config.precision);
        let poly = reducer.reduce(&expr)?;
        Ok((poly, reducer.stats().clone()))
    }

    pub fn evaluate(&self, expression: &str) -> Result<String, AlgebraError> {
        let (poly, stats) = self.reduce(expression)?;
        if log_enabled!(Level::Debug) {
            log_statistics(&stats);
        }
        let result = if self.config.format_result {
            format(&poly, self.config.precision)
        } else {
            poly.render(self.config.precision)
        };
        info!("{} => {}", expression.trim(), result);
        Ok(result)
    }
}

fn log_statistics(stats: &ReductionStats) {
    let stats: HashMap<String, usize> = stats
        .as_rows()
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    let mut table = Builder::from(stats).build();
    table.with(Style::modern_rounded());
    debug!("\n \n REDUCTION STATISTICS \n \n {}", table.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Utils::logger::LogLevel;

    #[test]
    fn test_evaluate_formats_by_flag() {
        assert_eq!(evaluate("3x-5x+2", true).unwrap(), "-2x + 2");
        assert_eq!(evaluate("3x-5x+2", false).unwrap(), "-2x+2");
    }

    #[test]
    fn test_whitespace_is_ignored() {
        assert_eq!(evaluate(" ( x + 1 ) * ( x - 1 ) ", false).unwrap(), "x^2-1");
        assert_eq!(evaluate("2 x ^ 2", false).unwrap(), "2x^2");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(evaluate("", true).unwrap(), "0");
        assert_eq!(evaluate("   ", false).unwrap(), "0");
        assert_eq!(evaluate("()", true).unwrap(), "0");
    }

    #[test]
    fn test_configured_precision() {
        let evaluator = Evaluator::new(EvalConfig {
            precision: 3,
            format_result: false,
            loglevel: LogLevel::Off,
        });
        assert_eq!(evaluator.evaluate("x/3").unwrap(), "0.333x");
        assert_eq!(Evaluator::default().evaluate("x/3").unwrap(), "0.33x");
    }

    #[test]
    fn test_reduce_reports_stats() {
        let (poly, stats) = Evaluator::default().reduce("(x+1)(x-1)+(2x)/(x)").unwrap();
        assert_eq!(poly.render(2), "x^2+1");
        assert_eq!(stats.groups_simplified, 4);
        assert_eq!(stats.products, 1);
        assert_eq!(stats.quotients, 1);
        assert_eq!(stats.terms_merged, 3);
    }

    #[test]
    fn test_errors_abort_whole_call() {
        assert_eq!(evaluate("x+1+x/0", true), Err(AlgebraError::DivisionByZero));
        assert!(matches!(
            evaluate("(x+1)/(x+1)", true),
            Err(AlgebraError::UnsupportedDivision { .. })
        ));
        assert!(matches!(
            evaluate("(x+1", true),
            Err(AlgebraError::MalformedTerm(_))
        ));
    }
}
