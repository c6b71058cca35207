#![allow(non_snake_case)]
use RustedAlgebra::Utils::logger::{LogLevel, init_logger, init_logger_with_file};
use RustedAlgebra::algebra::config::EvalConfig;
use RustedAlgebra::algebra::evaluate::Evaluator;
use RustedAlgebra::algebra::term::MAX_PRECISION;
use clap::Parser;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "rusted_algebra",
    version,
    about = "Expand, divide and combine multivariate polynomials: \"(x+1)*(x-1)\" -> x² - 1"
)]
struct Cli {
    /// Expressions to evaluate; one expression per stdin line when omitted
    #[arg(allow_hyphen_values = true)]
    expressions: Vec<String>,

    /// Print canonical ASCII form (x^2-1) instead of display form
    #[arg(long)]
    raw: bool,

    /// Decimal places for coefficients
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=MAX_PRECISION as i64))]
    precision: Option<u8>,

    /// Task document with `engine` and `logging` sections
    #[arg(long)]
    config: Option<PathBuf>,

    /// off, error, warn, info, debug or trace
    #[arg(long)]
    loglevel: Option<LogLevel>,

    /// Also write the log to a timestamped file in this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn build_config(cli: &Cli) -> Result<EvalConfig, String> {
    let mut config = match &cli.config {
        Some(path) => EvalConfig::from_file(path)?,
        None => EvalConfig::default(),
    };
    if cli.raw {
        config.format_result = false;
    }
    if let Some(precision) = cli.precision {
        config.precision = usize::from(precision);
    }
    if let Some(level) = cli.loglevel {
        config.loglevel = level;
    }
    Ok(config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let logger = match &cli.log_dir {
        Some(dir) => init_logger_with_file(config.loglevel, dir).map(|_| ()),
        None => init_logger(config.loglevel),
    };
    if let Err(e) = logger {
        eprintln!("{}", e);
    }
    let evaluator = Evaluator::new(config);

    let expressions: Vec<String> = if cli.expressions.is_empty() {
        match io::stdin().lock().lines().collect::<Result<Vec<_>, _>>() {
            Ok(lines) => lines
                .into_iter()
                .filter(|line| !line.trim().is_empty())
                .collect(),
            Err(e) => {
                eprintln!("error: cannot read stdin: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        cli.expressions
    };

    let mut failed = false;
    for expression in &expressions {
        match evaluator.evaluate(expression) {
            Ok(result) => println!("{}", result),
            Err(e) => {
                eprintln!("error: {}", e);
                failed = true;
            }
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
