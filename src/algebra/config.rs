//! Evaluator configuration and its loading from a task document:
//! ```text
//! engine
//!   precision: 3
//!   format: false
//! logging
//!   level: info
//! ```
//! Missing sections and keys keep their defaults, unknown keys are ignored.
use crate::Utils::logger::LogLevel;
use crate::Utils::task_parser::{DocumentMap, SectionMap, Value, parse_document_as};
use crate::algebra::term::{DEFAULT_PRECISION, MAX_PRECISION};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct EvalConfig {
    /// decimal places for rounding coefficients
    pub precision: usize,
    /// display form (`x² - 1`) instead of canonical form (`x^2-1`)
    pub format_result: bool,
    pub loglevel: LogLevel,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            precision: DEFAULT_PRECISION,
            format_result: true,
            loglevel: LogLevel::Off,
        }
    }
}

fn template() -> DocumentMap {
    let section = |keys: &[&str]| -> SectionMap {
        keys.iter().map(|key| (key.to_string(), None)).collect()
    };
    let mut template = DocumentMap::new();
    template.insert("engine".to_string(), section(&["precision", "format"]));
    template.insert("logging".to_string(), section(&["level"]));
    template
}

/// the single value stored under `section.key`, `None` when absent
fn single_value<'a>(
    doc: &'a DocumentMap,
    section: &str,
    key: &str,
) -> Result<Option<&'a Value>, String> {
    match doc.get(section).and_then(|s| s.get(key)) {
        None | Some(None) => Ok(None),
        Some(Some(values)) => match values.as_slice() {
            [value] => Ok(Some(value)),
            _ => Err(format!(
                "{}.{} expects exactly one value, got {}",
                section,
                key,
                values.len()
            )),
        },
    }
}

impl EvalConfig {
    pub fn from_document(input: &str) -> Result<Self, String> {
        let template = template();
        let doc = parse_document_as(input, Some(&template))?;
        let mut config = EvalConfig::default();

        if let Some(value) = single_value(&doc, "engine", "precision")? {
            config.precision = value
                .as_integer()
                .and_then(|p| usize::try_from(p).ok())
                .filter(|p| *p <= MAX_PRECISION)
                .ok_or_else(|| {
                    format!(
                        "engine.precision must be an integer from 0 to {}, got '{}'",
                        MAX_PRECISION, value
                    )
                })?;
        }
        if let Some(value) = single_value(&doc, "engine", "format")? {
            config.format_result = value
                .as_boolean()
                .ok_or_else(|| format!("engine.format must be true or false, got '{}'", value))?;
        }
        if let Some(value) = single_value(&doc, "logging", "level")? {
            let name = value
                .as_string()
                .ok_or_else(|| format!("logging.level must be a level name, got '{}'", value))?;
            config.loglevel = LogLevel::from_str(name)
                .map_err(|_| format!("unknown log level '{}'", name))?;
        }
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read config {}: {}", path.display(), e))?;
        EvalConfig::from_document(&contents)
    }
}
