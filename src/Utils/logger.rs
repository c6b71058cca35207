//! Logger set-up shared by the library entry points and the binary.
use chrono::Local;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::File;
use std::path::{Path, PathBuf};
use strum_macros::{Display, EnumIter, EnumString};

/// verbosity as written in config documents and on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Installs a terminal logger. `Off` installs nothing. Fails if a logger is already set.
pub fn init_logger(level: LogLevel) -> Result<(), String> {
    if level == LogLevel::Off {
        return Ok(());
    }
    let loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level.to_level_filter(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    CombinedLogger::init(loggers).map_err(|e| format!("logger was not initialized: {}", e))
}

/// Installs a terminal logger plus a file logger writing to `dir/log_<timestamp>.txt`.
/// Returns the path of the log file.
pub fn init_logger_with_file(level: LogLevel, dir: &Path) -> Result<PathBuf, String> {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let path = dir.join(format!("log_{}.txt", date_and_time));
    let file = File::create(&path)
        .map_err(|e| format!("cannot create log file {}: {}", path.display(), e))?;
    let filter = level.to_level_filter();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        filter,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ));
    loggers.push(WriteLogger::new(filter, Config::default(), file));
    CombinedLogger::init(loggers).map_err(|e| format!("logger was not initialized: {}", e))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_log_level_from_str() {
        assert_eq!(LogLevel::from_str("debug").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("Off").unwrap(), LogLevel::Off);
        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_log_level_display_round_trip() {
        for level in LogLevel::iter() {
            assert_eq!(LogLevel::from_str(&level.to_string()).unwrap(), level);
        }
        assert_eq!(LogLevel::Trace.to_string(), "trace");
    }

    #[test]
    fn test_level_filter() {
        assert_eq!(LogLevel::Off.to_level_filter(), LevelFilter::Off);
        assert_eq!(LogLevel::Info.to_level_filter(), LevelFilter::Info);
        assert!(LogLevel::Trace.to_level_filter() > LogLevel::Debug.to_level_filter());
    }

    #[test]
    fn test_off_installs_nothing() {
        assert!(init_logger(LogLevel::Off).is_ok());
    }

    // the only test that installs the global logger
    #[test]
    fn test_file_logger_creates_timestamped_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = init_logger_with_file(LogLevel::Warn, dir.path()).unwrap();
        assert!(path.exists());
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("log_") && name.ends_with(".txt"));
        assert!(init_logger(LogLevel::Info).is_err());
    }
}
