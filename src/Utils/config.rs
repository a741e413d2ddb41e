//! Settings of the algebra engine, read from TOML.
//!
//! ```toml
//! log_level = "debug"      # off | error | warn | info | debug | trace
//! log_to_console = true
//! log_file = "algebra.log" # or `true` for log_<date>_<time>.txt
//! ```
use crate::Utils::logger::timestamped_log_name;
use crate::algebra::algebra_error::{AlgebraError, Result};
use log::warn;
use simplelog::LevelFilter;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use strum_macros::{Display, EnumString};
use toml::{Table, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlgebraSettings {
    pub log_level: LogLevel,
    pub log_to_console: bool,
    /// `None` disables the file logger
    pub log_file: Option<String>,
}

impl Default for AlgebraSettings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_to_console: true,
            log_file: None,
        }
    }
}

fn config_error(message: String) -> AlgebraError {
    AlgebraError::InvalidSettings(message)
}

impl AlgebraSettings {
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.into()
    }

    /// missing keys keep their default value
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let table = input
            .parse::<Table>()
            .map_err(|e| config_error(e.to_string()))?;
        let mut settings = Self::default();
        for (key, value) in &table {
            match (key.as_str(), value) {
                ("log_level", Value::String(level)) => {
                    settings.log_level = LogLevel::from_str(level)
                        .map_err(|_| config_error(format!("unknown log level '{}'", level)))?;
                }
                ("log_to_console", Value::Boolean(flag)) => settings.log_to_console = *flag,
                ("log_file", Value::String(name)) => settings.log_file = Some(name.clone()),
                ("log_file", Value::Boolean(true)) => {
                    settings.log_file = Some(timestamped_log_name())
                }
                ("log_file", Value::Boolean(false)) => settings.log_file = None,
                ("log_level" | "log_to_console" | "log_file", other) => {
                    return Err(config_error(format!(
                        "'{}' has an unexpected value {}",
                        key, other
                    )));
                }
                _ => warn!("unknown settings key '{}' ignored", key),
            }
        }
        Ok(settings)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| config_error(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }
}
