//! simplelog initialisation driven by [`AlgebraSettings`]. The library itself only talks to the
//! `log` facade; the host decides whether and where records go by calling [`init_logger`].
use crate::Utils::config::AlgebraSettings;
use chrono::Local;
use log::{info, warn};
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::File;

/// "log_2025-01-31_12-00-00.txt"
pub fn timestamped_log_name() -> String {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!("log_{}.txt", date_and_time)
}

// a file that cannot be created is reported and skipped
fn build_loggers(settings: &AlgebraSettings) -> (Vec<Box<dyn SharedLogger>>, Option<String>) {
    let level = settings.level_filter();
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    let mut file_error = None;
    if settings.log_to_console {
        loggers.push(TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if let Some(ref filename) = settings.log_file {
        match File::create(filename) {
            Ok(file) => loggers.push(WriteLogger::new(level, Config::default(), file)),
            Err(e) => file_error = Some(format!("cannot create log file {}: {}", filename, e)),
        }
    }
    (loggers, file_error)
}

/// Installs the global logger. Returns `false` if nothing was installed, either because the
/// settings ask for no output or because a logger is already set.
pub fn init_logger(settings: &AlgebraSettings) -> bool {
    let (loggers, file_error) = build_loggers(settings);
    if loggers.is_empty() {
        return false;
    }
    let installed = CombinedLogger::init(loggers).is_ok();
    if let Some(message) = file_error {
        warn!("{}", message);
    }
    if installed {
        info!("logging at level {}", settings.log_level);
    }
    installed
}
