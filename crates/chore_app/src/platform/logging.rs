//! Process logger construction for the chores binary.
//!
//! Builds one [`TaskLogger`] writing to the log file, the terminal, or both.
//! Nothing is registered with the global `log` facade.

use std::fs::File;
use std::path::{Path, PathBuf};

use chore_logging::TaskLogger;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Destination for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    /// Write to the given file only.
    File(PathBuf),
    /// Write to both the file and the terminal.
    Both(PathBuf),
}

impl LogDestination {
    pub fn for_run(log_file: PathBuf, quiet: bool) -> Self {
        if quiet {
            LogDestination::File(log_file)
        } else {
            LogDestination::Both(log_file)
        }
    }
}

/// Build the logger for `destination`.
///
/// The log file is truncated. If it cannot be created, a warning goes to stderr
/// and logging continues with whatever destinations remain.
pub fn build_logger(destination: &LogDestination, level: LevelFilter) -> TaskLogger {
    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::File(path) => create_file_logger(path, level, config)
            .map(|file_logger| vec![file_logger as Box<dyn SharedLogger>])
            .unwrap_or_default(),
        LogDestination::Both(path) => {
            let mut loggers = vec![terminal_logger(level, config.clone())];
            if let Some(file_logger) = create_file_logger(path, level, config) {
                loggers.push(file_logger);
            }
            loggers
        }
    };

    if loggers.is_empty() {
        return TaskLogger::discard();
    }
    TaskLogger::new(CombinedLogger::new(loggers))
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn terminal_logger(level: LevelFilter, config: Config) -> Box<dyn SharedLogger> {
    TermLogger::new(level, config, TerminalMode::Mixed, ColorChoice::Auto)
}

fn create_file_logger(
    log_path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(err) = std::fs::create_dir_all(parent) {
            eprintln!("Warning: Could not create log directory {:?}: {}", parent, err);
            return None;
        }
    }
    match File::create(log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chore_logging::{chore_debug, chore_info, chore_warn};
    use tempfile::TempDir;

    #[test]
    fn file_logger_writes_levels_and_messages() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("logs").join("automation.log");

        let logger = build_logger(&LogDestination::File(path.clone()), LevelFilter::Info);
        chore_info!(logger, "hello file");
        chore_warn!(logger, "careful");
        chore_debug!(logger, "too chatty");
        logger.flush();

        let written = std::fs::read_to_string(&path).unwrap();
        let info_line = written.lines().find(|l| l.contains("hello file")).unwrap();
        let warn_line = written.lines().find(|l| l.contains("careful")).unwrap();
        assert!(info_line.contains("INFO"));
        assert!(warn_line.contains("WARN"));
        assert!(!written.contains("too chatty"));
    }

    #[test]
    fn file_is_truncated_per_run() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("automation.log");
        std::fs::write(&path, "previous run\n").unwrap();

        let logger = build_logger(&LogDestination::File(path.clone()), LevelFilter::Info);
        chore_info!(logger, "fresh");
        logger.flush();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("previous run"));
        assert!(written.contains("fresh"));
    }

    #[test]
    fn unwritable_file_degrades_to_discard() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        let logger = build_logger(
            &LogDestination::File(blocker.join("automation.log")),
            LevelFilter::Info,
        );
        chore_info!(logger, "goes nowhere");
    }

    #[test]
    fn quiet_selects_file_only() {
        let path = PathBuf::from("a.log");
        assert_eq!(
            LogDestination::for_run(path.clone(), true),
            LogDestination::File(path.clone())
        );
        assert_eq!(LogDestination::for_run(path.clone(), false), LogDestination::Both(path));
    }
}
