//! Logging to the log file and to the console
use std::{fs::OpenOptions, io::Write, path::Path};

use env_logger::{fmt::Formatter, Builder, Logger, Target, WriteStyle};
use log::{LevelFilter, Log, Metadata, Record};

use crate::errors::{MigrateError, MigrateErrorKind};

/// Same line on both sinks: `<timestamp> - <LEVEL> - <message>`
fn format_line(buf: &mut Formatter, record: &Record<'_>) -> std::io::Result<()> {
    writeln!(
        buf,
        "{} - {} - {}",
        buf.timestamp_millis(),
        record.level(),
        record.args()
    )
}

/// Builder shared by both sinks, other crates only report warnings
fn builder(level: LevelFilter) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_CRATE_NAME"), level)
        .format(format_line);
    builder
}

/// Sends every record to the file and to the console
struct MigrationLogger {
    /// Append-only log file
    file: Logger,

    /// stderr
    console: Logger,
}

impl Log for MigrationLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.file.enabled(metadata) || self.console.enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        self.file.log(record);
        self.console.log(record);
    }

    fn flush(&self) {
        self.file.flush();
        self.console.flush();
    }
}

/// Console level for `-v` repeated `verbose` times
pub(crate) fn console_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

impl MigrationLogger {
    /// Debug and above appended to `log_file`, `console` and above to stderr
    fn new(log_file: &Path, console: LevelFilter) -> Result<Self, MigrateError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .map_err(|e| MigrateError::new_with_source(MigrateErrorKind::Logger, e))?;
        Ok(Self {
            file: builder(LevelFilter::Debug)
                .target(Target::Pipe(Box::new(file)))
                .write_style(WriteStyle::Never)
                .build(),
            console: builder(console).target(Target::Stderr).build(),
        })
    }
}

/// Install the logger: debug and above to `log_file`, `console` and above to stderr
/// # Errors
/// Error if the log file can't be opened or a logger is already installed
pub(crate) fn init_logger(log_file: &Path, console: LevelFilter) -> Result<(), MigrateError> {
    let logger = MigrationLogger::new(log_file, console)?;
    let max_level = logger.file.filter().max(logger.console.filter());
    log::set_boxed_logger(Box::new(logger))
        .map_err(|e| MigrateError::new_with_source(MigrateErrorKind::Logger, e))?;
    log::set_max_level(max_level);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use log::Level;

    fn emit(logger: &MigrationLogger, level: Level, target: &str, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{message}"))
                .level(level)
                .target(target)
                .build(),
        );
        logger.flush();
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(console_level(0), LevelFilter::Info);
        assert_eq!(console_level(1), LevelFilter::Debug);
        assert_eq!(console_level(5), LevelFilter::Trace);
    }

    #[test]
    fn unwritable_log_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let log_file = dir.path().join("missing").join("migration.log");
        let err = init_logger(&log_file, LevelFilter::Info).unwrap_err();
        assert_eq!(*err.kind(), MigrateErrorKind::Logger);
    }

    #[test]
    fn file_gets_debug_while_console_stays_at_info() {
        let dir = tempfile::tempdir().unwrap();
        let log_file = dir.path().join("migration.log");
        let logger = MigrationLogger::new(&log_file, console_level(0)).unwrap();
        let debug = Metadata::builder()
            .level(Level::Debug)
            .target("repo_migrate::migrate")
            .build();
        assert!(logger.file.enabled(&debug));
        assert!(!logger.console.enabled(&debug));

        emit(&logger, Level::Info, "repo_migrate::migrate", "Cloning proj");
        emit(&logger, Level::Debug, "repo_migrate::command", "Output:\ndone");
        emit(&logger, Level::Debug, "hyper::client", "pooled connection");
        emit(&logger, Level::Warn, "hyper::client", "connection reset");

        let contents = std::fs::read_to_string(&log_file).unwrap();
        assert!(contents.contains(" - INFO - Cloning proj\n"));
        assert!(contents.contains(" - DEBUG - Output:\ndone\n"));
        assert!(contents.contains(" - WARN - connection reset\n"));
        assert!(!contents.contains("pooled connection"));
        let first = contents.lines().next().unwrap();
        let parts: Vec<&str> = first.splitn(3, " - ").collect();
        assert_eq!(parts.len(), 3);
        // 2026-01-01T00:00:00.000Z
        assert_eq!(parts[0].len(), 24);
        assert!(parts[0].ends_with('Z'));
        assert_eq!(parts[1], "INFO");
    }

    #[test]
    fn log_file_is_appended_to() {
        let dir = tempfile::tempdir().unwrap();
        let log_file = dir.path().join("migration.log");
        let first = MigrationLogger::new(&log_file, LevelFilter::Off).unwrap();
        emit(&first, Level::Info, "repo_migrate", "first run");
        drop(first);
        let second = MigrationLogger::new(&log_file, LevelFilter::Off).unwrap();
        emit(&second, Level::Info, "repo_migrate", "second run");

        let contents = std::fs::read_to_string(&log_file).unwrap();
        let messages: Vec<&str> = contents
            .lines()
            .filter_map(|line| line.splitn(3, " - ").nth(2))
            .collect();
        assert_eq!(messages, vec!["first run", "second run"]);
    }
}
