//! # Logging
//!
//! Log records are written as `LEVEL message`, to standard error or to a file. The
//! terminal interface owns the screen, so it logs to a file or not at all.
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use env_logger::{Builder, Target, WriteStyle};
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, SetLoggerError};
use thiserror::Error;

/// Why the logger could not be installed.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file could not be created.
    #[error("failed to create log file {}: {source}", .path.display())]
    Create {
        /// Path of the log file.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// A global logger was already installed.
    #[error("logger init failed: {0}")]
    Init(#[from] SetLoggerError),
}

/// Install the global logger.
///
/// # Arguments
///
/// * `level`: Most verbose level that is written.
/// * `log_file`: File to write to, truncated if it exists. Standard error if absent.
///
/// # Errors
///
/// If the file can't be created or a logger was installed before.
pub fn init_logger(level: LevelFilter, log_file: Option<&Path>) -> Result<(), LoggingError> {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .write_style(WriteStyle::Never)
        .format(|buf: &mut Formatter, record| {
            writeln!(buf, "{} {}", level_tag(record.level()), record.args())
        });

    match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| LoggingError::Create {
                path: path.to_path_buf(),
                source,
            })?;
            builder.target(Target::Pipe(Box::new(file)));
        },
        None => {
            builder.target(Target::Stderr);
        },
    }

    Ok(builder.try_init()?)
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
