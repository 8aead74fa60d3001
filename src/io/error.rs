//! # Error reporting for reading of problem files
//!
//! A collection of enums describing any problems encountered during reading and parsing.
use std::io;

use thiserror::Error;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error("could not read problem file: {0}")]
    IO(#[from] io::Error),
    /// Contents of the file could not be parsed into a problem instance.
    ///
    /// # Note
    ///
    /// If the problem is inconsistent (e.g. rows of differing length), that will not be represented
    /// with this error. This variant is only created for syntactically incorrect files.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A `ParseError` represents all errors encountered during parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A token could not be read as a number.
    ///
    /// Both positions are 1-based: `line` is the line number in the file as read from disk,
    /// `column` is the position of the token within that line.
    #[error("malformed number \"{token}\" at line {line}, column {column}")]
    MalformedNumber {
        /// Line number, 1-based.
        line: usize,
        /// Token position within the line, 1-based.
        column: usize,
        /// The text that was read.
        token: String,
    },
    /// Not enough lines to hold at least one cost row and the demand row.
    #[error("expected at least 2 non-empty lines (costs and demand), found {lines}")]
    EmptyInput {
        /// Number of lines holding numbers.
        lines: usize,
    },
}

/// Result of a parsing step.
pub type ParseResult<T> = Result<T, ParseError>;
