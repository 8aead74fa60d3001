//! # Reading the precision
use thiserror::Error;

/// Why no precision could be read from the operator's input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrecisionError {
    /// The input holds no tokens.
    #[error("no precision given")]
    Empty,
    /// A token is not a whole number.
    #[error("\"{0}\" is not a whole number")]
    NotAnInteger(String),
    /// A token is a negative number.
    #[error("precision can't be negative, got {0}")]
    Negative(i64),
}

/// Read a precision from the text of the precision region.
///
/// Tokens are tried from left to right, and the first non-negative integer is accepted without
/// looking at the rest. Tokens that are not integers or are negative are skipped.
///
/// # Errors
///
/// If no token is accepted: the error of the last token tried, or `PrecisionError::Empty` when
/// there are no tokens at all.
pub fn parse(text: &str) -> Result<u32, PrecisionError> {
    let mut last_error = PrecisionError::Empty;

    for token in text.split_whitespace() {
        match token.parse::<i64>() {
            Ok(value) if value < 0 => last_error = PrecisionError::Negative(value),
            Ok(value) => match u32::try_from(value) {
                Ok(precision) => return Ok(precision),
                Err(_) => last_error = PrecisionError::NotAnInteger(token.to_string()),
            },
            Err(_) => last_error = PrecisionError::NotAnInteger(token.to_string()),
        }
    }

    Err(last_error)
}
