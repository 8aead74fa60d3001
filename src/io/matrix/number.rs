//! # Number parsing
//!
//! Reading numbers from the tokens of a matrix file.

/// Separator that some locales write instead of a decimal point.
pub const DECIMAL_COMMA: char = ',';

/// Read a decimal number, accepting either a comma or a point as the decimal separator.
///
/// # Return value
///
/// `None` if the text is not a finite number after normalization.
pub fn parse(text: &str) -> Option<f64> {
    let value = if text.contains(DECIMAL_COMMA) {
        text.replace(DECIMAL_COMMA, ".").parse::<f64>()
    } else {
        text.parse::<f64>()
    };

    value.ok().filter(|value| value.is_finite())
}
