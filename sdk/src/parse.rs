use crate::types::{BmiError, BmiResult};

/// Parses a weight or height typed by a user.
///
/// A decimal comma is accepted when there is no dot, so `70,5` reads as `70.5`.
pub fn parse_measurement(input: &str) -> BmiResult<f64> {
    let trimmed = input.trim();
    let invalid = || BmiError::InvalidNumber {
        input: trimmed.to_string(),
    };

    let normalized = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };

    let value: f64 = normalized.parse().map_err(|_| invalid())?;

    if !value.is_finite() {
        return Err(invalid());
    }

    Ok(value)
}
