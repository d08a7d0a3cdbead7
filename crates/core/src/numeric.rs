//! Numeric policy shared by the calculators: rounding and input guards.

use crate::error::{AdvisoryError, AdvisoryResult};

/// Round to `decimals` places, half away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// `part / whole * 100` rounded to 2 decimals, or 0 when `whole` is not positive.
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        round_to(part / whole * 100.0, 2)
    } else {
        0.0
    }
}

/// Reject NaN and infinities.
pub fn ensure_finite(field: &str, value: f64) -> AdvisoryResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AdvisoryError::invalid_input(format!(
            "{field} must be a finite number"
        )))
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(field: &str, value: f64) -> AdvisoryResult<f64> {
    let value = ensure_finite(field, value)?;
    if value <= 0.0 {
        return Err(AdvisoryError::invalid_input(format!(
            "{field} must be greater than zero"
        )));
    }
    Ok(value)
}

/// Finite and zero or greater.
pub fn ensure_non_negative(field: &str, value: f64) -> AdvisoryResult<f64> {
    let value = ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(AdvisoryError::invalid_input(format!(
            "{field} cannot be negative"
        )));
    }
    Ok(value)
}

/// Finite and inside `[min, max]`.
pub fn ensure_within(field: &str, value: f64, min: f64, max: f64) -> AdvisoryResult<f64> {
    let value = ensure_finite(field, value)?;
    if value < min || value > max {
        return Err(AdvisoryError::invalid_input(format!(
            "{field} must be between {min} and {max}"
        )));
    }
    Ok(value)
}
