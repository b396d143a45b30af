//! Shared range-validation helpers used by all domain validators.

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: i64, min: i64, max: i64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless `value` is finite and strictly positive.
pub(crate) fn validate_positive(errors: &mut Vec<String>, name: &str, value: f32) {
    if !(value.is_finite() && value > 0.0) {
        errors.push(format!("{name} = {value} must be a positive number"));
    }
}
