use crate::utils::error::{DrillError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects `NaN` and infinities for a user-supplied reading.
pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(DrillError::InvalidInputError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_finite_config(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Threshold must be a finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_strictly_ordered<T: PartialOrd + std::fmt::Display + Copy>(
    lower_field: &str,
    lower: T,
    upper_field: &str,
    upper: T,
) -> Result<()> {
    if !(lower < upper) {
        return Err(DrillError::InvalidConfigValueError {
            field: lower_field.to_string(),
            value: lower.to_string(),
            reason: format!("Value must be below {} ({})", upper_field, upper),
        });
    }
    Ok(())
}
