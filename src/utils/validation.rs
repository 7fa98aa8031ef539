use crate::utils::error::{GalleryError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> GalleryError {
    GalleryError::ValidationError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_non_negative_amount(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(
            field_name,
            &value.to_string(),
            "Value must be a finite, non-negative number",
        ));
    }
    Ok(())
}

pub fn parse_year(field_name: &str, input: &str) -> Result<i32> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|e| invalid(field_name, input.trim(), format!("Not a whole number: {}", e)))
}

pub fn parse_amount(field_name: &str, input: &str) -> Result<f64> {
    let value = input
        .trim()
        .parse::<f64>()
        .map_err(|e| invalid(field_name, input.trim(), format!("Not a number: {}", e)))?;

    if !value.is_finite() {
        return Err(invalid(field_name, input.trim(), "Value must be finite"));
    }
    Ok(value)
}

/// Parses a 1-based position and checks it against the collection size.
pub fn parse_index(input: &str, len: usize) -> Result<usize> {
    let trimmed = input.trim();
    let index = trimmed.parse::<usize>().map_err(|_| {
        invalid("exhibition number", trimmed, "Not a positive whole number")
    })?;
    validate_index(index, len)?;
    Ok(index)
}

pub fn validate_index(index: usize, len: usize) -> Result<()> {
    if index == 0 || index > len {
        return Err(GalleryError::InvalidIndex { index, len });
    }
    Ok(())
}
