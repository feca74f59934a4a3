use crate::utils::error::{AmalgamError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AmalgamError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AmalgamError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AmalgamError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list(field_name: &str, values: &[String]) -> Result<()> {
    if values.is_empty() {
        return Err(AmalgamError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique(field_name: &str, values: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value.as_str()) {
            return Err(AmalgamError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.clone(),
                reason: "Listed more than once".to_string(),
            });
        }
    }
    Ok(())
}

/// Both lists must name exactly the same set of entries.
pub fn validate_same_entries(
    field_name: &str,
    values: &[String],
    reference_field: &str,
    reference: &[String],
) -> Result<()> {
    let expected: HashSet<&str> = reference.iter().map(String::as_str).collect();
    let actual: HashSet<&str> = values.iter().map(String::as_str).collect();

    if let Some(extra) = values.iter().find(|v| !expected.contains(v.as_str())) {
        return Err(AmalgamError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: extra.clone(),
            reason: format!("Not listed in {}", reference_field),
        });
    }
    if let Some(missing) = reference.iter().find(|v| !actual.contains(v.as_str())) {
        return Err(AmalgamError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("'{}' from {} is never merged", missing, reference_field),
        });
    }
    Ok(())
}
