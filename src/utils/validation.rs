use crate::utils::error::{FormError, Result};
use regex::Regex;
use std::sync::LazyLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

// Local part of permitted atext characters, then dot-separated host labels.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email shape regex is valid")
});

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;

/// Length as the user sees it: Unicode scalar values, not bytes.
pub fn char_length(value: &str) -> usize {
    value.chars().count()
}

pub fn is_email_shape(value: &str) -> bool {
    if value.is_empty() || char_length(value) > MAX_EMAIL_LENGTH {
        return false;
    }
    match value.split_once('@') {
        Some((local, _)) if !local.is_empty() && char_length(local) <= MAX_LOCAL_PART_LENGTH => {
            EMAIL_SHAPE.is_match(value)
        }
        _ => false,
    }
}

/// Anchors a pattern source so it has to match the whole value.
pub fn anchor_pattern(source: &str) -> String {
    let mut anchored = String::with_capacity(source.len() + 2);
    if !source.starts_with('^') {
        anchored.push('^');
    }
    anchored.push_str(source);
    if !source.ends_with('$') {
        anchored.push('$');
    }
    anchored
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FormError::ConfigValidationError {
            field: field_name.to_string(),
            message: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(FormError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("Value must be at least {}, got {}", min_value, value),
        });
    }
    Ok(())
}
