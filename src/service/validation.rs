//! Request validation: per-field length and format rules.

use crate::error::AppError;
use regex::Regex;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, Default)]
pub struct FieldRule {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub email: bool,
}

impl FieldRule {
    pub const fn length(min: usize, max: usize) -> Self {
        FieldRule {
            min_length: Some(min),
            max_length: Some(max),
            email: false,
        }
    }

    pub const fn email() -> Self {
        FieldRule {
            min_length: Some(3),
            max_length: None,
            email: true,
        }
    }
}

pub struct RequestValidator;

impl RequestValidator {
    /// Check each (field, value, rule); the first violation is returned.
    pub fn validate(fields: &[(&str, &str, FieldRule)]) -> Result<(), AppError> {
        for (name, value, rule) in fields {
            validate_field(name, value, rule)?;
        }
        Ok(())
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"))
}

fn validate_field(name: &str, value: &str, rule: &FieldRule) -> Result<(), AppError> {
    let len = value.chars().count();
    if let Some(min) = rule.min_length {
        if len < min {
            return Err(AppError::Validation(format!("{} must be at least {} characters", name, min)));
        }
    }
    if let Some(max) = rule.max_length {
        if len > max {
            return Err(AppError::Validation(format!("{} must be at most {} characters", name, max)));
        }
    }
    if rule.email && !email_pattern().is_match(value) {
        return Err(AppError::Validation(format!("{} must be a valid email", name)));
    }
    Ok(())
}
