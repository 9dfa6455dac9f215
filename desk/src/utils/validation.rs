/// Validation utilities for user input
use chrono::NaiveDate;

use crate::core::error::{AppError, Result};

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Turn the result into a fail-fast `Validation` error.
    pub fn into_result(self) -> Result<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(AppError::Validation(
                self.error.unwrap_or_else(|| "Invalid input".to_string()),
            ))
        }
    }
}

/// Validate a monetary amount: positive, at most 2 decimal places.
pub fn validate_amount(amount: f64) -> ValidationResult {
    if !amount.is_finite() || amount <= 0.0 {
        return ValidationResult::err("Amount must be greater than 0");
    }

    let cents = amount * 100.0;
    if (cents - cents.round()).abs() > 1e-6 {
        return ValidationResult::err("Amount cannot have more than 2 decimal places");
    }

    ValidationResult::ok()
}

/// Validate a credit duration in months
pub fn validate_duration(months: u32) -> ValidationResult {
    if months == 0 {
        return ValidationResult::err("Duration must be at least 1 month");
    }

    if months > 360 {
        return ValidationResult::err("Duration cannot exceed 360 months");
    }

    ValidationResult::ok()
}

/// Validate an interest rate given as a percent figure (5.5 = 5.5%).
pub fn validate_interest_rate(percent: f64) -> ValidationResult {
    if !percent.is_finite() || percent <= 0.0 {
        return ValidationResult::err("Interest rate must be greater than 0");
    }

    if percent > 30.0 {
        return ValidationResult::err("Interest rate cannot exceed 30%");
    }

    ValidationResult::ok()
}

/// Validate a credit start date against today (date-only comparison).
pub fn validate_start_date(date: NaiveDate, today: NaiveDate) -> ValidationResult {
    if date < today {
        return ValidationResult::err("Start date cannot be in the past");
    }

    ValidationResult::ok()
}

/// Validate that a required text field is present.
pub fn validate_required(field: &str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::err(format!("{} is required", field));
    }

    ValidationResult::ok()
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    if !email.contains('@') {
        return ValidationResult::err("Invalid email format");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::err("Invalid email format");
    }

    if parts[0].is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if parts[1].is_empty() || !parts[1].contains('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}
