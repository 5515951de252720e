//! # Validation Module
//!
//! Input validation for SplitTrip.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Gate                                    │
//! │                                                                         │
//! │  User types bill text                                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  is_valid_bill(text) ← THIS MODULE                                     │
//! │           │                                                             │
//! │           ├── false → controls hidden, nothing is calculated           │
//! │           │                                                             │
//! │           └── true  → split / tip controls shown,                      │
//! │                       calculator runs on every change                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The bill check is deliberately strict: only ASCII digits after trimming.
//! A decimal point makes the text invalid.
//!
//! ## Usage
//! ```rust
//! use splittrip_core::validation::{is_valid_bill, validate_split_count};
//!
//! assert!(is_valid_bill("  125  "));
//! assert!(!is_valid_bill("12.5"));
//! assert!(validate_split_count(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::BillAmount;
use crate::{MAX_BILL, MAX_TIP_PERCENT, MIN_SPLIT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Bill Text
// =============================================================================

/// Returns whether the bill text can be used for calculations.
///
/// ## Rules
/// - Trimmed text must not be empty
/// - Every character of the trimmed text must be an ASCII digit
/// - The amount must not exceed [`MAX_BILL`]
///
/// ## Example
/// ```rust
/// use splittrip_core::validation::is_valid_bill;
///
/// assert!(is_valid_bill("125"));
/// assert!(!is_valid_bill(""));
/// assert!(!is_valid_bill("   "));
/// ```
pub fn is_valid_bill(text: &str) -> bool {
    validate_bill_text(text).is_ok()
}

/// Validates bill text and parses it into a [`BillAmount`].
///
/// ## Rules
/// Same as [`is_valid_bill`], with the reason reported on failure.
pub fn validate_bill_text(text: &str) -> ValidationResult<BillAmount> {
    let digits = check_bill_text(text)?;

    // Only overflow can fail here: the text is already known to be digits.
    let units = digits
        .parse::<u64>()
        .ok()
        .filter(|units| *units <= MAX_BILL)
        .ok_or_else(bill_out_of_range)?;

    Ok(BillAmount::from_parsed(units as f64))
}

/// Validates a bill that arrives as a number rather than text.
///
/// ## Rules
/// - Must be finite and a whole number
/// - Must be between 0 and [`MAX_BILL`]
pub fn validate_bill_value(value: f64) -> ValidationResult<BillAmount> {
    if !value.is_finite() || !(0.0..=MAX_BILL as f64).contains(&value) {
        return Err(bill_out_of_range());
    }

    if value.fract() != 0.0 {
        return Err(ValidationError::InvalidFormat {
            field: "bill".to_string(),
            reason: "must be a whole number".to_string(),
        });
    }

    Ok(BillAmount::from_parsed(value))
}

fn bill_out_of_range() -> ValidationError {
    ValidationError::OutOfRange {
        field: "bill".to_string(),
        min: 0.0,
        max: MAX_BILL as f64,
    }
}

fn check_bill_text(text: &str) -> ValidationResult<&str> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "bill".to_string(),
        });
    }

    if !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "bill".to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    Ok(text)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a split count.
///
/// ## Rules
/// - Must be at least [`MIN_SPLIT`] (1); zero would divide by zero
pub fn validate_split_count(count: u32) -> ValidationResult<()> {
    if count < MIN_SPLIT {
        return Err(ValidationError::MustBePositive {
            field: "split".to_string(),
        });
    }

    Ok(())
}

/// Validates a tip percentage.
///
/// ## Rules
/// - Must be between 0 and [`MAX_TIP_PERCENT`] (100)
pub fn validate_tip_percent(percent: u8) -> ValidationResult<()> {
    if percent > MAX_TIP_PERCENT {
        return Err(ValidationError::OutOfRange {
            field: "tip".to_string(),
            min: 0.0,
            max: MAX_TIP_PERCENT as f64,
        });
    }

    Ok(())
}

/// Validates an exact slider position.
///
/// ## Rules
/// - Must be finite
/// - Must be between 0.0 and 1.0 inclusive
pub fn validate_slider_position(position: f32) -> ValidationResult<()> {
    if !position.is_finite() || !(0.0..=1.0).contains(&position) {
        return Err(ValidationError::OutOfRange {
            field: "slider".to_string(),
            min: 0.0,
            max: 1.0,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
