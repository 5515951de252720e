//! # Error Types
//!
//! Domain-specific error types for splittrip-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  splittrip-core errors (this file)                                     │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  terminal app errors (separate crate)                                  │
//! │  └── AppError         - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → screen                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculator itself never fails. Every error here comes from turning
//! raw user input into the typed values the calculator accepts.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The bill text was rejected, so nothing can be calculated yet.
    ///
    /// ## When This Occurs
    /// - The user submits an empty amount
    /// - The amount contains anything other than digits (including `.`)
    /// - The amount is larger than [`crate::MAX_BILL`]
    #[error("Bill amount '{text}' cannot be used: {source}")]
    UnusableBill {
        text: String,
        #[source]
        source: ValidationError,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements and are raised
/// before any arithmetic runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., letters or a decimal point in the bill).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
