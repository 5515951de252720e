//! # App Error Type
//!
//! Unified error type for the terminal front end.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in SplitTrip                              │
//! │                                                                         │
//! │  stdin line                                                             │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  Command::from_str ── CommandError ──────────────┐                      │
//! │      │                                           │                      │
//! │      ▼                                           ▼                      │
//! │  Command handler ──── CoreError / Validation ── AppError ──► "error: …" │
//! │      │                                           ▲           (loop      │
//! │      ▼                                           │            goes on)  │
//! │  Screen write ─────── io::Error ─────────────────┘ ────────► exit       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use splittrip_core::{CoreError, ValidationError};

use crate::commands::CommandError;
use crate::state::ConfigError;

/// Error surfaced to the user.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "bill has invalid format: must contain only digits"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// The typed line is not a command
    InvalidCommand,

    /// Environment configuration is unusable
    ConfigError,

    /// Reading stdin or writing the screen failed
    IoError,

    /// Internal error (serialization and the like)
    Internal,
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }

    /// Whether the session loop can keep going after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::ValidationError | ErrorCode::InvalidCommand
        )
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnusableBill { source, .. } => AppError::validation(source.to_string()),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

impl From<CommandError> for AppError {
    fn from(err: CommandError) -> Self {
        AppError::new(ErrorCode::InvalidCommand, err.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("terminal I/O failed: {}", err);
        AppError::new(ErrorCode::IoError, format!("terminal I/O failed: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("serialization failed: {}", err);
        AppError::internal("could not serialize the bill summary")
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unusable_bill_maps_to_validation() {
        let err = CoreError::UnusableBill {
            text: "".to_string(),
            source: ValidationError::Required {
                field: "bill".to_string(),
            },
        };
        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::ValidationError);
        assert_eq!(app.message, "bill is required");
        assert!(app.is_recoverable());
    }

    #[test]
    fn test_command_error_is_recoverable() {
        let app: AppError = CommandError::Unknown("dance".to_string()).into();
        assert_eq!(app.code, ErrorCode::InvalidCommand);
        assert!(app.is_recoverable());
    }

    #[test]
    fn test_io_error_is_fatal() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let app: AppError = io.into();
        assert_eq!(app.code, ErrorCode::IoError);
        assert!(!app.is_recoverable());
    }

    #[test]
    fn test_serialized_shape() {
        let err = AppError::validation("split must be positive");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "split must be positive");
    }

    #[test]
    fn test_display() {
        let err = AppError::validation("bill is required");
        assert_eq!(err.to_string(), "[ValidationError] bill is required");
    }
}
