//! Error types for moneypool-core
//!
//! This module provides the error handling shared by the view builder and
//! the web layer: error codes, detailed messages, and suggestions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Date is not in DD.MM.YYYY form
    InvalidDate,
    /// Amount fields out of range
    InvalidAmount,
    /// Record failed validation
    ValidationError,
    /// Unknown resource
    NotFound,
    /// No pool with the requested id
    PoolNotFound,
    /// Pool API refused the request
    UpstreamRejected,
    /// Pool API answered with an unexpected status
    UpstreamError,
    /// Pool API could not be reached
    NetworkError,
    /// Pool API response was not a pool record
    DecodeError,
    /// Internal error
    InternalError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::InvalidDate => write!(f, "INVALID_DATE"),
            ErrorCode::InvalidAmount => write!(f, "INVALID_AMOUNT"),
            ErrorCode::ValidationError => write!(f, "VALIDATION_ERROR"),
            ErrorCode::NotFound => write!(f, "NOT_FOUND"),
            ErrorCode::PoolNotFound => write!(f, "POOL_NOT_FOUND"),
            ErrorCode::UpstreamRejected => write!(f, "UPSTREAM_REJECTED"),
            ErrorCode::UpstreamError => write!(f, "UPSTREAM_ERROR"),
            ErrorCode::NetworkError => write!(f, "NETWORK_ERROR"),
            ErrorCode::DecodeError => write!(f, "DECODE_ERROR"),
            ErrorCode::InternalError => write!(f, "INTERNAL_ERROR"),
        }
    }
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            suggestions: vec![],
        }
    }

    /// Add detail information
    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.details = Some(detail);
        self
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, "\nDetails: {}", details)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Warning - the page degrades to a failure panel
    Warning,
    /// Error - operation failed
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

/// Main error type for moneypool-core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid date '{value}': expected DD.MM.YYYY")]
    InvalidDate { value: String },

    #[error("Invalid amount for '{contributor}': {reason}")]
    InvalidAmount { contributor: String, reason: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::InvalidDate { .. } => ErrorCode::InvalidDate,
            CoreError::InvalidAmount { .. } => ErrorCode::InvalidAmount,
            CoreError::InternalError { .. } => ErrorCode::InternalError,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::InternalError { .. } => ErrorSeverity::Error,
            _ => ErrorSeverity::Warning,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::InvalidDate { value } => {
                details = details.with_detail(serde_json::json!({ "date": value }));
                details = details.with_suggestion(
                    "Transaction dates must look like 05.03.2023.".to_string()
                );
            }
            CoreError::InvalidAmount { contributor, .. } => {
                details = details.with_detail(serde_json::json!({ "contributor": contributor }));
                details = details.with_suggestion(
                    "Base must be non-negative and fraction must be between 0 and 99.".to_string()
                );
            }
            CoreError::InternalError { .. } => {}
        }

        details
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

/// Error context for reporting
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Operation being performed
    pub operation: String,
    /// Pool the operation was about
    pub pool_id: Option<String>,
}

impl ErrorContext {
    /// Create a new error context
    pub fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            pool_id: None,
        }
    }

    /// Add the pool id
    pub fn with_pool_id(mut self, pool_id: &str) -> Self {
        self.pool_id = Some(pool_id.to_string());
        self
    }
}

/// Error logger trait
pub trait ErrorLogger {
    /// Log an error
    fn log_error(&self, error: &CoreError, context: &ErrorContext);
}

/// Default error logger using log crate
#[derive(Default)]
pub struct DefaultErrorLogger;

impl ErrorLogger for DefaultErrorLogger {
    fn log_error(&self, error: &CoreError, context: &ErrorContext) {
        match error.severity() {
            ErrorSeverity::Error => log::error!(
                target: "moneypool::error",
                "{} - Operation: {} - Pool: {:?}",
                error.to_details(),
                context.operation,
                context.pool_id
            ),
            _ => log::warn!(
                target: "moneypool::error",
                "{} - Operation: {} - Pool: {:?}",
                error.to_details(),
                context.operation,
                context.pool_id
            ),
        }
    }
}

// ==================== Tests ====================
