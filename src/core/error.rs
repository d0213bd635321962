//! Typed error handling for the sift crate
//!
//! Two error regimes coexist here by design. The filter sanitizer is
//! fail-open: a field that fails coercion is dropped from the output and no
//! error ever reaches the caller. The errors in this module cover the
//! remaining, fail-closed paths: standalone `sortBy` validation and
//! configuration loading.
//!
//! # Error Categories
//!
//! - [`SortError`]: a raw sort string was rejected against a safelist
//! - [`ConfigError`]: domain configuration parsing and validation
//! - [`SiftError`]: umbrella type wrapping the above

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

use super::sort::accepted_tokens;

/// The main error type for the sift crate
#[derive(Debug)]
pub enum SiftError {
    /// Sort expression validation errors
    Sort(SortError),

    /// Configuration errors
    Config(ConfigError),
}

impl fmt::Display for SiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiftError::Sort(e) => write!(f, "{}", e),
            SiftError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SiftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SiftError::Sort(e) => Some(e),
            SiftError::Config(e) => Some(e),
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl SiftError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            SiftError::Sort(e) => e.status_code(),
            SiftError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            SiftError::Sort(e) => e.error_code(),
            SiftError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            SiftError::Sort(e) => Some(serde_json::json!({
                "field": e.field,
                "accepted": e.accepted,
            })),
            _ => None,
        }
    }
}

impl IntoResponse for SiftError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Sort Errors
// =============================================================================

/// A sort string failed validation against a domain safelist
///
/// Carries the full token enumeration (`field` and `-field` for every
/// safelisted field, in configured order). The message text is consumed by
/// API documentation and client tooling, so it enumerates the tokens rather
/// than echoing the rejected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortError {
    /// The query parameter being validated (normally `sortBy`)
    pub field: String,

    /// Every accepted token, in safelist order
    pub accepted: Vec<String>,
}

impl SortError {
    /// Build a sort error for a parameter validated against `allowed`
    pub fn new(field: &str, allowed: &[String]) -> Self {
        Self {
            field: field.to_string(),
            accepted: accepted_tokens(allowed),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }

    pub fn error_code(&self) -> &'static str {
        "INVALID_SORT"
    }
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} must be one of the following values: {}",
            self.field,
            self.accepted.join(", ")
        )
    }
}

impl std::error::Error for SortError {}

impl From<SortError> for SiftError {
    fn from(err: SortError) -> Self {
        SiftError::Sort(err)
    }
}

impl IntoResponse for SortError {
    fn into_response(self) -> Response {
        SiftError::Sort(self).into_response()
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to domain configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// No domain registered under this name
    UnknownDomain { name: String },

    /// A domain declared an empty sort safelist
    EmptySortFields { domain: String },

    /// A domain declared the same sort field twice
    DuplicateSortField { domain: String, field: String },

    /// A shape entry carries a rule that is invalid for its key
    InvalidShapeRule {
        domain: String,
        field: String,
        message: String,
    },

    /// Two domains registered under the same name
    DuplicateDomain { name: String },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::UnknownDomain { name } => {
                write!(f, "Unknown domain: {}", name)
            }
            ConfigError::EmptySortFields { domain } => {
                write!(f, "Domain '{}' has no sort fields", domain)
            }
            ConfigError::DuplicateSortField { domain, field } => {
                write!(
                    f,
                    "Domain '{}' declares sort field '{}' more than once",
                    domain, field
                )
            }
            ConfigError::InvalidShapeRule {
                domain,
                field,
                message,
            } => {
                write!(
                    f,
                    "Invalid rule for field '{}' in domain '{}': {}",
                    field, domain, message
                )
            }
            ConfigError::DuplicateDomain { name } => {
                write!(f, "Domain '{}' is registered more than once", name)
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for SiftError {
    fn from(err: ConfigError) -> Self {
        SiftError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<std::io::Error> for SiftError {
    fn from(err: std::io::Error) -> Self {
        SiftError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for SiftError {
    fn from(err: serde_yaml::Error) -> Self {
        SiftError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for sift operations
pub type SiftResult<T> = Result<T, SiftError>;
