//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`StorageError`] - localStorage reads and writes
//! - [`QueryError`] - Query client failures surfaced to views
//! - [`ValidationError`] - User input rejected before any request is made

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON (de)serialization error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Persistent storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage not available (private mode, non-browser target).
    #[error("localStorage not available")]
    Unavailable,
    /// The browser refused the write (quota, permissions).
    #[error("failed to write '{0}' to localStorage")]
    WriteFailed(String),
}

/// Errors surfaced by the query client to the owning view.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// Every allowed attempt failed; `source` is the last failure.
    #[error("query '{key}' failed after {attempts} attempt(s): {source}")]
    Failed {
        key: String,
        attempts: u32,
        #[source]
        source: FetchError,
    },
    /// Cached data exists but does not decode into the requested type.
    #[error("cached data for '{key}' could not be decoded: {message}")]
    Decode { key: String, message: String },
}

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("enter a domain name")]
    EmptyDomain,
    #[error("domain name is longer than 253 characters")]
    DomainTooLong,
    #[error("'{0}' is not a valid domain label")]
    InvalidLabel(String),
    #[error("unsupported record type '{0}'")]
    UnknownRecordType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_message_names_key_and_attempts() {
        let err = QueryError::Failed {
            key: "analytics/stats".to_string(),
            attempts: 2,
            source: FetchError::HttpError(503),
        };
        assert_eq!(
            err.to_string(),
            "query 'analytics/stats' failed after 2 attempt(s): HTTP error: 503"
        );
    }

    #[test]
    fn test_query_error_exposes_source() {
        use std::error::Error as _;

        let err = QueryError::Failed {
            key: "k".to_string(),
            attempts: 1,
            source: FetchError::Timeout,
        };
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("Request timed out"));
    }
}
