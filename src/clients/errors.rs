//! Transport error types.
//!
//! - [`HttpResponseError`]: a non-2xx response from the API
//! - [`MaxHttpRetriesExceededError`]: retries of a 429/500 response ran out
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: the union of the above plus network failures
//!
//! # Example
//!
//! ```rust,ignore
//! use planning_center::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::MaxRetries(e)) => println!("gave up after {} tries", e.tries),
//!     Err(HttpError::InvalidRequest(e)) => println!("invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// A non-successful response from the Planning Center API.
///
/// `message` holds the JSON:API `errors` array of the response body (if any)
/// serialized as JSON, plus an `error_reference` entry carrying the
/// `X-Request-Id` when the server sent one.
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error body.
    pub message: String,
    /// Request id from the `X-Request-Id` header.
    pub error_reference: Option<String>,
}

/// Retries of a 429 or 500 response were exhausted.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of attempts made.
    pub tries: u32,
    /// Serialized error body of the last response.
    pub message: String,
    /// Request id from the `X-Request-Id` header.
    pub error_reference: Option<String>,
}

/// A request that failed validation before it was sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path does not start with `/`.
    #[error("Request path '{path}' must start with '/'.")]
    RelativePath {
        /// The rejected path.
        path: String,
    },

    /// A request was built with zero attempts.
    #[error("A request must be attempted at least once.")]
    ZeroTries,
}

/// Unified error type for the transport layer.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code of the failed response, if there was one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_includes_status_code_in_message() {
        let error = HttpResponseError {
            code: 403,
            message: r#"{"errors":[{"title":"Forbidden"}]}"#.to_string(),
            error_reference: None,
        };
        let message = error.to_string();
        assert!(message.starts_with("HTTP 403"));
        assert!(message.contains("Forbidden"));
    }

    #[test]
    fn test_max_retries_error_includes_retry_count() {
        let error = MaxHttpRetriesExceededError {
            code: 429,
            tries: 3,
            message: "{}".to_string(),
            error_reference: None,
        };
        let message = error.to_string();
        assert!(message.contains("Exceeded maximum retry count of 3"));
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");
    }

    #[test]
    fn test_status_is_exposed_for_response_errors() {
        let error = HttpError::Response(HttpResponseError {
            code: 502,
            message: "{}".to_string(),
            error_reference: None,
        });
        assert_eq!(error.status(), Some(502));

        let error = HttpError::InvalidRequest(InvalidHttpRequestError::ZeroTries);
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let error: &dyn std::error::Error = &InvalidHttpRequestError::ZeroTries;
        let _ = error;
    }
}
