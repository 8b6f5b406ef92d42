//! Error types for resource operations.
//!
//! HTTP status codes are mapped to semantic variants:
//!
//! - **404**: [`ResourceError::NotFound`]
//! - **422**: [`ResourceError::ValidationFailed`]
//! - **Other 4xx/5xx**: [`ResourceError::Http`]
//!
//! A response that arrives intact but does not fit the declared record
//! shape is a [`ResourceError::SchemaMismatch`].
//!
//! # Example
//!
//! ```rust,ignore
//! use planning_center::rest::ResourceError;
//!
//! match client.services().people().get("12345").await {
//!     Ok(person) => println!("Found: {}", person.name()),
//!     Err(ResourceError::NotFound { resource, id }) => {
//!         println!("{resource} with id {id} not found");
//!     }
//!     Err(ResourceError::SchemaMismatch(e)) => println!("unexpected payload: {e}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::collections::HashMap;

use thiserror::Error;

use crate::clients::{HttpError, HttpResponseError};
use crate::rest::schema::SchemaError;

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource does not exist (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The record type (e.g. `"Person"`).
        resource: &'static str,
        /// The id that was requested, or the request path for collections.
        id: String,
    },

    /// The response did not match the declared record shape.
    #[error("Response does not match the expected shape: {0}")]
    SchemaMismatch(#[from] SchemaError),

    /// The API rejected a create or update (HTTP 422).
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Messages keyed by attribute name (`base` when no attribute applies).
        errors: HashMap<String, Vec<String>>,
        /// The request id (from the `X-Request-Id` header).
        request_id: Option<String>,
    },

    /// The response body is not a JSON:API document.
    #[error("Invalid response body from {path}: {reason}")]
    InvalidBody {
        /// The request path.
        path: String,
        /// What was wrong with the body.
        reason: String,
    },

    /// Write parameters could not be serialized.
    #[error("Invalid parameters for {resource}: {reason}")]
    InvalidParams {
        /// The record type.
        resource: &'static str,
        /// The serialization error.
        reason: String,
    },

    /// Any other transport failure.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Maps a failed transport call to a resource error.
    ///
    /// 404 becomes `NotFound`, 422 becomes `ValidationFailed` (with the
    /// JSON:API `errors` array parsed out of the message); everything else is
    /// passed through as `Http`.
    #[must_use]
    pub fn from_http_error(error: HttpError, resource: &'static str, id: Option<&str>) -> Self {
        match error {
            HttpError::Response(HttpResponseError {
                code: 404,
                ref message,
                ..
            }) => {
                tracing::debug!("{resource} not found: {message}");
                Self::NotFound {
                    resource,
                    id: id.unwrap_or("unknown").to_string(),
                }
            }
            HttpError::Response(HttpResponseError {
                code: 422,
                message,
                error_reference,
            }) => {
                let body = serde_json::from_str(&message).unwrap_or(serde_json::Value::Null);
                Self::ValidationFailed {
                    errors: parse_validation_errors(&body),
                    request_id: error_reference,
                }
            }
            other => Self::Http(other),
        }
    }

    /// Returns the request id, if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::ValidationFailed { request_id, .. } => request_id.as_deref(),
            Self::Http(HttpError::Response(e)) => e.error_reference.as_deref(),
            Self::Http(HttpError::MaxRetries(e)) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

/// Parses JSON:API validation errors.
///
/// Planning Center returns:
/// ```json
/// {
///   "errors": [
///     {"title": "...", "detail": "can't be blank", "source": {"pointer": "/data/attributes/first_name"}}
///   ]
/// }
/// ```
///
/// Errors are grouped by the last segment of `source.pointer`; errors
/// without a pointer go under `base`.
fn parse_validation_errors(body: &serde_json::Value) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();

    let Some(errors) = body.get("errors").and_then(serde_json::Value::as_array) else {
        return result;
    };

    for error in errors {
        let field = error
            .pointer("/source/pointer")
            .and_then(serde_json::Value::as_str)
            .and_then(|pointer| pointer.rsplit('/').next())
            .filter(|segment| !segment.is_empty())
            .unwrap_or("base");

        let message = error
            .get("detail")
            .or_else(|| error.get("title"))
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| error.to_string(), ToString::to_string);

        result.entry(field.to_string()).or_default().push(message);
    }

    result
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
