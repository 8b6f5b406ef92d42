//! Error types for client configuration.
//!
//! Configuration constructors return `Result<T, ConfigError>` so that a
//! misconfigured process fails when the client is built, not on its first
//! API call.
//!
//! # Example
//!
//! ```rust
//! use planning_center::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client id cannot be empty.
    #[error("Client id cannot be empty. Please provide the application id of a Planning Center personal access token.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide the secret of a Planning Center personal access token.")]
    EmptyClientSecret,

    /// A credential was found neither in the environment nor in the env file.
    #[error("Missing credential '{var}'. Set the {var} environment variable or add it to a .env file.")]
    MissingCredential {
        /// The environment variable that was looked up.
        var: &'static str,
    },

    /// A required builder field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// API base URL is invalid.
    #[error("Invalid API base URL '{url}'. Please provide a URL with scheme (e.g., 'https://api.planningcenteronline.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The number of request attempts must be at least one.
    #[error("Invalid tries value {tries}. Requests must be attempted at least once.")]
    InvalidTries {
        /// The rejected value.
        tries: u32,
    },

    /// The env file exists but could not be read or parsed.
    #[error("Failed to read env file '{path}': {reason}")]
    EnvFile {
        /// Path of the env file.
        path: String,
        /// Underlying parse or I/O error.
        reason: String,
    },

    /// The HTTP transport could not be initialised.
    #[error("Failed to initialise HTTP transport: {reason}")]
    TransportInit {
        /// Underlying reqwest error.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_client_id_error_message() {
        let message = ConfigError::EmptyClientId.to_string();
        assert!(message.contains("Client id cannot be empty"));
    }

    #[test]
    fn test_missing_credential_names_variable() {
        let error = ConfigError::MissingCredential { var: "CLIENT_ID" };
        let message = error.to_string();
        assert!(message.contains("'CLIENT_ID'"));
        assert!(message.contains(".env"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("scheme"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyClientSecret;
        let _: &dyn std::error::Error = &error;
    }
}
