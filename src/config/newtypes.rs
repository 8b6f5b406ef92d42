//! Validated newtype wrappers for configuration values.
//!
//! Each wrapper validates its contents on construction, so an invalid
//! credential or URL is rejected before any client exists.

use crate::error::ConfigError;
use std::fmt;

/// A validated Planning Center application id.
///
/// # Example
///
/// ```rust
/// use planning_center::ClientId;
///
/// let id = ClientId::new("my-app-id").unwrap();
/// assert_eq!(id.as_ref(), "my-app-id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client id.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Planning Center application secret.
///
/// The `Debug` implementation masks the value, displaying only
/// `ClientSecret(*****)`, so the secret never lands in logs.
///
/// # Example
///
/// ```rust
/// use planning_center::ClientSecret;
///
/// let secret = ClientSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into().trim().to_string();
        if secret.is_empty() {
            return Err(ConfigError::EmptyClientSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

/// A validated API base URL (scheme and host, optional port).
///
/// Trailing slashes are removed so that resource paths, which always start
/// with `/`, can be appended directly.
///
/// # Example
///
/// ```rust
/// use planning_center::ApiBaseUrl;
///
/// let url = ApiBaseUrl::new("http://localhost:8080/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:8080");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "localhost");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiBaseUrl {
    /// The production Planning Center API host.
    pub const DEFAULT: &'static str = "https://api.planningcenteronline.com";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme, an
    /// empty host, or carries a query or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        if remainder.contains(['?', '#']) {
            return Err(invalid());
        }
        let host_end = remainder
            .find([':', '/'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g. `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name without port.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for ApiBaseUrl {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 5,
            host_start: 8,
            host_end: Self::DEFAULT.len(),
        }
    }
}

impl AsRef<str> for ApiBaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_rejects_empty_string() {
        assert!(matches!(ClientId::new(""), Err(ConfigError::EmptyClientId)));
        assert!(matches!(
            ClientId::new("   "),
            Err(ConfigError::EmptyClientId)
        ));
    }

    #[test]
    fn test_client_secret_rejects_empty_string() {
        assert!(matches!(
            ClientSecret::new(""),
            Err(ConfigError::EmptyClientSecret)
        ));
    }

    #[test]
    fn test_client_secret_masks_value_in_debug() {
        let secret = ClientSecret::new("super-secret").unwrap();
        let debug_output = format!("{:?}", secret);
        assert_eq!(debug_output, "ClientSecret(*****)");
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_base_url_validates_format() {
        let url = ApiBaseUrl::new("https://api.planningcenteronline.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "api.planningcenteronline.com");

        let url = ApiBaseUrl::new("http://127.0.0.1:4010/").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:4010");
        assert_eq!(url.host_name(), "127.0.0.1");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(ApiBaseUrl::new("api.planningcenteronline.com").is_err());
        assert!(ApiBaseUrl::new("https://").is_err());
        assert!(ApiBaseUrl::new("://example.com").is_err());
        assert!(ApiBaseUrl::new("https://example.com?x=1").is_err());
    }

    #[test]
    fn test_default_base_url_matches_parsed_form() {
        let parsed = ApiBaseUrl::new(ApiBaseUrl::DEFAULT).unwrap();
        assert_eq!(ApiBaseUrl::default(), parsed);
    }
}
