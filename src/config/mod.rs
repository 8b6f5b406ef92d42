//! Configuration types for the Planning Center client.
//!
//! # Overview
//!
//! - [`PlanningCenterConfig`]: credentials and transport settings
//! - [`PlanningCenterConfigBuilder`]: a builder for [`PlanningCenterConfig`]
//! - [`ClientId`], [`ClientSecret`]: validated credential newtypes
//! - [`ApiBaseUrl`]: the API host requests are sent to
//!
//! # Environment
//!
//! [`PlanningCenterConfig::from_env`] reads `CLIENT_ID` and `CLIENT_SECRET`
//! from the process environment, falling back to a `.env` file in the
//! working directory. Process variables take precedence over the file.
//!
//! # Example
//!
//! ```rust
//! use planning_center::{PlanningCenterConfig, ClientId, ClientSecret};
//!
//! let config = PlanningCenterConfig::builder()
//!     .client_id(ClientId::new("app-id").unwrap())
//!     .client_secret(ClientSecret::new("secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.tries(), 1);
//! ```

mod newtypes;

pub use newtypes::{ApiBaseUrl, ClientId, ClientSecret};

use std::collections::HashMap;
use std::path::Path;

use crate::error::ConfigError;

/// Environment variable holding the application id.
pub const CLIENT_ID_VAR: &str = "CLIENT_ID";

/// Environment variable holding the application secret.
pub const CLIENT_SECRET_VAR: &str = "CLIENT_SECRET";

/// Env file consulted by [`PlanningCenterConfig::from_env`].
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Configuration for the Planning Center client.
///
/// `PlanningCenterConfig` is `Clone`, `Send`, and `Sync`. Its `Debug` output
/// never contains the client secret.
#[derive(Clone, Debug)]
pub struct PlanningCenterConfig {
    client_id: ClientId,
    client_secret: ClientSecret,
    api_base_url: ApiBaseUrl,
    user_agent_prefix: Option<String>,
    tries: u32,
}

impl PlanningCenterConfig {
    /// Creates a new builder for constructing a `PlanningCenterConfig`.
    #[must_use]
    pub fn builder() -> PlanningCenterConfigBuilder {
        PlanningCenterConfigBuilder::new()
    }

    /// Loads credentials from the environment, with `.env` as fallback.
    ///
    /// A missing `.env` file is not an error; an unreadable one is.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] if either credential is
    /// absent from both sources, or [`ConfigError::EnvFile`] if `.env`
    /// exists but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let file_vars = read_env_file(Path::new(DEFAULT_ENV_FILE), false)?;
        Self::from_sources(&file_vars)
    }

    /// Loads credentials from the environment, with the given env file as
    /// fallback.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EnvFile`] if the file is missing or cannot be
    /// parsed, and [`ConfigError::MissingCredential`] if a credential is
    /// absent from both sources.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file_vars = read_env_file(path.as_ref(), true)?;
        Self::from_sources(&file_vars)
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// Useful when credentials come from a secret store rather than the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] if the lookup yields
    /// nothing for a credential, or the newtype error if it yields an empty
    /// value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use planning_center::{PlanningCenterConfig, ConfigError};
    ///
    /// let result = PlanningCenterConfig::from_lookup(|name| match name {
    ///     "CLIENT_SECRET" => Some("secret".to_string()),
    ///     _ => None,
    /// });
    /// assert!(matches!(result, Err(ConfigError::MissingCredential { var: "CLIENT_ID" })));
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_id = lookup(CLIENT_ID_VAR).ok_or(ConfigError::MissingCredential {
            var: CLIENT_ID_VAR,
        })?;
        let client_secret = lookup(CLIENT_SECRET_VAR).ok_or(ConfigError::MissingCredential {
            var: CLIENT_SECRET_VAR,
        })?;

        Self::builder()
            .client_id(ClientId::new(client_id)?)
            .client_secret(ClientSecret::new(client_secret)?)
            .build()
    }

    fn from_sources(file_vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_sources_with(|name| std::env::var(name).ok(), file_vars)
    }

    /// Process variables (`env`) win over file variables.
    fn from_sources_with<E>(
        env: E,
        file_vars: &HashMap<String, String>,
    ) -> Result<Self, ConfigError>
    where
        E: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(|name| env(name).or_else(|| file_vars.get(name).cloned()))
    }

    /// Returns the client id.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_base_url(&self) -> &ApiBaseUrl {
        &self.api_base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns how many times each request is attempted.
    ///
    /// `1` means no retries.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PlanningCenterConfig>();
};

/// Builder for constructing [`PlanningCenterConfig`] instances.
///
/// Required fields are `client_id` and `client_secret`.
///
/// # Defaults
///
/// - `api_base_url`: `https://api.planningcenteronline.com`
/// - `user_agent_prefix`: `None`
/// - `tries`: `1` (no retries)
#[derive(Debug, Default)]
pub struct PlanningCenterConfigBuilder {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    api_base_url: Option<ApiBaseUrl>,
    user_agent_prefix: Option<String>,
    tries: Option<u32>,
}

impl PlanningCenterConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the client id (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the client secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn api_base_url(mut self, url: ApiBaseUrl) -> Self {
        self.api_base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets how many times each request is attempted.
    ///
    /// Values above 1 enable retries of 429 and 500 responses.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Builds the [`PlanningCenterConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if a credential is not
    /// set, or [`ConfigError::InvalidTries`] if `tries` is zero.
    pub fn build(self) -> Result<PlanningCenterConfig, ConfigError> {
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_secret",
            })?;
        let tries = self.tries.unwrap_or(1);
        if tries == 0 {
            return Err(ConfigError::InvalidTries { tries });
        }

        Ok(PlanningCenterConfig {
            client_id,
            client_secret,
            api_base_url: self.api_base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            tries,
        })
    }
}

/// Reads `KEY=VALUE` pairs from an env file without touching the process
/// environment.
fn read_env_file(path: &Path, must_exist: bool) -> Result<HashMap<String, String>, ConfigError> {
    let env_file_error = |reason: String| ConfigError::EnvFile {
        path: path.display().to_string(),
        reason,
    };

    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() && !must_exist => return Ok(HashMap::new()),
        Err(e) => return Err(env_file_error(e.to_string())),
    };

    let mut vars = HashMap::new();
    for item in iter {
        let (key, value) = item.map_err(|e| env_file_error(e.to_string()))?;
        vars.insert(key, value);
    }

    tracing::debug!("Loaded {} variables from {}", vars.len(), path.display());
    Ok(vars)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_builder_requires_client_id() {
        let result = PlanningCenterConfigBuilder::new()
            .client_secret(ClientSecret::new("secret").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "client_id" })
        ));
    }

    #[test]
    fn test_builder_requires_client_secret() {
        let result = PlanningCenterConfigBuilder::new()
            .client_id(ClientId::new("id").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "client_secret"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = PlanningCenterConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.api_base_url().as_ref(), ApiBaseUrl::DEFAULT);
        assert_eq!(config.tries(), 1);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_rejects_zero_tries() {
        let result = PlanningCenterConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .tries(0)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidTries { tries: 0 })));
    }

    #[test]
    fn test_config_debug_masks_secret() {
        let config = PlanningCenterConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("hunter2").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("PlanningCenterConfig"));
        assert!(!debug_str.contains("hunter2"));
    }

    #[test]
    fn test_from_lookup_reads_both_credentials() {
        let config = PlanningCenterConfig::from_lookup(lookup_from(&[
            ("CLIENT_ID", "app-id"),
            ("CLIENT_SECRET", "app-secret"),
        ]))
        .unwrap();

        assert_eq!(config.client_id().as_ref(), "app-id");
        assert_eq!(config.client_secret().as_ref(), "app-secret");
    }

    #[test]
    fn test_from_lookup_missing_client_id() {
        let result = PlanningCenterConfig::from_lookup(lookup_from(&[("CLIENT_SECRET", "s")]));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingCredential { var: "CLIENT_ID" }
        );
    }

    #[test]
    fn test_from_lookup_missing_client_secret() {
        let result = PlanningCenterConfig::from_lookup(lookup_from(&[("CLIENT_ID", "i")]));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingCredential {
                var: "CLIENT_SECRET"
            }
        );
    }

    #[test]
    fn test_from_lookup_rejects_empty_value() {
        let result = PlanningCenterConfig::from_lookup(lookup_from(&[
            ("CLIENT_ID", ""),
            ("CLIENT_SECRET", "s"),
        ]));
        assert_eq!(result.unwrap_err(), ConfigError::EmptyClientId);
    }

    #[test]
    fn test_read_env_file_tolerates_missing_default_file() {
        let vars = read_env_file(Path::new("definitely/not/here/.env"), false).unwrap();
        assert!(vars.is_empty());
    }

    #[test]
    fn test_read_env_file_requires_explicit_file() {
        let result = read_env_file(Path::new("definitely/not/here/.env"), true);
        assert!(matches!(result, Err(ConfigError::EnvFile { .. })));
    }

    #[test]
    fn test_read_env_file_parses_pairs() {
        let dir = std::env::temp_dir().join(format!("pco-env-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("creds.env");
        std::fs::write(&path, "CLIENT_ID=from-file\nCLIENT_SECRET=\"quoted secret\"\n").unwrap();

        let vars = read_env_file(&path, true).unwrap();
        assert_eq!(vars.get("CLIENT_ID").map(String::as_str), Some("from-file"));
        assert_eq!(
            vars.get("CLIENT_SECRET").map(String::as_str),
            Some("quoted secret")
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }

    fn file_vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_process_variables_win_over_env_file() {
        let config = PlanningCenterConfig::from_sources_with(
            lookup_from(&[("CLIENT_ID", "env-id"), ("CLIENT_SECRET", "env-secret")]),
            &file_vars(&[("CLIENT_ID", "file-id"), ("CLIENT_SECRET", "file-secret")]),
        )
        .unwrap();

        assert_eq!(config.client_id().as_ref(), "env-id");
        assert_eq!(config.client_secret().as_ref(), "env-secret");
    }

    #[test]
    fn test_env_file_fills_missing_process_variable() {
        let config = PlanningCenterConfig::from_sources_with(
            lookup_from(&[("CLIENT_SECRET", "env-secret")]),
            &file_vars(&[("CLIENT_ID", "file-id"), ("CLIENT_SECRET", "file-secret")]),
        )
        .unwrap();

        assert_eq!(config.client_id().as_ref(), "file-id");
        assert_eq!(config.client_secret().as_ref(), "env-secret");
    }

    #[test]
    fn test_credential_missing_from_both_sources() {
        let result = PlanningCenterConfig::from_sources_with(
            lookup_from(&[]),
            &file_vars(&[("CLIENT_SECRET", "file-secret")]),
        );

        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingCredential { var: "CLIENT_ID" }
        );
    }

    #[test]
    fn test_env_file_credentials_used_exactly() {
        let dir = std::env::temp_dir().join(format!("pco-env-exact-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(".env");
        std::fs::write(&path, "CLIENT_ID=file-id\nCLIENT_SECRET=file-secret\n").unwrap();

        let vars = read_env_file(&path, true).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();
        let config = PlanningCenterConfig::from_sources_with(|_| None, &vars).unwrap();

        assert_eq!(config.client_id().as_ref(), "file-id");
        assert_eq!(config.client_secret().as_ref(), "file-secret");
    }
}
