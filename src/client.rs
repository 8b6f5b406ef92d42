//! The top-level [`Client`] handle.

use std::sync::Arc;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse};
use crate::config::PlanningCenterConfig;
use crate::error::ConfigError;
use crate::rest::resources::{GroupsApi, PeopleApi, ServicesApi};
use crate::rest::ResourcePath;

/// Entry point to the Planning Center API.
///
/// A `Client` is cheap to clone; clones share one connection pool and one
/// configuration. It is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use planning_center::Client;
///
/// let client = Client::from_env()?;
/// let organization = client.services().organization().await?;
/// let people = client.people().people().list_all().await?;
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    config: PlanningCenterConfig,
    http: HttpClient,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TransportInit`] if the HTTP client cannot be
    /// initialised.
    pub fn new(config: PlanningCenterConfig) -> Result<Self, ConfigError> {
        let http = HttpClient::new(&config)?;
        tracing::debug!(
            "Planning Center client created for {} (tries: {})",
            http.base_uri(),
            config.tries()
        );

        Ok(Self {
            inner: Arc::new(ClientInner { config, http }),
        })
    }

    /// Creates a client from `CLIENT_ID`/`CLIENT_SECRET` in the environment
    /// or a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] if a credential is absent,
    /// and the errors of [`PlanningCenterConfig::from_env`] and
    /// [`Client::new`] otherwise.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(PlanningCenterConfig::from_env()?)
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &PlanningCenterConfig {
        &self.inner.config
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub fn http_client(&self) -> &HttpClient {
        &self.inner.http
    }

    /// The Services app (`/services/v2`).
    #[must_use]
    pub fn services(&self) -> ServicesApi {
        ServicesApi::new(self.clone())
    }

    /// The People app (`/people/v2`).
    #[must_use]
    pub fn people(&self) -> PeopleApi {
        PeopleApi::new(self.clone())
    }

    /// The Groups app (`/groups/v2`).
    #[must_use]
    pub fn groups(&self) -> GroupsApi {
        GroupsApi::new(self.clone())
    }

    /// Starts a request for `path` with the configured number of tries.
    pub(crate) fn request(&self, method: HttpMethod, path: &ResourcePath) -> HttpRequestBuilder {
        HttpRequest::builder(method, path.to_string()).tries(self.inner.config.tries())
    }

    pub(crate) async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.inner.http.request(request).await
    }
}
