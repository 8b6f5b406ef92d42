//! HTTP client for Planning Center API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Planning Center API with opt-in retry handling.

use std::collections::HashMap;
use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::PlanningCenterConfig;
use crate::error::ConfigError;

/// Fixed retry wait time in seconds when no `Retry-After` is given.
pub const RETRY_WAIT_TIME: u64 = 1;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The `Authorization` header value, masked in `Debug` output.
#[derive(Clone)]
struct BasicAuth(String);

impl BasicAuth {
    fn new(config: &PlanningCenterConfig) -> Self {
        let pair = format!(
            "{}:{}",
            config.client_id().as_ref(),
            config.client_secret().as_ref()
        );
        Self(format!("Basic {}", STANDARD.encode(pair)))
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BasicAuth(*****)")
    }
}

/// HTTP client for making requests to the Planning Center API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers (User-Agent, Accept, HTTP Basic credentials)
/// - Retries of 429 and 500 responses when a request asks for them
/// - Rate limit header parsing
///
/// `HttpClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use planning_center::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let client = HttpClient::new(&config)?;
/// let request = HttpRequest::builder(HttpMethod::Get, "/services/v2/people").build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    default_headers: HashMap<String, String>,
    authorization: BasicAuth,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TransportInit`] if the underlying reqwest
    /// client cannot be created (e.g. TLS initialisation failure).
    pub fn new(config: &PlanningCenterConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Planning Center API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| ConfigError::TransportInit {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_uri: config.api_base_url().as_ref().to_string(),
            default_headers,
            authorization: BasicAuth::new(config),
        })
    }

    /// Returns the base URI requests are sent to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers (credentials excluded).
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request to the Planning Center API.
    ///
    /// 429 and 500 responses are retried while attempts remain
    /// (`request.tries`); a 429 waits for `Retry-After` when present.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    /// - Retries are exhausted (`MaxRetries`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.base_uri, request.path);

        let mut tries: u32 = 0;
        loop {
            tries += 1;
            tracing::debug!(
                "{} {} (attempt {}/{})",
                request.http_method,
                request.path,
                tries,
                request.tries
            );

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Patch => self.client.patch(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };

            for (key, value) in &self.default_headers {
                req_builder = req_builder.header(key, value);
            }
            req_builder = req_builder.header("Authorization", &self.authorization.0);

            if !request.query.is_empty() {
                req_builder = req_builder.query(&request.query);
            }

            if let Some(body) = &request.body {
                req_builder = req_builder
                    .header("Content-Type", "application/json")
                    .body(body.to_string());
            }

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await?;

            let body = if body_text.trim().is_empty() {
                serde_json::json!({})
            } else {
                serde_json::from_str(&body_text).unwrap_or_else(|_| {
                    if code >= 500 {
                        serde_json::json!({ "raw_body": body_text })
                    } else {
                        serde_json::json!({})
                    }
                })
            };

            let response = HttpResponse::new(code, res_headers, body);

            if let Some(limit) = response.rate_limit.filter(|l| l.is_exhausted()) {
                tracing::warn!(
                    "Planning Center rate limit reached at {}: {}/{} requests per {}s",
                    request.path,
                    limit.count,
                    limit.limit,
                    limit.period
                );
            }

            if response.is_ok() {
                return Ok(response);
            }

            let error_message = Self::serialize_error(&response);

            let should_retry = code == 429 || code == 500;
            if !should_retry {
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message: error_message,
                    error_reference: response.request_id().map(String::from),
                }));
            }

            if tries >= request.tries {
                if request.tries == 1 {
                    return Err(HttpError::Response(HttpResponseError {
                        code,
                        message: error_message,
                        error_reference: response.request_id().map(String::from),
                    }));
                }
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: request.tries,
                    message: error_message,
                    error_reference: response.request_id().map(String::from),
                }));
            }

            let delay = Self::calculate_retry_delay(&response, code);
            tracing::warn!(
                "{} {} returned {}, retrying in {:?}",
                request.http_method,
                request.path,
                code,
                delay
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Parses response headers into a `HashMap` keyed by lowercase name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// 429 honours `Retry-After`; 500 always waits the fixed delay.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> std::time::Duration {
        if status == 429 {
            if let Some(retry_after) = response.retry_request_after {
                if let Ok(delay) = std::time::Duration::try_from_secs_f64(retry_after) {
                    return delay;
                }
            }
        }
        std::time::Duration::from_secs(RETRY_WAIT_TIME)
    }

    /// Serializes the JSON:API `errors` array and request id of a failed
    /// response.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(errors) = response.body.get("errors") {
            error_body.insert("errors".to_string(), errors.clone());
        }
        if let Some(raw) = response.body.get("raw_body") {
            error_body.insert("raw_body".to_string(), raw.clone());
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::Value::Object(error_body).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiBaseUrl, ClientId, ClientSecret};
    use serde_json::json;

    fn create_test_config() -> PlanningCenterConfig {
        PlanningCenterConfig::builder()
            .client_id(ClientId::new("app-id").unwrap())
            .client_secret(ClientSecret::new("app-secret").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_uses_default_base_uri() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(client.base_uri(), "https://api.planningcenteronline.com");
    }

    #[test]
    fn test_client_uses_configured_base_uri() {
        let config = PlanningCenterConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .api_base_url(ApiBaseUrl::new("http://127.0.0.1:9000/").unwrap())
            .build()
            .unwrap();

        let client = HttpClient::new(&config).unwrap();
        assert_eq!(client.base_uri(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Planning Center API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = PlanningCenterConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .user_agent_prefix("ChurchSync/2.0")
            .build()
            .unwrap();

        let client = HttpClient::new(&config).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("ChurchSync/2.0 | "));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_basic_auth_encodes_credentials() {
        let auth = BasicAuth::new(&create_test_config());
        assert_eq!(auth.0, format!("Basic {}", STANDARD.encode("app-id:app-secret")));
    }

    #[test]
    fn test_debug_output_hides_credentials() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("BasicAuth(*****)"));
        assert!(!debug.contains(&STANDARD.encode("app-id:app-secret")));
    }

    #[test]
    fn test_retry_delay_honours_retry_after_only_for_429() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["0.25".to_string()]);
        let response = HttpResponse::new(429, headers, json!({}));

        assert_eq!(
            HttpClient::calculate_retry_delay(&response, 429),
            std::time::Duration::from_millis(250)
        );
        assert_eq!(
            HttpClient::calculate_retry_delay(&response, 500),
            std::time::Duration::from_secs(RETRY_WAIT_TIME)
        );
    }

    #[test]
    fn test_unrepresentable_retry_after_falls_back_to_fixed_delay() {
        for value in ["1e30", "-3", "NaN", "inf"] {
            let mut headers = HashMap::new();
            headers.insert("retry-after".to_string(), vec![value.to_string()]);
            let response = HttpResponse::new(429, headers, json!({}));

            assert_eq!(
                HttpClient::calculate_retry_delay(&response, 429),
                std::time::Duration::from_secs(RETRY_WAIT_TIME),
                "Retry-After: {value}"
            );
        }
    }

    #[test]
    fn test_serialize_error_keeps_errors_and_request_id() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-9".to_string()]);
        let response = HttpResponse::new(
            403,
            headers,
            json!({"errors": [{"status": "403", "title": "Forbidden"}], "meta": {}}),
        );

        let message = HttpClient::serialize_error(&response);
        let parsed: serde_json::Value = serde_json::from_str(&message).unwrap();
        assert_eq!(parsed["errors"][0]["title"], "Forbidden");
        assert!(parsed["error_reference"].as_str().unwrap().contains("req-9"));
        assert!(parsed.get("meta").is_none());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
