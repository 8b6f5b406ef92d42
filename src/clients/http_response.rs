//! HTTP response types.

use std::collections::HashMap;

/// Rate limit state parsed from the `X-PCO-API-Request-Rate-*` headers.
///
/// Planning Center allows `limit` requests per `period` seconds and reports
/// how many requests the current window has used in `count`.
///
/// # Example
///
/// ```rust
/// use planning_center::clients::RateLimit;
///
/// let limit = RateLimit::parse("12", "100", "20").unwrap();
/// assert_eq!(limit.count, 12);
/// assert!(!limit.is_exhausted());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests made in the current window.
    pub count: u32,
    /// Requests allowed per window.
    pub limit: u32,
    /// Window length in seconds.
    pub period: u32,
}

impl RateLimit {
    /// Parses the three rate limit header values.
    ///
    /// Returns `None` if any value is not an unsigned integer.
    #[must_use]
    pub fn parse(count: &str, limit: &str, period: &str) -> Option<Self> {
        Some(Self {
            count: count.trim().parse().ok()?,
            limit: limit.trim().parse().ok()?,
            period: period.trim().parse().ok()?,
        })
    }

    /// Returns `true` once the window's allowance is used up.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.count >= self.limit
    }
}

/// A response from the Planning Center API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body (`{}` when empty).
    pub body: serde_json::Value,
    /// Rate limit state, when all three headers are present.
    pub rate_limit: Option<RateLimit>,
    /// Seconds to wait before retrying (from `Retry-After`).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the rate limit and
    /// `Retry-After` headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let first = |name: &str| {
            headers
                .get(name)
                .and_then(|values| values.first())
                .map(String::as_str)
        };

        let rate_limit = match (
            first("x-pco-api-request-rate-count"),
            first("x-pco-api-request-rate-limit"),
            first("x-pco-api-request-rate-period"),
        ) {
            (Some(count), Some(limit), Some(period)) => RateLimit::parse(count, limit, period),
            _ => None,
        };

        let retry_request_after =
            first("retry-after").and_then(|value| value.trim().parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            rate_limit,
            retry_request_after,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
