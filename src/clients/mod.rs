//! HTTP transport for Planning Center API communication.
//!
//! This module is the layer below the typed accessors: it authenticates with
//! HTTP Basic credentials, sends requests, decodes JSON bodies and parses the
//! Planning Center rate limit headers.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP client
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a parsed response
//! - [`HttpMethod`]: GET, POST, PATCH and DELETE
//! - [`RateLimit`]: state from the `X-PCO-API-Request-Rate-*` headers
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)**: retried after `Retry-After`, or 1 second if absent
//! - **500 (Server Error)**: retried after a fixed 1-second delay
//! - **Other errors**: returned immediately
//!
//! The default `tries` is 1, meaning no retries. Set
//! [`PlanningCenterConfig`](crate::PlanningCenterConfig)'s `tries`, or
//! [`HttpRequestBuilder::tries`] per request, to enable them.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, RETRY_WAIT_TIME, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit};
