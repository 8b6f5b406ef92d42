//! # Planning Center API for Rust
//!
//! Typed bindings for the Planning Center Online REST API (JSON:API).
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`PlanningCenterConfig`] and
//!   [`PlanningCenterConfigBuilder`], or from `CLIENT_ID`/`CLIENT_SECRET` in
//!   the environment or a `.env` file
//! - An async HTTP client with HTTP Basic credentials and opt-in retries
//! - Typed navigation of the resource tree (`client.services().people()`)
//! - Records typed against declared shapes, with precise schema errors
//!
//! ## Quick Start
//!
//! ```rust
//! use planning_center::{Client, ClientId, ClientSecret, PlanningCenterConfig};
//!
//! let config = PlanningCenterConfig::builder()
//!     .client_id(ClientId::new("application-id").unwrap())
//!     .client_secret(ClientSecret::new("secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = Client::new(config).unwrap();
//! let blockouts = client.services().people().for_id(12345).blockouts();
//! assert_eq!(blockouts.path().to_string(), "/services/v2/people/12345/blockouts");
//! ```
//!
//! ## Fetching Records
//!
//! ```rust,ignore
//! use planning_center::Client;
//! use planning_center::rest::ResourceError;
//!
//! let client = Client::from_env()?;
//!
//! match client.services().people().get("12345").await {
//!     Ok(person) => println!("{} is {}", person.name(), person.status),
//!     Err(ResourceError::NotFound { .. }) => println!("no such person"),
//!     Err(e) => return Err(e.into()),
//! }
//!
//! let blockouts = client
//!     .services()
//!     .people()
//!     .for_id("12345")
//!     .blockouts()
//!     .list_all()
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: build one [`Client`] and clone it freely
//! - **Fail-fast validation**: credentials are checked when the client is built
//! - **Thread-safe**: the client and every accessor are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **Explicit retries**: requests are sent once unless `tries` is raised

mod client;

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use client::Client;
pub use config::{
    ApiBaseUrl, ClientId, ClientSecret, PlanningCenterConfig, PlanningCenterConfigBuilder,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError, RateLimit,
};

// Re-export resource access types
pub use rest::{
    Collection, GetParams, ListParams, Member, RecordPages, ResourceError, ResourcePath,
};
