//! Typed access to Planning Center REST resources.
//!
//! This module turns JSON:API responses into typed records:
//!
//! - **Accessors** ([`Collection`], [`Member`], [`RecordPages`]): navigate the
//!   resource tree and run `get`, `list_all`, `create`, `update`, `delete`
//! - **[`ResourcePath`]**: the segments an accessor points at
//! - **Shapes** ([`RecordShape`], [`FieldSpec`], [`FieldKind`]): declarative
//!   field tables, applied by [`coerce`]
//! - **[`Record`]**: implemented by every typed resource
//! - **[`ResourceError`]**: semantic errors (not found, schema mismatch, ...)
//!
//! # Example
//!
//! ```rust,ignore
//! use planning_center::Client;
//! use planning_center::rest::{ListParams, ResourceError};
//!
//! let client = Client::from_env()?;
//! let people = client.services().people();
//!
//! // One record
//! let person = people.get("12345").await?;
//! println!("{}", person.name());
//!
//! // Every record, following pagination
//! for blockout in people.for_id("12345").blockouts().list_all().await? {
//!     println!("{} - {}", blockout.starts_at, blockout.ends_at);
//! }
//!
//! // Page by page, with query parameters
//! let mut pages = people.pages(ListParams::new().per_page(100).order("last_name"));
//! while let Some(page) = pages.next_page().await {
//!     println!("{} people", page?.len());
//! }
//! ```
//!
//! # Key Types
//!
//! - [`Fields`] and [`FromField`]: coerced values and their conversion into
//!   record fields
//! - [`Document`]: a JSON:API envelope split into data and pagination
//! - [`resources`]: records and accessor roots per app

pub(crate) mod accessor;
mod document;
mod errors;
mod fields;
mod params;
mod path;
pub(crate) mod record;
mod schema;

pub mod resources;

// Public exports
pub use accessor::{Collection, Member, RecordPages};
pub use document::{Document, PrimaryData};
pub use errors::ResourceError;
pub use fields::{FieldValue, Fields, FromField, RecordFields, Relationship};
pub use params::{GetParams, ListParams, DEFAULT_PER_PAGE, MAX_PER_PAGE};
pub use path::{ResourcePath, API_VERSION};
pub use record::{type_resource, Record, WritableRecord};
pub use schema::{coerce, FieldKind, FieldSpec, Presence, RecordShape, SchemaError, SchemaProblem};

pub(crate) use fields::string_enum;
