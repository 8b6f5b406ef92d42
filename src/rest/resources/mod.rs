//! Typed records and accessor roots, one module per Planning Center app.
//!
//! ```text
//! resources/
//!   services/   <- /services/v2: Organization, Person, Blockout, ServiceType, Plan, Team
//!   people/     <- /people/v2: Person (writable)
//!   groups/     <- /groups/v2: Group, GroupType, GroupResource
//! ```
//!
//! Apps share resource names (`services::Person` and `people::Person` are
//! different records), so records are addressed through their app module:
//!
//! ```rust,ignore
//! use planning_center::rest::resources::{people, services};
//!
//! let scheduled: Vec<services::Person> = client.services().people().list_all().await?;
//! let members: Vec<people::Person> = client.people().people().list_all().await?;
//! ```

pub mod groups;
pub mod people;
pub mod services;

pub use groups::GroupsApi;
pub use people::PeopleApi;
pub use services::ServicesApi;
