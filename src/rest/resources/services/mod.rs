//! The Services app (`/services/v2`).
//!
//! | Path | Accessor |
//! |---|---|
//! | `/services/v2` | [`ServicesApi::organization`] |
//! | `/services/v2/people` | [`ServicesApi::people`] |
//! | `/services/v2/people/{id}/blockouts` | `people().for_id(id).blockouts()` |
//! | `/services/v2/service_types` | [`ServicesApi::service_types`] |
//! | `/services/v2/service_types/{id}/plans` | `service_types().for_id(id).plans()` |
//! | `/services/v2/teams` | [`ServicesApi::teams`] |

mod blockout;
mod organization;
mod person;
mod plan;
mod service_type;
mod team;

pub use blockout::{Blockout, RepeatFrequency, RepeatInterval, RepeatPeriod};
pub use organization::Organization;
pub use person::Person;
pub use plan::Plan;
pub use service_type::ServiceType;
pub use team::{ScheduleTo, Team};

use crate::client::Client;
use crate::rest::accessor::fetch_one;
use crate::rest::{Collection, GetParams, Member, ResourceError, ResourcePath};

/// Accessor root for the Services app.
#[derive(Clone, Debug)]
pub struct ServicesApi {
    client: Client,
    path: ResourcePath,
}

impl ServicesApi {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            path: ResourcePath::app("services"),
        }
    }

    /// Returns the app path (`/services/v2`).
    #[must_use]
    pub const fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// Fetches the organization the credentials belong to.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the payload does not
    /// describe an organization.
    pub async fn organization(&self) -> Result<Organization, ResourceError> {
        fetch_one(&self.client, &self.path, None, &GetParams::default()).await
    }

    /// People added to Services.
    #[must_use]
    pub fn people(&self) -> Collection<Person> {
        Collection::new(self.client.clone(), self.path.child("people"))
    }

    /// Service types, each with its own plans.
    #[must_use]
    pub fn service_types(&self) -> Collection<ServiceType> {
        Collection::new(self.client.clone(), self.path.child("service_types"))
    }

    /// Teams across all service types.
    #[must_use]
    pub fn teams(&self) -> Collection<Team> {
        Collection::new(self.client.clone(), self.path.child("teams"))
    }
}

impl Member<Person> {
    /// The person's blockouts.
    #[must_use]
    pub fn blockouts(&self) -> Collection<Blockout> {
        self.child("blockouts")
    }
}

impl Member<ServiceType> {
    /// Plans of the service type.
    #[must_use]
    pub fn plans(&self) -> Collection<Plan> {
        self.child("plans")
    }
}
