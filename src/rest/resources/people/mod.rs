//! The People app (`/people/v2`).

mod person;

pub use person::{Person, PersonParams};

use crate::client::Client;
use crate::rest::{Collection, ResourcePath};

/// Accessor root for the People app.
#[derive(Clone, Debug)]
pub struct PeopleApi {
    client: Client,
    path: ResourcePath,
}

impl PeopleApi {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            path: ResourcePath::app("people"),
        }
    }

    /// Returns the app path (`/people/v2`).
    #[must_use]
    pub const fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// Person records. Supports `create`, `update` and `delete`.
    #[must_use]
    pub fn people(&self) -> Collection<Person> {
        Collection::new(self.client.clone(), self.path.child("people"))
    }
}
