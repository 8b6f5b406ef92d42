//! The Groups app (`/groups/v2`).

mod group;
mod group_resource;
mod group_type;
mod person;

pub use group::{EventsVisibility, Group, HeaderImage};
pub use group_resource::{GroupResource, ResourceKind, ResourceVisibility};
pub use group_type::GroupType;
pub use person::{Address, Email, Person, PhoneNumber};

use crate::client::Client;
use crate::rest::{Collection, Member, ResourcePath};

/// Accessor root for the Groups app.
#[derive(Clone, Debug)]
pub struct GroupsApi {
    client: Client,
    path: ResourcePath,
}

impl GroupsApi {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            path: ResourcePath::app("groups"),
        }
    }

    /// Returns the app path (`/groups/v2`).
    #[must_use]
    pub const fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// Groups of every type.
    #[must_use]
    pub fn groups(&self) -> Collection<Group> {
        Collection::new(self.client.clone(), self.path.child("groups"))
    }

    /// Group types, such as small groups or classes.
    #[must_use]
    pub fn group_types(&self) -> Collection<GroupType> {
        Collection::new(self.client.clone(), self.path.child("group_types"))
    }

    /// People known to Groups, with their contact details.
    #[must_use]
    pub fn people(&self) -> Collection<Person> {
        Collection::new(self.client.clone(), self.path.child("people"))
    }
}

impl Member<GroupType> {
    /// Files and links shared with groups of this type.
    #[must_use]
    pub fn resources(&self) -> Collection<GroupResource> {
        self.child("resources")
    }
}
