//! Groups `Group` resource.

use chrono::{DateTime, Utc};

use crate::rest::{
    string_enum, FieldKind, FieldSpec, Fields, Record, RecordFields, RecordShape, Relationship,
    SchemaError,
};

string_enum! {
    /// Who can see a group's events.
    pub enum EventsVisibility {
        Public => "public",
        Members => "members",
    }
}

const HEADER_IMAGE: &[FieldSpec] = &[
    FieldSpec::optional("thumbnail", FieldKind::Text),
    FieldSpec::optional("medium", FieldKind::Text),
    FieldSpec::optional("original", FieldKind::Text),
];

const ATTRIBUTES: &[FieldSpec] = &[
    FieldSpec::optional("archived_at", FieldKind::Timestamp),
    FieldSpec::optional("can_create_conversation", FieldKind::Boolean),
    FieldSpec::required("chat_enabled", FieldKind::Boolean),
    FieldSpec::optional("contact_email", FieldKind::Text),
    FieldSpec::required("created_at", FieldKind::Timestamp),
    FieldSpec::optional("description", FieldKind::Text),
    FieldSpec::required(
        "events_visibility",
        FieldKind::Enumerated(EventsVisibility::VALUES),
    ),
    FieldSpec::required("header_image", FieldKind::Object(HEADER_IMAGE)),
    FieldSpec::required("leaders_can_search_people_database", FieldKind::Boolean),
    FieldSpec::required("location_type_preference", FieldKind::Text),
    FieldSpec::required("memberships_count", FieldKind::Integer),
    FieldSpec::required("name", FieldKind::Text),
    FieldSpec::nullable("public_church_center_web_url", FieldKind::Text),
    FieldSpec::optional("schedule", FieldKind::Text),
    FieldSpec::nullable("virtual_location_url", FieldKind::Text),
];

const RELATIONSHIPS: &[FieldSpec] = &[
    FieldSpec::required("group_type", FieldKind::Relation("GroupType")),
    FieldSpec::optional("location", FieldKind::Relation("Location")),
    FieldSpec::optional("enrollment", FieldKind::Relation("Enrollment")),
];

/// Header image URLs of a group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderImage {
    /// Thumbnail image URL.
    pub thumbnail: Option<String>,
    /// Medium image URL.
    pub medium: Option<String>,
    /// Original image URL.
    pub original: Option<String>,
}

impl HeaderImage {
    fn from_fields(mut fields: Fields) -> Result<Self, SchemaError> {
        Ok(Self {
            thumbnail: fields.take("thumbnail")?,
            medium: fields.take("medium")?,
            original: fields.take("original")?,
        })
    }
}

/// A group of people that meet together regularly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// The group's id.
    pub id: String,
    /// When the group was archived, if it was.
    pub archived_at: Option<DateTime<Utc>>,
    /// Only sent when requested with `fields[Group]`.
    pub can_create_conversation: Option<bool>,
    /// Whether group chat is on.
    pub chat_enabled: bool,
    /// Email address for group enquiries.
    pub contact_email: Option<String>,
    /// When the group was created.
    pub created_at: DateTime<Utc>,
    /// May contain HTML.
    pub description: Option<String>,
    /// Who can see the group's events.
    pub events_visibility: EventsVisibility,
    /// Header image in several sizes.
    pub header_image: HeaderImage,
    /// Whether leaders may search all people.
    pub leaders_can_search_people_database: bool,
    /// `"physical"` or `"virtual"`.
    pub location_type_preference: String,
    /// Members including leaders; pending requests excluded.
    pub memberships_count: i64,
    /// The group's name.
    pub name: String,
    /// Public Church Center page, if published.
    pub public_church_center_web_url: Option<String>,
    /// Meeting schedule, e.g. `"Tuesdays at 7pm"`.
    pub schedule: Option<String>,
    /// Meeting link for virtual groups.
    pub virtual_location_url: Option<String>,
    /// The group's type.
    pub group_type: Relationship,
    /// Where the group meets.
    pub location: Option<Relationship>,
    /// Enrollment settings.
    pub enrollment: Option<Relationship>,
}

impl Group {
    /// Returns `true` once the group has been archived.
    #[must_use]
    pub const fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }
}

impl Record for Group {
    const SHAPE: RecordShape = RecordShape::new("Group", ATTRIBUTES, RELATIONSHIPS);

    fn from_fields(fields: RecordFields) -> Result<Self, SchemaError> {
        let RecordFields {
            id,
            mut attributes,
            mut relationships,
        } = fields;
        let a = &mut attributes;
        let r = &mut relationships;

        Ok(Self {
            id,
            archived_at: a.take("archived_at")?,
            can_create_conversation: a.take("can_create_conversation")?,
            chat_enabled: a.take("chat_enabled")?,
            contact_email: a.take("contact_email")?,
            created_at: a.take("created_at")?,
            description: a.take("description")?,
            events_visibility: a.take("events_visibility")?,
            header_image: HeaderImage::from_fields(a.take("header_image")?)?,
            leaders_can_search_people_database: a.take("leaders_can_search_people_database")?,
            location_type_preference: a.take("location_type_preference")?,
            memberships_count: a.take("memberships_count")?,
            name: a.take("name")?,
            public_church_center_web_url: a.take("public_church_center_web_url")?,
            schedule: a.take("schedule")?,
            virtual_location_url: a.take("virtual_location_url")?,
            group_type: r.take("group_type")?,
            location: r.take("location")?,
            enrollment: r.take("enrollment")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{type_resource, SchemaProblem};
    use serde_json::{json, Value};

    fn group_json() -> Value {
        json!({
            "type": "Group",
            "id": "500",
            "attributes": {
                "chat_enabled": true,
                "created_at": "2022-09-01T18:00:00Z",
                "events_visibility": "members",
                "header_image": {
                    "thumbnail": "https://example.com/t.jpg",
                    "original": "https://example.com/o.jpg"
                },
                "leaders_can_search_people_database": false,
                "location_type_preference": "physical",
                "memberships_count": "12",
                "name": "Tuesday Bible Study",
                "public_church_center_web_url": null,
                "virtual_location_url": null
            },
            "relationships": {
                "group_type": {"data": {"type": "GroupType", "id": "3"}},
                "location": {"data": null}
            }
        })
    }

    #[test]
    fn test_group_typed_with_nested_header_image() {
        let group: Group = type_resource(&group_json()).unwrap();

        assert_eq!(group.memberships_count, 12);
        assert_eq!(group.events_visibility, EventsVisibility::Members);
        assert_eq!(
            group.header_image.thumbnail.as_deref(),
            Some("https://example.com/t.jpg")
        );
        assert_eq!(group.header_image.medium, None);
        assert!(!group.is_archived());
        assert_eq!(group.group_type.id, "3");
        assert_eq!(group.location, None);
    }

    #[test]
    fn test_nested_field_errors_carry_full_path() {
        let mut payload = group_json();
        payload["attributes"]["header_image"]["medium"] = json!(42);

        let error = type_resource::<Group>(&payload).unwrap_err();
        assert_eq!(error.field, "attributes.header_image.medium");
        assert!(matches!(error.problem, SchemaProblem::WrongKind { .. }));
    }
}
