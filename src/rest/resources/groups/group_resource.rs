//! Groups `Resource`: a file or link shared with the groups of a type.
//!
//! The JSON:API type is `Resource`; the Rust type is [`GroupResource`] to
//! keep it apart from the crate's own resource vocabulary.

use chrono::{DateTime, Utc};

use crate::rest::{
    string_enum, FieldKind, FieldSpec, Record, RecordFields, RecordShape, Relationship, SchemaError,
};

string_enum! {
    /// Whether the resource is a file upload or a link.
    pub enum ResourceKind {
        File => "FileResource",
        Link => "LinkResource",
    }
}

string_enum! {
    /// Who can see a resource.
    pub enum ResourceVisibility {
        Leaders => "leaders",
        Members => "members",
    }
}

const ATTRIBUTES: &[FieldSpec] = &[
    FieldSpec::optional("description", FieldKind::Text),
    FieldSpec::required("last_updated", FieldKind::Timestamp),
    FieldSpec::required("name", FieldKind::Text),
    FieldSpec::required("kind", FieldKind::Enumerated(ResourceKind::VALUES)).from_key("type"),
    FieldSpec::required(
        "visibility",
        FieldKind::Enumerated(ResourceVisibility::VALUES),
    ),
];

const RELATIONSHIPS: &[FieldSpec] =
    &[FieldSpec::required("created_by", FieldKind::Relation("Person"))];

/// A file or link resource shared with groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupResource {
    /// The resource's id.
    pub id: String,
    /// Written by the person who created the resource.
    pub description: Option<String>,
    /// When the resource was last changed.
    pub last_updated: DateTime<Utc>,
    /// The resource's name.
    pub name: String,
    /// Read from the `type` attribute.
    pub kind: ResourceKind,
    /// Who can see the resource.
    pub visibility: ResourceVisibility,
    /// Who shared the resource.
    pub created_by: Relationship,
}

impl Record for GroupResource {
    const SHAPE: RecordShape = RecordShape::new("Resource", ATTRIBUTES, RELATIONSHIPS);

    fn from_fields(fields: RecordFields) -> Result<Self, SchemaError> {
        let RecordFields {
            id,
            mut attributes,
            mut relationships,
        } = fields;

        Ok(Self {
            id,
            description: attributes.take("description")?,
            last_updated: attributes.take("last_updated")?,
            name: attributes.take("name")?,
            kind: attributes.take("kind")?,
            visibility: attributes.take("visibility")?,
            created_by: relationships.take("created_by")?,
        })
    }
}
