//! Services `ServiceType` resource, a container for plans.

use chrono::{DateTime, Utc};

use crate::rest::{FieldKind, FieldSpec, Record, RecordFields, RecordShape, Relationship, SchemaError};

const ITEM_TYPE: FieldKind = FieldKind::Json;

const ATTRIBUTES: &[FieldSpec] = &[
    FieldSpec::nullable("archived_at", FieldKind::Timestamp),
    FieldSpec::required("created_at", FieldKind::Timestamp),
    FieldSpec::nullable("deleted_at", FieldKind::Timestamp),
    FieldSpec::required("name", FieldKind::Text),
    FieldSpec::required("sequence", FieldKind::Integer),
    FieldSpec::required("updated_at", FieldKind::Timestamp),
    FieldSpec::required("permissions", FieldKind::Text),
    FieldSpec::required("attachment_types_enabled", FieldKind::Boolean),
    FieldSpec::required("scheduled_publish", FieldKind::Boolean),
    FieldSpec::optional("custom_item_types", FieldKind::List(&ITEM_TYPE)),
    FieldSpec::optional("standard_item_types", FieldKind::List(&ITEM_TYPE)),
    FieldSpec::required("background_check_permissions", FieldKind::Text),
    FieldSpec::required("comment_permissions", FieldKind::Text),
    FieldSpec::required("frequency", FieldKind::Text),
    FieldSpec::required("last_plan_from", FieldKind::Text),
];

const RELATIONSHIPS: &[FieldSpec] = &[FieldSpec::optional("parent", FieldKind::Relation("Folder"))];

/// A service type: a container for plans.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceType {
    /// The service type's id.
    pub id: String,
    /// When the service type was archived, if it was.
    pub archived_at: Option<DateTime<Utc>>,
    /// When the service type was created.
    pub created_at: DateTime<Utc>,
    /// When the service type was deleted, if it was.
    pub deleted_at: Option<DateTime<Utc>>,
    /// Display name, e.g. `"Sunday Morning"`.
    pub name: String,
    /// Position within its folder.
    pub sequence: i64,
    /// When the service type was last updated.
    pub updated_at: DateTime<Utc>,
    /// The caller's permission level on this service type.
    pub permissions: String,
    /// Whether attachment types are enabled.
    pub attachment_types_enabled: bool,
    /// Whether plans are published on a schedule.
    pub scheduled_publish: bool,
    /// Custom plan item types, passed through untyped.
    pub custom_item_types: Vec<serde_json::Value>,
    /// Built-in plan item types, passed through untyped.
    pub standard_item_types: Vec<serde_json::Value>,
    /// Who may see background check status.
    pub background_check_permissions: String,
    /// Who may comment on plans.
    pub comment_permissions: String,
    /// How often plans recur, e.g. `"Weekly"`.
    pub frequency: String,
    /// Where the most recent plan was copied from.
    pub last_plan_from: String,
    /// The folder containing this service type.
    pub parent: Option<Relationship>,
}

impl Record for ServiceType {
    const SHAPE: RecordShape = RecordShape::new("ServiceType", ATTRIBUTES, RELATIONSHIPS);

    fn from_fields(fields: RecordFields) -> Result<Self, SchemaError> {
        let RecordFields {
            id,
            mut attributes,
            mut relationships,
        } = fields;
        let a = &mut attributes;

        Ok(Self {
            id,
            archived_at: a.take("archived_at")?,
            created_at: a.take("created_at")?,
            deleted_at: a.take("deleted_at")?,
            name: a.take("name")?,
            sequence: a.take("sequence")?,
            updated_at: a.take("updated_at")?,
            permissions: a.take("permissions")?,
            attachment_types_enabled: a.take("attachment_types_enabled")?,
            scheduled_publish: a.take("scheduled_publish")?,
            custom_item_types: a
                .take::<Option<Vec<serde_json::Value>>>("custom_item_types")?
                .unwrap_or_default(),
            standard_item_types: a
                .take::<Option<Vec<serde_json::Value>>>("standard_item_types")?
                .unwrap_or_default(),
            background_check_permissions: a.take("background_check_permissions")?,
            comment_permissions: a.take("comment_permissions")?,
            frequency: a.take("frequency")?,
            last_plan_from: a.take("last_plan_from")?,
            parent: relationships.take("parent")?,
        })
    }
}
