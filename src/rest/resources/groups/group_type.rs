//! Groups `GroupType` resource.

use crate::rest::{FieldKind, FieldSpec, Record, RecordFields, RecordShape, SchemaError};

const ATTRIBUTES: &[FieldSpec] = &[
    FieldSpec::required("church_center_visible", FieldKind::Boolean),
    FieldSpec::required("church_center_map_visible", FieldKind::Boolean),
    FieldSpec::required("color", FieldKind::Text),
    FieldSpec::required("default_group_settings", FieldKind::Text),
    FieldSpec::optional("description", FieldKind::Text),
    FieldSpec::required("name", FieldKind::Text),
    FieldSpec::required("position", FieldKind::Integer),
];

/// A category of groups, such as "Small Groups" or "Classes".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupType {
    /// The group type's id.
    pub id: String,
    /// `true` if the type contains any published groups.
    pub church_center_visible: bool,
    /// Whether groups appear on the Church Center map.
    pub church_center_map_visible: bool,
    /// Hex color, e.g. `"#4fd2e3"`.
    pub color: String,
    /// JSON-encoded default settings for new groups of this type.
    pub default_group_settings: String,
    /// Description shown in Church Center.
    pub description: Option<String>,
    /// The group type's name.
    pub name: String,
    /// Sort position among group types.
    pub position: i64,
}

impl Record for GroupType {
    const SHAPE: RecordShape = RecordShape::new("GroupType", ATTRIBUTES, &[]);

    fn from_fields(mut fields: RecordFields) -> Result<Self, SchemaError> {
        let a = &mut fields.attributes;

        Ok(Self {
            church_center_visible: a.take("church_center_visible")?,
            church_center_map_visible: a.take("church_center_map_visible")?,
            color: a.take("color")?,
            default_group_settings: a.take("default_group_settings")?,
            description: a.take("description")?,
            name: a.take("name")?,
            position: a.take("position")?,
            id: fields.id,
        })
    }
}
