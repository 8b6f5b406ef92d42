//! Services `Organization` resource, the root of `/services/v2`.

use chrono::{DateTime, Utc};

use crate::rest::{FieldKind, FieldSpec, Record, RecordFields, RecordShape, SchemaError};

const ATTRIBUTES: &[FieldSpec] = &[
    FieldSpec::required("name", FieldKind::Text),
    FieldSpec::required("ccli", FieldKind::Text),
    FieldSpec::required("created_at", FieldKind::Timestamp),
    FieldSpec::nullable("updated_at", FieldKind::Timestamp),
    FieldSpec::required("date_format", FieldKind::Integer),
    FieldSpec::required("time_zone", FieldKind::Text),
    FieldSpec::required("twenty_four_hour_time", FieldKind::Boolean),
    FieldSpec::required("owner_name", FieldKind::Text),
    FieldSpec::required("music_stand_enabled", FieldKind::Boolean),
    FieldSpec::required("projector_enabled", FieldKind::Boolean),
    FieldSpec::required("calendar_starts_on_sunday", FieldKind::Boolean),
    FieldSpec::required("ccli_connected", FieldKind::Boolean),
    FieldSpec::required("file_storage_size", FieldKind::Integer),
    FieldSpec::required("file_storage_size_used", FieldKind::Integer),
    FieldSpec::required("people_allowed", FieldKind::Integer),
    FieldSpec::required("people_remaining", FieldKind::Integer),
    FieldSpec::optional("legacy_id", FieldKind::Text),
    FieldSpec::optional("beta", FieldKind::Boolean),
];

/// Account-level settings of the organization.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Organization {
    /// The organization's id.
    pub id: String,
    /// The organization's name.
    pub name: String,
    /// CCLI license number.
    pub ccli: String,
    /// When the organization was created.
    pub created_at: DateTime<Utc>,
    /// When the organization was last updated.
    pub updated_at: Option<DateTime<Utc>>,
    /// Date format code used in the web UI.
    pub date_format: i64,
    /// IANA time zone used for plan times.
    pub time_zone: String,
    /// Whether times are shown on a 24-hour clock.
    pub twenty_four_hour_time: bool,
    /// Name of the account owner.
    pub owner_name: String,
    /// Whether Music Stand is enabled.
    pub music_stand_enabled: bool,
    /// Whether the projector integration is enabled.
    pub projector_enabled: bool,
    /// Whether calendars start weeks on Sunday.
    pub calendar_starts_on_sunday: bool,
    /// Whether the CCLI account is connected.
    pub ccli_connected: bool,
    /// Bytes.
    pub file_storage_size: i64,
    /// Bytes of file storage in use.
    pub file_storage_size_used: i64,
    /// People the subscription allows.
    pub people_allowed: i64,
    /// People that can still be added.
    pub people_remaining: i64,
    /// Id from the previous Services platform.
    pub legacy_id: Option<String>,
    /// Whether the organization opted into beta features.
    pub beta: Option<bool>,
}

impl Record for Organization {
    const SHAPE: RecordShape = RecordShape::new("Organization", ATTRIBUTES, &[]);

    fn from_fields(mut fields: RecordFields) -> Result<Self, SchemaError> {
        let a = &mut fields.attributes;

        Ok(Self {
            name: a.take("name")?,
            ccli: a.take("ccli")?,
            created_at: a.take("created_at")?,
            updated_at: a.take("updated_at")?,
            date_format: a.take("date_format")?,
            time_zone: a.take("time_zone")?,
            twenty_four_hour_time: a.take("twenty_four_hour_time")?,
            owner_name: a.take("owner_name")?,
            music_stand_enabled: a.take("music_stand_enabled")?,
            projector_enabled: a.take("projector_enabled")?,
            calendar_starts_on_sunday: a.take("calendar_starts_on_sunday")?,
            ccli_connected: a.take("ccli_connected")?,
            file_storage_size: a.take("file_storage_size")?,
            file_storage_size_used: a.take("file_storage_size_used")?,
            people_allowed: a.take("people_allowed")?,
            people_remaining: a.take("people_remaining")?,
            legacy_id: a.take("legacy_id")?,
            beta: a.take("beta")?,
            id: fields.id,
        })
    }
}
