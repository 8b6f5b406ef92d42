//! Services `Plan` resource.
//!
//! A single plan within a service type, at
//! `/services/v2/service_types/{id}/plans`.

use chrono::{DateTime, Utc};

use crate::rest::{FieldKind, FieldSpec, Record, RecordFields, RecordShape, Relationship, SchemaError};

const ATTRIBUTES: &[FieldSpec] = &[
    FieldSpec::required("can_view_order", FieldKind::Boolean),
    FieldSpec::required("prefers_order_view", FieldKind::Boolean),
    FieldSpec::required("rehearsable", FieldKind::Boolean),
    FieldSpec::required("items_count", FieldKind::Integer),
    FieldSpec::required("permissions", FieldKind::Text),
    FieldSpec::required("created_at", FieldKind::Timestamp),
    FieldSpec::nullable("title", FieldKind::Text),
    FieldSpec::required("updated_at", FieldKind::Timestamp),
    FieldSpec::required("public", FieldKind::Boolean),
    FieldSpec::nullable("series_title", FieldKind::Text),
    FieldSpec::required("plan_notes_count", FieldKind::Integer),
    FieldSpec::required("other_time_count", FieldKind::Integer),
    FieldSpec::required("rehearsal_time_count", FieldKind::Integer),
    FieldSpec::required("service_time_count", FieldKind::Integer),
    FieldSpec::required("plan_people_count", FieldKind::Integer),
    FieldSpec::required("needed_positions_count", FieldKind::Integer),
    FieldSpec::required("total_length", FieldKind::Integer),
    FieldSpec::required("multi_day", FieldKind::Boolean),
    FieldSpec::nullable("files_expire_at", FieldKind::Timestamp),
    FieldSpec::nullable("sort_date", FieldKind::Timestamp),
    FieldSpec::nullable("last_time_at", FieldKind::Timestamp),
    FieldSpec::required("dates", FieldKind::Text),
    FieldSpec::required("short_dates", FieldKind::Text),
    FieldSpec::required("planning_center_url", FieldKind::Text),
    FieldSpec::required("reminders_disabled", FieldKind::Boolean),
];

const RELATIONSHIPS: &[FieldSpec] = &[
    FieldSpec::required("service_type", FieldKind::Relation("ServiceType")),
    FieldSpec::optional("previous_plan", FieldKind::Relation("Plan")),
    FieldSpec::optional("next_plan", FieldKind::Relation("Plan")),
    FieldSpec::optional("series", FieldKind::Relation("Series")),
    FieldSpec::optional("created_by", FieldKind::Relation("Person")),
    FieldSpec::optional("updated_by", FieldKind::Relation("Person")),
];

/// A single plan within a service type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Plan {
    /// The plan's id.
    pub id: String,
    /// Whether the caller may see the order of service.
    pub can_view_order: bool,
    /// Whether the order view opens by default.
    pub prefers_order_view: bool,
    /// Whether the plan can be rehearsed.
    pub rehearsable: bool,
    /// Items the current user can see, headers included.
    pub items_count: i64,
    /// The current user's permissions for this plan's service type.
    pub permissions: String,
    /// When the plan was created.
    pub created_at: DateTime<Utc>,
    /// Plan title, if set.
    pub title: Option<String>,
    /// When the plan was last updated.
    pub updated_at: DateTime<Utc>,
    /// Whether Public Access is enabled.
    pub public: bool,
    /// Title of the series the plan belongs to.
    pub series_title: Option<String>,
    /// Number of plan notes.
    pub plan_notes_count: i64,
    /// Number of times that are neither services nor rehearsals.
    pub other_time_count: i64,
    /// Number of rehearsal times.
    pub rehearsal_time_count: i64,
    /// Number of service times.
    pub service_time_count: i64,
    /// Number of people scheduled.
    pub plan_people_count: i64,
    /// Number of positions still unfilled.
    pub needed_positions_count: i64,
    /// Length in seconds of all items outside pre- and post-service.
    pub total_length: i64,
    /// Whether the plan spans several days.
    pub multi_day: bool,
    /// When the plan's files expire.
    pub files_expire_at: Option<DateTime<Utc>>,
    /// The first service time, used for chronological sorting.
    pub sort_date: Option<DateTime<Utc>>,
    /// Start of the plan's last time.
    pub last_time_at: Option<DateTime<Utc>>,
    /// Human-readable date range, e.g. `"March 3, 2024"`.
    pub dates: String,
    /// Abbreviated date range, e.g. `"Mar 3"`.
    pub short_dates: String,
    /// Link to the plan in the web UI.
    pub planning_center_url: String,
    /// Whether reminders are turned off.
    pub reminders_disabled: bool,
    /// The service type the plan belongs to.
    pub service_type: Relationship,
    /// The plan before this one.
    pub previous_plan: Option<Relationship>,
    /// The plan after this one.
    pub next_plan: Option<Relationship>,
    /// The series the plan is part of.
    pub series: Option<Relationship>,
    /// Who created the plan.
    pub created_by: Option<Relationship>,
    /// Who last updated the plan.
    pub updated_by: Option<Relationship>,
}

impl Record for Plan {
    const SHAPE: RecordShape = RecordShape::new("Plan", ATTRIBUTES, RELATIONSHIPS);

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
            can_view_order: a.take("can_view_order")?,
            prefers_order_view: a.take("prefers_order_view")?,
            rehearsable: a.take("rehearsable")?,
            items_count: a.take("items_count")?,
            permissions: a.take("permissions")?,
            created_at: a.take("created_at")?,
            title: a.take("title")?,
            updated_at: a.take("updated_at")?,
            public: a.take("public")?,
            series_title: a.take("series_title")?,
            plan_notes_count: a.take("plan_notes_count")?,
            other_time_count: a.take("other_time_count")?,
            rehearsal_time_count: a.take("rehearsal_time_count")?,
            service_time_count: a.take("service_time_count")?,
            plan_people_count: a.take("plan_people_count")?,
            needed_positions_count: a.take("needed_positions_count")?,
            total_length: a.take("total_length")?,
            multi_day: a.take("multi_day")?,
            files_expire_at: a.take("files_expire_at")?,
            sort_date: a.take("sort_date")?,
            last_time_at: a.take("last_time_at")?,
            dates: a.take("dates")?,
            short_dates: a.take("short_dates")?,
            planning_center_url: a.take("planning_center_url")?,
            reminders_disabled: a.take("reminders_disabled")?,
            service_type: r.take("service_type")?,
            previous_plan: r.take("previous_plan")?,
            next_plan: r.take("next_plan")?,
            series: r.take("series")?,
            created_by: r.take("created_by")?,
            updated_by: r.take("updated_by")?,
        })
    }
}
