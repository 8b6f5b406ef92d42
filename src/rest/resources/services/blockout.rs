//! Services `Blockout` resource.
//!
//! A blockout date with an optional recurrence pattern, nested under a
//! person at `/services/v2/people/{id}/blockouts`.

use chrono::{DateTime, NaiveDate, Utc};

use crate::rest::{
    string_enum, FieldKind, FieldSpec, Record, RecordFields, RecordShape, Relationship, SchemaError,
};

string_enum! {
    /// How often a blockout repeats.
    pub enum RepeatFrequency {
        NoRepeat => "no_repeat",
        Every1 => "every_1",
        Every2 => "every_2",
        Every3 => "every_3",
        Every4 => "every_4",
        Every5 => "every_5",
        Every6 => "every_6",
        Every7 => "every_7",
        Every8 => "every_8",
    }
}

string_enum! {
    /// Which day of a monthly or yearly period a blockout repeats on.
    pub enum RepeatInterval {
        ExactDayOfMonth => "exact_day_of_month",
        WeekOfMonth1 => "week_of_month_1",
        WeekOfMonth2 => "week_of_month_2",
        WeekOfMonth3 => "week_of_month_3",
        WeekOfMonth4 => "week_of_month_4",
        WeekOfMonthLast => "week_of_month_last",
    }
}

string_enum! {
    /// The unit of a blockout's recurrence.
    pub enum RepeatPeriod {
        Daily => "daily",
        Weekly => "weekly",
        Monthly => "monthly",
        Yearly => "yearly",
    }
}

const ATTRIBUTES: &[FieldSpec] = &[
    FieldSpec::required("description", FieldKind::Text),
    FieldSpec::nullable("group_identifier", FieldKind::Text),
    FieldSpec::required("organization_name", FieldKind::Text),
    FieldSpec::nullable("reason", FieldKind::Text),
    FieldSpec::required(
        "repeat_frequency",
        FieldKind::Enumerated(RepeatFrequency::VALUES),
    ),
    FieldSpec::nullable(
        "repeat_interval",
        FieldKind::Enumerated(RepeatInterval::VALUES),
    ),
    FieldSpec::nullable("repeat_period", FieldKind::Enumerated(RepeatPeriod::VALUES)),
    FieldSpec::nullable("settings", FieldKind::Text),
    FieldSpec::required("time_zone", FieldKind::Text),
    FieldSpec::required("created_at", FieldKind::Timestamp),
    FieldSpec::required("updated_at", FieldKind::Timestamp),
    FieldSpec::nullable("repeat_until", FieldKind::Date),
    FieldSpec::required("starts_at", FieldKind::Timestamp),
    FieldSpec::required("ends_at", FieldKind::Timestamp),
    FieldSpec::required("share", FieldKind::Boolean),
];

const RELATIONSHIPS: &[FieldSpec] = &[
    FieldSpec::required("person", FieldKind::Relation("Person")),
    FieldSpec::required("organization", FieldKind::Relation("Organization")),
];

/// A blockout: a span of time a person is unavailable to serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blockout {
    /// The blockout id.
    pub id: String,
    /// Short description shown on the schedule.
    pub description: String,
    /// Shared by every blockout created together.
    pub group_identifier: Option<String>,
    /// Name of the organization that owns the blockout.
    pub organization_name: String,
    /// Why the person is unavailable.
    pub reason: Option<String>,
    /// How the blockout recurs.
    pub repeat_frequency: RepeatFrequency,
    /// Which occurrence repeats, for monthly recurrence.
    pub repeat_interval: Option<RepeatInterval>,
    /// Unit of the recurrence.
    pub repeat_period: Option<RepeatPeriod>,
    /// Raw recurrence settings.
    pub settings: Option<String>,
    /// IANA time zone of the blockout.
    pub time_zone: String,
    /// When the blockout was created.
    pub created_at: DateTime<Utc>,
    /// When the blockout was last updated.
    pub updated_at: DateTime<Utc>,
    /// Last day the blockout repeats.
    pub repeat_until: Option<NaiveDate>,
    /// Start of the blocked-out time.
    pub starts_at: DateTime<Utc>,
    /// End of the blocked-out time.
    pub ends_at: DateTime<Utc>,
    /// Whether the blockout is visible to other schedulers.
    pub share: bool,
    /// The person the blockout belongs to.
    pub person: Relationship,
    /// The organization the blockout belongs to.
    pub organization: Relationship,
}

impl Blockout {
    /// Returns `true` if the blockout has a recurrence pattern.
    #[must_use]
    pub fn repeats(&self) -> bool {
        self.repeat_frequency != RepeatFrequency::NoRepeat
    }
}

impl Record for Blockout {
    const SHAPE: RecordShape = RecordShape::new("Blockout", ATTRIBUTES, RELATIONSHIPS);

    fn from_fields(fields: RecordFields) -> Result<Self, SchemaError> {
        let RecordFields {
            id,
            mut attributes,
            mut relationships,
        } = fields;
        let a = &mut attributes;

        Ok(Self {
            id,
            description: a.take("description")?,
            group_identifier: a.take("group_identifier")?,
            organization_name: a.take("organization_name")?,
            reason: a.take("reason")?,
            repeat_frequency: a.take("repeat_frequency")?,
            repeat_interval: a.take("repeat_interval")?,
            repeat_period: a.take("repeat_period")?,
            settings: a.take("settings")?,
            time_zone: a.take("time_zone")?,
            created_at: a.take("created_at")?,
            updated_at: a.take("updated_at")?,
            repeat_until: a.take("repeat_until")?,
            starts_at: a.take("starts_at")?,
            ends_at: a.take("ends_at")?,
            share: a.take("share")?,
            person: relationships.take("person")?,
            organization: relationships.take("organization")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{type_resource, SchemaProblem};
    use serde_json::{json, Value};

    fn blockout_json(frequency: &str) -> Value {
        json!({
            "type": "Blockout",
            "id": 77,
            "attributes": {
                "description": "Vacation",
                "group_identifier": "g-1",
                "organization_name": "First Church",
                "reason": null,
                "repeat_frequency": frequency,
                "repeat_interval": null,
                "repeat_period": "weekly",
                "settings": null,
                "time_zone": "America/Chicago",
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-02T00:00:00Z",
                "repeat_until": "2024-12-31",
                "starts_at": "2024-07-01T00:00:00Z",
                "ends_at": "2024-07-08T00:00:00Z",
                "share": false
            },
            "relationships": {
                "person": {"data": {"type": "Person", "id": "12345"}},
                "organization": {"data": {"type": "Organization", "id": 1}}
            }
        })
    }

    #[test]
    fn test_blockout_typed_from_payload() {
        let blockout: Blockout = type_resource(&blockout_json("every_2")).unwrap();

        assert_eq!(blockout.id, "77");
        assert_eq!(blockout.repeat_frequency, RepeatFrequency::Every2);
        assert_eq!(blockout.repeat_period, Some(RepeatPeriod::Weekly));
        assert_eq!(blockout.repeat_interval, None);
        assert_eq!(blockout.person.id, "12345");
        assert_eq!(blockout.organization.id, "1");
        assert!(blockout.repeats());
    }

    #[test]
    fn test_unknown_repeat_frequency_is_rejected() {
        let error = type_resource::<Blockout>(&blockout_json("every_9")).unwrap_err();
        assert_eq!(error.field, "attributes.repeat_frequency");
        assert!(matches!(error.problem, SchemaProblem::NotAllowed { .. }));
    }

    #[test]
    fn test_blockout_requires_person() {
        let mut payload = blockout_json("no_repeat");
        payload["relationships"]["person"] = json!({"data": null});

        let error = type_resource::<Blockout>(&payload).unwrap_err();
        assert_eq!(error.field, "relationships.person");
    }
}
