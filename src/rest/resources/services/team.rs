//! Services `Team` resource.

use chrono::{DateTime, Utc};

use crate::rest::{
    string_enum, FieldKind, FieldSpec, Record, RecordFields, RecordShape, Relationship, SchemaError,
};

string_enum! {
    /// Whether members are scheduled per plan or per plan time (a split team).
    pub enum ScheduleTo {
        Plan => "plan",
        Time => "time",
    }
}

const PERSON: FieldKind = FieldKind::Relation("Person");
const TEAM_POSITION: FieldKind = FieldKind::Relation("TeamPosition");

const ATTRIBUTES: &[FieldSpec] = &[
    FieldSpec::required("name", FieldKind::Text),
    FieldSpec::required("rehearsal_team", FieldKind::Boolean),
    FieldSpec::nullable("sequence", FieldKind::Integer),
    FieldSpec::required("schedule_to", FieldKind::Enumerated(ScheduleTo::VALUES)),
    FieldSpec::required("default_status", FieldKind::Text),
    FieldSpec::required("default_prepare_notifications", FieldKind::Boolean),
    FieldSpec::required("created_at", FieldKind::Timestamp),
    FieldSpec::required("updated_at", FieldKind::Timestamp),
    FieldSpec::nullable("archived_at", FieldKind::Timestamp),
    FieldSpec::required("viewers_see", FieldKind::Integer),
    FieldSpec::required("assigned_directly", FieldKind::Boolean),
    FieldSpec::required("secure_team", FieldKind::Boolean),
    FieldSpec::required("last_plan_from", FieldKind::Text),
    FieldSpec::required("stage_color", FieldKind::Text),
    FieldSpec::nullable("stage_variant", FieldKind::Text),
];

const RELATIONSHIPS: &[FieldSpec] = &[
    FieldSpec::required("service_type", FieldKind::Relation("ServiceType")),
    FieldSpec::required("default_responds_to", PERSON),
    FieldSpec::optional("team_positions", FieldKind::List(&TEAM_POSITION)),
    FieldSpec::optional("people", FieldKind::List(&PERSON)),
];

/// A team within a service type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    /// The team's id.
    pub id: String,
    /// The team's name.
    pub name: String,
    /// Whether this is the rehearsal team.
    pub rehearsal_team: bool,
    /// Position within its service type.
    pub sequence: Option<i64>,
    /// Whether people are scheduled to plans or to times.
    pub schedule_to: ScheduleTo,
    /// Status given to new scheduled people, e.g. `"U"`.
    pub default_status: String,
    /// Whether notifications are prepared by default.
    pub default_prepare_notifications: bool,
    /// When the team was created.
    pub created_at: DateTime<Utc>,
    /// When the team was last updated.
    pub updated_at: DateTime<Utc>,
    /// When the team was archived, if it was.
    pub archived_at: Option<DateTime<Utc>>,
    /// Visibility level of the team for viewers.
    pub viewers_see: i64,
    /// Whether people are assigned without a position.
    pub assigned_directly: bool,
    /// Whether only team leaders can see the roster.
    pub secure_team: bool,
    /// Where the most recent plan was copied from.
    pub last_plan_from: String,
    /// Hex color used on the stage display.
    pub stage_color: String,
    /// Stage display variant.
    pub stage_variant: Option<String>,
    /// The service type the team belongs to.
    pub service_type: Relationship,
    /// Who handles declines by default.
    pub default_responds_to: Relationship,
    /// Positions on the team.
    pub team_positions: Vec<Relationship>,
    /// Members of the team, when the server includes the linkage.
    pub people: Vec<Relationship>,
}

impl Team {
    /// Returns `true` for split teams, scheduled per plan time.
    #[must_use]
    pub fn is_split(&self) -> bool {
        self.schedule_to == ScheduleTo::Time
    }
}

impl Record for Team {
    const SHAPE: RecordShape = RecordShape::new("Team", ATTRIBUTES, RELATIONSHIPS);

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
            name: a.take("name")?,
            rehearsal_team: a.take("rehearsal_team")?,
            sequence: a.take("sequence")?,
            schedule_to: a.take("schedule_to")?,
            default_status: a.take("default_status")?,
            default_prepare_notifications: a.take("default_prepare_notifications")?,
            created_at: a.take("created_at")?,
            updated_at: a.take("updated_at")?,
            archived_at: a.take("archived_at")?,
            viewers_see: a.take("viewers_see")?,
            assigned_directly: a.take("assigned_directly")?,
            secure_team: a.take("secure_team")?,
            last_plan_from: a.take("last_plan_from")?,
            stage_color: a.take("stage_color")?,
            stage_variant: a.take("stage_variant")?,
            service_type: r.take("service_type")?,
            default_responds_to: r.take("default_responds_to")?,
            team_positions: r
                .take::<Option<Vec<Relationship>>>("team_positions")?
                .unwrap_or_default(),
            people: r
                .take::<Option<Vec<Relationship>>>("people")?
                .unwrap_or_default(),
        })
    }
}
