//! Services `Person` resource.
//!
//! A person added to Planning Center Services, reached at
//! `/services/v2/people`. Each person's blockouts are nested under it:
//!
//! ```rust,ignore
//! let person = client.services().people().get("12345").await?;
//! println!("{} ({})", person.name(), person.status);
//!
//! let blockouts = client.services().people().for_id("12345").blockouts().list_all().await?;
//! ```

use chrono::{DateTime, NaiveDate, Utc};

use crate::rest::{FieldKind, FieldSpec, Record, RecordFields, RecordShape, Relationship, SchemaError};

const ONBOARDING: FieldKind = FieldKind::Json;

const ATTRIBUTES: &[FieldSpec] = &[
    FieldSpec::required("photo_url", FieldKind::Text),
    FieldSpec::required("photo_thumbnail_url", FieldKind::Text),
    FieldSpec::required("preferred_app", FieldKind::Text),
    FieldSpec::required("assigned_to_rehearsal_team", FieldKind::Boolean),
    FieldSpec::nullable("archived_at", FieldKind::Timestamp),
    FieldSpec::required("created_at", FieldKind::Timestamp),
    FieldSpec::required("first_name", FieldKind::Text),
    FieldSpec::required("last_name", FieldKind::Text),
    FieldSpec::nullable("name_prefix", FieldKind::Text),
    FieldSpec::nullable("name_suffix", FieldKind::Text),
    FieldSpec::required("updated_at", FieldKind::Timestamp),
    FieldSpec::required("full_name", FieldKind::Text),
    FieldSpec::required("permissions", FieldKind::Text),
    FieldSpec::required("status", FieldKind::Text),
    FieldSpec::required("max_permissions", FieldKind::Text),
    FieldSpec::nullable("anniversary", FieldKind::Date),
    FieldSpec::nullable("birthdate", FieldKind::Date),
    FieldSpec::nullable("given_name", FieldKind::Text),
    FieldSpec::nullable("middle_name", FieldKind::Text),
    FieldSpec::nullable("nickname", FieldKind::Text),
    FieldSpec::optional("media_permissions", FieldKind::Text),
    FieldSpec::optional("song_permissions", FieldKind::Text),
    FieldSpec::required("archived", FieldKind::Boolean),
    FieldSpec::required("site_administrator", FieldKind::Boolean),
    FieldSpec::nullable("logged_in_at", FieldKind::Timestamp),
    FieldSpec::nullable("notes", FieldKind::Text),
    FieldSpec::required("passed_background_check", FieldKind::Boolean),
    FieldSpec::required("ical_code", FieldKind::Text),
    FieldSpec::required("access_media_attachments", FieldKind::Boolean),
    FieldSpec::required("access_plan_attachments", FieldKind::Boolean),
    FieldSpec::required("access_song_attachments", FieldKind::Boolean),
    FieldSpec::nullable("preferred_max_plans_per_day", FieldKind::Integer),
    FieldSpec::nullable("preferred_max_plans_per_month", FieldKind::Integer),
    FieldSpec::optional("praise_charts_enabled", FieldKind::Boolean),
    FieldSpec::optional("can_edit_all_people", FieldKind::Boolean),
    FieldSpec::optional("can_view_all_people", FieldKind::Boolean),
    FieldSpec::optional("onboardings", FieldKind::List(&ONBOARDING)),
    FieldSpec::optional("me_tab", FieldKind::Text),
    FieldSpec::optional("plans_tab", FieldKind::Text),
    FieldSpec::optional("songs_tab", FieldKind::Text),
    FieldSpec::optional("media_tab", FieldKind::Text),
    FieldSpec::optional("people_tab", FieldKind::Text),
];

const RELATIONSHIPS: &[FieldSpec] = &[
    FieldSpec::optional("created_by", FieldKind::Relation("Person")),
    FieldSpec::optional("updated_by", FieldKind::Relation("Person")),
    FieldSpec::required("current_folder", FieldKind::Relation("Folder")),
];

/// A person added to Planning Center Services.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Person {
    /// The person's id.
    pub id: String,
    /// Full-size profile photo URL.
    pub photo_url: String,
    /// Thumbnail profile photo URL.
    pub photo_thumbnail_url: String,
    /// App opened on sign-in, e.g. `"services"`.
    pub preferred_app: String,
    /// Whether the person is on the rehearsal team.
    pub assigned_to_rehearsal_team: bool,
    /// When the person was archived, if they were.
    pub archived_at: Option<DateTime<Utc>>,
    /// When the person was created.
    pub created_at: DateTime<Utc>,
    /// The person's first name.
    pub first_name: String,
    /// The person's last name.
    pub last_name: String,
    /// Prefix such as `"Dr."`.
    pub name_prefix: Option<String>,
    /// Suffix such as `"Jr."`.
    pub name_suffix: Option<String>,
    /// When the person was last updated.
    pub updated_at: DateTime<Utc>,
    /// First and last name as displayed by Services.
    pub full_name: String,
    /// Permission level within Services.
    pub permissions: String,
    /// `"active"` or `"inactive"`.
    pub status: String,
    /// Highest permission level the person holds in any folder.
    pub max_permissions: String,
    /// Wedding anniversary.
    pub anniversary: Option<NaiveDate>,
    /// Date of birth.
    pub birthdate: Option<NaiveDate>,
    /// Legal given name, when it differs from the first name.
    pub given_name: Option<String>,
    /// The person's middle name.
    pub middle_name: Option<String>,
    /// The person's nickname.
    pub nickname: Option<String>,
    /// Media library permission level.
    pub media_permissions: Option<String>,
    /// Song library permission level.
    pub song_permissions: Option<String>,
    /// Whether the person is archived.
    pub archived: bool,
    /// Whether the person administers the organization.
    pub site_administrator: bool,
    /// Last sign-in time.
    pub logged_in_at: Option<DateTime<Utc>>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Whether a background check has passed.
    pub passed_background_check: bool,
    /// Calendar subscription code.
    pub ical_code: String,
    /// Whether the person may open media attachments.
    pub access_media_attachments: bool,
    /// Whether the person may open plan attachments.
    pub access_plan_attachments: bool,
    /// Whether the person may open song attachments.
    pub access_song_attachments: bool,
    /// Most plans the person wants to serve in one day.
    pub preferred_max_plans_per_day: Option<i64>,
    /// Most plans the person wants to serve in one month.
    pub preferred_max_plans_per_month: Option<i64>,
    /// Whether `PraiseCharts` is enabled for the person.
    pub praise_charts_enabled: Option<bool>,
    /// Whether the person may edit everyone.
    pub can_edit_all_people: Option<bool>,
    /// Whether the person may view everyone.
    pub can_view_all_people: Option<bool>,
    /// Onboarding progress, passed through untyped.
    pub onboardings: Option<Vec<serde_json::Value>>,
    /// Last selected view of the "Me" tab.
    pub me_tab: Option<String>,
    /// Last selected view of the "Plans" tab.
    pub plans_tab: Option<String>,
    /// Last selected view of the "Songs" tab.
    pub songs_tab: Option<String>,
    /// Last selected view of the "Media" tab.
    pub media_tab: Option<String>,
    /// Last selected view of the "People" tab.
    pub people_tab: Option<String>,
    /// Who created the person.
    pub created_by: Option<Relationship>,
    /// Who last updated the person.
    pub updated_by: Option<Relationship>,
    /// The folder the person currently works in.
    pub current_folder: Relationship,
}

impl Person {
    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.full_name
    }
}

impl Record for Person {
    const SHAPE: RecordShape = RecordShape::new("Person", ATTRIBUTES, RELATIONSHIPS);

    fn from_fields(fields: RecordFields) -> Result<Self, SchemaError> {
        let RecordFields {
            id,
            mut attributes,
            mut relationships,
        } = fields;
        let a = &mut attributes;

        Ok(Self {
            id,
            photo_url: a.take("photo_url")?,
            photo_thumbnail_url: a.take("photo_thumbnail_url")?,
            preferred_app: a.take("preferred_app")?,
            assigned_to_rehearsal_team: a.take("assigned_to_rehearsal_team")?,
            archived_at: a.take("archived_at")?,
            created_at: a.take("created_at")?,
            first_name: a.take("first_name")?,
            last_name: a.take("last_name")?,
            name_prefix: a.take("name_prefix")?,
            name_suffix: a.take("name_suffix")?,
            updated_at: a.take("updated_at")?,
            full_name: a.take("full_name")?,
            permissions: a.take("permissions")?,
            status: a.take("status")?,
            max_permissions: a.take("max_permissions")?,
            anniversary: a.take("anniversary")?,
            birthdate: a.take("birthdate")?,
            given_name: a.take("given_name")?,
            middle_name: a.take("middle_name")?,
            nickname: a.take("nickname")?,
            media_permissions: a.take("media_permissions")?,
            song_permissions: a.take("song_permissions")?,
            archived: a.take("archived")?,
            site_administrator: a.take("site_administrator")?,
            logged_in_at: a.take("logged_in_at")?,
            notes: a.take("notes")?,
            passed_background_check: a.take("passed_background_check")?,
            ical_code: a.take("ical_code")?,
            access_media_attachments: a.take("access_media_attachments")?,
            access_plan_attachments: a.take("access_plan_attachments")?,
            access_song_attachments: a.take("access_song_attachments")?,
            preferred_max_plans_per_day: a.take("preferred_max_plans_per_day")?,
            preferred_max_plans_per_month: a.take("preferred_max_plans_per_month")?,
            praise_charts_enabled: a.take("praise_charts_enabled")?,
            can_edit_all_people: a.take("can_edit_all_people")?,
            can_view_all_people: a.take("can_view_all_people")?,
            onboardings: a.take("onboardings")?,
            me_tab: a.take("me_tab")?,
            plans_tab: a.take("plans_tab")?,
            songs_tab: a.take("songs_tab")?,
            media_tab: a.take("media_tab")?,
            people_tab: a.take("people_tab")?,
            created_by: relationships.take("created_by")?,
            updated_by: relationships.take("updated_by")?,
            current_folder: relationships.take("current_folder")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{type_resource, SchemaProblem};
    use serde_json::{json, Value};

    fn person_json() -> Value {
        json!({
            "type": "Person",
            "id": "12345",
            "attributes": {
                "photo_url": "https://example.com/p.png",
                "photo_thumbnail_url": "https://example.com/t.png",
                "preferred_app": "services",
                "assigned_to_rehearsal_team": false,
                "archived_at": null,
                "created_at": "2020-01-01T10:00:00Z",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "name_prefix": null,
                "name_suffix": null,
                "updated_at": "2024-06-01T08:30:00-05:00",
                "full_name": "Ada Lovelace",
                "permissions": "Editor",
                "status": "active",
                "max_permissions": "Administrator",
                "anniversary": null,
                "birthdate": "1815-12-10",
                "given_name": null,
                "middle_name": null,
                "nickname": "Countess",
                "archived": false,
                "site_administrator": true,
                "logged_in_at": null,
                "notes": null,
                "passed_background_check": "true",
                "ical_code": "abc123",
                "access_media_attachments": true,
                "access_plan_attachments": true,
                "access_song_attachments": false,
                "preferred_max_plans_per_day": "2",
                "preferred_max_plans_per_month": null,
                "people_tab": "all"
            },
            "relationships": {
                "created_by": {"data": null},
                "current_folder": {"data": {"type": "Folder", "id": "9"}}
            },
            "links": {"self": "https://api.planningcenteronline.com/services/v2/people/12345"}
        })
    }

    #[test]
    fn test_person_typed_from_payload() {
        let person: Person = type_resource(&person_json()).unwrap();

        assert_eq!(person.id, "12345");
        assert_eq!(person.name(), "Ada Lovelace");
        assert_eq!(person.birthdate, NaiveDate::from_ymd_opt(1815, 12, 10));
        assert_eq!(person.updated_at.to_rfc3339(), "2024-06-01T13:30:00+00:00");
        assert!(person.passed_background_check);
        assert_eq!(person.preferred_max_plans_per_day, Some(2));
        assert_eq!(person.created_by, None);
        assert_eq!(person.current_folder.id, "9");
        assert_eq!(person.onboardings, None);
        assert_eq!(person.people_tab.as_deref(), Some("all"));
        assert_eq!(person.plans_tab, None);
    }

    #[test]
    fn test_person_missing_status_is_a_mismatch() {
        let mut payload = person_json();
        payload["attributes"]
            .as_object_mut()
            .unwrap()
            .remove("status");

        let error = type_resource::<Person>(&payload).unwrap_err();
        assert_eq!(error.record, "Person");
        assert_eq!(error.field, "attributes.status");
        assert_eq!(error.problem, SchemaProblem::Missing);
    }
}
