//! People `Person` resource.
//!
//! A single member or user of the organization, at `/people/v2/people`.
//! Unlike the other resources it can be created, updated and deleted.
//!
//! # Example
//!
//! ```rust,ignore
//! use planning_center::rest::resources::people::PersonParams;
//!
//! let people = client.people().people();
//!
//! let created = people
//!     .create(&PersonParams::new().first_name("Ada").last_name("Lovelace"))
//!     .await?;
//!
//! let updated = people
//!     .for_id(&created.id)
//!     .update(&PersonParams::new().nickname("Countess"))
//!     .await?;
//!
//! people.for_id(&updated.id).delete().await?;
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::rest::{
    FieldKind, FieldSpec, Record, RecordFields, RecordShape, Relationship, SchemaError,
    WritableRecord,
};

const ATTRIBUTES: &[FieldSpec] = &[
    FieldSpec::required("avatar", FieldKind::Text),
    FieldSpec::required("demographic_avatar_url", FieldKind::Text),
    FieldSpec::required("first_name", FieldKind::Text),
    FieldSpec::required("name", FieldKind::Text),
    FieldSpec::required("status", FieldKind::Text),
    FieldSpec::nullable("remote_id", FieldKind::Integer),
    FieldSpec::required("accounting_administrator", FieldKind::Boolean),
    FieldSpec::nullable("anniversary", FieldKind::Date),
    FieldSpec::nullable("birthdate", FieldKind::Date),
    FieldSpec::required("child", FieldKind::Boolean),
    FieldSpec::nullable("given_name", FieldKind::Text),
    FieldSpec::nullable("grade", FieldKind::Integer),
    FieldSpec::nullable("graduation_year", FieldKind::Integer),
    FieldSpec::required("last_name", FieldKind::Text),
    FieldSpec::nullable("middle_name", FieldKind::Text),
    FieldSpec::nullable("nickname", FieldKind::Text),
    FieldSpec::nullable("people_permissions", FieldKind::Text),
    FieldSpec::required("site_administrator", FieldKind::Boolean),
    FieldSpec::nullable("gender", FieldKind::Text),
    FieldSpec::nullable("inactivated_at", FieldKind::Timestamp),
    FieldSpec::nullable("medical_notes", FieldKind::Text),
    FieldSpec::nullable("membership", FieldKind::Text),
    FieldSpec::required("created_at", FieldKind::Timestamp),
    FieldSpec::required("updated_at", FieldKind::Timestamp),
    FieldSpec::required("can_create_forms", FieldKind::Boolean),
    FieldSpec::required("can_email_lists", FieldKind::Boolean),
    FieldSpec::optional("directory_shared_info", FieldKind::Json),
    FieldSpec::nullable("directory_status", FieldKind::Text),
    FieldSpec::nullable("passed_background_check", FieldKind::Boolean),
    FieldSpec::nullable("resource_permission_flags", FieldKind::Json),
    FieldSpec::nullable("school_type", FieldKind::Text),
    FieldSpec::optional("login_identifier", FieldKind::Text),
    FieldSpec::optional("mfa_configured", FieldKind::Boolean),
];

const RELATIONSHIPS: &[FieldSpec] = &[
    FieldSpec::optional("primary_campus", FieldKind::Relation("PrimaryCampus")),
    FieldSpec::optional("gender", FieldKind::Relation("Gender")),
];

/// A person record: one member or user of the organization.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Person {
    /// The person's id.
    pub id: String,
    /// File UUID of the avatar.
    pub avatar: String,
    /// Default avatar chosen from demographics.
    pub demographic_avatar_url: String,
    /// The person's first name.
    pub first_name: String,
    /// Full name.
    pub name: String,
    /// `"active"` or `"inactive"`.
    pub status: String,
    /// Id in an external system.
    pub remote_id: Option<i64>,
    /// Whether the person administers Giving accounts.
    pub accounting_administrator: bool,
    /// Wedding anniversary.
    pub anniversary: Option<NaiveDate>,
    /// Date of birth.
    pub birthdate: Option<NaiveDate>,
    /// Whether the person is a child.
    pub child: bool,
    /// Legal given name, when it differs from the first name.
    pub given_name: Option<String>,
    /// School grade, `-1` for pre-K through `12`.
    pub grade: Option<i64>,
    /// Expected high school graduation year.
    pub graduation_year: Option<i64>,
    /// The person's last name.
    pub last_name: String,
    /// The person's middle name.
    pub middle_name: Option<String>,
    /// The person's nickname.
    pub nickname: Option<String>,
    /// Permission level within People.
    pub people_permissions: Option<String>,
    /// Whether the person administers the organization.
    pub site_administrator: bool,
    /// Gender as displayed, e.g. `"Female"`.
    pub gender: Option<String>,
    /// When the person was made inactive.
    pub inactivated_at: Option<DateTime<Utc>>,
    /// Medical notes.
    pub medical_notes: Option<String>,
    /// Membership status, e.g. `"Member"`.
    pub membership: Option<String>,
    /// When the person was created.
    pub created_at: DateTime<Utc>,
    /// When the person was last updated.
    pub updated_at: DateTime<Utc>,
    /// Whether the person may create forms.
    pub can_create_forms: bool,
    /// Whether the person may email lists.
    pub can_email_lists: bool,
    /// Only sent when requested with `fields[Person]`.
    pub directory_shared_info: Option<serde_json::Value>,
    /// Church Center directory visibility.
    pub directory_status: Option<String>,
    /// Whether a background check has passed.
    pub passed_background_check: Option<bool>,
    /// Per-app permission flags, passed through untyped.
    pub resource_permission_flags: Option<serde_json::Value>,
    /// Type of school attended.
    pub school_type: Option<String>,
    /// Sign-in email or phone number.
    pub login_identifier: Option<String>,
    /// Whether two-factor sign-in is set up.
    pub mfa_configured: Option<bool>,
    /// The person's primary campus.
    pub primary_campus: Option<Relationship>,
    /// The gender option record, distinct from the `gender` attribute text.
    pub gender_option: Option<Relationship>,
}

impl Person {
    /// Returns `true` if the profile is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status != "inactive"
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
            avatar: a.take("avatar")?,
            demographic_avatar_url: a.take("demographic_avatar_url")?,
            first_name: a.take("first_name")?,
            name: a.take("name")?,
            status: a.take("status")?,
            remote_id: a.take("remote_id")?,
            accounting_administrator: a.take("accounting_administrator")?,
            anniversary: a.take("anniversary")?,
            birthdate: a.take("birthdate")?,
            child: a.take("child")?,
            given_name: a.take("given_name")?,
            grade: a.take("grade")?,
            graduation_year: a.take("graduation_year")?,
            last_name: a.take("last_name")?,
            middle_name: a.take("middle_name")?,
            nickname: a.take("nickname")?,
            people_permissions: a.take("people_permissions")?,
            site_administrator: a.take("site_administrator")?,
            gender: a.take("gender")?,
            inactivated_at: a.take("inactivated_at")?,
            medical_notes: a.take("medical_notes")?,
            membership: a.take("membership")?,
            created_at: a.take("created_at")?,
            updated_at: a.take("updated_at")?,
            can_create_forms: a.take("can_create_forms")?,
            can_email_lists: a.take("can_email_lists")?,
            directory_shared_info: a.take("directory_shared_info")?,
            directory_status: a.take("directory_status")?,
            passed_background_check: a.take("passed_background_check")?,
            resource_permission_flags: a.take("resource_permission_flags")?,
            school_type: a.take("school_type")?,
            login_identifier: a.take("login_identifier")?,
            mfa_configured: a.take("mfa_configured")?,
            primary_campus: relationships.take("primary_campus")?,
            gender_option: relationships.take("gender")?,
        })
    }
}

impl WritableRecord for Person {
    type Params = PersonParams;
}

/// Attributes sent when creating or updating a [`Person`].
///
/// Only the attributes that are set are sent; an update leaves the others
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonParams {
    /// New first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// New last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// New given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    /// New middle name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// New nickname.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// New date of birth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<NaiveDate>,
    /// New anniversary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anniversary: Option<NaiveDate>,
    /// New gender, by display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// New school grade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<i64>,
    /// Whether the person is a child.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child: Option<bool>,
    /// New graduation year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<i64>,
    /// Grants or revokes organization administration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_administrator: Option<bool>,
    /// Grants or revokes Giving administration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounting_administrator: Option<bool>,
    /// New People permission level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people_permissions: Option<String>,
    /// New membership status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership: Option<String>,
    /// `"inactive"` sets `inactivated_at`; anything else reactivates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// New medical notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_notes: Option<String>,
    /// New external id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<i64>,
    /// Id of the new primary campus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_campus_id: Option<i64>,
    /// Id of the new gender option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender_id: Option<i64>,
}

impl PersonParams {
    /// Creates empty params.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    #[must_use]
    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    #[must_use]
    pub const fn birthdate(mut self, birthdate: NaiveDate) -> Self {
        self.birthdate = Some(birthdate);
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::record::write_body;
    use crate::rest::type_resource;
    use serde_json::json;

    #[test]
    fn test_params_serialize_only_set_attributes() {
        let params = PersonParams::new()
            .first_name("Ada")
            .birthdate(NaiveDate::from_ymd_opt(1815, 12, 10).unwrap());

        let body = write_body::<Person>(&params, None).unwrap();
        assert_eq!(
            body,
            json!({"data": {"type": "Person", "attributes": {
                "first_name": "Ada",
                "birthdate": "1815-12-10"
            }}})
        );
    }

    #[test]
    fn test_gender_relationship_is_separate_from_attribute() {
        let payload = json!({
            "type": "Person",
            "id": "1",
            "attributes": {
                "avatar": "uuid",
                "demographic_avatar_url": "https://example.com/a.png",
                "first_name": "Ada",
                "name": "Ada Lovelace",
                "status": "inactive",
                "remote_id": null,
                "accounting_administrator": false,
                "anniversary": null,
                "birthdate": null,
                "child": false,
                "given_name": null,
                "grade": null,
                "graduation_year": null,
                "last_name": "Lovelace",
                "middle_name": null,
                "nickname": null,
                "people_permissions": null,
                "site_administrator": false,
                "gender": "F",
                "inactivated_at": "2024-01-01T00:00:00Z",
                "medical_notes": null,
                "membership": null,
                "created_at": "2020-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z",
                "can_create_forms": false,
                "can_email_lists": false,
                "directory_status": null,
                "passed_background_check": null,
                "resource_permission_flags": {"calendar": true},
                "school_type": null
            },
            "relationships": {
                "primary_campus": {"data": null},
                "gender": {"data": {"type": "Gender", "id": "2"}}
            }
        });

        let person: Person = type_resource(&payload).unwrap();
        assert!(!person.is_active());
        assert_eq!(person.gender.as_deref(), Some("F"));
        assert_eq!(person.gender_option.map(|g| g.id), Some("2".to_string()));
        assert_eq!(person.primary_campus, None);
        assert_eq!(person.resource_permission_flags, Some(json!({"calendar": true})));
    }
}
