//! Groups `Person` resource.

use chrono::{DateTime, Utc};

use crate::rest::{FieldKind, FieldSpec, Fields, Record, RecordFields, RecordShape, SchemaError};

const ADDRESS_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("city", FieldKind::Text),
    FieldSpec::required("line_1", FieldKind::Text),
    FieldSpec::optional("line_2", FieldKind::Text),
    FieldSpec::required("location", FieldKind::Text),
    FieldSpec::required("state", FieldKind::Text),
    FieldSpec::required("street", FieldKind::Text),
    FieldSpec::required("street_line_1", FieldKind::Text),
    FieldSpec::optional("street_line_2", FieldKind::Text),
    FieldSpec::required("zip", FieldKind::Text),
];

const EMAIL_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("address", FieldKind::Text),
    FieldSpec::required("location", FieldKind::Text),
    FieldSpec::required("primary", FieldKind::Boolean),
];

const PHONE_NUMBER_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("number", FieldKind::Text),
    FieldSpec::optional("carrier", FieldKind::Text),
    FieldSpec::required("location", FieldKind::Text),
    FieldSpec::required("primary", FieldKind::Boolean),
];

const ADDRESS: FieldKind = FieldKind::Object(ADDRESS_FIELDS);
const EMAIL: FieldKind = FieldKind::Object(EMAIL_FIELDS);
const PHONE_NUMBER: FieldKind = FieldKind::Object(PHONE_NUMBER_FIELDS);

const ATTRIBUTES: &[FieldSpec] = &[
    FieldSpec::required("addresses", FieldKind::List(&ADDRESS)),
    FieldSpec::required("avatar_url", FieldKind::Text),
    FieldSpec::optional("child", FieldKind::Boolean),
    FieldSpec::required("created_at", FieldKind::Timestamp),
    FieldSpec::required("email_addresses", FieldKind::List(&EMAIL)),
    FieldSpec::required("first_name", FieldKind::Text),
    FieldSpec::required("last_name", FieldKind::Text),
    FieldSpec::required("permissions", FieldKind::Text),
    FieldSpec::required("phone_numbers", FieldKind::List(&PHONE_NUMBER)),
];

/// A postal address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    /// City.
    pub city: String,
    /// First line as displayed.
    pub line_1: String,
    /// Second line as displayed.
    pub line_2: Option<String>,
    /// Label such as `"Home"` or `"Work"`.
    pub location: String,
    /// State or region.
    pub state: String,
    /// Street, all lines joined.
    pub street: String,
    /// First street line.
    pub street_line_1: String,
    /// Second street line.
    pub street_line_2: Option<String>,
    /// Postal code.
    pub zip: String,
}

impl Address {
    fn from_fields(mut fields: Fields) -> Result<Self, SchemaError> {
        Ok(Self {
            city: fields.take("city")?,
            line_1: fields.take("line_1")?,
            line_2: fields.take("line_2")?,
            location: fields.take("location")?,
            state: fields.take("state")?,
            street: fields.take("street")?,
            street_line_1: fields.take("street_line_1")?,
            street_line_2: fields.take("street_line_2")?,
            zip: fields.take("zip")?,
        })
    }
}

/// An email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    /// The email address.
    pub address: String,
    /// Label such as `"Home"` or `"Work"`.
    pub location: String,
    /// Whether this is the primary address.
    pub primary: bool,
}

impl Email {
    fn from_fields(mut fields: Fields) -> Result<Self, SchemaError> {
        Ok(Self {
            address: fields.take("address")?,
            location: fields.take("location")?,
            primary: fields.take("primary")?,
        })
    }
}

/// A phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    /// The phone number as entered.
    pub number: String,
    /// Mobile carrier, if known.
    pub carrier: Option<String>,
    /// Label such as `"Mobile"` or `"Home"`.
    pub location: String,
    /// Whether this is the primary number.
    pub primary: bool,
}

impl PhoneNumber {
    fn from_fields(mut fields: Fields) -> Result<Self, SchemaError> {
        Ok(Self {
            number: fields.take("number")?,
            carrier: fields.take("carrier")?,
            location: fields.take("location")?,
            primary: fields.take("primary")?,
        })
    }
}

/// A person as seen by the Groups app: a member, leader, or administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// The person's id.
    pub id: String,
    /// Postal addresses.
    pub addresses: Vec<Address>,
    /// Avatar image URL.
    pub avatar_url: String,
    /// Under 13 years old. Only sent when requested with `fields[Person]`.
    pub child: Option<bool>,
    /// When the person was created.
    pub created_at: DateTime<Utc>,
    /// Email addresses.
    pub email_addresses: Vec<Email>,
    /// The person's first name.
    pub first_name: String,
    /// The person's last name.
    pub last_name: String,
    /// `administrator`, `group_type_manager`, `leader`, `member`, or
    /// `no access`.
    pub permissions: String,
    /// Phone numbers.
    pub phone_numbers: Vec<PhoneNumber>,
}

impl Person {
    /// Returns the primary email address, if one is flagged.
    #[must_use]
    pub fn primary_email(&self) -> Option<&str> {
        self.email_addresses
            .iter()
            .find(|email| email.primary)
            .map(|email| email.address.as_str())
    }
}

impl Record for Person {
    const SHAPE: RecordShape = RecordShape::new("Person", ATTRIBUTES, &[]);

    fn from_fields(mut fields: RecordFields) -> Result<Self, SchemaError> {
        let a = &mut fields.attributes;

        let addresses = a
            .take::<Vec<Fields>>("addresses")?
            .into_iter()
            .map(Address::from_fields)
            .collect::<Result<_, _>>()?;
        let email_addresses = a
            .take::<Vec<Fields>>("email_addresses")?
            .into_iter()
            .map(Email::from_fields)
            .collect::<Result<_, _>>()?;
        let phone_numbers = a
            .take::<Vec<Fields>>("phone_numbers")?
            .into_iter()
            .map(PhoneNumber::from_fields)
            .collect::<Result<_, _>>()?;

        Ok(Self {
            addresses,
            avatar_url: a.take("avatar_url")?,
            child: a.take("child")?,
            created_at: a.take("created_at")?,
            email_addresses,
            first_name: a.take("first_name")?,
            last_name: a.take("last_name")?,
            permissions: a.take("permissions")?,
            phone_numbers,
            id: fields.id,
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
            "id": "77",
            "attributes": {
                "addresses": [{
                    "city": "Springfield",
                    "line_1": "1 Main St",
                    "line_2": null,
                    "location": "Home",
                    "state": "IL",
                    "street": "1 Main St",
                    "street_line_1": "1 Main St",
                    "zip": "62701"
                }],
                "avatar_url": "https://example.com/a.png",
                "created_at": "2021-02-03T04:05:06Z",
                "email_addresses": [
                    {"address": "ada@work.example", "location": "Work", "primary": false},
                    {"address": "ada@home.example", "location": "Home", "primary": true}
                ],
                "first_name": "Ada",
                "last_name": "Lovelace",
                "permissions": "leader",
                "phone_numbers": []
            }
        })
    }

    #[test]
    fn test_person_typed_with_nested_contact_lists() {
        let person: Person = type_resource(&person_json()).unwrap();

        assert_eq!(person.addresses.len(), 1);
        assert_eq!(person.addresses[0].city, "Springfield");
        assert_eq!(person.addresses[0].line_2, None);
        assert_eq!(person.addresses[0].street_line_2, None);
        assert_eq!(person.email_addresses.len(), 2);
        assert_eq!(person.primary_email(), Some("ada@home.example"));
        assert!(person.phone_numbers.is_empty());
        assert_eq!(person.child, None);
    }

    #[test]
    fn test_nested_list_errors_carry_index() {
        let mut payload = person_json();
        payload["attributes"]["email_addresses"][1]
            .as_object_mut()
            .unwrap()
            .remove("primary");

        let error = type_resource::<Person>(&payload).unwrap_err();
        assert_eq!(error.field, "attributes.email_addresses[1].primary");
        assert_eq!(error.problem, SchemaProblem::Missing);
    }
}
