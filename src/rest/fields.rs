//! Coerced field values and their conversion into record fields.
//!
//! [`coerce`](crate::rest::coerce) produces a [`RecordFields`]; a record's
//! `from_fields` then moves each value out with [`Fields::take`], converting
//! it through [`FromField`].

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::rest::schema::{SchemaError, SchemaProblem};

/// A reference to another resource, read from a JSON:API relationship.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Relationship {
    /// The related resource's type (e.g. `"Person"`).
    #[serde(rename = "type")]
    pub kind: String,
    /// The related resource's id.
    pub id: String,
}

/// A value after coercion to its declared kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// An explicit JSON `null`.
    Null,
    /// Text.
    Text(String),
    /// Integer.
    Integer(i64),
    /// Boolean.
    Boolean(bool),
    /// UTC timestamp.
    Timestamp(DateTime<Utc>),
    /// Calendar date.
    Date(NaiveDate),
    /// A validated enumerated value.
    Enum(String),
    /// A nested object.
    Object(Fields),
    /// A list.
    List(Vec<FieldValue>),
    /// A related resource.
    Relation(Relationship),
    /// Uninterpreted JSON.
    Json(serde_json::Value),
}

impl FieldValue {
    fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Boolean(_) => "boolean",
            Self::Timestamp(_) => "timestamp",
            Self::Date(_) => "date",
            Self::Enum(_) => "enumerated text",
            Self::Object(_) => "object",
            Self::List(_) => "list",
            Self::Relation(_) => "resource identifier",
            Self::Json(_) => "JSON",
        }
    }
}

/// The coerced fields of one section (`attributes`, `relationships`, or a
/// nested object), keyed by declared field name.
#[derive(Debug, Clone, PartialEq)]
pub struct Fields {
    record: &'static str,
    scope: String,
    values: BTreeMap<&'static str, FieldValue>,
}

impl Fields {
    pub(crate) fn new(record: &'static str, scope: &str) -> Self {
        Self {
            record,
            scope: scope.to_string(),
            values: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, name: &'static str, value: FieldValue) {
        self.values.insert(name, value);
    }

    /// Returns the names of the fields present, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    /// Returns a field's value without removing it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Returns the number of fields present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no fields are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Removes a field and converts it to `T`.
    ///
    /// An absent field converts only into `Option<_>` (as `None`).
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if the field is absent and `T` is not an
    /// `Option`, or the value cannot be represented as `T`.
    pub fn take<T: FromField>(&mut self, name: &str) -> Result<T, SchemaError> {
        let path = format!("{}.{name}", self.scope);
        match self.values.remove(name) {
            None => T::absent().ok_or_else(|| {
                SchemaError::new(self.record, path, SchemaProblem::Missing)
            }),
            Some(value) => {
                let found = value.kind_name();
                T::from_field(value).ok_or_else(|| {
                    SchemaError::new(
                        self.record,
                        path,
                        SchemaProblem::WrongKind {
                            expected: T::EXPECTED,
                            found: found.to_string(),
                        },
                    )
                })
            }
        }
    }
}

/// The coerced content of one resource object.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFields {
    /// The resource id, as a string.
    pub id: String,
    /// Fields read from `attributes`.
    pub attributes: Fields,
    /// Fields read from `relationships`.
    pub relationships: Fields,
}

/// Conversion from a coerced [`FieldValue`] into a record field type.
pub trait FromField: Sized {
    /// Name of the expected kind, for error messages.
    const EXPECTED: &'static str;

    /// Converts the value, or returns `None` if it has the wrong kind.
    fn from_field(value: FieldValue) -> Option<Self>;

    /// The value used when the field is absent, if any.
    fn absent() -> Option<Self> {
        None
    }
}

impl FromField for String {
    const EXPECTED: &'static str = "text";

    fn from_field(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Text(s) | FieldValue::Enum(s) => Some(s),
            _ => None,
        }
    }
}

impl FromField for i64 {
    const EXPECTED: &'static str = "integer";

    fn from_field(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Integer(i) => Some(i),
            _ => None,
        }
    }
}

impl FromField for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_field(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Boolean(b) => Some(b),
            _ => None,
        }
    }
}

impl FromField for DateTime<Utc> {
    const EXPECTED: &'static str = "timestamp";

    fn from_field(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Timestamp(t) => Some(t),
            _ => None,
        }
    }
}

impl FromField for NaiveDate {
    const EXPECTED: &'static str = "date";

    fn from_field(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Date(d) => Some(d),
            _ => None,
        }
    }
}

impl FromField for Relationship {
    const EXPECTED: &'static str = "resource identifier";

    fn from_field(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Relation(r) => Some(r),
            _ => None,
        }
    }
}

impl FromField for Fields {
    const EXPECTED: &'static str = "object";

    fn from_field(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Object(f) => Some(f),
            _ => None,
        }
    }
}

impl FromField for serde_json::Value {
    const EXPECTED: &'static str = "JSON";

    fn from_field(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Json(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: FromField> FromField for Vec<T> {
    const EXPECTED: &'static str = "list";

    fn from_field(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::List(items) => items.into_iter().map(T::from_field).collect(),
            _ => None,
        }
    }
}

impl<T: FromField> FromField for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_field(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Null => Some(None),
            other => T::from_field(other).map(Some),
        }
    }

    fn absent() -> Option<Self> {
        Some(None)
    }
}

/// Defines a string-valued enum usable as a record field.
///
/// The generated type has a `VALUES` table for
/// [`FieldKind::Enumerated`](crate::rest::FieldKind::Enumerated), an
/// `as_str` accessor, `Display`, `Serialize`, and a [`FromField`] impl.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every wire value, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($text),+];

            /// Returns the wire value.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                }
            }

            /// Parses a wire value.
            #[must_use]
            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $( $text => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl $crate::rest::FromField for $name {
            const EXPECTED: &'static str = stringify!($name);

            fn from_field(value: $crate::rest::FieldValue) -> Option<Self> {
                match value {
                    $crate::rest::FieldValue::Enum(s) | $crate::rest::FieldValue::Text(s) => {
                        Self::parse(&s)
                    }
                    _ => None,
                }
            }
        }
    };
}

pub(crate) use string_enum;
