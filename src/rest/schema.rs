//! Declarative record shapes and the coercion routine that applies them.
//!
//! A [`RecordShape`] lists, for one resource type, which attributes and
//! relationships a typed record needs and what kind of value each must hold.
//! [`coerce`] walks a JSON:API resource object against a shape and produces
//! [`RecordFields`], from which the record's
//! [`from_fields`](crate::rest::Record::from_fields) builds the struct.
//!
//! Coercion is lax about representation and strict about presence:
//!
//! - integers accept numeric strings and integral floats
//! - booleans accept `"true"`/`"false"` and `0`/`1`
//! - ids accept strings or numbers and are stored as strings
//! - timestamps are RFC 3339 and normalised to UTC; dates are `YYYY-MM-DD`
//! - a required field that is absent or null is an error, never a default
//! - keys the shape does not declare are ignored
//!
//! # Example
//!
//! ```rust
//! use planning_center::rest::{coerce, FieldKind, FieldSpec, RecordShape};
//! use serde_json::json;
//!
//! const ATTRIBUTES: &[FieldSpec] = &[FieldSpec::required("name", FieldKind::Text)];
//! const SHAPE: RecordShape = RecordShape::new("Team", ATTRIBUTES, &[]);
//!
//! let fields = coerce(
//!     &json!({"type": "Team", "id": 7, "attributes": {"name": "Band", "color": "red"}}),
//!     &SHAPE,
//! )
//! .unwrap();
//!
//! assert_eq!(fields.id, "7");
//! assert_eq!(fields.attributes.names().collect::<Vec<_>>(), vec!["name"]);
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::rest::fields::{FieldValue, Fields, RecordFields, Relationship};

/// The kind of value a field must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A JSON string.
    Text,
    /// A signed 64-bit integer.
    Integer,
    /// A boolean.
    Boolean,
    /// An RFC 3339 timestamp, normalised to UTC.
    Timestamp,
    /// A calendar date (`YYYY-MM-DD`).
    Date,
    /// A string restricted to the listed values.
    Enumerated(&'static [&'static str]),
    /// A nested object with its own fields.
    Object(&'static [FieldSpec]),
    /// An array whose elements all have the given kind.
    List(&'static FieldKind),
    /// A JSON:API resource identifier (`{"type", "id"}`) of the given type.
    Relation(&'static str),
    /// Any JSON value, passed through untouched.
    Json,
}

impl FieldKind {
    /// Short human-readable name used in error messages.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Timestamp => "RFC 3339 timestamp",
            Self::Date => "date (YYYY-MM-DD)",
            Self::Enumerated(_) => "enumerated text",
            Self::Object(_) => "object",
            Self::List(_) => "list",
            Self::Relation(_) => "resource identifier",
            Self::Json => "any JSON value",
        }
    }
}

/// Whether a field may be absent or null.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Must be present and non-null.
    Required,
    /// Must be present; may be null.
    Nullable,
    /// May be absent or null.
    Optional,
}

/// One entry of a shape's field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Name of the field on the typed record.
    pub name: &'static str,
    /// Key of the field in the response object.
    pub key: &'static str,
    /// Kind the value is coerced to.
    pub kind: FieldKind,
    /// Presence requirement.
    pub presence: Presence,
}

impl FieldSpec {
    /// A field that must be present and non-null.
    #[must_use]
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            key: name,
            kind,
            presence: Presence::Required,
        }
    }

    /// A field that must be present but may be null.
    #[must_use]
    pub const fn nullable(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            key: name,
            kind,
            presence: Presence::Nullable,
        }
    }

    /// A field that may be absent or null.
    #[must_use]
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            key: name,
            kind,
            presence: Presence::Optional,
        }
    }

    /// Reads the field from a differently named response key.
    #[must_use]
    pub const fn from_key(mut self, key: &'static str) -> Self {
        self.key = key;
        self
    }
}

/// The declared shape of one resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordShape {
    /// The JSON:API `type` of the resource (e.g. `"Person"`).
    pub type_name: &'static str,
    /// Fields read from `attributes`.
    pub attributes: &'static [FieldSpec],
    /// Fields read from `relationships.<key>.data`.
    pub relationships: &'static [FieldSpec],
}

impl RecordShape {
    /// Creates a shape.
    #[must_use]
    pub const fn new(
        type_name: &'static str,
        attributes: &'static [FieldSpec],
        relationships: &'static [FieldSpec],
    ) -> Self {
        Self {
            type_name,
            attributes,
            relationships,
        }
    }
}

/// What was wrong with a field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaProblem {
    /// A required field was absent.
    #[error("required field is missing")]
    Missing,

    /// A required field was null.
    #[error("required field is null")]
    Null,

    /// The value could not be coerced to the declared kind.
    #[error("expected {expected}, found {found}")]
    WrongKind {
        /// The declared kind.
        expected: &'static str,
        /// Description of the value received.
        found: String,
    },

    /// An enumerated field held a value outside its allowed set.
    #[error("value '{value}' is not one of {allowed:?}")]
    NotAllowed {
        /// The value received.
        value: String,
        /// The allowed values.
        allowed: &'static [&'static str],
    },

    /// A resource or relation carried an unexpected `type`.
    #[error("expected type '{expected}', found '{found}'")]
    TypeMismatch {
        /// The declared type.
        expected: &'static str,
        /// The type received.
        found: String,
    },
}

/// A response object did not match the declared record shape.
///
/// # Example
///
/// ```rust
/// use planning_center::rest::{SchemaError, SchemaProblem};
///
/// let error = SchemaError::new("Person", "attributes.status", SchemaProblem::Missing);
/// assert_eq!(error.to_string(), "Person attributes.status: required field is missing");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{record} {field}: {problem}")]
pub struct SchemaError {
    /// The record type being built.
    pub record: &'static str,
    /// Dotted path of the offending field (e.g. `attributes.status`).
    pub field: String,
    /// What was wrong.
    pub problem: SchemaProblem,
}

impl SchemaError {
    /// Creates a schema error.
    #[must_use]
    pub fn new(record: &'static str, field: impl Into<String>, problem: SchemaProblem) -> Self {
        Self {
            record,
            field: field.into(),
            problem,
        }
    }
}

/// Coerces one JSON:API resource object against a shape.
///
/// The input is only read.
///
/// # Errors
///
/// Returns [`SchemaError`] if the object is not a JSON object, has no usable
/// `id`, carries a different `type`, or any declared field is missing or of
/// the wrong kind.
pub fn coerce(object: &Value, shape: &RecordShape) -> Result<RecordFields, SchemaError> {
    let record = shape.type_name;
    let fail = |field: &str, problem| SchemaError::new(record, field, problem);

    let object = object.as_object().ok_or_else(|| {
        fail(
            "data",
            SchemaProblem::WrongKind {
                expected: "resource object",
                found: describe(object),
            },
        )
    })?;

    if let Some(found) = object.get("type").filter(|t| !t.is_null()) {
        let found = found.as_str().map_or_else(|| found.to_string(), ToString::to_string);
        if found != shape.type_name {
            return Err(fail(
                "type",
                SchemaProblem::TypeMismatch {
                    expected: shape.type_name,
                    found,
                },
            ));
        }
    }

    let id = match object.get("id") {
        None => return Err(fail("id", SchemaProblem::Missing)),
        Some(Value::Null) => return Err(fail("id", SchemaProblem::Null)),
        Some(value) => coerce_id(value).ok_or_else(|| {
            fail(
                "id",
                SchemaProblem::WrongKind {
                    expected: "string or integer id",
                    found: describe(value),
                },
            )
        })?,
    };

    let attributes = section(object, "attributes", record)?;
    let attributes = coerce_object(attributes, shape.attributes, record, "attributes")?;

    let relationships = section(object, "relationships", record)?;
    let relationships = coerce_relationships(relationships, shape.relationships, record)?;

    Ok(RecordFields {
        id,
        attributes,
        relationships,
    })
}

fn section<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    record: &'static str,
) -> Result<Option<&'a Map<String, Value>>, SchemaError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(other) => Err(SchemaError::new(
            record,
            key,
            SchemaProblem::WrongKind {
                expected: "object",
                found: describe(other),
            },
        )),
    }
}

fn coerce_object(
    map: Option<&Map<String, Value>>,
    specs: &[FieldSpec],
    record: &'static str,
    scope: &str,
) -> Result<Fields, SchemaError> {
    let mut fields = Fields::new(record, scope);

    for spec in specs {
        let path = format!("{scope}.{}", spec.name);
        match map.and_then(|m| m.get(spec.key)) {
            None => match spec.presence {
                Presence::Optional => {}
                Presence::Required | Presence::Nullable => {
                    return Err(SchemaError::new(record, path, SchemaProblem::Missing));
                }
            },
            Some(Value::Null) => match spec.presence {
                Presence::Required => {
                    return Err(SchemaError::new(record, path, SchemaProblem::Null));
                }
                Presence::Nullable | Presence::Optional => {
                    fields.insert(spec.name, FieldValue::Null);
                }
            },
            Some(value) => {
                let coerced = coerce_value(value, &spec.kind, record, &path)?;
                fields.insert(spec.name, coerced);
            }
        }
    }

    Ok(fields)
}

fn coerce_relationships(
    map: Option<&Map<String, Value>>,
    specs: &[FieldSpec],
    record: &'static str,
) -> Result<Fields, SchemaError> {
    let mut fields = Fields::new(record, "relationships");

    for spec in specs {
        let path = format!("relationships.{}", spec.name);
        let data = map
            .and_then(|m| m.get(spec.key))
            .and_then(|relationship| relationship.get("data"))
            .filter(|data| !is_empty_data(data));

        match data {
            Some(data) => {
                let coerced = coerce_value(data, &spec.kind, record, &path)?;
                fields.insert(spec.name, coerced);
            }
            None if spec.presence == Presence::Required => {
                return Err(SchemaError::new(record, path, SchemaProblem::Missing));
            }
            None => {}
        }
    }

    Ok(fields)
}

/// An empty relationship (`null`, `[]` or `{}`) counts as absent.
fn is_empty_data(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

fn coerce_value(
    value: &Value,
    kind: &FieldKind,
    record: &'static str,
    path: &str,
) -> Result<FieldValue, SchemaError> {
    let wrong_kind = || {
        SchemaError::new(
            record,
            path,
            SchemaProblem::WrongKind {
                expected: kind.describe(),
                found: describe(value),
            },
        )
    };

    let coerced = match kind {
        FieldKind::Text => FieldValue::Text(value.as_str().ok_or_else(wrong_kind)?.to_string()),
        FieldKind::Integer => FieldValue::Integer(coerce_integer(value).ok_or_else(wrong_kind)?),
        FieldKind::Boolean => FieldValue::Boolean(coerce_boolean(value).ok_or_else(wrong_kind)?),
        FieldKind::Timestamp => {
            let parsed = value
                .as_str()
                .and_then(|s| DateTime::parse_from_rfc3339(s.trim()).ok())
                .ok_or_else(wrong_kind)?;
            FieldValue::Timestamp(parsed.with_timezone(&Utc))
        }
        FieldKind::Date => {
            let parsed = value
                .as_str()
                .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
                .ok_or_else(wrong_kind)?;
            FieldValue::Date(parsed)
        }
        FieldKind::Enumerated(allowed) => {
            let text = value.as_str().ok_or_else(wrong_kind)?;
            if !allowed.contains(&text) {
                return Err(SchemaError::new(
                    record,
                    path,
                    SchemaProblem::NotAllowed {
                        value: text.to_string(),
                        allowed,
                    },
                ));
            }
            FieldValue::Enum(text.to_string())
        }
        FieldKind::Object(specs) => {
            let map = value.as_object().ok_or_else(wrong_kind)?;
            FieldValue::Object(coerce_object(Some(map), specs, record, path)?)
        }
        FieldKind::List(element) => {
            let items = value.as_array().ok_or_else(wrong_kind)?;
            let mut values = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                let item_path = format!("{path}[{index}]");
                if item.is_null() {
                    return Err(SchemaError::new(record, item_path, SchemaProblem::Null));
                }
                values.push(coerce_value(item, element, record, &item_path)?);
            }
            FieldValue::List(values)
        }
        FieldKind::Relation(target) => {
            FieldValue::Relation(coerce_relation(value, target, record, path)?)
        }
        FieldKind::Json => FieldValue::Json(value.clone()),
    };

    Ok(coerced)
}

fn coerce_relation(
    value: &Value,
    target: &'static str,
    record: &'static str,
    path: &str,
) -> Result<Relationship, SchemaError> {
    let wrong_kind = || {
        SchemaError::new(
            record,
            path,
            SchemaProblem::WrongKind {
                expected: "resource identifier",
                found: describe(value),
            },
        )
    };

    let object = value.as_object().ok_or_else(wrong_kind)?;

    if let Some(found) = object.get("type").and_then(Value::as_str) {
        if found != target {
            return Err(SchemaError::new(
                record,
                path,
                SchemaProblem::TypeMismatch {
                    expected: target,
                    found: found.to_string(),
                },
            ));
        }
    }

    let id = object.get("id").and_then(coerce_id).ok_or_else(wrong_kind)?;

    Ok(Relationship {
        kind: target.to_string(),
        id,
    })
}

fn coerce_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}

fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < 9.0e15)
                .map(|f| {
                    #[allow(clippy::cast_possible_truncation)]
                    let truncated = f as i64;
                    truncated
                })
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        _ => None,
    }
}

/// Describes a JSON value for error messages.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) if s.chars().count() > 40 => {
            let head: String = s.chars().take(40).collect();
            format!("string \"{head}...\"")
        }
        Value::String(s) => format!("string \"{s}\""),
        Value::Array(items) => format!("array of {}", items.len()),
        Value::Object(_) => "object".to_string(),
    }
}
