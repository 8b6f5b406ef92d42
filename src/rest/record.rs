//! The [`Record`] trait implemented by every typed resource.

use serde::Serialize;
use serde_json::Value;

use crate::rest::errors::ResourceError;
use crate::rest::fields::RecordFields;
use crate::rest::schema::{coerce, RecordShape, SchemaError};

/// A typed Planning Center resource.
///
/// Implementors declare their shape once; [`type_resource`] coerces a raw
/// resource object against it and hands the result to
/// [`from_fields`](Record::from_fields).
///
/// # Example
///
/// ```rust
/// use planning_center::rest::{
///     type_resource, FieldKind, FieldSpec, Record, RecordFields, RecordShape, SchemaError,
/// };
/// use serde_json::json;
///
/// struct Tag {
///     id: String,
///     name: String,
/// }
///
/// const TAG_ATTRIBUTES: &[FieldSpec] = &[FieldSpec::required("name", FieldKind::Text)];
///
/// impl Record for Tag {
///     const SHAPE: RecordShape = RecordShape::new("Tag", TAG_ATTRIBUTES, &[]);
///
///     fn from_fields(mut fields: RecordFields) -> Result<Self, SchemaError> {
///         Ok(Self {
///             id: fields.id,
///             name: fields.attributes.take("name")?,
///         })
///     }
/// }
///
/// let tag: Tag = type_resource(&json!({"type": "Tag", "id": 3, "attributes": {"name": "Choir"}})).unwrap();
/// assert_eq!(tag.id, "3");
/// assert_eq!(tag.name, "Choir");
/// ```
pub trait Record: Sized + Send + Sync + 'static {
    /// The declared shape of this resource type.
    const SHAPE: RecordShape;

    /// Builds the record from coerced fields.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if a field cannot be converted.
    fn from_fields(fields: RecordFields) -> Result<Self, SchemaError>;

    /// The JSON:API type name.
    #[must_use]
    fn type_name() -> &'static str {
        Self::SHAPE.type_name
    }
}

/// A record that can be created, updated and deleted.
pub trait WritableRecord: Record {
    /// Attributes accepted by create and update.
    type Params: Serialize + Send + Sync;
}

/// Types one raw resource object as `R`.
///
/// # Errors
///
/// Returns [`SchemaError`] if the object does not match `R::SHAPE`.
pub fn type_resource<R: Record>(object: &Value) -> Result<R, SchemaError> {
    let fields = coerce(object, &R::SHAPE)?;
    R::from_fields(fields)
}

/// Builds a JSON:API write body for `R`.
///
/// `None` attributes are omitted by the params type's serde attributes; an
/// update carries the resource id.
pub(crate) fn write_body<R: WritableRecord>(
    params: &R::Params,
    id: Option<&str>,
) -> Result<Value, ResourceError> {
    let attributes = serde_json::to_value(params).map_err(|e| ResourceError::InvalidParams {
        resource: R::type_name(),
        reason: e.to_string(),
    })?;

    let mut data = serde_json::Map::new();
    data.insert("type".to_string(), Value::String(R::type_name().to_string()));
    data.insert("attributes".to_string(), attributes);
    if let Some(id) = id {
        data.insert("id".to_string(), Value::String(id.to_string()));
    }

    Ok(serde_json::json!({ "data": data }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::schema::{FieldKind, FieldSpec, SchemaProblem};
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    struct Note {
        id: String,
        body: String,
        pinned: Option<bool>,
    }

    #[derive(Serialize)]
    struct NoteParams {
        body: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pinned: Option<bool>,
    }

    const NOTE_ATTRIBUTES: &[FieldSpec] = &[
        FieldSpec::required("body", FieldKind::Text),
        FieldSpec::optional("pinned", FieldKind::Boolean),
    ];

    impl Record for Note {
        const SHAPE: RecordShape = RecordShape::new("Note", NOTE_ATTRIBUTES, &[]);

        fn from_fields(mut fields: RecordFields) -> Result<Self, SchemaError> {
            let attributes = &mut fields.attributes;
            Ok(Self {
                body: attributes.take("body")?,
                pinned: attributes.take("pinned")?,
                id: fields.id,
            })
        }
    }

    impl WritableRecord for Note {
        type Params = NoteParams;
    }

    #[test]
    fn test_type_resource_builds_record() {
        let note: Note = type_resource(&json!({
            "type": "Note",
            "id": 5,
            "attributes": {"body": "hi", "color": "blue"}
        }))
        .unwrap();

        assert_eq!(
            note,
            Note {
                id: "5".into(),
                body: "hi".into(),
                pinned: None
            }
        );
    }

    #[test]
    fn test_type_resource_reports_missing_field() {
        let error = type_resource::<Note>(&json!({"type": "Note", "id": 5, "attributes": {}}))
            .unwrap_err();
        assert_eq!(error.field, "attributes.body");
        assert_eq!(error.problem, SchemaProblem::Missing);
    }

    #[test]
    fn test_write_body_for_create_and_update() {
        let params = NoteParams {
            body: "hello".into(),
            pinned: None,
        };

        let create = write_body::<Note>(&params, None).unwrap();
        assert_eq!(
            create,
            json!({"data": {"type": "Note", "attributes": {"body": "hello"}}})
        );

        let update = write_body::<Note>(&params, Some("9")).unwrap();
        assert_eq!(update["data"]["id"], "9");
        assert_eq!(update["data"]["type"], "Note");
    }
}
