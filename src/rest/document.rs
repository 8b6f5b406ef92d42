//! JSON:API response documents.
//!
//! Every Planning Center response is an envelope:
//!
//! ```json
//! {
//!   "links": {"self": "...", "next": "...?offset=25"},
//!   "data": [ {...}, {...} ],
//!   "included": [],
//!   "meta": {"total_count": 30, "count": 25, "next": {"offset": 25}}
//! }
//! ```
//!
//! [`Document`] splits it into resource objects and pagination state.

use serde_json::Value;

use crate::rest::errors::ResourceError;

/// The primary data of a document.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimaryData {
    /// A single resource object.
    One(Value),
    /// A page of resource objects.
    Many(Vec<Value>),
}

/// A parsed JSON:API document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// The `data` member.
    pub data: PrimaryData,
    /// Offset of the next page, if there is one.
    pub next_offset: Option<u64>,
    /// `meta.total_count`, if reported.
    pub total_count: Option<u64>,
}

impl Document {
    /// Parses a response body fetched from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidBody`] if the body has no `data`
    /// member or `data` is neither an object nor an array.
    pub fn parse(body: Value, path: &str) -> Result<Self, ResourceError> {
        let invalid = |reason: &str| ResourceError::InvalidBody {
            path: path.to_string(),
            reason: reason.to_string(),
        };

        let Value::Object(mut envelope) = body else {
            return Err(invalid("body is not a JSON object"));
        };

        let data = match envelope.remove("data") {
            None => return Err(invalid("missing 'data' member")),
            Some(Value::Array(items)) => PrimaryData::Many(items),
            Some(object @ Value::Object(_)) => PrimaryData::One(object),
            Some(_) => return Err(invalid("'data' is neither an object nor an array")),
        };

        let meta = envelope.get("meta");
        let total_count = meta
            .and_then(|m| m.get("total_count"))
            .and_then(as_u64);

        let next_offset = meta
            .and_then(|m| m.pointer("/next/offset"))
            .and_then(as_u64)
            .or_else(|| {
                envelope
                    .get("links")
                    .and_then(|l| l.get("next"))
                    .and_then(Value::as_str)
                    .and_then(extract_offset)
            });

        Ok(Self {
            data,
            next_offset,
            total_count,
        })
    }

    /// Returns the single resource object.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidBody`] if `data` is an array.
    pub fn into_one(self, path: &str) -> Result<Value, ResourceError> {
        match self.data {
            PrimaryData::One(object) => Ok(object),
            PrimaryData::Many(_) => Err(ResourceError::InvalidBody {
                path: path.to_string(),
                reason: "expected a single resource, got a list".to_string(),
            }),
        }
    }

    /// Returns the page of resource objects.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidBody`] if `data` is a single object.
    pub fn into_many(self, path: &str) -> Result<Vec<Value>, ResourceError> {
        match self.data {
            PrimaryData::Many(items) => Ok(items),
            PrimaryData::One(_) => Err(ResourceError::InvalidBody {
                path: path.to_string(),
                reason: "expected a list of resources, got a single resource".to_string(),
            }),
        }
    }
}

fn as_u64(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}

/// Extracts the `offset` query parameter from a URL.
fn extract_offset(url: &str) -> Option<u64> {
    let query_start = url.find('?')?;
    let query = &url[query_start + 1..];

    for param in query.split('&') {
        let mut parts = param.splitn(2, '=');
        if let (Some(key), Some(value)) = (parts.next(), parts.next()) {
            if key == "offset" {
                return value.parse().ok();
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_collection_with_meta_next() {
        let body = json!({
            "links": {"self": "x"},
            "data": [{"id": "1"}, {"id": "2"}],
            "meta": {"total_count": 30, "count": 2, "next": {"offset": 2}}
        });

        let document = Document::parse(body, "/services/v2/people").unwrap();
        assert_eq!(document.next_offset, Some(2));
        assert_eq!(document.total_count, Some(30));
        assert_eq!(document.into_many("/").unwrap().len(), 2);
    }

    #[test]
    fn test_parse_falls_back_to_next_link() {
        let body = json!({
            "links": {"next": "https://api.planningcenteronline.com/services/v2/people?offset=25&per_page=25"},
            "data": [],
            "meta": {}
        });

        let document = Document::parse(body, "/services/v2/people").unwrap();
        assert_eq!(document.next_offset, Some(25));
    }

    #[test]
    fn test_last_page_has_no_next_offset() {
        let body = json!({"links": {"self": "x"}, "data": [], "meta": {"total_count": 0}});
        let document = Document::parse(body, "/p").unwrap();
        assert_eq!(document.next_offset, None);
    }

    #[test]
    fn test_parse_single_resource() {
        let body = json!({"data": {"type": "Person", "id": "1"}});
        let document = Document::parse(body, "/p/1").unwrap();
        assert_eq!(document.into_one("/p/1").unwrap()["id"], "1");
    }

    #[test]
    fn test_shape_mismatch_between_one_and_many() {
        let single = Document::parse(json!({"data": {"id": "1"}}), "/p").unwrap();
        assert!(matches!(
            single.into_many("/p"),
            Err(ResourceError::InvalidBody { .. })
        ));

        let many = Document::parse(json!({"data": []}), "/p").unwrap();
        assert!(many.into_one("/p").is_err());
    }

    #[test]
    fn test_missing_data_is_invalid() {
        let result = Document::parse(json!({"errors": []}), "/p");
        assert!(matches!(
            result,
            Err(ResourceError::InvalidBody { ref reason, .. }) if reason.contains("data")
        ));

        assert!(Document::parse(json!("text"), "/p").is_err());
        assert!(Document::parse(json!({"data": 3}), "/p").is_err());
    }

    #[test]
    fn test_extract_offset() {
        assert_eq!(extract_offset("https://x/y?per_page=5&offset=10"), Some(10));
        assert_eq!(extract_offset("https://x/y?per_page=5"), None);
        assert_eq!(extract_offset("https://x/y"), None);
    }
}
