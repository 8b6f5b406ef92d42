//! Path building for Planning Center resources.
//!
//! Every Planning Center endpoint lives under `/{app}/v2/...`. A
//! [`ResourcePath`] is the ordered list of segments below the host; accessors
//! extend it one segment at a time and never mutate an existing path.
//!
//! # Example
//!
//! ```rust
//! use planning_center::rest::ResourcePath;
//!
//! let path = ResourcePath::app("services")
//!     .child("people")
//!     .with_id("12345")
//!     .child("blockouts");
//!
//! assert_eq!(path.to_string(), "/services/v2/people/12345/blockouts");
//! assert_eq!(ResourcePath::parse("/services/v2/people/12345/blockouts"), path);
//! ```

use std::fmt;

/// The API version segment that follows every app name.
pub const API_VERSION: &str = "v2";

/// An ordered sequence of URL path segments.
///
/// Two paths with the same segments are interchangeable: accessors derive
/// all of their behaviour from the path and hold no other state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    /// Creates the root path of an app (`/{app}/v2`).
    #[must_use]
    pub fn app(name: &str) -> Self {
        Self {
            segments: vec![name.to_string(), API_VERSION.to_string()],
        }
    }

    /// Returns a new path with a collection segment appended.
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        self.push(name)
    }

    /// Returns a new path with an instance id appended.
    #[must_use]
    pub fn with_id(&self, id: impl fmt::Display) -> Self {
        self.push(&id.to_string())
    }

    fn push(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self { segments }
    }

    /// Parses a path string such as `/services/v2/people/1`.
    ///
    /// Empty segments (leading, trailing, or doubled slashes) are skipped and
    /// percent-encoded segments are decoded.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                urlencoding::decode(s).map_or_else(|_| s.to_string(), |d| d.into_owned())
            })
            .collect();
        Self { segments }
    }

    /// Returns the raw (unencoded) segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the app name (the first segment), if any.
    #[must_use]
    pub fn app_name(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    /// Returns the last segment, if any.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{}", urlencoding::encode(segment))?;
        }
        Ok(())
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourcePath>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_root_includes_version() {
        let path = ResourcePath::app("groups");
        assert_eq!(path.segments(), &["groups", "v2"]);
        assert_eq!(path.to_string(), "/groups/v2");
        assert_eq!(path.app_name(), Some("groups"));
    }

    #[test]
    fn test_navigation_matches_parsed_string() {
        let cases = [
            ("people", "12345", "blockouts"),
            ("service_types", "7", "plans"),
            ("people", "abc", "emails"),
        ];

        for (collection, id, child) in cases {
            let navigated = ResourcePath::app("services")
                .child(collection)
                .with_id(id)
                .child(child);
            let parsed =
                ResourcePath::parse(&format!("/services/v2/{collection}/{id}/{child}"));
            assert_eq!(navigated, parsed);
            assert_eq!(
                navigated.to_string(),
                format!("/services/v2/{collection}/{id}/{child}")
            );
        }
    }

    #[test]
    fn test_navigation_does_not_mutate_parent() {
        let people = ResourcePath::app("services").child("people");
        let member = people.with_id(1);

        assert_eq!(people.to_string(), "/services/v2/people");
        assert_eq!(member.to_string(), "/services/v2/people/1");
        assert_eq!(member.last(), Some("1"));
    }

    #[test]
    fn test_numeric_and_string_ids_render_identically() {
        let people = ResourcePath::app("services").child("people");
        assert_eq!(people.with_id(12345), people.with_id("12345"));
    }

    #[test]
    fn test_segments_are_percent_encoded() {
        let path = ResourcePath::app("services").child("people").with_id("a b/c");
        assert_eq!(path.to_string(), "/services/v2/people/a%20b%2Fc");
        assert_eq!(path.segments().last().map(String::as_str), Some("a b/c"));
    }

    #[test]
    fn test_parse_skips_empty_segments() {
        let path = ResourcePath::parse("//services/v2//people/");
        assert_eq!(path.segments(), &["services", "v2", "people"]);
        assert_eq!(ResourcePath::parse("").to_string(), "/");
    }
}
