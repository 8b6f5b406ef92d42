//! Query parameters for collection listings and single fetches.

use std::collections::BTreeMap;

/// Default page size used by the Planning Center API.
pub const DEFAULT_PER_PAGE: u8 = 25;

/// Largest page size the API accepts.
pub const MAX_PER_PAGE: u8 = 100;

/// Parameters for [`Collection::list_all_with`](crate::rest::Collection::list_all_with)
/// and [`Collection::pages`](crate::rest::Collection::pages).
///
/// `per_page` is clamped to `1..=100`. Attribute filters set with
/// [`where_eq`](Self::where_eq) are sent as `where[attribute]=value`.
///
/// # Example
///
/// ```rust
/// use planning_center::rest::ListParams;
///
/// let params = ListParams::new()
///     .per_page(100)
///     .order("-created_at")
///     .filter("future")
///     .where_eq("first_name", "Ada");
///
/// let query = params.to_query(None);
/// assert!(query.contains(&("where[first_name]".to_string(), "Ada".to_string())));
/// assert!(query.contains(&("per_page".to_string(), "100".to_string())));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    per_page: Option<u8>,
    order: Option<String>,
    filter: Option<String>,
    include: Option<String>,
    offset: Option<u64>,
    where_filters: BTreeMap<String, String>,
}

impl ListParams {
    /// Creates empty parameters (server defaults apply).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size, clamped to `1..=100`.
    #[must_use]
    pub fn per_page(mut self, per_page: u32) -> Self {
        let clamped = per_page.clamp(1, u32::from(MAX_PER_PAGE));
        self.per_page = u8::try_from(clamped).ok();
        self
    }

    /// Sets the sort order (e.g. `"last_name"` or `"-created_at"`).
    #[must_use]
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Sets a named filter (e.g. `"future"` for blockouts).
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Requests related resources to be included.
    ///
    /// Included resources are not typed; this only affects the request.
    #[must_use]
    pub fn include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    /// Starts listing at the given offset.
    #[must_use]
    pub const fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Adds an attribute filter, sent as `where[attribute]=value`.
    #[must_use]
    pub fn where_eq(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.where_filters.insert(attribute.into(), value.into());
        self
    }

    /// Returns the configured offset, if any.
    #[must_use]
    pub const fn start_offset(&self) -> Option<u64> {
        self.offset
    }

    /// Renders the query string pairs, overriding the offset when given.
    #[must_use]
    pub fn to_query(&self, offset: Option<u64>) -> Vec<(String, String)> {
        let mut query = Vec::new();

        if let Some(per_page) = self.per_page {
            query.push(("per_page".to_string(), per_page.to_string()));
        }
        if let Some(order) = &self.order {
            query.push(("order".to_string(), order.clone()));
        }
        if let Some(filter) = &self.filter {
            query.push(("filter".to_string(), filter.clone()));
        }
        if let Some(include) = &self.include {
            query.push(("include".to_string(), include.clone()));
        }
        for (attribute, value) in &self.where_filters {
            query.push((format!("where[{attribute}]"), value.clone()));
        }
        if let Some(offset) = offset.or(self.offset).filter(|o| *o > 0) {
            query.push(("offset".to_string(), offset.to_string()));
        }

        query
    }
}

/// Parameters for [`Collection::get_with`](crate::rest::Collection::get_with)
/// and [`Member::get_with`](crate::rest::Member::get_with).
///
/// Included resources are requested with `include=a,b`; they are not typed.
///
/// ```rust
/// use planning_center::rest::GetParams;
///
/// let query = GetParams::new().include("people").include("team_positions").to_query();
/// assert_eq!(query, vec![("include".to_string(), "people,team_positions".to_string())]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetParams {
    include: Vec<String>,
}

impl GetParams {
    /// Creates empty parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a related resource to include.
    #[must_use]
    pub fn include(mut self, include: impl Into<String>) -> Self {
        self.include.push(include.into());
        self
    }

    /// Renders the query string pairs.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        if self.include.is_empty() {
            return Vec::new();
        }
        vec![("include".to_string(), self.include.join(","))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params_render_no_query() {
        assert!(ListParams::new().to_query(None).is_empty());
    }

    #[test]
    fn test_per_page_is_clamped() {
        let query = ListParams::new().per_page(500).to_query(None);
        assert_eq!(query, vec![("per_page".to_string(), "100".to_string())]);

        let query = ListParams::new().per_page(0).to_query(None);
        assert_eq!(query, vec![("per_page".to_string(), "1".to_string())]);
    }

    #[test]
    fn test_where_filters_use_bracket_syntax() {
        let query = ListParams::new()
            .where_eq("status", "active")
            .where_eq("last_name", "Lovelace")
            .to_query(None);

        assert_eq!(
            query,
            vec![
                ("where[last_name]".to_string(), "Lovelace".to_string()),
                ("where[status]".to_string(), "active".to_string()),
            ]
        );
    }

    #[test]
    fn test_offset_override_and_zero_offset() {
        let params = ListParams::new().offset(10);
        assert_eq!(params.start_offset(), Some(10));
        assert!(params
            .to_query(None)
            .contains(&("offset".to_string(), "10".to_string())));
        assert!(params
            .to_query(Some(35))
            .contains(&("offset".to_string(), "35".to_string())));
        assert!(ListParams::new().to_query(Some(0)).is_empty());
    }

    #[test]
    fn test_all_params_render_in_stable_order() {
        let query = ListParams::new()
            .per_page(50)
            .order("name")
            .filter("future")
            .include("plan_times")
            .to_query(None);

        let keys: Vec<_> = query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["per_page", "order", "filter", "include"]);
    }

    #[test]
    fn test_get_params_join_includes() {
        assert!(GetParams::new().to_query().is_empty());
        assert_eq!(
            GetParams::new().include("tags").to_query(),
            vec![("include".to_string(), "tags".to_string())]
        );
    }
}
