//! Pagination helpers for content API requests
//!
//! Provides the resource classes, list filters and the page result type shared
//! by the HTTP client, the cache and the presentation layer.

use std::fmt;

use serde::Serialize;

/// Response header carrying the total page count for list endpoints.
pub const TOTAL_PAGES_HEADER: &str = "X-WP-TotalPages";

/// A class of listable resources. Each class has its own cache, gate and
/// pagination state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceClass {
    Posts,
    Tags,
    Actors,
}

impl ResourceClass {
    /// All resource classes for initialization.
    pub const ALL: [ResourceClass; 3] = [
        ResourceClass::Posts,
        ResourceClass::Tags,
        ResourceClass::Actors,
    ];

    /// Path segment of the list endpoint below the API root.
    pub fn path(&self) -> &'static str {
        match self {
            ResourceClass::Posts => "posts",
            ResourceClass::Tags => "tags",
            ResourceClass::Actors => "actors",
        }
    }

    /// Stable index used for per-class arrays.
    pub(crate) fn index(&self) -> usize {
        match self {
            ResourceClass::Posts => 0,
            ResourceClass::Tags => 1,
            ResourceClass::Actors => 2,
        }
    }
}

impl fmt::Display for ResourceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Filters applied to a list request.
///
/// Use the builder pattern to configure filters.
///
/// # Example
/// ```ignore
/// let query = ListQuery::new().search("abc");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Free-text search term
    pub search: Option<String>,
    /// Restrict to one tag id
    pub tag: Option<u64>,
    /// Restrict to one actor id
    pub actor: Option<u64>,
}

impl ListQuery {
    /// Create an unfiltered query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Filter by tag id.
    pub fn tag(mut self, tag_id: u64) -> Self {
        self.tag = Some(tag_id);
        self
    }

    /// Filter by actor id.
    pub fn actor(mut self, actor_id: u64) -> Self {
        self.actor = Some(actor_id);
        self
    }

    /// Check if no filters are set.
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.tag.is_none() && self.actor.is_none()
    }

    /// Convert to query string parameters using the content API names.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(ref term) = self.search {
            params.push(("search", term.clone()));
        }
        if let Some(tag) = self.tag {
            params.push(("tags", tag.to_string()));
        }
        if let Some(actor) = self.actor {
            params.push(("actors", actor.to_string()));
        }

        params
    }

    /// Heading shown above a list rendered for this query.
    pub fn heading(&self) -> String {
        if let Some(ref term) = self.search {
            format!("Search: {}", term)
        } else if let Some(tag) = self.tag {
            format!("Tag: {}", tag)
        } else if let Some(actor) = self.actor {
            format!("Actor: {}", actor)
        } else {
            "Latest".to_string()
        }
    }
}

/// One page of a paginated resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult<T> {
    /// The items on this page, in API order
    pub items: Vec<T>,
    /// Total number of pages, always at least 1
    pub total_pages: u32,
}

impl<T> PageResult<T> {
    /// Create a page result, clamping the page count to at least 1.
    pub fn new(items: Vec<T>, total_pages: u32) -> Self {
        Self {
            items,
            total_pages: total_pages.max(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rebuild the page with transformed items, keeping the page count.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            total_pages: self.total_pages,
        }
    }
}

impl<T> Default for PageResult<T> {
    fn default() -> Self {
        Self::new(Vec::new(), 1)
    }
}

/// Parse the total page header value.
///
/// Missing, unparseable or zero values fall back to 1 so that an absent header
/// never fails a fetch.
pub fn parse_total_pages(value: Option<&str>) -> u32 {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_default() {
        let query = ListQuery::new();
        assert!(query.is_empty());
        assert!(query.to_query_params().is_empty());
        assert_eq!(query.heading(), "Latest");
    }

    #[test]
    fn test_list_query_builder() {
        let query = ListQuery::new().search("abc").tag(7).actor(9);

        assert!(!query.is_empty());
        let params = query.to_query_params();
        assert_eq!(params.len(), 3);
        assert!(params.contains(&("search", "abc".to_string())));
        assert!(params.contains(&("tags", "7".to_string())));
        assert!(params.contains(&("actors", "9".to_string())));
    }

    #[test]
    fn test_list_query_heading() {
        assert_eq!(ListQuery::new().search("abc").heading(), "Search: abc");
        assert_eq!(ListQuery::new().tag(3).heading(), "Tag: 3");
        assert_eq!(ListQuery::new().actor(4).heading(), "Actor: 4");
    }

    #[test]
    fn test_parse_total_pages() {
        assert_eq!(parse_total_pages(Some("2")), 2);
        assert_eq!(parse_total_pages(Some(" 14 ")), 14);
        assert_eq!(parse_total_pages(None), 1);
        assert_eq!(parse_total_pages(Some("")), 1);
        assert_eq!(parse_total_pages(Some("abc")), 1);
        assert_eq!(parse_total_pages(Some("0")), 1);
    }

    #[test]
    fn test_page_result_clamps_total() {
        let page: PageResult<u8> = PageResult::new(vec![], 0);
        assert_eq!(page.total_pages, 1);
        assert!(page.is_empty());
    }

    #[test]
    fn test_resource_class_paths() {
        assert_eq!(ResourceClass::Posts.to_string(), "posts");
        assert_eq!(ResourceClass::Tags.path(), "tags");
        assert_eq!(ResourceClass::Actors.path(), "actors");
    }
}
