//! List views: heading, body state and pagination controls

use serde::Serialize;

use crate::browse::Listing;
use crate::client::pagination::ResourceClass;
use crate::error::Error;
use crate::session::PageControls;

/// Body shown when a page has no items
pub const EMPTY_MESSAGE: &str = "No results found.";

/// What the body of a list view shows.
///
/// An empty page is a normal outcome and is kept apart from a failed fetch.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ViewState<D> {
    Items { items: Vec<D> },
    Empty,
    Error { message: String },
}

/// When pagination controls are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlsPolicy {
    Always,
    /// Hidden when there is only one page
    MultiPageOnly,
}

impl ControlsPolicy {
    pub fn for_class(class: ResourceClass) -> Self {
        match class {
            ResourceClass::Posts => ControlsPolicy::Always,
            ResourceClass::Tags | ResourceClass::Actors => ControlsPolicy::MultiPageOnly,
        }
    }

    fn shows(&self, controls: &PageControls) -> bool {
        match self {
            ControlsPolicy::Always => true,
            ControlsPolicy::MultiPageOnly => controls.total_pages > 1,
        }
    }
}

/// A rendered list: heading, body and optional pagination controls
#[derive(Debug, Clone, Serialize)]
pub struct ListView<D> {
    pub heading: String,

    #[serde(flatten)]
    pub state: ViewState<D>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageControls>,
}

impl<D> ListView<D> {
    /// Build a view from a fetched page
    pub fn from_listing<T>(listing: &Listing<T>, policy: ControlsPolicy) -> Self
    where
        D: for<'a> From<&'a T>,
    {
        let state = if listing.page.is_empty() {
            ViewState::Empty
        } else {
            ViewState::Items {
                items: listing.page.items.iter().map(D::from).collect(),
            }
        };

        Self {
            heading: listing.heading.clone(),
            state,
            pagination: policy.shows(&listing.controls).then_some(listing.controls),
        }
    }

    /// Inline error in place of the list body
    pub fn error(heading: impl Into<String>, err: &Error) -> Self {
        Self {
            heading: heading.into(),
            state: ViewState::Error {
                message: err.to_string(),
            },
            pagination: None,
        }
    }
}

/// One-line pagination controls, e.g. `« Prev | Page 2 of 3 | Next »`
pub fn controls_line(controls: &PageControls) -> String {
    let mut parts = Vec::with_capacity(3);
    if controls.prev.is_some() {
        parts.push("« Prev".to_string());
    }
    parts.push(format!(
        "Page {} of {}",
        controls.current_page, controls.total_pages
    ));
    if controls.next.is_some() {
        parts.push("Next »".to_string());
    }
    parts.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::PageResult;
    use crate::error::ApiError;
    use crate::models::display::TagDisplay;
    use crate::client::mock::fixtures::tag;
    use std::sync::Arc;

    fn controls(current_page: u32, total_pages: u32) -> PageControls {
        PageControls {
            current_page,
            total_pages,
            prev: (current_page > 1).then(|| current_page - 1),
            next: (current_page < total_pages).then(|| current_page + 1),
        }
    }

    fn tag_listing(items: usize, total_pages: u32) -> Listing<crate::client::TagSummary> {
        let tags = (1..=items as u64).map(|id| tag(id, "t")).collect();
        Listing {
            heading: "Tags".to_string(),
            page: Arc::new(PageResult::new(tags, total_pages)),
            controls: controls(1, total_pages),
            from_cache: false,
        }
    }

    #[test]
    fn test_controls_line() {
        assert_eq!(controls_line(&controls(1, 1)), "Page 1 of 1");
        assert_eq!(controls_line(&controls(1, 3)), "Page 1 of 3 | Next »");
        assert_eq!(controls_line(&controls(2, 3)), "« Prev | Page 2 of 3 | Next »");
        assert_eq!(controls_line(&controls(3, 3)), "« Prev | Page 3 of 3");
    }

    #[test]
    fn test_single_page_tag_controls_hidden() {
        let view: ListView<TagDisplay> =
            ListView::from_listing(&tag_listing(2, 1), ControlsPolicy::for_class(ResourceClass::Tags));
        assert!(view.pagination.is_none());

        let view: ListView<TagDisplay> =
            ListView::from_listing(&tag_listing(2, 4), ControlsPolicy::for_class(ResourceClass::Tags));
        assert_eq!(view.pagination.map(|c| c.total_pages), Some(4));
    }

    #[test]
    fn test_empty_page_is_not_error() {
        let view: ListView<TagDisplay> =
            ListView::from_listing(&tag_listing(0, 1), ControlsPolicy::Always);

        assert!(matches!(view.state, ViewState::Empty));
        assert!(view.pagination.is_some());
    }

    #[test]
    fn test_error_view_serializes_status() {
        let err: Error = ApiError::HttpStatus(500).into();
        let view: ListView<TagDisplay> = ListView::error("Latest", &err);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["heading"], "Latest");
        assert!(json["message"].as_str().unwrap().contains("500"));
        assert!(json.get("pagination").is_none());
    }
}
