//! Pagination state per resource class

use serde::Serialize;

use crate::client::pagination::ListQuery;

/// Where a resource class currently is: the page last shown, the page count
/// the API reported, and the query that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: u32,
    pub total_pages: u32,
    pub query: ListQuery,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            query: ListQuery::default(),
        }
    }
}

impl PaginationState {
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page number behind a "Prev" control
    pub fn prev_page(&self) -> Option<u32> {
        self.has_prev().then(|| self.current_page - 1)
    }

    /// Page number behind a "Next" control
    pub fn next_page(&self) -> Option<u32> {
        self.has_next().then(|| self.current_page + 1)
    }

    /// Snapshot for presentation
    pub fn controls(&self) -> PageControls {
        PageControls {
            current_page: self.current_page,
            total_pages: self.total_pages,
            prev: self.prev_page(),
            next: self.next_page(),
        }
    }
}

/// Prev/next controls rendered under a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageControls {
    pub current_page: u32,
    pub total_pages: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(current_page: u32, total_pages: u32) -> PaginationState {
        PaginationState {
            current_page,
            total_pages,
            query: ListQuery::new(),
        }
    }

    #[test]
    fn test_first_page_has_only_next() {
        let s = state(1, 3);
        assert_eq!(s.prev_page(), None);
        assert_eq!(s.next_page(), Some(2));
    }

    #[test]
    fn test_middle_page_has_both() {
        let controls = state(2, 3).controls();
        assert_eq!(controls.prev, Some(1));
        assert_eq!(controls.next, Some(3));
    }

    #[test]
    fn test_last_page_has_only_prev() {
        let s = state(3, 3);
        assert!(s.has_prev());
        assert!(!s.has_next());
    }

    #[test]
    fn test_single_page_has_neither() {
        let controls = PaginationState::default().controls();
        assert_eq!(controls.prev, None);
        assert_eq!(controls.next, None);
    }
}
