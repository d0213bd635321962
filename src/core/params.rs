//! Listing request contracts and pagination envelope
//!
//! [`FindAllParams`] is the composition point between the sanitizer and the
//! external listing layer: sanitized filters plus the acting viewer, nothing
//! else. [`Page`] is the read-only envelope that layer returns; it is shaped
//! here so both sides of the boundary agree on it.

use serde::{Deserialize, Serialize};

use super::sanitize::FilterShape;
use super::viewer::Viewer;

/// The composed listing request handed to the query layer
///
/// Pure composition: both parts were produced (and, for the filters,
/// validated) upstream, and nothing here re-validates or mutates them.
/// Constructed fresh per request and consumed once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindAllParams {
    /// Sanitized filters; `None` means the domain's default listing
    pub filters: Option<FilterShape>,

    /// Acting user; `None` or `Anonymous` means a public listing
    pub viewer: Option<Viewer>,
}

impl FindAllParams {
    pub fn new(filters: Option<FilterShape>, viewer: Option<Viewer>) -> Self {
        Self { filters, viewer }
    }

    /// A request for the domain's default listing, no filters, no identity
    pub fn unfiltered() -> Self {
        Self::default()
    }

    /// Whether any filter axis is populated
    pub fn has_filters(&self) -> bool {
        self.filters.as_ref().is_some_and(|f| !f.is_empty())
    }
}

/// Page/limit parameters for a list request
///
/// Deserializable straight from a query string. Both parameters have
/// defaults and are clamped by the accessors, never rejected.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct PageRequest {
    /// Page number (starts at 1)
    #[serde(default = "default_page")]
    pub page: usize,

    /// Number of items per page
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    20
}

impl PageRequest {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get limit, clamped to 1..=100
    pub fn limit(&self) -> usize {
        self.limit.clamp(1, 100)
    }
}

/// Paginated result envelope
///
/// Produced by the external listing service; the core only defines the
/// shape. Serialized in the platform's camelCase wire convention.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Current page number (starts at 1)
    pub current_page: usize,

    /// Total number of pages for this filter set
    pub total_pages: usize,

    /// Total number of items (after filters)
    pub total_count: usize,

    /// The items of this page
    pub data: Vec<T>,
}

impl<T> Page<T> {
    /// Build a page envelope from one page of data and the overall count
    pub fn new(data: Vec<T>, current_page: usize, limit: usize, total_count: usize) -> Self {
        let limit = limit.max(1);
        let total_pages = if total_count == 0 {
            0
        } else {
            total_count.div_ceil(limit)
        };

        Self {
            current_page,
            total_pages,
            total_count,
            data,
        }
    }

    /// An empty envelope (no matches)
    pub fn empty(current_page: usize) -> Self {
        Self {
            current_page,
            total_pages: 0,
            total_count: 0,
            data: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_unfiltered_params_signal_default_listing() {
        let params = FindAllParams::unfiltered();
        assert!(params.filters.is_none());
        assert!(params.viewer.is_none());
        assert!(!params.has_filters());
    }

    #[test]
    fn test_empty_shape_counts_as_no_filters() {
        let params = FindAllParams::new(Some(FilterShape::default()), None);
        assert!(!params.has_filters());
    }

    #[test]
    fn test_params_carry_viewer_untouched() {
        let id = Uuid::new_v4();
        let params = FindAllParams::new(None, Some(Viewer::Admin { admin_id: id }));
        assert_eq!(params.viewer, Some(Viewer::Admin { admin_id: id }));
    }

    #[test]
    fn test_page_request_defaults_and_clamps() {
        let req = PageRequest::default();
        assert_eq!(req.page(), 1);
        assert_eq!(req.limit(), 20);

        let req = PageRequest { page: 0, limit: 500 };
        assert_eq!(req.page(), 1);
        assert_eq!(req.limit(), 100);
    }

    #[test]
    fn test_page_envelope_math() {
        let page = Page::new(vec![1, 2, 3], 1, 20, 145);
        assert_eq!(page.total_count, 145);
        assert_eq!(page.total_pages, 8);
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn test_page_envelope_empty() {
        let page: Page<u8> = Page::empty(1);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_count, 0);
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_page_envelope_camel_case_wire_shape() {
        let page = Page::new(vec!["a"], 2, 1, 3);
        let json = serde_json::to_value(&page).expect("should serialize");
        assert_eq!(json["currentPage"], 2);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["totalCount"], 3);
        assert_eq!(json["data"][0], "a");
    }
}
