//! # Pagination
//!
//! Offset-based pagination over a fetched product listing.
//!
//! Out-of-range inputs are clamped rather than rejected: `page` below 1
//! becomes 1, and a non-positive `page_size` falls back to
//! [`DEFAULT_PAGE_SIZE`]. A page past the end of the listing yields an
//! empty slice with the total page count unchanged.

use serde::Deserialize;

/// Page size used when the request does not supply a usable one
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Raw pagination parameters as they arrive from the query string
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    /// 1-based page number
    #[serde(default)]
    pub page: Option<i64>,

    /// Items per page
    #[serde(default, rename = "pageSize")]
    pub page_size: Option<i64>,
}

impl PageParams {
    /// Clamp to usable values: page >= 1, page_size >= 1 (default 5)
    pub fn clamp(self) -> (usize, usize) {
        let page = match self.page {
            Some(p) if p >= 1 => p as usize,
            _ => 1,
        };
        let page_size = match self.page_size {
            Some(s) if s >= 1 => s as usize,
            _ => DEFAULT_PAGE_SIZE,
        };
        (page, page_size)
    }
}

/// Slice out one page of `items` and compute the total page count.
///
/// `total_pages` is `ceil(len / page_size)`, and 0 for an empty listing.
/// `page` and `page_size` must already be clamped to >= 1; use
/// [`PageParams::clamp`] for request input.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> (Vec<T>, usize) {
    let total_pages = items.len().div_ceil(page_size);
    let offset = (page - 1).saturating_mul(page_size);

    let page_items = items
        .iter()
        .skip(offset)
        .take(page_size)
        .cloned()
        .collect();

    (page_items, total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(count: usize) -> Vec<u64> {
        (1..=count as u64).collect()
    }

    #[test]
    fn test_first_page() {
        let (items, total_pages) = paginate(&listing(6), 1, 2);

        assert_eq!(items, vec![1, 2]);
        assert_eq!(total_pages, 3);
    }

    #[test]
    fn test_last_partial_page() {
        let (items, total_pages) = paginate(&listing(5), 3, 2);

        assert_eq!(items, vec![5]);
        assert_eq!(total_pages, 3);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let (items, total_pages) = paginate(&listing(6), 5, 2);

        assert!(items.is_empty());
        assert_eq!(total_pages, 3);
    }

    #[test]
    fn test_empty_listing_has_zero_pages() {
        let (items, total_pages) = paginate(&Vec::<u64>::new(), 1, 2);

        assert!(items.is_empty());
        assert_eq!(total_pages, 0);
    }

    #[test]
    fn test_page_size_larger_than_listing() {
        let (items, total_pages) = paginate(&listing(6), 1, 10);

        assert_eq!(items.len(), 6);
        assert_eq!(total_pages, 1);
    }

    #[test]
    fn test_clamp_negative_page_to_first() {
        let params = PageParams {
            page: Some(-1),
            page_size: Some(2),
        };

        assert_eq!(params.clamp(), (1, 2));
    }

    #[test]
    fn test_clamp_bad_page_size_to_default() {
        let params = PageParams {
            page: Some(2),
            page_size: Some(0),
        };

        assert_eq!(params.clamp(), (2, DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn test_clamp_missing_params_to_defaults() {
        let params = PageParams {
            page: None,
            page_size: None,
        };

        assert_eq!(params.clamp(), (1, DEFAULT_PAGE_SIZE));
    }
}
