//! Pagination types for list queries.

use serde::Serialize;

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::error::{DomainError, DomainResult};

/// A validated page request: `page >= 1`, `1 <= limit <= MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    pub fn new(page: u64, limit: u64) -> DomainResult<Self> {
        if page < 1 {
            return Err(DomainError::validation("Page must be at least 1"));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&limit) {
            return Err(DomainError::validation(format!(
                "Limit must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }
        Ok(Self { page, limit })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Number of items to skip: `(page - 1) * limit`
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus the navigation metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> Page<T> {
    /// Build a page; pages past the end simply carry no items.
    pub fn new(items: Vec<T>, request: &PageRequest, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(request.limit);
        Self {
            items,
            page: request.page,
            total_pages,
            total_items,
            has_next: request.page < total_pages,
            has_prev: request.page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_bounds() {
        assert!(PageRequest::new(0, 10).is_err());
        assert!(PageRequest::new(1, 0).is_err());
        assert!(PageRequest::new(1, 101).is_err());
        assert!(PageRequest::new(1, 100).is_ok());
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(1, 10).unwrap().offset(), 0);
        assert_eq!(PageRequest::new(3, 25).unwrap().offset(), 50);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        for (total, limit, expected) in [(0, 10, 0), (1, 10, 1), (10, 10, 1), (11, 10, 2), (25, 7, 4)] {
            let request = PageRequest::new(1, limit).unwrap();
            let page: Page<u8> = Page::new(vec![], &request, total);
            assert_eq!(page.total_pages, expected, "total={} limit={}", total, limit);
        }
    }

    #[test]
    fn test_navigation_flags() {
        let first = Page::new(vec![1, 2], &PageRequest::new(1, 2).unwrap(), 5);
        assert!(first.has_next);
        assert!(!first.has_prev);

        let last = Page::new(vec![5], &PageRequest::new(3, 2).unwrap(), 5);
        assert!(!last.has_next);
        assert!(last.has_prev);

        let beyond: Page<i32> = Page::new(vec![], &PageRequest::new(9, 2).unwrap(), 5);
        assert!(beyond.items.is_empty());
        assert!(!beyond.has_next);
        assert!(beyond.has_prev);
    }
}
