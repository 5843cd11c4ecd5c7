//! Offset-based pagination types
//!
//! The admin UI pages through result sets with `pageIndex`/`pageSize` query
//! parameters; queries report a total count so the client can render page
//! controls.
//!
//! # Usage
//!
//! ```rust,ignore
//! // In a handler
//! let page = PageRequest { page_index: 0, page_size: 25 }.validate()?;
//!
//! // In a model
//! let paged = ScheduleAvailability::find_paginated(&page, pool).await?;
//! ```

use serde::{Deserialize, Serialize};

use super::errors::ApiError;

/// Largest page a single request may ask for.
pub const MAX_PAGE_SIZE: i32 = 100;

// ============================================================================
// Page request
// ============================================================================

/// Raw paging arguments as they arrive on the query string.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page_index: i32,
    pub page_size: i32,
}

impl PageRequest {
    /// Validate paging arguments.
    ///
    /// Fails with `ValidationError` on a negative index or a size outside
    /// `1..=MAX_PAGE_SIZE`; paging mistakes surface at the boundary, not as
    /// empty result sets.
    pub fn validate(self) -> Result<ValidatedPage, ApiError> {
        if self.page_index < 0 {
            return Err(ApiError::validation("pageIndex must not be negative"));
        }
        if self.page_size < 1 || self.page_size > MAX_PAGE_SIZE {
            return Err(ApiError::validation(format!(
                "pageSize must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }
        Ok(ValidatedPage {
            page_index: self.page_index,
            page_size: self.page_size,
        })
    }
}

/// Validated paging arguments.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedPage {
    pub page_index: i32,
    pub page_size: i32,
}

impl ValidatedPage {
    /// SQL OFFSET for this page.
    pub fn offset(&self) -> i64 {
        i64::from(self.page_index) * i64::from(self.page_size)
    }

    /// SQL LIMIT for this page.
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

// ============================================================================
// Paged results
// ============================================================================

/// An ordered window over a logical result set plus total-count metadata.
///
/// Zero matching rows is a valid page with empty `items` and `total_count`
/// of 0, not an error.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub page_index: i32,
    pub page_size: i32,
    pub total_count: i64,
    pub items: Vec<T>,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl<T> Paged<T> {
    /// Build a page from query results and the total row count.
    pub fn new(items: Vec<T>, total_count: i64, page: &ValidatedPage) -> Self {
        let has_next_page = page.offset() + (items.len() as i64) < total_count;
        Self {
            page_index: page.page_index,
            page_size: page.page_size,
            total_count,
            items,
            has_next_page,
            has_previous_page: page.page_index > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(index: i32, size: i32) -> ValidatedPage {
        PageRequest {
            page_index: index,
            page_size: size,
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn validate_accepts_normal_arguments() {
        let validated = page(2, 25);
        assert_eq!(validated.offset(), 50);
        assert_eq!(validated.limit(), 25);
    }

    #[test]
    fn validate_rejects_negative_index() {
        let result = PageRequest {
            page_index: -1,
            page_size: 10,
        }
        .validate();
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[test]
    fn validate_rejects_out_of_range_sizes() {
        for size in [0, -5, MAX_PAGE_SIZE + 1] {
            let result = PageRequest {
                page_index: 0,
                page_size: size,
            }
            .validate();
            assert!(matches!(result, Err(ApiError::Validation(_))), "size {}", size);
        }
    }

    #[test]
    fn empty_result_is_a_valid_page() {
        let paged: Paged<i32> = Paged::new(vec![], 0, &page(0, 10));
        assert_eq!(paged.total_count, 0);
        assert!(paged.items.is_empty());
        assert!(!paged.has_next_page);
        assert!(!paged.has_previous_page);
    }

    #[test]
    fn middle_page_has_both_neighbours() {
        let paged = Paged::new(vec![1, 2, 3], 9, &page(1, 3));
        assert!(paged.has_next_page);
        assert!(paged.has_previous_page);
    }

    #[test]
    fn last_partial_page_has_no_next() {
        let paged = Paged::new(vec![1], 7, &page(2, 3));
        assert!(!paged.has_next_page);
        assert!(paged.has_previous_page);
    }
}
