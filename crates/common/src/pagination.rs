//! Pagination utilities shared by the service and HTTP layers
//!
//! Provides a simple `Pagination` struct and helpers to normalize inputs.

use serde::Deserialize;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub per_page: u32,
}

impl Pagination {
    pub const MAX_PER_PAGE: u32 = 100;

    /// Build from optional query values; `None` when neither is given.
    pub fn from_parts(page: Option<u32>, per_page: Option<u32>) -> Option<Self> {
        if page.is_none() && per_page.is_none() {
            return None;
        }
        let d = Self::default();
        Some(Self { page: page.unwrap_or(d.page), per_page: per_page.unwrap_or(d.per_page) })
    }

    /// Clamp to sane defaults and convert to a zero-based page index and page size.
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { 1 } else { self.page };
        let per_page = self.per_page.clamp(1, Self::MAX_PER_PAGE);
        ((page - 1) as u64, per_page as u64)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: 20 } }
}

#[cfg(test)]
mod tests {
    use super::Pagination;

    #[test]
    fn normalize_clamps_zero_to_defaults() {
        let (idx, per) = Pagination { page: 0, per_page: 0 }.normalize();
        assert_eq!(idx, 0);
        assert_eq!(per, 1);
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let (idx, per) = Pagination { page: 5, per_page: 1000 }.normalize();
        assert_eq!(idx, 4);
        assert_eq!(per, 100);
    }

    #[test]
    fn default_values_are_sane() {
        let d = Pagination::default();
        assert_eq!(d.page, 1);
        assert_eq!(d.per_page, 20);
    }

    #[test]
    fn from_parts_fills_missing_half() {
        assert_eq!(Pagination::from_parts(None, None), None);
        assert_eq!(Pagination::from_parts(Some(3), None), Some(Pagination { page: 3, per_page: 20 }));
        assert_eq!(Pagination::from_parts(None, Some(5)), Some(Pagination { page: 1, per_page: 5 }));
    }
}
