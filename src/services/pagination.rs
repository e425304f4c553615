//! Fixed-size pagination over an in-memory list.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod tests;

use std::ops::Range;

pub const DEFAULT_PER_PAGE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total: usize,
    per_page: usize,
}

impl Pagination {
    /// A page size of zero is treated as one.
    #[must_use]
    pub fn new(total: usize, per_page: usize) -> Self {
        Self { total, per_page: per_page.max(1) }
    }

    /// `ceil(total / per_page)`; zero for an empty list.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.per_page)
    }

    /// Clamp a requested 1-based page into `1..=max(1, page_count)`.
    #[must_use]
    pub fn clamp(&self, page: usize) -> usize {
        page.clamp(1, self.page_count().max(1))
    }

    /// Index range for a page after clamping.
    #[must_use]
    pub fn range(&self, page: usize) -> Range<usize> {
        let page = self.clamp(page);
        let start = ((page - 1) * self.per_page).min(self.total);
        let end = (start + self.per_page).min(self.total);
        start..end
    }

    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        let range = self.range(page);
        items.get(range).unwrap_or(&[])
    }

    #[must_use]
    pub fn has_previous(&self, page: usize) -> bool {
        self.clamp(page) > 1
    }

    #[must_use]
    pub fn has_next(&self, page: usize) -> bool {
        self.clamp(page) < self.page_count()
    }
}
