use serde::{Deserialize, Serialize};

use super::{page_count, PAGE_SIZE};

/// Search term and current page.
///
/// Pages are 1-based. `next` and `previous` keep the page inside
/// `[1, last page]`; the page is not otherwise adjusted when the
/// collection shrinks underneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pager {
    search_term: String,
    page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            page: 1,
        }
    }
}

impl Pager {
    pub fn new() -> Self {
        Self::default()
    }

    /// A pager with no search term sitting on `page` (0 is read as 1).
    pub fn at(page: usize) -> Self {
        Self {
            search_term: String::new(),
            page: page.max(1),
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Replace the search term and go back to the first page.
    pub fn search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
    }

    /// Advance one page, never past the last page for `total_matches`.
    ///
    /// Returns whether the page changed.
    pub fn next(&mut self, total_matches: usize) -> bool {
        let last = page_count(total_matches, PAGE_SIZE);
        if last == 0 {
            return false;
        }
        let target = (self.page + 1).min(last);
        let changed = target != self.page;
        self.page = target;
        changed
    }

    /// Go back one page, never below the first.
    pub fn previous(&mut self) -> bool {
        let target = self.page.saturating_sub(1).max(1);
        let changed = target != self.page;
        self.page = target;
        changed
    }
}
