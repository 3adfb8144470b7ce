//! Derived view - the page of the collection currently shown.
//!
//! Everything here is a pure function of the collection, the search term
//! and the page number:
//!
//! ```text
//! visible = paginate(filter(collection, term), page, PAGE_SIZE)
//! ```
//!
//! The controller recomputes the view after every operation that changes
//! one of those inputs.

mod pager;

pub use pager::Pager;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::book::Book;

/// Number of records shown per page.
pub const PAGE_SIZE: usize = 5;

/// Records whose title contains `term`, ignoring case, in collection order.
///
/// An empty term matches everything.
pub fn filter_by_title<'a>(books: &'a [Book], term: &str) -> Vec<&'a Book> {
    let needle = term.to_lowercase();
    books
        .iter()
        .filter(|book| book.title.to_lowercase().contains(&needle))
        .collect()
}

/// Number of pages needed for `total` items. Zero items means zero pages.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// The slice `[(page - 1) * page_size, page * page_size)` of `items`.
///
/// Pages are 1-based; page 0 is treated as page 1 and pages past the end
/// are empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page_size).min(items.len());
    items[start..end].to_vec()
}

/// Everything the render layer needs to draw one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    pub books: Vec<Book>,
    pub search_term: String,
    pub page: usize,
    pub page_count: usize,
    /// Number of records matching the search term across all pages.
    pub total_matches: usize,
    pub has_previous: bool,
    /// True only while a later page exists. False on the last page, when
    /// nothing matches, and when `page` was left past the end by deletions
    /// (`Pager::next` would then step back to the last page).
    pub has_next: bool,
}

impl PageView {
    /// Derive the view for `pager` over `books`.
    pub fn derive(books: &[Book], pager: &Pager) -> Self {
        let matches = filter_by_title(books, pager.search_term());
        let total_matches = matches.len();
        let pages = page_count(total_matches, PAGE_SIZE);
        let page = pager.page();
        let visible = paginate(&matches, page, PAGE_SIZE)
            .into_iter()
            .cloned()
            .collect();

        Self {
            books: visible,
            search_term: pager.search_term().to_string(),
            page,
            page_count: pages,
            total_matches,
            has_previous: page > 1,
            has_next: total_matches > 0 && page < pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for PageView {
    fn default() -> Self {
        Self::derive(&[], &Pager::default())
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.search_term.is_empty() {
            writeln!(f, "Search: {:?}", self.search_term)?;
        }
        writeln!(
            f,
            "Page {} of {} ({} books)",
            self.page,
            self.page_count.max(1),
            self.total_matches
        )?;
        for book in &self.books {
            writeln!(f, "[{}] {}", book.id, book.title)?;
            writeln!(f, "    Author: {}", book.author)?;
            writeln!(f, "    Year: {}", book.year)?;
        }
        let previous = if self.has_previous { "<- Previous" } else { "   --" };
        let next = if self.has_next { "Next ->" } else { "--" };
        write!(f, "{}  {}", previous, next)
    }
}
