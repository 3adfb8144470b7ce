//! Collection store - a pure reducer over the book collection.
//!
//! Every change to the collection is described by an [`Action`] and applied
//! with [`transition`], which never touches its input and always returns a
//! fresh collection. [`BookStore`] holds the current collection and is the
//! only place the controller keeps one.
//!
//! ## Example
//!
//! ```ignore
//! use book_catalog::{Action, Book, BookStore};
//!
//! let mut store = BookStore::new();
//! store.dispatch(&Action::set_books(vec![Book::new(1, "A", "X", "2000")]));
//! store.dispatch(&Action::add_book(Book::new(2, "B", "Y", "2001")));
//! store.dispatch(&Action::delete_book(1));
//!
//! assert_eq!(store.books(), &[Book::new(2, "B", "Y", "2001")]);
//! ```

mod action;
mod book_store;

pub use action::Action;
pub use book_store::BookStore;

use crate::book::Book;

/// Apply one action to a collection, producing the next collection.
///
/// Total and deterministic: unknown actions and updates or deletes that
/// match nothing return a copy of `state`.
pub fn transition(state: &[Book], action: &Action) -> Vec<Book> {
    match action {
        Action::SetBooks { books } => books.clone(),
        Action::AddBook { book } => {
            let mut next = Vec::with_capacity(state.len() + 1);
            next.extend_from_slice(state);
            next.push(book.clone());
            next
        }
        Action::UpdateBook { book } => {
            let mut next = state.to_vec();
            // Only the first match is replaced; duplicates are a caller error.
            if let Some(slot) = next.iter_mut().find(|existing| existing.id == book.id) {
                *slot = book.clone();
            }
            next
        }
        Action::DeleteBook { id } => state
            .iter()
            .filter(|existing| existing.id != *id)
            .cloned()
            .collect(),
        Action::Unknown => state.to_vec(),
    }
}

/// Fold a sequence of actions over the empty collection.
pub fn replay<'a, I>(actions: I) -> Vec<Book>
where
    I: IntoIterator<Item = &'a Action>,
{
    actions
        .into_iter()
        .fold(Vec::new(), |state, action| transition(&state, action))
}
