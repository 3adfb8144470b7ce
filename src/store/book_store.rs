use crate::book::{Book, BookId};

use super::{transition, Action};

/// Holder of the current book collection.
///
/// The collection is only ever replaced by the result of [`transition`];
/// there is no way to reach into it mutably.
#[derive(Debug, Clone, Default)]
pub struct BookStore {
    books: Vec<Book>,
    dispatched: u64,
}

impl BookStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store by dispatching every action in order.
    pub fn from_actions<'a, I>(actions: I) -> Self
    where
        I: IntoIterator<Item = &'a Action>,
    {
        let mut store = Self::new();
        for action in actions {
            store.dispatch(action);
        }
        store
    }

    /// Apply an action and return the new collection.
    pub fn dispatch(&mut self, action: &Action) -> &[Book] {
        self.books = transition(&self.books, action);
        self.dispatched += 1;
        tracing::debug!(
            action = action.kind(),
            count = self.books.len(),
            "dispatched action"
        );
        &self.books
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// First record with the given id.
    pub fn find(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn contains(&self, id: BookId) -> bool {
        self.find(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Number of actions dispatched since the store was created.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }
}
