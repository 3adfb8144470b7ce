use serde::{Deserialize, Serialize};

use crate::book::{Book, BookId};

/// A requested change to the book collection.
///
/// Serialized with a `type` tag, e.g.
/// `{"type": "DELETE_BOOK", "id": 1}`. Any tag this crate does not know
/// decodes to [`Action::Unknown`], which leaves the collection unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Replace the whole collection.
    SetBooks { books: Vec<Book> },
    /// Append one record.
    AddBook { book: Book },
    /// Replace the first record with the same id.
    UpdateBook { book: Book },
    /// Remove every record with this id.
    DeleteBook { id: BookId },
    #[serde(other)]
    Unknown,
}

impl Action {
    pub fn set_books(books: Vec<Book>) -> Self {
        Action::SetBooks { books }
    }

    pub fn add_book(book: Book) -> Self {
        Action::AddBook { book }
    }

    pub fn update_book(book: Book) -> Self {
        Action::UpdateBook { book }
    }

    pub fn delete_book(id: BookId) -> Self {
        Action::DeleteBook { id }
    }

    /// The wire tag of this action.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetBooks { .. } => "SET_BOOKS",
            Action::AddBook { .. } => "ADD_BOOK",
            Action::UpdateBook { .. } => "UPDATE_BOOK",
            Action::DeleteBook { .. } => "DELETE_BOOK",
            Action::Unknown => "UNKNOWN",
        }
    }
}
