//! Book records and the pending create form.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Identifier of a book record. Assigned by the caller at creation time,
/// the backend may replace it.
pub type BookId = i64;

/// A single book record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: String,
}

impl Book {
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year: year.into(),
        }
    }
}

/// Pending values of the create form.
///
/// The draft is plain data: the render layer binds its inputs to these
/// fields and the controller validates them before anything is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub year: String,
}

impl BookDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
        }
    }

    /// Populate a draft from an existing record (used by edit).
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year.clone(),
        }
    }

    /// Check that every field is present.
    ///
    /// Fields are checked in form order, so the error names the first
    /// empty one.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("title", &self.title),
            ("author", &self.author),
            ("year", &self.year),
        ];
        for (name, value) in fields {
            if value.is_empty() {
                return Err(ValidationError::MissingField(name));
            }
        }
        Ok(())
    }

    /// Validate and build the record to send, under the given local id.
    pub fn to_book(&self, id: BookId) -> Result<Book, ValidationError> {
        self.validate()?;
        Ok(Book::new(id, &self.title, &self.author, &self.year))
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.author.is_empty() && self.year.is_empty()
    }

    /// Reset every field, as after a successful submit.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
