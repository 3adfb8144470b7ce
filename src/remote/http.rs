//! HTTP backend over reqwest.
//!
//! ## Routes
//!
//! - `GET {base}/books`
//! - `POST {base}/books`
//! - `PUT {base}/books/{id}`
//! - `DELETE {base}/books/{id}`
//!
//! Non-2xx answers become [`BackendError::Status`].

use crate::book::{Book, BookId};
use crate::config::CatalogConfig;
use crate::error::BackendError;

use super::BookBackend;

/// JSON-over-HTTP client for the books backend.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl HttpBackend {
    /// Build a client with the configured timeout.
    pub fn new(config: CatalogConfig) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { client, config })
    }
}

impl BookBackend for HttpBackend {
    async fn list(&self) -> Result<Vec<Book>, BackendError> {
        let url = self.config.books_url();
        let books = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Book>>()
            .await?;
        tracing::trace!(%url, count = books.len(), "GET books");
        Ok(books)
    }

    async fn create(&self, book: &Book) -> Result<Book, BackendError> {
        let url = self.config.books_url();
        let stored = self
            .client
            .post(&url)
            .json(book)
            .send()
            .await?
            .error_for_status()?
            .json::<Book>()
            .await?;
        tracing::trace!(%url, book_id = stored.id, "POST book");
        Ok(stored)
    }

    async fn update(&self, book: &Book) -> Result<Book, BackendError> {
        let url = self.config.book_url(book.id);
        let stored = self
            .client
            .put(&url)
            .json(book)
            .send()
            .await?
            .error_for_status()?
            .json::<Book>()
            .await?;
        tracing::trace!(%url, book_id = stored.id, "PUT book");
        Ok(stored)
    }

    async fn delete(&self, id: BookId) -> Result<(), BackendError> {
        let url = self.config.book_url(id);
        self.client
            .delete(&url)
            .send()
            .await?
            .error_for_status()?;
        tracing::trace!(%url, book_id = id, "DELETE book");
        Ok(())
    }
}
