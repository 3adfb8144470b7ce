//! Remote backend - the `/books` collection resource.
//!
//! [`BookBackend`] is the seam between the controller and storage. The
//! backend owns identity and persistence; the controller only ever applies
//! what the backend returns.
//!
//! - [`HttpBackend`] talks JSON over HTTP (requires the `http` feature).
//! - [`InMemoryBackend`] keeps records in a `Vec`, for tests and local
//!   development.
//!
//! ## Example
//!
//! ```ignore
//! use book_catalog::{BookBackend, CatalogConfig, HttpBackend};
//!
//! let backend = HttpBackend::new(CatalogConfig::from_env()?)?;
//! let books = backend.list().await?;
//! ```

#[cfg(feature = "http")]
mod http;
mod in_memory;

#[cfg(feature = "http")]
pub use http::HttpBackend;
pub use in_memory::{InMemoryBackend, Request};

use std::future::Future;

use crate::book::{Book, BookId};
use crate::error::BackendError;

/// Async access to the books collection.
pub trait BookBackend: Send + Sync {
    /// `GET /books` - every stored record.
    fn list(&self) -> impl Future<Output = Result<Vec<Book>, BackendError>> + Send;

    /// `POST /books` - store a new record and return it as stored.
    /// The backend may assign a different id.
    fn create(&self, book: &Book) -> impl Future<Output = Result<Book, BackendError>> + Send;

    /// `PUT /books/{id}` - replace a record and return it as stored.
    fn update(&self, book: &Book) -> impl Future<Output = Result<Book, BackendError>> + Send;

    /// `DELETE /books/{id}`.
    fn delete(&self, id: BookId) -> impl Future<Output = Result<(), BackendError>> + Send;
}
