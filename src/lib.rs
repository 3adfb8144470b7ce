//! # book_catalog
//!
//! A client for a REST-backed book catalog.
//!
//! - [`store`]: pure reducer over the book collection ([`Action`], [`transition`]).
//! - [`view`]: title search and pagination ([`PageView`], [`Pager`]).
//! - [`remote`]: the `/books` backend ([`BookBackend`], [`HttpBackend`], [`InMemoryBackend`]).
//! - [`controller`]: ties them together ([`CatalogController`]).
//!
//! Logging goes through `tracing`; install a subscriber to see it.

mod book;
mod config;
pub mod controller;
mod error;
pub mod remote;
pub mod store;
pub mod view;

pub use book::{Book, BookDraft, BookId};
pub use config::{CatalogConfig, BACKEND_TIMEOUT_ENV, BACKEND_URL_ENV};
pub use controller::CatalogController;
pub use error::{BackendError, CatalogError, ConfigError, ValidationError};
#[cfg(feature = "http")]
pub use remote::HttpBackend;
pub use remote::{BookBackend, InMemoryBackend, Request};
pub use store::{replay, transition, Action, BookStore};
pub use view::{filter_by_title, page_count, paginate, PageView, Pager, PAGE_SIZE};

#[cfg(feature = "emitter")]
pub use controller::{ACTION_DISPATCHED, OPERATION_FAILED, VIEW_CHANGED};
