//! InMemoryBackend - Vec-backed books backend for testing and development.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::book::{Book, BookId};
use crate::error::BackendError;

use super::BookBackend;

/// A request received by an [`InMemoryBackend`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    List,
    Create(BookId),
    Update(BookId),
    Delete(BookId),
}

#[derive(Default)]
struct State {
    books: Vec<Book>,
    requests: Vec<Request>,
    failing: Option<String>,
    next_id: Option<BookId>,
}

/// In-memory backend with the same answers as the HTTP one.
///
/// Clone-friendly via Arc: clones share the same records, so a test can
/// keep a handle while the controller owns another.
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    state: Arc<Mutex<State>>,
}

impl InMemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend already holding `books`.
    pub fn with_books(books: Vec<Book>) -> Self {
        let backend = Self::new();
        backend.lock().books = books;
        backend
    }

    /// Make every following request fail with [`BackendError::Unavailable`]
    /// (`Some(reason)`), or succeed again (`None`). Failed requests are still
    /// recorded.
    pub fn set_failing(&self, reason: Option<&str>) {
        self.lock().failing = reason.map(str::to_string);
    }

    /// Assign ids from `start` upwards on create instead of keeping the
    /// caller's id, like a backend with its own sequence.
    pub fn assign_ids_from(&self, start: BookId) {
        self.lock().next_id = Some(start);
    }

    /// Records currently stored.
    pub fn books(&self) -> Vec<Book> {
        self.lock().books.clone()
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<Request> {
        self.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // Writes replace whole fields, so a poisoned state is still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Lock the state, record `request` and check the failure switch.
    fn begin(&self, request: Request) -> Result<MutexGuard<'_, State>, BackendError> {
        let mut state = self.lock();
        state.requests.push(request);
        if let Some(reason) = &state.failing {
            return Err(BackendError::Unavailable(reason.clone()));
        }
        Ok(state)
    }

    fn not_found(id: BookId) -> BackendError {
        BackendError::Status {
            status: 404,
            url: format!("memory:///books/{}", id),
        }
    }
}

impl BookBackend for InMemoryBackend {
    async fn list(&self) -> Result<Vec<Book>, BackendError> {
        let state = self.begin(Request::List)?;
        Ok(state.books.clone())
    }

    async fn create(&self, book: &Book) -> Result<Book, BackendError> {
        let mut state = self.begin(Request::Create(book.id))?;
        let mut stored = book.clone();
        if let Some(next) = state.next_id {
            stored.id = next;
            state.next_id = Some(next + 1);
        }
        state.books.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, book: &Book) -> Result<Book, BackendError> {
        let mut state = self.begin(Request::Update(book.id))?;
        let slot = state
            .books
            .iter_mut()
            .find(|existing| existing.id == book.id)
            .ok_or_else(|| Self::not_found(book.id))?;
        *slot = book.clone();
        Ok(book.clone())
    }

    async fn delete(&self, id: BookId) -> Result<(), BackendError> {
        let mut state = self.begin(Request::Delete(id))?;
        let before = state.books.len();
        state.books.retain(|existing| existing.id != id);
        if state.books.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
