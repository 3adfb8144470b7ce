//! A json-server style `/books` backend on axum, for driving `HttpBackend`.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use book_catalog::{Book, BookId};

#[derive(Clone, Default)]
pub struct FakeBooks {
    books: Arc<Mutex<Vec<Book>>>,
    failing: Arc<AtomicBool>,
    /// 0 keeps the client's id, anything else is the next id to assign.
    next_id: Arc<AtomicI64>,
    delay_ms: Arc<AtomicI64>,
}

impl FakeBooks {
    pub fn with_books(books: Vec<Book>) -> Self {
        let fake = Self::default();
        *fake.books.lock().unwrap() = books;
        fake
    }

    pub fn books(&self) -> Vec<Book> {
        self.books.lock().unwrap().clone()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn assign_ids_from(&self, start: BookId) {
        self.next_id.store(start, Ordering::SeqCst);
    }

    pub fn set_delay(&self, delay: Duration) {
        self.delay_ms.store(delay.as_millis() as i64, Ordering::SeqCst);
    }

    async fn gate(&self) -> Result<(), Response> {
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay as u64)).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err((StatusCode::INTERNAL_SERVER_ERROR, "backend failure").into_response());
        }
        Ok(())
    }
}

pub fn router(fake: FakeBooks) -> Router {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/:id", put(update_book).delete(delete_book))
        .with_state(fake)
}

/// Bind to port 0 and return the base url.
pub async fn start_server(fake: FakeBooks) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(fake)).await.unwrap();
    });
    format!("http://{addr}")
}

async fn list_books(State(fake): State<FakeBooks>) -> Response {
    if let Err(resp) = fake.gate().await {
        return resp;
    }
    Json(fake.books()).into_response()
}

async fn create_book(State(fake): State<FakeBooks>, Json(mut book): Json<Book>) -> Response {
    if let Err(resp) = fake.gate().await {
        return resp;
    }
    let next = fake.next_id.load(Ordering::SeqCst);
    if next != 0 {
        book.id = next;
        fake.next_id.store(next + 1, Ordering::SeqCst);
    }
    fake.books.lock().unwrap().push(book.clone());
    (StatusCode::CREATED, Json(book)).into_response()
}

async fn update_book(
    State(fake): State<FakeBooks>,
    Path(id): Path<BookId>,
    Json(book): Json<Book>,
) -> Response {
    if let Err(resp) = fake.gate().await {
        return resp;
    }
    let mut books = fake.books.lock().unwrap();
    match books.iter_mut().find(|existing| existing.id == id) {
        Some(slot) => {
            *slot = book.clone();
            Json(book).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_book(State(fake): State<FakeBooks>, Path(id): Path<BookId>) -> Response {
    if let Err(resp) = fake.gate().await {
        return resp;
    }
    let mut books = fake.books.lock().unwrap();
    let before = books.len();
    books.retain(|existing| existing.id != id);
    if books.len() == before {
        StatusCode::NOT_FOUND.into_response()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}
