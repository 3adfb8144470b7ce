//! Catalog controller against a real HTTP backend.
//!
//! Starts an axum server and drives it through `HttpBackend`.

#![cfg(feature = "http")]

mod backend;

use std::time::{Duration, Instant};

use backend::{start_server, FakeBooks};
use book_catalog::{
    BackendError, Book, BookBackend, BookDraft, CatalogConfig, CatalogController, CatalogError,
    HttpBackend,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn shelf() -> Vec<Book> {
    vec![
        Book::new(1, "A", "X", "2000"),
        Book::new(2, "B", "Y", "2001"),
    ]
}

async fn controller_for(fake: FakeBooks) -> CatalogController<HttpBackend> {
    init_tracing();
    let base = start_server(fake).await;
    let config = CatalogConfig::new(base).unwrap();
    CatalogController::new(HttpBackend::new(config).unwrap())
}

#[tokio::test]
async fn load_create_delete_round() {
    let fake = FakeBooks::with_books(shelf());
    let controller = controller_for(fake.clone()).await;

    assert_eq!(controller.load().await.unwrap(), 2);
    assert_eq!(controller.books(), shelf());

    controller.set_draft(BookDraft::new("C", "Z", "2002"));
    let created = controller.submit().await.unwrap();
    assert_eq!(created.title, "C");
    assert_eq!(fake.books().len(), 3);
    assert_eq!(controller.books().last(), Some(&created));

    controller.delete(1).await.unwrap();
    let ids: Vec<i64> = controller.books().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![2, created.id]);
    assert_eq!(fake.books(), controller.books());
}

#[tokio::test]
async fn server_assigned_id_is_kept() {
    let fake = FakeBooks::default();
    fake.assign_ids_from(1000);
    let controller = controller_for(fake).await;

    controller.set_draft(BookDraft::new("Dune", "Herbert", "1965"));
    let created = controller.submit().await.unwrap();

    assert_eq!(created.id, 1000);
    assert_eq!(controller.books(), vec![Book::new(1000, "Dune", "Herbert", "1965")]);
}

#[tokio::test]
async fn server_error_leaves_state_untouched() {
    let fake = FakeBooks::with_books(shelf());
    let controller = controller_for(fake.clone()).await;
    controller.load().await.unwrap();

    fake.set_failing(true);
    let err = controller.delete(1).await.unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Backend(BackendError::Status { status: 500, .. })
    ));

    controller.set_draft(BookDraft::new("C", "Z", "2002"));
    assert!(controller.submit().await.is_err());

    assert_eq!(controller.books(), shelf());
    assert_eq!(controller.draft(), BookDraft::new("C", "Z", "2002"));
}

#[tokio::test]
async fn failed_initial_load_keeps_empty_collection() {
    let fake = FakeBooks::with_books(shelf());
    fake.set_failing(true);
    let controller = controller_for(fake).await;

    assert!(controller.load().await.is_err());
    assert!(controller.books().is_empty());
}

#[tokio::test]
async fn update_over_http() {
    let fake = FakeBooks::with_books(shelf());
    let controller = controller_for(fake.clone()).await;
    controller.load().await.unwrap();

    controller
        .update(Book::new(2, "B revised", "Y", "2011"))
        .await
        .unwrap();
    assert_eq!(controller.books()[1].title, "B revised");
    assert_eq!(fake.books()[1].title, "B revised");

    let err = controller
        .update(Book::new(9, "Nope", "N", "1"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Backend(BackendError::Status { status: 404, .. })
    ));
}

#[tokio::test]
async fn edit_then_resubmit() {
    let fake = FakeBooks::with_books(shelf());
    let controller = controller_for(fake.clone()).await;
    controller.load().await.unwrap();

    assert!(controller.edit(1).await.unwrap());
    assert_eq!(controller.draft(), BookDraft::new("A", "X", "2000"));
    assert_eq!(fake.books(), vec![Book::new(2, "B", "Y", "2001")]);

    controller.set_draft(BookDraft::new("A", "X", "1999"));
    let recreated = controller.submit().await.unwrap();
    assert_eq!(recreated.year, "1999");
    assert_eq!(fake.books().len(), 2);
}

#[tokio::test]
async fn overlapping_deletes_run_concurrently() {
    let fake = FakeBooks::with_books(shelf());
    let controller = controller_for(fake.clone()).await;
    controller.load().await.unwrap();

    let delay = Duration::from_millis(200);
    fake.set_delay(delay);

    let started = Instant::now();
    let (first, second) = tokio::join!(controller.delete(1), controller.delete(2));
    let elapsed = started.elapsed();
    first.unwrap();
    second.unwrap();

    assert!(controller.books().is_empty());
    assert!(fake.books().is_empty());
    // One after the other would take at least twice the delay.
    assert!(
        elapsed < delay * 2 - Duration::from_millis(50),
        "deletes took {:?}",
        elapsed
    );
}

#[tokio::test]
async fn slow_backend_times_out() {
    let fake = FakeBooks::with_books(shelf());
    fake.set_delay(Duration::from_millis(500));
    init_tracing();
    let base = start_server(fake).await;
    let config = CatalogConfig::new(base)
        .unwrap()
        .with_timeout(Duration::from_millis(50));
    let backend = HttpBackend::new(config).unwrap();

    let err = backend.list().await.unwrap_err();
    assert!(matches!(err, BackendError::Transport(_)));
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = CatalogConfig::new(format!("http://{addr}")).unwrap();
    let controller = CatalogController::new(HttpBackend::new(config).unwrap());

    let err = controller.load().await.unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Backend(BackendError::Transport(_))
    ));
}

#[tokio::test]
async fn search_and_pages_over_loaded_data() {
    let books: Vec<Book> = (1..=12)
        .map(|i| Book::new(i, format!("Volume {}", i), "Author", "2000"))
        .collect();
    let controller = controller_for(FakeBooks::with_books(books)).await;
    controller.load().await.unwrap();

    controller.next_page();
    let last = controller.next_page();
    assert_eq!(last.page, 3);
    let ids: Vec<i64> = last.books.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![11, 12]);
    assert!(!last.has_next);

    let view = controller.search("volume 1");
    assert_eq!(view.page, 1);
    assert_eq!(view.total_matches, 4);
}
