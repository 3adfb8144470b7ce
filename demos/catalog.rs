//! Load the catalog from `BACKEND_URL` and print the first page.
//!
//! ```text
//! BACKEND_URL=http://localhost:3000 RUST_LOG=book_catalog=debug \
//!     cargo run --example catalog -- [search term]
//! ```

use book_catalog::{CatalogConfig, CatalogController, HttpBackend};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("book_catalog=info")),
        )
        .init();

    let config = CatalogConfig::from_env()?;
    tracing::info!(backend = %config.backend_url, "starting catalog");

    let controller = CatalogController::new(HttpBackend::new(config)?);
    if let Err(err) = controller.load().await {
        // Already logged; show the empty catalog like any other failed load.
        eprintln!("could not load books: {}", err);
    }

    let view = match std::env::args().nth(1) {
        Some(term) => controller.search(term),
        None => controller.refresh(),
    };
    println!("{}", view);
    Ok(())
}
