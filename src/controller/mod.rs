//! View controller - remote synchronization plus the derived view.
//!
//! `CatalogController<B>` owns the collection (through a [`BookStore`]),
//! the pager, the pending form draft and a backend `B`. Each operation
//! talks to the backend first and only dispatches into the store once the
//! backend has answered, so a failed call leaves everything as it was.
//!
//! Every method takes `&self`. State sits behind a mutex that is never held
//! across an `.await`, so several operations may be in flight at once; each
//! one dispatches independently when its call completes.
//!
//! ## Example
//!
//! ```ignore
//! use book_catalog::{BookDraft, CatalogConfig, CatalogController, HttpBackend};
//!
//! let controller = CatalogController::new(HttpBackend::new(CatalogConfig::from_env()?)?);
//! controller.load().await?;
//!
//! controller.set_draft(BookDraft::new("Dune", "Frank Herbert", "1965"));
//! controller.submit().await?;
//!
//! controller.search("dune");
//! println!("{}", controller.view());
//! ```

mod local_ids;
#[cfg(feature = "emitter")]
mod notify;

#[cfg(feature = "emitter")]
pub use notify::{ACTION_DISPATCHED, OPERATION_FAILED, VIEW_CHANGED};

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::book::{Book, BookDraft, BookId};
use crate::error::CatalogError;
use crate::remote::BookBackend;
use crate::store::{Action, BookStore};
use crate::view::{PageView, Pager};

use local_ids::LocalIds;
#[cfg(feature = "emitter")]
use notify::Notifier;

#[derive(Default)]
struct ControllerState {
    store: BookStore,
    pager: Pager,
    draft: BookDraft,
    view: PageView,
}

impl ControllerState {
    fn recompute(&mut self) -> PageView {
        self.view = PageView::derive(self.store.books(), &self.pager);
        tracing::debug!(
            page = self.view.page,
            page_count = self.view.page_count,
            matches = self.view.total_matches,
            "recomputed view"
        );
        self.view.clone()
    }
}

/// Drives a book catalog against a [`BookBackend`].
pub struct CatalogController<B> {
    backend: B,
    state: Mutex<ControllerState>,
    ids: LocalIds,
    #[cfg(feature = "emitter")]
    notifier: Notifier,
}

impl<B: BookBackend> CatalogController<B> {
    /// Create a controller with an empty collection. Call [`load`] to fetch.
    ///
    /// [`load`]: CatalogController::load
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: Mutex::new(ControllerState::default()),
            ids: LocalIds::new(),
            #[cfg(feature = "emitter")]
            notifier: Notifier::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Snapshot of the whole collection.
    pub fn books(&self) -> Vec<Book> {
        self.lock().store.books().to_vec()
    }

    /// The last derived view.
    pub fn view(&self) -> PageView {
        self.lock().view.clone()
    }

    /// Current values of the create form.
    pub fn draft(&self) -> BookDraft {
        self.lock().draft.clone()
    }

    /// Replace the values of the create form.
    pub fn set_draft(&self, draft: BookDraft) {
        self.lock().draft = draft;
    }

    /// Fetch every record and replace the collection with them.
    ///
    /// On failure the collection is left untouched. Returns the number of
    /// records loaded.
    pub async fn load(&self) -> Result<usize, CatalogError> {
        let books = self
            .backend
            .list()
            .await
            .map_err(|err| self.fail("load", err.into()))?;
        let count = books.len();
        self.apply(Action::set_books(books));
        tracing::info!(count, "loaded books");
        Ok(count)
    }

    /// Create a record from the current draft.
    ///
    /// An incomplete draft is rejected before any remote call. On success
    /// the record returned by the backend is appended and the draft is
    /// cleared, unless it was changed while the call was in flight.
    pub async fn submit(&self) -> Result<Book, CatalogError> {
        let draft = self.draft();
        let proposed = draft
            .to_book(self.ids.next())
            .map_err(|err| self.fail("create", err.into()))?;

        let stored = self
            .backend
            .create(&proposed)
            .await
            .map_err(|err| self.fail("create", err.into()))?;

        {
            let mut state = self.lock();
            if state.draft == draft {
                state.draft.clear();
            }
        }
        self.apply(Action::add_book(stored.clone()));
        tracing::info!(
            book_id = stored.id,
            proposed_id = proposed.id,
            title = %stored.title,
            "created book"
        );
        Ok(stored)
    }

    /// Delete a record on the backend, then drop it from the collection.
    pub async fn delete(&self, id: BookId) -> Result<(), CatalogError> {
        self.backend
            .delete(id)
            .await
            .map_err(|err| self.fail("delete", err.into()))?;
        self.apply(Action::delete_book(id));
        tracing::info!(book_id = id, "deleted book");
        Ok(())
    }

    /// Move a record back into the form: populate the draft with its values
    /// and delete it. Submitting the draft re-creates it.
    ///
    /// Returns `Ok(false)` without any remote call when no record has this
    /// id. If the delete fails the draft stays populated.
    pub async fn edit(&self, id: BookId) -> Result<bool, CatalogError> {
        let found = {
            let mut state = self.lock();
            let draft = state.store.find(id).map(BookDraft::from_book);
            match draft {
                Some(draft) => {
                    state.draft = draft;
                    true
                }
                None => false,
            }
        };
        if !found {
            tracing::debug!(book_id = id, "edit ignored, no such book");
            return Ok(false);
        }
        self.delete(id).await?;
        Ok(true)
    }

    /// Replace a record in place on the backend, then in the collection.
    pub async fn update(&self, book: Book) -> Result<Book, CatalogError> {
        let stored = self
            .backend
            .update(&book)
            .await
            .map_err(|err| self.fail("update", err.into()))?;
        self.apply(Action::update_book(stored.clone()));
        tracing::info!(book_id = stored.id, "updated book");
        Ok(stored)
    }

    /// Set the search term and go back to page 1.
    pub fn search(&self, term: impl Into<String>) -> PageView {
        let view = {
            let mut state = self.lock();
            state.pager.search(term);
            state.recompute()
        };
        self.view_changed(&view);
        view
    }

    /// Advance one page, stopping at the last page of the filtered results.
    pub fn next_page(&self) -> PageView {
        let view = {
            let mut state = self.lock();
            let matches = state.view.total_matches;
            state.pager.next(matches);
            state.recompute()
        };
        self.view_changed(&view);
        view
    }

    /// Go back one page, stopping at page 1.
    pub fn previous_page(&self) -> PageView {
        let view = {
            let mut state = self.lock();
            state.pager.previous();
            state.recompute()
        };
        self.view_changed(&view);
        view
    }

    /// Recompute the view from the current collection, term and page.
    pub fn refresh(&self) -> PageView {
        let view = self.lock().recompute();
        self.view_changed(&view);
        view
    }

    /// Register a listener for a controller event (see [`ACTION_DISPATCHED`],
    /// [`VIEW_CHANGED`], [`OPERATION_FAILED`]). Listeners run on their own
    /// thread and receive a string payload.
    #[cfg(feature = "emitter")]
    pub fn on<F>(&self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.notifier.on(event, listener);
    }

    fn lock(&self) -> MutexGuard<'_, ControllerState> {
        // Every write replaces whole values, so a poisoned state is still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Dispatch into the store and recompute the view.
    fn apply(&self, action: Action) -> PageView {
        let view = {
            let mut state = self.lock();
            state.store.dispatch(&action);
            state.recompute()
        };
        #[cfg(feature = "emitter")]
        self.notifier.action_dispatched(&action);
        self.view_changed(&view);
        view
    }

    fn view_changed(&self, _view: &PageView) {
        #[cfg(feature = "emitter")]
        self.notifier.view_changed(_view);
    }

    /// Report a failed operation where it happened and hand the error back.
    fn fail(&self, operation: &'static str, err: CatalogError) -> CatalogError {
        match &err {
            CatalogError::Validation(cause) => {
                tracing::warn!(operation, error = %cause, "rejected operation")
            }
            CatalogError::Backend(cause) => {
                tracing::error!(operation, error = %cause, "remote operation failed")
            }
        }
        #[cfg(feature = "emitter")]
        self.notifier.operation_failed(operation, &err);
        err
    }
}
