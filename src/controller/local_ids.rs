use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::book::BookId;

/// Proposes ids for new records: the current time in milliseconds, bumped
/// so that two creations from the same controller never share an id.
#[derive(Debug, Default)]
pub(crate) struct LocalIds {
    last: AtomicI64,
}

impl LocalIds {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn next(&self) -> BookId {
        let now = now_millis();
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|last| last);
        now.max(previous.saturating_add(1))
    }
}

fn now_millis() -> BookId {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| BookId::try_from(elapsed.as_millis()).unwrap_or(BookId::MAX))
        .unwrap_or(0)
}
