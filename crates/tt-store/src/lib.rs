//! # tt-store
//!
//! The data-access layer of TrackTime RS: an in-memory mirror of all
//! entity collections, hydrated from a persisted snapshot (or seed
//! fixtures on first run) and flushed back after every mutation.
//!
//! The store owns three concerns:
//! - entity CRUD with its side constraints (last-admin protection,
//!   cascading deletes, password preservation),
//! - the timer engine (start/pause/resume/stop over a time log),
//! - the auth boundary (plaintext login and the session pointer).
//!
//! Persistence goes through the [`storage::StorageBackend`] port, so
//! the local files can be swapped for a real database without touching
//! call sites.

pub mod seed;
pub mod snapshot;
pub mod storage;
pub mod store;

mod auth;
mod timer;

pub use snapshot::Snapshot;
pub use storage::{FileStorage, MemoryStorage, StorageBackend, StorageError};
pub use store::Store;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;

    use tt_core::clock::Clock;

    use crate::storage::MemoryStorage;
    use crate::store::Store;

    /// Hand-cranked clock for deterministic timer tests
    #[derive(Clone, Default)]
    pub struct ManualClock {
        millis: Arc<AtomicI64>,
    }

    impl ManualClock {
        pub fn set_millis(&self, millis: i64) {
            self.millis.store(millis, Ordering::SeqCst);
        }

        pub fn advance_millis(&self, delta: i64) {
            self.millis.fetch_add(delta, Ordering::SeqCst);
        }
    }

    impl Clock for ManualClock {
        fn now_millis(&self) -> i64 {
            self.millis.load(Ordering::SeqCst)
        }
    }

    /// Seeded store over in-memory storage, with handles to both the
    /// storage and the clock kept for inspection
    pub fn test_store() -> (Store, MemoryStorage, ManualClock) {
        let storage = MemoryStorage::new();
        let clock = ManualClock::default();
        let store = Store::open(Box::new(storage.clone()), Box::new(clock.clone()));
        (store, storage, clock)
    }
}
