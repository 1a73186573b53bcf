//! Browser-backed implementation of the core storage seam.

use sojourn_core::StorageBackend;
use web_sys::Storage;

/// `localStorage` adapter behind [`sojourn_core::StorageBackend`].
///
/// Every operation degrades to a no-op (reads to `None`) when storage is
/// unavailable, e.g. during server-side rendering or with storage disabled;
/// the store layer already treats absence as a valid state.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn handle() -> Option<Storage> {
        web_sys::window().and_then(|win| win.local_storage().ok().flatten())
    }
}

impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::handle().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::handle()
            && storage.set_item(key, value).is_err()
        {
            log::warn!("localStorage write failed for {key}");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::handle() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Snapshot store bound to browser storage.
#[must_use]
pub fn trip_store() -> sojourn_core::TripStore<BrowserStorage> {
    sojourn_core::TripStore::new(BrowserStorage)
}
