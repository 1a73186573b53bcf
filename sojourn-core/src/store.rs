//! Typed, versioned wrapper over persistent client storage.
//!
//! All snapshot reads and writes go through `TripStore`; storage keys never
//! leak outside this module. Reads tolerate missing or malformed entries by
//! substituting absence, so corrupt cache data can never crash a caller.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::StorageBackend;
use crate::snapshot::{Snapshot, SnapshotPatch};

/// Bump when the persisted shape changes incompatibly. A mismatched version
/// on load is treated exactly like corrupt data: every field reads as absent.
const SCHEMA_VERSION: u32 = 1;

const KEY_SCHEMA: &str = "sojourn.schema";
const KEY_PROFILE: &str = "sojourn.profile";
const KEY_TRIP: &str = "sojourn.trip";
const KEY_INTENT: &str = "sojourn.intent";
const KEY_ANCHORS: &str = "sojourn.anchors";
const KEY_ITINERARY: &str = "sojourn.itinerary";
const KEY_POINTER: &str = "sojourn.pointer";

const TRACKED_KEYS: [&str; 7] = [
    KEY_SCHEMA,
    KEY_PROFILE,
    KEY_TRIP,
    KEY_INTENT,
    KEY_ANCHORS,
    KEY_ITINERARY,
    KEY_POINTER,
];

/// Snapshot store bound to a storage backend.
#[derive(Debug, Clone)]
pub struct TripStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> TripStore<B> {
    /// Wrap a backend.
    #[must_use]
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read the full cached snapshot.
    ///
    /// Never fails: a missing key, unparseable JSON, or a schema-version
    /// mismatch all surface as `None` for the affected fields.
    #[must_use]
    pub fn load(&self) -> Snapshot {
        if !self.schema_matches() {
            return Snapshot::default();
        }
        let mut snapshot = Snapshot {
            profile: self.read(KEY_PROFILE),
            trip: self.read(KEY_TRIP),
            intent: self.read(KEY_INTENT),
            anchors: self.read(KEY_ANCHORS),
            itinerary: self.read(KEY_ITINERARY),
            pointer: self.read(KEY_POINTER),
        };
        if let Some(trip) = snapshot.trip.as_mut() {
            trip.normalize();
        }
        snapshot
    }

    /// Write only the fields the patch carries, leaving others untouched.
    pub fn save(&self, patch: &SnapshotPatch) {
        if patch.is_empty() {
            return;
        }
        self.backend.set(KEY_SCHEMA, &SCHEMA_VERSION.to_string());
        if let Some(profile) = &patch.profile {
            self.write(KEY_PROFILE, profile);
        }
        if let Some(trip) = &patch.trip {
            let mut trip = trip.clone();
            trip.normalize();
            self.write(KEY_TRIP, &trip);
        }
        if let Some(intent) = &patch.intent {
            self.write(KEY_INTENT, intent);
        }
        if let Some(anchors) = &patch.anchors {
            self.write(KEY_ANCHORS, anchors);
        }
        if let Some(itinerary) = &patch.itinerary {
            self.write(KEY_ITINERARY, itinerary);
        }
        if let Some(pointer) = &patch.pointer {
            self.write(KEY_POINTER, pointer);
        }
    }

    /// Remove the progress pointer (trip completion keeps the rest of the cache).
    pub fn clear_pointer(&self) {
        self.backend.remove(KEY_POINTER);
    }

    /// Remove every tracked key. Used on logout and on a user-not-found reset.
    pub fn clear(&self) {
        for key in TRACKED_KEYS {
            self.backend.remove(key);
        }
    }

    fn schema_matches(&self) -> bool {
        match self.backend.get(KEY_SCHEMA) {
            // An untouched store has no version marker yet; reads are all-absent
            // anyway, so treat it as current.
            None => true,
            Some(raw) => raw.parse::<u32>() == Ok(SCHEMA_VERSION),
        }
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.get(key)?;
        serde_json::from_str(&raw).ok()
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) {
        if let Ok(raw) = serde_json::to_string(value) {
            self.backend.set(key, &raw);
        }
    }
}

/// In-memory backend for tests and server-side rendering.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    entries: std::rc::Rc<std::cell::RefCell<std::collections::HashMap<String, String>>>,
}

impl MemoryBackend {
    /// Fresh empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing the typed store. Test hook for corrupt data.
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// True when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{AnchorSelection, ProgressPointer, UserProfile};

    fn store() -> (TripStore<MemoryBackend>, MemoryBackend) {
        let backend = MemoryBackend::new();
        (TripStore::new(backend.clone()), backend)
    }

    #[test]
    fn empty_storage_loads_empty_snapshot() {
        let (store, _) = store();
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips_partial_fields() {
        let (store, _) = store();
        store.save(&SnapshotPatch {
            profile: Some(UserProfile {
                id: String::from("u1"),
                profile_complete: true,
                ..UserProfile::default()
            }),
            pointer: Some(ProgressPointer::start()),
            ..SnapshotPatch::default()
        });

        let snapshot = store.load();
        assert!(snapshot.profile.is_some_and(|p| p.profile_complete));
        assert_eq!(snapshot.pointer, Some(ProgressPointer::start()));
        assert!(snapshot.trip.is_none());
    }

    #[test]
    fn malformed_entries_read_as_absent() {
        let (store, backend) = store();
        backend.seed("sojourn.trip", "{not json");
        backend.seed("sojourn.anchors", "42");
        backend.seed(
            "sojourn.profile",
            r#"{"id":"u1","profile_complete":true}"#,
        );

        let snapshot = store.load();
        assert!(snapshot.trip.is_none());
        assert!(snapshot.anchors.is_none());
        assert!(snapshot.profile.is_some());
    }

    #[test]
    fn schema_mismatch_reads_as_empty() {
        let (store, backend) = store();
        store.save(&SnapshotPatch {
            anchors: Some(AnchorSelection {
                trip_id: String::from("t1"),
                anchors: vec![String::from("Alfama walk")],
            }),
            ..SnapshotPatch::default()
        });
        backend.seed("sojourn.schema", "999");
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_leaves_unlisted_keys_untouched() {
        let (store, _) = store();
        store.save(&SnapshotPatch {
            anchors: Some(AnchorSelection {
                trip_id: String::from("t1"),
                anchors: vec![String::from("Alfama walk")],
            }),
            ..SnapshotPatch::default()
        });
        store.save(&SnapshotPatch::pointer(ProgressPointer::at_day(2)));

        let snapshot = store.load();
        assert!(snapshot.anchors.is_some());
        assert_eq!(snapshot.pointer, Some(ProgressPointer::at_day(2)));
    }

    #[test]
    fn clear_removes_every_tracked_key() {
        let (store, backend) = store();
        store.save(&SnapshotPatch::pointer(ProgressPointer::start()));
        assert!(!backend.is_empty());
        store.clear();
        assert!(backend.is_empty());
        assert!(store.load().is_empty());
    }

    #[test]
    fn clear_pointer_keeps_other_entities() {
        let (store, _) = store();
        store.save(&SnapshotPatch {
            profile: Some(UserProfile::default()),
            pointer: Some(ProgressPointer::at_day(3)),
            ..SnapshotPatch::default()
        });
        store.clear_pointer();
        let snapshot = store.load();
        assert!(snapshot.pointer.is_none());
        assert!(snapshot.profile.is_some());
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let (store, backend) = store();
        store.save(&SnapshotPatch::default());
        assert!(backend.is_empty());
    }
}
