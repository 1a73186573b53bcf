//! Sojourn Core
//!
//! Platform-agnostic client logic for the Sojourn trip-planning app: the
//! cached session snapshot, the progress resolver, the day/block progression
//! engine, and the bootstrap decision table. No UI and no browser APIs; the
//! web crate supplies storage and transport behind the seams defined here.

pub mod bootstrap;
pub mod progress;
pub mod remote;
pub mod resolver;
pub mod snapshot;
pub mod store;

// Re-export commonly used types
pub use bootstrap::{BootstrapAction, FetchRecovery, Plan, finish, needs_refresh, plan, recovery_for};
pub use progress::{Advance, BlockCompletion, WriteOutcome, advance, complete_block, pick_day, start_day};
pub use remote::{BlockCompleteRequest, DayCompleteRequest, FetchError, HydrationPayload};
pub use resolver::{Destination, resolve};
pub use snapshot::{
    AnchorSelection, BlockName, Itinerary, ItineraryBlock, ItineraryDay, MoodSet, ProgressPointer,
    Reflection, Snapshot, SnapshotPatch, Trip, TripIntent, UserProfile,
};
pub use store::{MemoryBackend, TripStore};

/// Raw persistent key/value storage underneath the snapshot store.
/// Platform-specific implementations should provide this.
pub trait StorageBackend {
    /// Read the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove `key` if present.
    fn remove(&self, key: &str);
}
