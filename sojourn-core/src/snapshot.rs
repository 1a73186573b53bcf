//! Cached trip session entities and the snapshot/patch pair the store works in.
//!
//! The server owns all of this data; the client holds a cache that is always
//! potentially stale. Nothing here is authoritative without a confirming fetch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// Inline capacity for mood tags on a reflection.
pub type MoodSet = SmallVec<[String; 4]>;

/// The three blocks of a live-trip day, in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockName {
    Morning,
    Afternoon,
    Evening,
}

impl BlockName {
    /// All blocks in advancement order.
    pub const ALL: [Self; 3] = [Self::Morning, Self::Afternoon, Self::Evening];

    /// Next block within the same day, or `None` after evening.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Morning => Some(Self::Afternoon),
            Self::Afternoon => Some(Self::Evening),
            Self::Evening => None,
        }
    }

    /// Stable lowercase name used in wire payloads and storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
        }
    }
}

/// User identity summary mirrored from the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub home_city: String,
    #[serde(default)]
    pub profile_complete: bool,
}

impl UserProfile {
    /// Display name assembled from the stored name parts.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }
}

/// The single active trip this client models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Trip {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub party_count: u32,
    #[serde(default)]
    pub join_code: String,
    #[serde(default)]
    pub started_trip: bool,
    #[serde(default)]
    pub trip_complete: bool,
}

impl Trip {
    /// Whether the server ever assigned this trip an identity.
    #[must_use]
    pub fn exists(&self) -> bool {
        !self.id.trim().is_empty()
    }

    /// Restore the completion invariant: a complete trip was necessarily started.
    pub fn normalize(&mut self) {
        if self.trip_complete {
            self.started_trip = true;
        }
    }
}

/// One-shot intent form answers; immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TripIntent {
    pub trip_id: String,
    #[serde(default)]
    pub priorities: Vec<String>,
    #[serde(default)]
    pub vibes: Vec<String>,
    #[serde(default)]
    pub mobility: String,
    #[serde(default)]
    pub pace: String,
    #[serde(default)]
    pub budget: String,
}

/// Anchor titles chosen for a trip; set semantics, order irrelevant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AnchorSelection {
    pub trip_id: String,
    #[serde(default)]
    pub anchors: Vec<String>,
}

impl AnchorSelection {
    /// Add a title unless an equal one is already present.
    pub fn insert(&mut self, title: &str) {
        let title = title.trim();
        if title.is_empty() || self.anchors.iter().any(|a| a == title) {
            return;
        }
        self.anchors.push(title.to_string());
    }

    /// True when no anchors were picked; treated the same as a missing selection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}

/// A single scheduled activity within a day block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ItineraryBlock {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub ticketed: bool,
    #[serde(default)]
    pub day_trip: bool,
}

/// One itinerary day: an optional summary plus up to three blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ItineraryDay {
    pub day_index: u32,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub blocks: BTreeMap<BlockName, ItineraryBlock>,
}

/// The generated trip plan: days indexed 1..N, contiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Itinerary {
    pub trip_id: String,
    #[serde(default)]
    pub days: Vec<ItineraryDay>,
}

impl Itinerary {
    /// Number of planned days.
    #[must_use]
    pub fn total_days(&self) -> u32 {
        self.days.len() as u32
    }

    /// Look up a day by its 1-based index.
    #[must_use]
    pub fn day(&self, day_index: u32) -> Option<&ItineraryDay> {
        self.days.iter().find(|d| d.day_index == day_index)
    }

    /// True when the build produced no days; treated as no itinerary at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Where the user currently is inside a started trip.
///
/// Meaningful only while `started_trip && !trip_complete`. `day_index` stays
/// within `1..=total_days + 1`; the `+ 1` state means the trip just completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressPointer {
    pub day_index: u32,
    pub block: BlockName,
}

impl ProgressPointer {
    /// Pointer for a freshly started trip.
    #[must_use]
    pub const fn start() -> Self {
        Self {
            day_index: 1,
            block: BlockName::Morning,
        }
    }

    /// Pointer at the morning of an arbitrary day.
    #[must_use]
    pub const fn at_day(day_index: u32) -> Self {
        Self {
            day_index,
            block: BlockName::Morning,
        }
    }
}

impl Default for ProgressPointer {
    fn default() -> Self {
        Self::start()
    }
}

/// End-of-day journal entry; created once per completed day, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Reflection {
    pub trip_id: String,
    pub day_index: u32,
    #[serde(default)]
    pub moods: MoodSet,
    #[serde(default)]
    pub journal: String,
}

/// Everything the client caches about the current session.
///
/// Each field is independently optional; a missing field means the server has
/// no data for it yet (or the cache never saw it), which is a valid state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Snapshot {
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub trip: Option<Trip>,
    #[serde(default)]
    pub intent: Option<TripIntent>,
    #[serde(default)]
    pub anchors: Option<AnchorSelection>,
    #[serde(default)]
    pub itinerary: Option<Itinerary>,
    #[serde(default)]
    pub pointer: Option<ProgressPointer>,
}

impl Snapshot {
    /// True when the cache holds nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profile.is_none()
            && self.trip.is_none()
            && self.intent.is_none()
            && self.anchors.is_none()
            && self.itinerary.is_none()
            && self.pointer.is_none()
    }

    /// Whether a trip with a server-assigned id is present.
    #[must_use]
    pub fn has_trip(&self) -> bool {
        self.trip.as_ref().is_some_and(Trip::exists)
    }

    /// Planned day count, zero when no itinerary exists.
    #[must_use]
    pub fn total_days(&self) -> u32 {
        self.itinerary.as_ref().map_or(0, Itinerary::total_days)
    }

    /// Overlay a patch, replacing only the fields the patch carries.
    ///
    /// Fields absent from the patch keep their current value; a successful but
    /// partial server response never nulls out locally cached entities.
    pub fn apply(&mut self, patch: SnapshotPatch) {
        if let Some(profile) = patch.profile {
            self.profile = Some(profile);
        }
        if let Some(mut trip) = patch.trip {
            trip.normalize();
            self.trip = Some(trip);
        }
        if let Some(intent) = patch.intent {
            self.intent = Some(intent);
        }
        if let Some(anchors) = patch.anchors {
            self.anchors = Some(anchors);
        }
        if let Some(itinerary) = patch.itinerary {
            self.itinerary = Some(itinerary);
        }
        if let Some(pointer) = patch.pointer {
            self.pointer = Some(pointer);
        }
    }
}

/// Partial snapshot write: only populated fields are persisted or merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SnapshotPatch {
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub trip: Option<Trip>,
    #[serde(default)]
    pub intent: Option<TripIntent>,
    #[serde(default)]
    pub anchors: Option<AnchorSelection>,
    #[serde(default)]
    pub itinerary: Option<Itinerary>,
    #[serde(default)]
    pub pointer: Option<ProgressPointer>,
}

impl SnapshotPatch {
    /// True when the patch would write nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profile.is_none()
            && self.trip.is_none()
            && self.intent.is_none()
            && self.anchors.is_none()
            && self.itinerary.is_none()
            && self.pointer.is_none()
    }

    /// Patch writing only the progress pointer.
    #[must_use]
    pub fn pointer(pointer: ProgressPointer) -> Self {
        Self {
            pointer: Some(pointer),
            ..Self::default()
        }
    }

    /// Patch writing only the trip entity.
    #[must_use]
    pub fn trip(trip: Trip) -> Self {
        Self {
            trip: Some(trip),
            ..Self::default()
        }
    }
}

impl From<Snapshot> for SnapshotPatch {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            profile: snapshot.profile,
            trip: snapshot.trip,
            intent: snapshot.intent,
            anchors: snapshot.anchors,
            itinerary: snapshot.itinerary,
            pointer: snapshot.pointer,
        }
    }
}
