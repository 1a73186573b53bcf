//! Wire contract with the server: hydration payload, write requests, and the
//! fetch error taxonomy. Field names follow the server's JSON contract; the
//! transport itself lives in the web crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::snapshot::{
    AnchorSelection, BlockName, Itinerary, MoodSet, Reflection, SnapshotPatch, Trip, TripIntent,
    UserProfile,
};

/// Body of the consolidated hydration endpoint.
///
/// Every key is optional: an absent key means the server has no data for that
/// entity yet, which is a normal pre-setup state and not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HydrationPayload {
    #[serde(rename = "userData", default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserProfile>,
    #[serde(rename = "tripData", default, skip_serializing_if = "Option::is_none")]
    pub trip_data: Option<Trip>,
    #[serde(
        rename = "tripIntentData",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub trip_intent_data: Option<TripIntent>,
    #[serde(
        rename = "anchorSelectData",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub anchor_select_data: Option<AnchorSelection>,
    #[serde(
        rename = "itineraryData",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub itinerary_data: Option<Itinerary>,
}

impl HydrationPayload {
    /// Convert to a store patch carrying only the keys the server returned.
    ///
    /// Fields the server omitted stay out of the patch, so merging never nulls
    /// a locally cached entity.
    #[must_use]
    pub fn into_patch(self) -> SnapshotPatch {
        SnapshotPatch {
            profile: self.user_data,
            trip: self.trip_data,
            intent: self.trip_intent_data,
            anchors: self.anchor_select_data,
            itinerary: self.itinerary_data,
            pointer: None,
        }
    }
}

/// Body of the mark-block-complete write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockCompleteRequest {
    #[serde(rename = "tripId")]
    pub trip_id: String,
    #[serde(rename = "dayIndex")]
    pub day_index: u32,
    #[serde(rename = "blockName")]
    pub block_name: BlockName,
}

/// Body of the day-complete write carrying the reflection fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCompleteRequest {
    #[serde(rename = "tripId")]
    pub trip_id: String,
    #[serde(rename = "dayIndex")]
    pub day_index: u32,
    #[serde(default)]
    pub moods: MoodSet,
    #[serde(default)]
    pub journal: String,
}

impl From<Reflection> for DayCompleteRequest {
    fn from(reflection: Reflection) -> Self {
        Self {
            trip_id: reflection.trip_id,
            day_index: reflection.day_index,
            moods: reflection.moods,
            journal: reflection.journal,
        }
    }
}

/// Why a server interaction failed, coarse enough to pick a recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// 401/403: the session token no longer authenticates.
    #[error("not authenticated")]
    Unauthenticated,
    /// 404 on hydration: the cached identity has no server record. This is a
    /// cache-invalidation signal, stronger than an ordinary error.
    #[error("user record not found")]
    UserNotFound,
    /// Network failure, timeout, or any other non-2xx status. Retried only at
    /// the next natural trigger, never in a loop.
    #[error("transient fetch failure: {reason}")]
    Transient { reason: String },
}

impl FetchError {
    /// Transient error with a short diagnostic.
    #[must_use]
    pub fn transient(reason: impl Into<String>) -> Self {
        Self::Transient {
            reason: reason.into(),
        }
    }

    /// Classify an HTTP status the hydration or write endpoints returned.
    #[must_use]
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 | 403 => Some(Self::Unauthenticated),
            404 => Some(Self::UserNotFound),
            other => Some(Self::transient(format!("http status {other}"))),
        }
    }
}
