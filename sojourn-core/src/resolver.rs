//! The progress resolver: one snapshot in, exactly one destination out.
//!
//! Every hydrate-then-decide call site in the app goes through `resolve`;
//! no page carries its own copy of this decision.

use serde::{Deserialize, Serialize};

use crate::snapshot::Snapshot;

/// Named screens the router understands. The resolver emits the setup-flow
/// values; the progression engine emits the live-flow values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    SignIn,
    ProfileSetup,
    TripSetup,
    TripIntentForm,
    AnchorSelect,
    ItineraryBuild,
    PreTripHub,
    ResumeLiveTrip,
    DayOverview,
    LiveDayBlock,
    DayReflection,
    TripComplete,
}

/// Map a session snapshot to the screen the user needs next.
///
/// Evaluated strictly in order; the first matching rule wins. Each rule gates
/// the minimum prerequisite for the one after it, so reordering would route a
/// user past a step they have not finished. Total over every well-typed
/// snapshot, including the all-empty one.
#[must_use]
pub fn resolve(authed: bool, snapshot: &Snapshot) -> Destination {
    if !authed {
        return Destination::SignIn;
    }
    if !snapshot
        .profile
        .as_ref()
        .is_some_and(|p| p.profile_complete)
    {
        return Destination::ProfileSetup;
    }
    let Some(trip) = snapshot.trip.as_ref().filter(|t| t.exists()) else {
        return Destination::TripSetup;
    };
    if trip.trip_complete {
        return Destination::TripComplete;
    }
    if trip.started_trip {
        return Destination::ResumeLiveTrip;
    }
    if snapshot.intent.is_none() {
        return Destination::TripIntentForm;
    }
    if snapshot.anchors.as_ref().is_none_or(|a| a.is_empty()) {
        return Destination::AnchorSelect;
    }
    if snapshot.itinerary.as_ref().is_none_or(|i| i.is_empty()) {
        return Destination::ItineraryBuild;
    }
    Destination::PreTripHub
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{
        AnchorSelection, Itinerary, ItineraryDay, Trip, TripIntent, UserProfile,
    };

    fn complete_profile() -> UserProfile {
        UserProfile {
            id: String::from("u1"),
            profile_complete: true,
            ..UserProfile::default()
        }
    }

    fn trip(started: bool, complete: bool) -> Trip {
        Trip {
            id: String::from("t1"),
            started_trip: started,
            trip_complete: complete,
            ..Trip::default()
        }
    }

    fn ready_snapshot() -> Snapshot {
        Snapshot {
            profile: Some(complete_profile()),
            trip: Some(trip(false, false)),
            intent: Some(TripIntent {
                trip_id: String::from("t1"),
                ..TripIntent::default()
            }),
            anchors: Some(AnchorSelection {
                trip_id: String::from("t1"),
                anchors: vec![String::from("Alfama walk")],
            }),
            itinerary: Some(Itinerary {
                trip_id: String::from("t1"),
                days: vec![ItineraryDay {
                    day_index: 1,
                    ..ItineraryDay::default()
                }],
            }),
            pointer: None,
        }
    }

    #[test]
    fn empty_snapshot_resolves_through_the_first_rules() {
        assert_eq!(resolve(false, &Snapshot::default()), Destination::SignIn);
        assert_eq!(
            resolve(true, &Snapshot::default()),
            Destination::ProfileSetup
        );
    }

    #[test]
    fn incomplete_profile_gates_everything_behind_it() {
        // A complete trip does not matter while the profile is unfinished.
        let snapshot = Snapshot {
            profile: Some(UserProfile {
                profile_complete: false,
                ..complete_profile()
            }),
            trip: Some(trip(true, true)),
            ..Snapshot::default()
        };
        assert_eq!(resolve(true, &snapshot), Destination::ProfileSetup);
    }

    #[test]
    fn trip_with_blank_id_counts_as_missing() {
        let snapshot = Snapshot {
            profile: Some(complete_profile()),
            trip: Some(Trip {
                id: String::from("  "),
                ..Trip::default()
            }),
            ..Snapshot::default()
        };
        assert_eq!(resolve(true, &snapshot), Destination::TripSetup);
    }

    #[test]
    fn terminal_and_live_rules_precede_setup_rules() {
        let mut snapshot = ready_snapshot();
        snapshot.trip = Some(trip(true, true));
        assert_eq!(resolve(true, &snapshot), Destination::TripComplete);

        snapshot.trip = Some(trip(true, false));
        assert_eq!(resolve(true, &snapshot), Destination::ResumeLiveTrip);
    }

    #[test]
    fn setup_chain_fires_in_order() {
        let mut snapshot = ready_snapshot();

        snapshot.intent = None;
        snapshot.anchors = None;
        snapshot.itinerary = None;
        assert_eq!(resolve(true, &snapshot), Destination::TripIntentForm);

        snapshot.intent = Some(TripIntent::default());
        assert_eq!(resolve(true, &snapshot), Destination::AnchorSelect);

        snapshot.anchors = Some(AnchorSelection {
            trip_id: String::from("t1"),
            anchors: vec![],
        });
        assert_eq!(resolve(true, &snapshot), Destination::AnchorSelect);

        snapshot.anchors = Some(AnchorSelection {
            trip_id: String::from("t1"),
            anchors: vec![String::from("Alfama walk")],
        });
        assert_eq!(resolve(true, &snapshot), Destination::ItineraryBuild);

        snapshot.itinerary = Some(Itinerary {
            trip_id: String::from("t1"),
            days: vec![],
        });
        assert_eq!(resolve(true, &snapshot), Destination::ItineraryBuild);
    }

    #[test]
    fn fully_prepared_trip_lands_on_the_hub() {
        assert_eq!(resolve(true, &ready_snapshot()), Destination::PreTripHub);
    }
}
