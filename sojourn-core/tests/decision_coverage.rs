//! Exhaustive sweeps over the resolver decision table and the progression
//! cycle, checking totality and ordering rather than hand-picked cases.

use sojourn_core::{
    Advance, AnchorSelection, BlockName, Destination, Itinerary, ItineraryDay, ProgressPointer,
    Snapshot, Trip, TripIntent, UserProfile, advance, resolve,
};

fn snapshot_from_flags(
    has_profile: bool,
    profile_complete: bool,
    has_trip: bool,
    started: bool,
    complete: bool,
    has_intent: bool,
    has_anchors: bool,
    has_itinerary: bool,
) -> Snapshot {
    Snapshot {
        profile: has_profile.then(|| UserProfile {
            id: String::from("u1"),
            profile_complete,
            ..UserProfile::default()
        }),
        trip: has_trip.then(|| Trip {
            id: String::from("t1"),
            started_trip: started,
            trip_complete: complete,
            ..Trip::default()
        }),
        intent: has_intent.then(|| TripIntent {
            trip_id: String::from("t1"),
            ..TripIntent::default()
        }),
        anchors: has_anchors.then(|| AnchorSelection {
            trip_id: String::from("t1"),
            anchors: vec![String::from("Alfama walk")],
        }),
        itinerary: has_itinerary.then(|| Itinerary {
            trip_id: String::from("t1"),
            days: vec![ItineraryDay {
                day_index: 1,
                ..ItineraryDay::default()
            }],
        }),
        pointer: None,
    }
}

/// The destination the documented rule chain predicts for a flag combination.
fn expected(
    authed: bool,
    has_profile: bool,
    profile_complete: bool,
    has_trip: bool,
    started: bool,
    complete: bool,
    has_intent: bool,
    has_anchors: bool,
    has_itinerary: bool,
) -> Destination {
    if !authed {
        Destination::SignIn
    } else if !(has_profile && profile_complete) {
        Destination::ProfileSetup
    } else if !has_trip {
        Destination::TripSetup
    } else if complete {
        Destination::TripComplete
    } else if started {
        Destination::ResumeLiveTrip
    } else if !has_intent {
        Destination::TripIntentForm
    } else if !has_anchors {
        Destination::AnchorSelect
    } else if !has_itinerary {
        Destination::ItineraryBuild
    } else {
        Destination::PreTripHub
    }
}

#[test]
fn resolver_matches_the_rule_chain_over_every_flag_combination() {
    for bits in 0..512_u32 {
        let authed = bits & 1 != 0;
        let has_profile = bits & 2 != 0;
        let profile_complete = bits & 4 != 0;
        let has_trip = bits & 8 != 0;
        let started = bits & 16 != 0;
        let complete = bits & 32 != 0;
        let has_intent = bits & 64 != 0;
        let has_anchors = bits & 128 != 0;
        let has_itinerary = bits & 256 != 0;

        let snapshot = snapshot_from_flags(
            has_profile,
            profile_complete,
            has_trip,
            started,
            complete,
            has_intent,
            has_anchors,
            has_itinerary,
        );
        let got = resolve(authed, &snapshot);
        let want = expected(
            authed,
            has_profile,
            profile_complete,
            has_trip,
            started,
            complete,
            has_intent,
            has_anchors,
            has_itinerary,
        );
        assert_eq!(got, want, "flags {bits:#b} resolved to {got:?}");
    }
}

#[test]
fn progression_cycle_closes_in_exactly_three_n_steps() {
    for total_days in 1..=10_u32 {
        let mut pointer = ProgressPointer::start();
        let mut steps = 0;
        let completed = loop {
            steps += 1;
            match advance(pointer, total_days) {
                Advance::NextBlock(next) | Advance::DayComplete(next) => {
                    assert_ne!(next, ProgressPointer::start(), "cycle revisited the start");
                    pointer = next;
                }
                Advance::TripComplete => break true,
            }
            assert!(steps <= 3 * total_days, "cycle overran {total_days} days");
        };
        assert!(completed);
        assert_eq!(steps, 3 * total_days);
        assert_eq!(pointer.day_index, total_days);
        assert_eq!(pointer.block, BlockName::Evening);
    }
}

#[test]
fn pointer_day_index_never_exceeds_total_days_plus_one() {
    let total_days = 4;
    let mut pointer = ProgressPointer::start();
    loop {
        match advance(pointer, total_days) {
            Advance::NextBlock(next) | Advance::DayComplete(next) => {
                assert!(next.day_index <= total_days + 1);
                pointer = next;
            }
            Advance::TripComplete => break,
        }
    }
}
