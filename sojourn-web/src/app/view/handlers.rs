//! Callback builders connecting pages to the store, the API, and the
//! progression engine. Every server-gated transition lives here so no page
//! advances local state ahead of a confirmed write.

use sojourn_core::{
    AnchorSelection, BlockCompleteRequest, DayCompleteRequest, Destination, MoodSet,
    ProgressPointer, Reflection, SnapshotPatch, Trip, TripIntent, UserProfile, WriteOutcome,
    complete_block, pick_day,
};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Navigator;

use crate::app::state::AppState;
use crate::auth::AuthSession;
use crate::router::Route;

/// Patch applied when the user starts the trip from the hub.
#[must_use]
pub fn start_trip_patch(mut trip: Trip) -> SnapshotPatch {
    trip.started_trip = true;
    SnapshotPatch {
        trip: Some(trip),
        pointer: Some(ProgressPointer::start()),
        ..SnapshotPatch::default()
    }
}

/// Patch applied when the final block completes.
#[must_use]
pub fn complete_trip_patch(mut trip: Trip) -> SnapshotPatch {
    trip.started_trip = true;
    trip.trip_complete = true;
    SnapshotPatch {
        trip: Some(trip),
        ..SnapshotPatch::default()
    }
}

fn navigate(navigator: Option<&Navigator>, route: &Route) {
    if let Some(nav) = navigator {
        nav.push(route);
    }
}

fn navigate_to(navigator: Option<&Navigator>, destination: Destination) {
    navigate(navigator, &Route::from_destination(destination));
}

#[derive(Clone)]
pub struct AppHandlers {
    pub signed_in: Callback<AuthSession>,
    pub logout: Callback<()>,
    pub profile_saved: Callback<UserProfile>,
    pub trip_created: Callback<Trip>,
    pub join_requested: Callback<String>,
    pub intent_saved: Callback<TripIntent>,
    pub anchors_saved: Callback<AnchorSelection>,
    pub build_itinerary: Callback<()>,
    pub start_trip: Callback<()>,
    pub begin_block: Callback<()>,
    pub open_pick_day: Callback<()>,
    pub go_home: Callback<()>,
    pub complete_block: Callback<()>,
    pub reflection_submitted: Callback<(MoodSet, String)>,
    pub day_picked: Callback<u32>,
    pub resume: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigator: Option<Navigator>) -> Self {
        Self {
            signed_in: build_signed_in(state, navigator.clone()),
            logout: build_logout(state, navigator.clone()),
            profile_saved: build_profile_saved(state, navigator.clone()),
            trip_created: build_trip_created(state, navigator.clone()),
            join_requested: build_join_requested(state, navigator.clone()),
            intent_saved: build_intent_saved(state, navigator.clone()),
            anchors_saved: build_anchors_saved(state, navigator.clone()),
            build_itinerary: build_itinerary_request(state, navigator.clone()),
            start_trip: build_start_trip(state, navigator.clone()),
            begin_block: build_begin_block(navigator.clone()),
            open_pick_day: build_open_pick_day(navigator.clone()),
            go_home: build_go_home(state, navigator.clone()),
            complete_block: build_complete_block(state, navigator.clone()),
            reflection_submitted: build_reflection_submitted(state, navigator.clone()),
            day_picked: build_day_picked(state, navigator.clone()),
            resume: build_resume(state, navigator),
        }
    }
}

fn build_signed_in(state: &AppState, navigator: Option<Navigator>) -> Callback<AuthSession> {
    let auth = state.auth.clone();
    let boot_action = state.boot_action.clone();
    Callback::from(move |session: AuthSession| {
        crate::auth::store_session(&session);
        auth.set(Some(session));
        boot_action.set(None);
        navigate(navigator.as_ref(), &Route::Home);
    })
}

fn build_logout(state: &AppState, navigator: Option<Navigator>) -> Callback<()> {
    let auth = state.auth.clone();
    let snapshot = state.snapshot.clone();
    let boot_action = state.boot_action.clone();
    let pending = state.pending_pointer.clone();
    Callback::from(move |()| {
        crate::storage::trip_store().clear();
        crate::auth::clear_session();
        auth.set(None);
        snapshot.set(sojourn_core::Snapshot::default());
        boot_action.set(None);
        pending.set(None);
        navigate_to(navigator.as_ref(), Destination::SignIn);
    })
}

fn save_and_reload(state: &AppState, patch: &SnapshotPatch) {
    let store = crate::storage::trip_store();
    store.save(patch);
    state.snapshot.set(store.load());
}

fn build_profile_saved(state: &AppState, navigator: Option<Navigator>) -> Callback<UserProfile> {
    let state = state.clone();
    Callback::from(move |profile: UserProfile| {
        save_and_reload(
            &state,
            &SnapshotPatch {
                profile: Some(profile),
                ..SnapshotPatch::default()
            },
        );
        state.boot_action.set(None);
        navigate(navigator.as_ref(), &Route::Home);
    })
}

fn build_trip_created(state: &AppState, navigator: Option<Navigator>) -> Callback<Trip> {
    let state = state.clone();
    Callback::from(move |trip: Trip| {
        save_and_reload(&state, &SnapshotPatch::trip(trip));
        state.boot_action.set(None);
        navigate(navigator.as_ref(), &Route::Home);
    })
}

fn build_join_requested(state: &AppState, navigator: Option<Navigator>) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |join_code: String| {
        let state = state.clone();
        let navigator = navigator.clone();
        let config = (*state.api_config).clone();
        let token = state.token();
        state.write_error.set(None);
        spawn_local(async move {
            match crate::api::join_trip(&config, &token, &join_code).await {
                Ok(trip) => {
                    save_and_reload(&state, &SnapshotPatch::trip(trip));
                    state.boot_action.set(None);
                    navigate(navigator.as_ref(), &Route::Home);
                }
                Err(error) => {
                    log::warn!("trip join failed: {error}");
                    state
                        .write_error
                        .set(Some(String::from("We couldn't find a trip for that code.")));
                }
            }
        });
    })
}

fn build_intent_saved(state: &AppState, navigator: Option<Navigator>) -> Callback<TripIntent> {
    let state = state.clone();
    Callback::from(move |intent: TripIntent| {
        save_and_reload(
            &state,
            &SnapshotPatch {
                intent: Some(intent),
                ..SnapshotPatch::default()
            },
        );
        state.boot_action.set(None);
        navigate(navigator.as_ref(), &Route::Home);
    })
}

fn build_anchors_saved(state: &AppState, navigator: Option<Navigator>) -> Callback<AnchorSelection> {
    let state = state.clone();
    Callback::from(move |anchors: AnchorSelection| {
        save_and_reload(
            &state,
            &SnapshotPatch {
                anchors: Some(anchors),
                ..SnapshotPatch::default()
            },
        );
        state.boot_action.set(None);
        navigate(navigator.as_ref(), &Route::Home);
    })
}

fn build_itinerary_request(state: &AppState, navigator: Option<Navigator>) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let Some(trip_id) = state.snapshot.trip.as_ref().map(|t| t.id.clone()) else {
            return;
        };
        let state = state.clone();
        let navigator = navigator.clone();
        let config = (*state.api_config).clone();
        let token = state.token();
        state.hydrating.set(true);
        state.write_error.set(None);
        crate::a11y::announce("Building your itinerary…");
        spawn_local(async move {
            match crate::api::build_itinerary(&config, &token, &trip_id).await {
                Ok(itinerary) => {
                    save_and_reload(
                        &state,
                        &SnapshotPatch {
                            itinerary: Some(itinerary),
                            ..SnapshotPatch::default()
                        },
                    );
                    state.boot_action.set(None);
                    navigate(navigator.as_ref(), &Route::PreTripHub);
                }
                Err(error) => {
                    log::warn!("itinerary build failed: {error}");
                    state.write_error.set(Some(String::from(
                        "The itinerary couldn't be built. Try again in a moment.",
                    )));
                }
            }
            state.hydrating.set(false);
            crate::a11y::announce("");
        });
    })
}

fn build_start_trip(state: &AppState, navigator: Option<Navigator>) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let Some(trip) = state.snapshot.trip.clone() else {
            return;
        };
        save_and_reload(&state, &start_trip_patch(trip));
        state.boot_action.set(None);
        navigate(navigator.as_ref(), &Route::LiveDay);
    })
}

fn build_begin_block(navigator: Option<Navigator>) -> Callback<()> {
    Callback::from(move |()| {
        navigate(navigator.as_ref(), &Route::LiveBlock);
    })
}

fn build_open_pick_day(navigator: Option<Navigator>) -> Callback<()> {
    Callback::from(move |()| {
        navigate(navigator.as_ref(), &Route::PickDay);
    })
}

fn build_go_home(state: &AppState, navigator: Option<Navigator>) -> Callback<()> {
    let boot_action = state.boot_action.clone();
    Callback::from(move |()| {
        // Re-arm the bootstrap pass so Home re-resolves from scratch.
        boot_action.set(None);
        navigate(navigator.as_ref(), &Route::Home);
    })
}

fn build_complete_block(state: &AppState, navigator: Option<Navigator>) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let snapshot = (*state.snapshot).clone();
        let Some(pointer) = snapshot.pointer else {
            return;
        };
        let Some(trip) = snapshot.trip.clone() else {
            return;
        };
        let total_days = snapshot.total_days();
        let state = state.clone();
        let navigator = navigator.clone();
        let config = (*state.api_config).clone();
        let token = state.token();
        state.write_error.set(None);
        spawn_local(async move {
            let request = BlockCompleteRequest {
                trip_id: trip.id.clone(),
                day_index: pointer.day_index,
                block_name: pointer.block,
            };
            let outcome = match crate::api::mark_block_complete(&config, &token, &request).await {
                Ok(()) => WriteOutcome::Confirmed,
                Err(error) => {
                    log::warn!("mark-complete failed: {error}");
                    WriteOutcome::Rejected
                }
            };
            let completion = complete_block(pointer, total_days, outcome);
            if outcome == WriteOutcome::Rejected {
                // Pointer untouched; the same block is re-attempted on retry.
                state.write_error.set(Some(String::from(
                    "We couldn't save that just now. Check your connection and try again.",
                )));
                return;
            }
            match completion.destination {
                Destination::LiveDayBlock => {
                    save_and_reload(&state, &SnapshotPatch::pointer(completion.pointer));
                }
                Destination::DayReflection => {
                    // Carried pointer persists only after the reflection lands.
                    state.pending_pointer.set(Some(completion.pointer));
                    navigate(navigator.as_ref(), &Route::Reflection);
                }
                Destination::TripComplete => {
                    let store = crate::storage::trip_store();
                    store.clear_pointer();
                    store.save(&complete_trip_patch(trip));
                    state.snapshot.set(store.load());
                    state.pending_pointer.set(None);
                    navigate(navigator.as_ref(), &Route::TripComplete);
                }
                _ => {}
            }
        });
    })
}

fn build_reflection_submitted(
    state: &AppState,
    navigator: Option<Navigator>,
) -> Callback<(MoodSet, String)> {
    let state = state.clone();
    Callback::from(move |(moods, journal): (MoodSet, String)| {
        let snapshot = (*state.snapshot).clone();
        let Some(pointer) = snapshot.pointer else {
            return;
        };
        let Some(trip_id) = snapshot.trip.as_ref().map(|t| t.id.clone()) else {
            return;
        };
        let Some(next_pointer) = *state.pending_pointer else {
            return;
        };
        let state = state.clone();
        let navigator = navigator.clone();
        let config = (*state.api_config).clone();
        let token = state.token();
        state.write_error.set(None);
        spawn_local(async move {
            let reflection = Reflection {
                trip_id,
                day_index: pointer.day_index,
                moods,
                journal,
            };
            let request = DayCompleteRequest::from(reflection);
            match crate::api::complete_day(&config, &token, &request).await {
                Ok(()) => {
                    save_and_reload(&state, &SnapshotPatch::pointer(next_pointer));
                    state.pending_pointer.set(None);
                    navigate(navigator.as_ref(), &Route::LiveDay);
                }
                Err(error) => {
                    log::warn!("day-complete failed: {error}");
                    state.write_error.set(Some(String::from(
                        "Your reflection wasn't saved. Try submitting again.",
                    )));
                }
            }
        });
    })
}

fn build_day_picked(state: &AppState, navigator: Option<Navigator>) -> Callback<u32> {
    let state = state.clone();
    Callback::from(move |day_index: u32| {
        let total_days = state.snapshot.total_days();
        if day_index < 1 || day_index > total_days {
            return;
        }
        // Deliberate override: picking a day restarts it from the morning.
        let pointer = pick_day(day_index, total_days);
        save_and_reload(&state, &SnapshotPatch::pointer(pointer));
        state.pending_pointer.set(None);
        navigate(navigator.as_ref(), &Route::LiveDay);
    })
}

fn build_resume(state: &AppState, navigator: Option<Navigator>) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let destination = crate::app::routing::resume_destination(&state.snapshot);
        state.boot_action.set(None);
        navigate_to(navigator.as_ref(), destination);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sojourn_core::BlockName;

    fn trip() -> Trip {
        Trip {
            id: String::from("t1"),
            name: String::from("Lisbon long weekend"),
            ..Trip::default()
        }
    }

    #[test]
    fn start_patch_sets_flag_and_initial_pointer() {
        let patch = start_trip_patch(trip());
        let trip = patch.trip.expect("trip present");
        assert!(trip.started_trip);
        assert!(!trip.trip_complete);
        assert_eq!(
            patch.pointer,
            Some(ProgressPointer {
                day_index: 1,
                block: BlockName::Morning,
            })
        );
    }

    #[test]
    fn complete_patch_sets_both_flags() {
        let patch = complete_trip_patch(trip());
        let trip = patch.trip.expect("trip present");
        assert!(trip.started_trip && trip.trip_complete);
        assert!(patch.pointer.is_none());
    }
}
