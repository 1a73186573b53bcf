//! Pure decision half of the session bootstrap coordinator.
//!
//! The web crate drives the async side (load, fetch, merge) and feeds the
//! results through these functions; every branch here is testable natively.

use crate::remote::FetchError;
use crate::resolver::{Destination, resolve};
use crate::snapshot::Snapshot;

/// What the coordinator tells the router to do after a protected-route entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapAction {
    /// Redirect immediately.
    Navigate(Destination),
    /// Offer a resume affordance instead of yanking the user into a redirect.
    ShowResume(Destination),
    /// The current page owns its own navigation; do nothing.
    StayPut,
}

/// First bootstrap stage, decided from local state alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// Local state was enough to decide.
    Finished(BootstrapAction),
    /// The local snapshot is insufficient; hydrate from the server first.
    RefreshNeeded,
}

/// Recovery policy for a failed hydration fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchRecovery {
    /// Degrade gracefully: resolve against the local snapshot as-is.
    UseLocal,
    /// Route to sign-in.
    SignIn,
    /// Discard the entire local cache, then route to sign-in.
    ClearAndSignIn,
}

/// Decide the first bootstrap stage.
///
/// Self-managing routes (sign-in, profile setup, the live-trip screens) are
/// never overridden. An absent or incomplete local profile also stays put:
/// profile setup owns that case exclusively, so two components never race to
/// redirect the same user.
#[must_use]
pub fn plan(route_self_managing: bool, authed: bool, local: &Snapshot) -> Plan {
    if route_self_managing {
        return Plan::Finished(BootstrapAction::StayPut);
    }
    if !authed {
        return Plan::Finished(BootstrapAction::Navigate(Destination::SignIn));
    }
    if !local
        .profile
        .as_ref()
        .is_some_and(|p| p.profile_complete)
    {
        return Plan::Finished(BootstrapAction::StayPut);
    }
    if needs_refresh(local) {
        return Plan::RefreshNeeded;
    }
    Plan::Finished(finish(authed, local))
}

/// Whether the local snapshot alone is too thin to resolve against.
///
/// A started or completed trip resolves locally; short of that, any missing
/// setup entity forces a server round-trip, because a local absence is never
/// authoritative proof the server has nothing.
#[must_use]
pub fn needs_refresh(local: &Snapshot) -> bool {
    let Some(trip) = local.trip.as_ref().filter(|t| t.exists()) else {
        return true;
    };
    if trip.trip_complete || trip.started_trip {
        return false;
    }
    local.intent.is_none()
        || local.anchors.as_ref().is_none_or(|a| a.is_empty())
        || local.itinerary.as_ref().is_none_or(|i| i.is_empty())
}

/// Map a fetch failure to its recovery.
#[must_use]
pub const fn recovery_for(error: &FetchError) -> FetchRecovery {
    match error {
        FetchError::Unauthenticated => FetchRecovery::SignIn,
        FetchError::UserNotFound => FetchRecovery::ClearAndSignIn,
        FetchError::Transient { .. } => FetchRecovery::UseLocal,
    }
}

/// Final bootstrap stage: resolve the (merged) snapshot into an action.
///
/// A mid-trip session gets a resume affordance rather than an automatic
/// redirect; everything else navigates directly.
#[must_use]
pub fn finish(authed: bool, snapshot: &Snapshot) -> BootstrapAction {
    match resolve(authed, snapshot) {
        Destination::ResumeLiveTrip => BootstrapAction::ShowResume(Destination::ResumeLiveTrip),
        destination => BootstrapAction::Navigate(destination),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{Trip, UserProfile};

    fn authed_local(profile_complete: bool) -> Snapshot {
        Snapshot {
            profile: Some(UserProfile {
                id: String::from("u1"),
                profile_complete,
                ..UserProfile::default()
            }),
            ..Snapshot::default()
        }
    }

    #[test]
    fn self_managing_routes_are_never_overridden() {
        assert_eq!(
            plan(true, false, &Snapshot::default()),
            Plan::Finished(BootstrapAction::StayPut)
        );
    }

    #[test]
    fn missing_identity_routes_to_sign_in() {
        assert_eq!(
            plan(false, false, &Snapshot::default()),
            Plan::Finished(BootstrapAction::Navigate(Destination::SignIn))
        );
    }

    #[test]
    fn incomplete_local_profile_stays_put() {
        assert_eq!(
            plan(false, true, &Snapshot::default()),
            Plan::Finished(BootstrapAction::StayPut)
        );
        assert_eq!(
            plan(false, true, &authed_local(false)),
            Plan::Finished(BootstrapAction::StayPut)
        );
    }

    #[test]
    fn thin_snapshot_requests_a_refresh() {
        assert_eq!(plan(false, true, &authed_local(true)), Plan::RefreshNeeded);
    }

    #[test]
    fn started_trip_resolves_locally_to_a_resume_offer() {
        let mut local = authed_local(true);
        local.trip = Some(Trip {
            id: String::from("t1"),
            started_trip: true,
            ..Trip::default()
        });
        assert_eq!(
            plan(false, true, &local),
            Plan::Finished(BootstrapAction::ShowResume(Destination::ResumeLiveTrip))
        );
    }

    #[test]
    fn completed_trip_resolves_locally_without_fetching() {
        let mut local = authed_local(true);
        local.trip = Some(Trip {
            id: String::from("t1"),
            started_trip: true,
            trip_complete: true,
            ..Trip::default()
        });
        assert_eq!(
            plan(false, true, &local),
            Plan::Finished(BootstrapAction::Navigate(Destination::TripComplete))
        );
    }

    #[test]
    fn recovery_mapping_matches_the_taxonomy() {
        assert_eq!(
            recovery_for(&FetchError::Unauthenticated),
            FetchRecovery::SignIn
        );
        assert_eq!(
            recovery_for(&FetchError::UserNotFound),
            FetchRecovery::ClearAndSignIn
        );
        assert_eq!(
            recovery_for(&FetchError::transient("timeout")),
            FetchRecovery::UseLocal
        );
    }

    #[test]
    fn finish_wraps_only_the_live_resume() {
        let mut snapshot = authed_local(true);
        snapshot.trip = Some(Trip {
            id: String::from("t1"),
            started_trip: true,
            ..Trip::default()
        });
        assert_eq!(
            finish(true, &snapshot),
            BootstrapAction::ShowResume(Destination::ResumeLiveTrip)
        );

        assert_eq!(
            finish(true, &Snapshot::default()),
            BootstrapAction::Navigate(Destination::ProfileSetup)
        );
    }
}
