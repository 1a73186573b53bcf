//! Applies bootstrap decisions to the router and owns the resume-entry logic.

use sojourn_core::{BootstrapAction, Destination, Snapshot, start_day};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

use crate::router::Route;

/// Route a bootstrap action should push, if any.
///
/// `ShowResume` and `StayPut` never navigate; a `Navigate` to the route the
/// user is already on is dropped to avoid a render loop.
#[must_use]
pub fn route_for_action(action: &BootstrapAction, current: Option<&Route>) -> Option<Route> {
    match action {
        BootstrapAction::Navigate(destination) => {
            let next = Route::from_destination(*destination);
            (Some(&next) != current).then_some(next)
        }
        BootstrapAction::ShowResume(_) | BootstrapAction::StayPut => None,
    }
}

/// Where the resume affordance takes a mid-trip user.
///
/// Resumes straight into the in-progress block; only a pointer still at
/// morning (or a missing one) gets the day overview.
#[must_use]
pub fn resume_destination(snapshot: &Snapshot) -> Destination {
    snapshot
        .pointer
        .map_or(Destination::DayOverview, start_day)
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_apply_boot_action(
    boot_action: &UseStateHandle<Option<BootstrapAction>>,
    navigator: Option<Navigator>,
    active_route: Option<Route>,
) {
    let boot_action = boot_action.clone();
    use_effect_with(
        ((*boot_action).clone(), active_route),
        move |(action, current)| {
            if let (Some(nav), Some(action)) = (navigator.as_ref(), action.as_ref())
                && let Some(next) = route_for_action(action, current.as_ref())
            {
                nav.push(&next);
            }
        },
    );
}
