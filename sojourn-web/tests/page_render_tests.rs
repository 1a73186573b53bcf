use futures::executor::block_on;
use sojourn_core::{
    AnchorSelection, BlockName, Itinerary, ItineraryBlock, ItineraryDay, ProgressPointer, Trip,
};
use sojourn_web::pages::{
    anchor_select::{AnchorSelectPage, AnchorSelectPageProps},
    itinerary_build::{ItineraryBuildPage, ItineraryBuildPageProps},
    live_block::{LiveBlockPage, LiveBlockPageProps},
    live_day::{LiveDayPage, LiveDayPageProps},
    not_found::{NotFoundPage, NotFoundPageProps},
    pick_day::{PickDayPage, PickDayPageProps},
    pre_trip_hub::{PreTripHubPage, PreTripHubPageProps},
    profile_setup::{ProfileSetupPage, ProfileSetupPageProps},
    reflection::{ReflectionPage, ReflectionPageProps},
    sign_in::{SignInPage, SignInPageProps},
    trip_complete::{TripCompletePage, TripCompletePageProps},
    trip_intent::{TripIntentPage, TripIntentPageProps},
    trip_setup::{TripSetupPage, TripSetupPageProps},
};
use yew::{Callback, LocalServerRenderer};

fn sample_trip() -> Trip {
    Trip {
        id: String::from("t1"),
        name: String::from("Lisbon long weekend"),
        destination: String::from("Lisbon"),
        party_count: 2,
        ..Trip::default()
    }
}

fn sample_itinerary() -> Itinerary {
    let mut blocks = std::collections::BTreeMap::new();
    blocks.insert(
        BlockName::Morning,
        ItineraryBlock {
            title: String::from("Alfama walk"),
            location: Some(String::from("Alfama")),
            ..ItineraryBlock::default()
        },
    );
    blocks.insert(
        BlockName::Afternoon,
        ItineraryBlock {
            title: String::from("Tile museum"),
            ticketed: true,
            ..ItineraryBlock::default()
        },
    );
    Itinerary {
        trip_id: String::from("t1"),
        days: vec![
            ItineraryDay {
                day_index: 1,
                summary: Some(String::from("Hills and miradouros")),
                blocks,
            },
            ItineraryDay {
                day_index: 2,
                ..ItineraryDay::default()
            },
        ],
    }
}

#[test]
fn sign_in_page_offers_the_provider_link() {
    let html = block_on(
        LocalServerRenderer::<SignInPage>::with_props(SignInPageProps {
            provider_login_url: "/auth/login".into(),
            on_signed_in: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("Continue with your account"));
    assert!(html.contains("/auth/login"));
}

#[test]
fn profile_page_prefills_existing_values() {
    let html = block_on(
        LocalServerRenderer::<ProfileSetupPage>::with_props(ProfileSetupPageProps {
            profile: Some(sojourn_core::UserProfile {
                id: String::from("u1"),
                first_name: String::from("Ana"),
                ..sojourn_core::UserProfile::default()
            }),
            on_save: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("Ana"));
    assert!(html.contains("Save and continue"));
}

#[test]
fn trip_setup_page_shows_both_paths() {
    let html = block_on(
        LocalServerRenderer::<TripSetupPage>::with_props(TripSetupPageProps {
            on_create: Callback::noop(),
            on_join: Callback::noop(),
            join_error: Some("We couldn't find a trip for that code.".into()),
        })
        .render(),
    );
    assert!(html.contains("Start a trip"));
    assert!(html.contains("Join with a code"));
    assert!(html.contains("We couldn&#39;t find a trip for that code.")
        || html.contains("We couldn't find a trip for that code."));
}

#[test]
fn intent_and_anchor_pages_render_their_options() {
    let html = block_on(
        LocalServerRenderer::<TripIntentPage>::with_props(TripIntentPageProps {
            trip_id: "t1".into(),
            on_save: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("Priorities"));
    assert!(html.contains("museums"));

    let html = block_on(
        LocalServerRenderer::<AnchorSelectPage>::with_props(AnchorSelectPageProps {
            trip_id: "t1".into(),
            suggestions: vec![String::from("Sunset viewpoint")],
            on_save: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("Sunset viewpoint"));
    assert!(html.contains("Lock in anchors"));
}

#[test]
fn itinerary_build_page_swaps_button_for_pending_state() {
    let props = ItineraryBuildPageProps {
        pending: false,
        error: None,
        on_build: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ItineraryBuildPage>::with_props(props).render());
    assert!(html.contains("Build it"));

    let pending = ItineraryBuildPageProps {
        pending: true,
        error: None,
        on_build: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ItineraryBuildPage>::with_props(pending).render());
    assert!(html.contains("Putting your days together"));
}

#[test]
fn hub_page_lists_days_and_blocks() {
    let html = block_on(
        LocalServerRenderer::<PreTripHubPage>::with_props(PreTripHubPageProps {
            trip: sample_trip(),
            itinerary: sample_itinerary(),
            on_start: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("Day 1"));
    assert!(html.contains("Alfama walk"));
    assert!(html.contains("Start the trip"));
}

#[test]
fn live_day_page_marks_the_current_block() {
    let html = block_on(
        LocalServerRenderer::<LiveDayPage>::with_props(LiveDayPageProps {
            pointer: ProgressPointer {
                day_index: 1,
                block: BlockName::Afternoon,
            },
            day: sample_itinerary().days.first().cloned(),
            on_begin: Callback::noop(),
            on_pick_day: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("block-current"));
    assert!(html.contains("Continue where you left off"));
}

#[test]
fn live_block_page_shows_block_details_and_badges() {
    let html = block_on(
        LocalServerRenderer::<LiveBlockPage>::with_props(LiveBlockPageProps {
            pointer: ProgressPointer {
                day_index: 1,
                block: BlockName::Afternoon,
            },
            block: Some(ItineraryBlock {
                title: String::from("Tile museum"),
                ticketed: true,
                ..ItineraryBlock::default()
            }),
            error: None,
            on_complete: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("Tile museum"));
    assert!(html.contains("Tickets needed"));
    assert!(html.contains("Done with this block"));
}

#[test]
fn reflection_page_renders_moods_and_journal() {
    let html = block_on(
        LocalServerRenderer::<ReflectionPage>::with_props(ReflectionPageProps {
            day_index: 2,
            error: None,
            on_submit: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("Day 2, in your words"));
    assert!(html.contains("grateful"));
    assert!(html.contains("Close out the day"));
}

#[test]
fn pick_day_and_terminal_pages_render() {
    let html = block_on(
        LocalServerRenderer::<PickDayPage>::with_props(PickDayPageProps {
            itinerary: sample_itinerary(),
            current_day: 2,
            on_pick: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("Pick a day"));
    assert!(html.contains("Day 2"));

    let html = block_on(
        LocalServerRenderer::<TripCompletePage>::with_props(TripCompletePageProps {
            trip: Some(sample_trip()),
            on_logout: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("complete"));

    let html = block_on(
        LocalServerRenderer::<NotFoundPage>::with_props(NotFoundPageProps {
            on_go_home: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("Off the map"));
}

#[test]
fn empty_anchor_selection_disables_the_save() {
    let selection = AnchorSelection {
        trip_id: String::from("t1"),
        anchors: vec![],
    };
    assert!(selection.is_empty());
    let html = block_on(
        LocalServerRenderer::<AnchorSelectPage>::with_props(AnchorSelectPageProps {
            trip_id: "t1".into(),
            suggestions: vec![],
            on_save: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("disabled"));
}
