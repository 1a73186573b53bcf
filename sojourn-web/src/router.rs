use sojourn_core::Destination;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/signin")]
    SignIn,
    #[at("/profile")]
    ProfileSetup,
    #[at("/trip/new")]
    TripSetup,
    #[at("/trip/intent")]
    TripIntent,
    #[at("/trip/anchors")]
    AnchorSelect,
    #[at("/trip/itinerary")]
    ItineraryBuild,
    #[at("/trip/hub")]
    PreTripHub,
    #[at("/live/day")]
    LiveDay,
    #[at("/live/block")]
    LiveBlock,
    #[at("/live/reflect")]
    Reflection,
    #[at("/live/days")]
    PickDay,
    #[at("/complete")]
    TripComplete,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_destination(destination: Destination) -> Self {
        match destination {
            Destination::SignIn => Self::SignIn,
            Destination::ProfileSetup => Self::ProfileSetup,
            Destination::TripSetup => Self::TripSetup,
            Destination::TripIntentForm => Self::TripIntent,
            Destination::AnchorSelect => Self::AnchorSelect,
            Destination::ItineraryBuild => Self::ItineraryBuild,
            Destination::PreTripHub => Self::PreTripHub,
            Destination::ResumeLiveTrip | Destination::DayOverview => Self::LiveDay,
            Destination::LiveDayBlock => Self::LiveBlock,
            Destination::DayReflection => Self::Reflection,
            Destination::TripComplete => Self::TripComplete,
        }
    }

    #[must_use]
    pub const fn destination(&self) -> Option<Destination> {
        match self {
            Self::Home | Self::NotFound | Self::PickDay => None, // No single destination owns these.
            Self::SignIn => Some(Destination::SignIn),
            Self::ProfileSetup => Some(Destination::ProfileSetup),
            Self::TripSetup => Some(Destination::TripSetup),
            Self::TripIntent => Some(Destination::TripIntentForm),
            Self::AnchorSelect => Some(Destination::AnchorSelect),
            Self::ItineraryBuild => Some(Destination::ItineraryBuild),
            Self::PreTripHub => Some(Destination::PreTripHub),
            Self::LiveDay => Some(Destination::DayOverview),
            Self::LiveBlock => Some(Destination::LiveDayBlock),
            Self::Reflection => Some(Destination::DayReflection),
            Self::TripComplete => Some(Destination::TripComplete),
        }
    }

    /// Routes that own their navigation; the bootstrap coordinator never
    /// overrides them (§ sign-in and profile setup run their own flows, the
    /// live screens manage the progress pointer themselves).
    #[must_use]
    pub const fn is_self_managing(&self) -> bool {
        matches!(
            self,
            Self::SignIn
                | Self::ProfileSetup
                | Self::LiveDay
                | Self::LiveBlock
                | Self::Reflection
                | Self::PickDay
                | Self::NotFound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_DESTINATIONS: [Destination; 12] = [
        Destination::SignIn,
        Destination::ProfileSetup,
        Destination::TripSetup,
        Destination::TripIntentForm,
        Destination::AnchorSelect,
        Destination::ItineraryBuild,
        Destination::PreTripHub,
        Destination::ResumeLiveTrip,
        Destination::DayOverview,
        Destination::LiveDayBlock,
        Destination::DayReflection,
        Destination::TripComplete,
    ];

    #[test]
    fn every_destination_maps_to_a_route_and_back() {
        for destination in ALL_DESTINATIONS {
            let route = Route::from_destination(destination);
            match (destination, route.destination()) {
                // Resume shares the live-day route, which reports the overview.
                (Destination::ResumeLiveTrip, Some(Destination::DayOverview)) => {}
                (_, Some(mapped)) => assert_eq!(mapped, destination),
                (_, None) => panic!("destination route should map back"),
            }
        }
    }

    #[test]
    fn self_managing_covers_auth_profile_and_live_flow() {
        assert!(Route::SignIn.is_self_managing());
        assert!(Route::ProfileSetup.is_self_managing());
        assert!(Route::LiveDay.is_self_managing());
        assert!(Route::LiveBlock.is_self_managing());
        assert!(Route::Reflection.is_self_managing());
        assert!(Route::PickDay.is_self_managing());

        assert!(!Route::Home.is_self_managing());
        assert!(!Route::TripSetup.is_self_managing());
        assert!(!Route::PreTripHub.is_self_managing());
        assert!(!Route::TripComplete.is_self_managing());
    }

    #[test]
    fn guarded_routes_report_their_destination() {
        assert_eq!(Route::PreTripHub.destination(), Some(Destination::PreTripHub));
        assert_eq!(Route::Home.destination(), None);
        assert_eq!(Route::PickDay.destination(), None);
    }
}
