pub mod anchor_select;
pub mod itinerary_build;
pub mod live_block;
pub mod live_day;
pub mod not_found;
pub mod pick_day;
pub mod pre_trip_hub;
pub mod profile_setup;
pub mod reflection;
pub mod sign_in;
pub mod trip_complete;
pub mod trip_intent;
pub mod trip_setup;
