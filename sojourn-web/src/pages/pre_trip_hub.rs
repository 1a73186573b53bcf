use sojourn_core::{BlockName, Itinerary, Trip};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct PreTripHubPageProps {
    pub trip: Trip,
    pub itinerary: Itinerary,
    pub on_start: Callback<()>,
}

/// Human-readable date range for the hub header.
#[must_use]
pub fn date_range_label(trip: &Trip) -> String {
    match (trip.start_date, trip.end_date) {
        (Some(start), Some(end)) => format!("{start} – {end}"),
        (Some(start), None) => format!("from {start}"),
        _ => String::from("dates to be decided"),
    }
}

#[function_component(PreTripHubPage)]
pub fn pre_trip_hub_page(props: &PreTripHubPageProps) -> Html {
    let on_start = {
        let on_start = props.on_start.clone();
        Callback::from(move |_| on_start.emit(()))
    };

    html! {
        <div class="page page-hub" data-testid="hub-screen">
            <header>
                <h1>{ props.trip.name.clone() }</h1>
                <p class="subtitle">
                    { format!("{} · {}", props.trip.destination, date_range_label(&props.trip)) }
                </p>
            </header>
            <ol class="day-list">
                { for props.itinerary.days.iter().map(|day| html! {
                    <li class="day-card">
                        <h2>{ format!("Day {}", day.day_index) }</h2>
                        if let Some(summary) = &day.summary {
                            <p>{ summary.clone() }</p>
                        }
                        <ul class="block-list">
                            { for BlockName::ALL.iter().filter_map(|name| {
                                day.blocks.get(name).map(|block| html! {
                                    <li>
                                        <span class="block-name">{ name.as_str() }</span>
                                        { " " }
                                        <span>{ block.title.clone() }</span>
                                    </li>
                                })
                            }) }
                        </ul>
                    </li>
                }) }
            </ol>
            <button class="btn btn-primary" onclick={on_start}>{ "Start the trip" }</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn date_range_label_covers_partial_dates() {
        let mut trip = Trip {
            id: String::from("t1"),
            ..Trip::default()
        };
        assert_eq!(date_range_label(&trip), "dates to be decided");

        trip.start_date = NaiveDate::from_ymd_opt(2026, 9, 18);
        assert_eq!(date_range_label(&trip), "from 2026-09-18");

        trip.end_date = NaiveDate::from_ymd_opt(2026, 9, 21);
        assert_eq!(date_range_label(&trip), "2026-09-18 – 2026-09-21");
    }
}
