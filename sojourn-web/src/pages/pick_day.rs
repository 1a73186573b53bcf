use sojourn_core::Itinerary;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct PickDayPageProps {
    pub itinerary: Itinerary,
    pub current_day: u32,
    pub on_pick: Callback<u32>,
}

/// Jumping here deliberately rewinds the picked day to its morning.
#[function_component(PickDayPage)]
pub fn pick_day_page(props: &PickDayPageProps) -> Html {
    html! {
        <div class="page page-pick-day" data-testid="pick-day-screen">
            <h1>{ "Pick a day" }</h1>
            <p class="subtitle">{ "Jumping to a day restarts it from the morning." }</p>
            <ol class="day-list">
                { for props.itinerary.days.iter().map(|day| {
                    let day_index = day.day_index;
                    let onclick = {
                        let on_pick = props.on_pick.clone();
                        Callback::from(move |_| on_pick.emit(day_index))
                    };
                    let current = day_index == props.current_day;
                    html! {
                        <li>
                            <button
                                class={classes!("day-pick", current.then_some("day-current"))}
                                {onclick}
                            >
                                { format!("Day {day_index}") }
                                if let Some(summary) = &day.summary {
                                    <span class="day-summary">{ summary.clone() }</span>
                                }
                            </button>
                        </li>
                    }
                }) }
            </ol>
        </div>
    }
}
