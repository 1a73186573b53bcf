use sojourn_core::{BlockName, ItineraryDay, ProgressPointer};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LiveDayPageProps {
    pub pointer: ProgressPointer,
    #[prop_or_default]
    pub day: Option<ItineraryDay>,
    pub on_begin: Callback<()>,
    pub on_pick_day: Callback<()>,
}

/// Status of one block relative to the pointer.
#[must_use]
pub const fn block_status(pointer: ProgressPointer, block: BlockName) -> &'static str {
    if (block as u8) < (pointer.block as u8) {
        "done"
    } else if block as u8 == pointer.block as u8 {
        "current"
    } else {
        "upcoming"
    }
}

/// Label for the begin button: a fresh morning opens the day, anything later
/// resumes the in-progress block.
#[must_use]
pub const fn begin_label(pointer: ProgressPointer) -> &'static str {
    match pointer.block {
        BlockName::Morning => "Begin the day",
        BlockName::Afternoon | BlockName::Evening => "Continue where you left off",
    }
}

#[function_component(LiveDayPage)]
pub fn live_day_page(props: &LiveDayPageProps) -> Html {
    let on_begin = {
        let on_begin = props.on_begin.clone();
        Callback::from(move |_| on_begin.emit(()))
    };
    let on_pick_day = {
        let on_pick_day = props.on_pick_day.clone();
        Callback::from(move |_| on_pick_day.emit(()))
    };

    html! {
        <div class="page page-live-day" data-testid="live-day-screen">
            <h1>{ format!("Day {}", props.pointer.day_index) }</h1>
            if let Some(day) = &props.day {
                if let Some(summary) = &day.summary {
                    <p class="subtitle">{ summary.clone() }</p>
                }
                <ul class="block-list">
                    { for BlockName::ALL.iter().map(|name| {
                        let status = block_status(props.pointer, *name);
                        let title = day.blocks.get(name)
                            .map_or_else(|| String::from("Free time"), |b| b.title.clone());
                        html! {
                            <li class={classes!("block-row", format!("block-{status}"))}>
                                <span class="block-name">{ name.as_str() }</span>
                                { " " }
                                <span>{ title }</span>
                            </li>
                        }
                    }) }
                </ul>
            } else {
                <p class="subtitle">{ "This day has no plan yet. Enjoy the wander." }</p>
            }
            <button class="btn btn-primary" onclick={on_begin}>
                { begin_label(props.pointer) }
            </button>
            <button class="link-subtle" onclick={on_pick_day}>
                { "Pick a different day" }
            </button>
        </div>
    }
}
