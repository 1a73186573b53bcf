use sojourn_core::MoodSet;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

pub const MOOD_OPTIONS: [&str; 6] = [
    "energized", "grateful", "tired", "surprised", "homesick", "inspired",
];

#[derive(Properties, Clone, PartialEq)]
pub struct ReflectionPageProps {
    pub day_index: u32,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_submit: Callback<(MoodSet, String)>,
}

/// Flip a mood tag in the picked set.
#[must_use]
pub fn toggle_mood(current: &MoodSet, mood: &str) -> MoodSet {
    let mut next: MoodSet = current
        .iter()
        .filter(|m| m.as_str() != mood)
        .cloned()
        .collect();
    if next.len() == current.len() {
        next.push(mood.to_string());
    }
    next
}

#[function_component(ReflectionPage)]
pub fn reflection_page(props: &ReflectionPageProps) -> Html {
    let moods = use_state(MoodSet::new);
    let journal_ref = use_node_ref();

    let onsubmit = {
        let props = props.clone();
        let moods = moods.clone();
        let journal_ref = journal_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let journal = journal_ref
                .cast::<HtmlTextAreaElement>()
                .map(|area| area.value())
                .unwrap_or_default();
            props.on_submit.emit(((*moods).clone(), journal));
        })
    };

    html! {
        <div class="page page-reflection" data-testid="reflection-screen">
            <h1>{ format!("Day {}, in your words", props.day_index) }</h1>
            <form {onsubmit}>
                <fieldset>
                    <legend>{ "How did today feel?" }</legend>
                    { for MOOD_OPTIONS.iter().map(|mood| {
                        let mood_name = (*mood).to_string();
                        let picked = moods.iter().any(|m| m.as_str() == *mood);
                        let onclick = {
                            let moods = moods.clone();
                            let mood_name = mood_name.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                moods.set(toggle_mood(&moods, &mood_name));
                            })
                        };
                        html! {
                            <button
                                class={classes!("mood", picked.then_some("mood-picked"))}
                                {onclick}
                            >
                                { mood_name }
                            </button>
                        }
                    }) }
                </fieldset>
                <label class="field"><span>{ "Journal" }</span>
                    <textarea ref={journal_ref} rows="6"
                        placeholder="What will you want to remember?" /></label>
                if let Some(error) = &props.error {
                    <p class="form-error" role="alert">{ error.clone() }</p>
                }
                <button class="btn btn-primary" type="submit">{ "Close out the day" }</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_mood_round_trips() {
        let empty = MoodSet::new();
        let one = toggle_mood(&empty, "grateful");
        assert_eq!(one.len(), 1);
        let two = toggle_mood(&one, "tired");
        assert_eq!(two.len(), 2);
        let back = toggle_mood(&two, "grateful");
        assert_eq!(back.len(), 1);
        assert_eq!(back[0], "tired");
    }
}
