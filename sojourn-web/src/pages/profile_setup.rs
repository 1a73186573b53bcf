use sojourn_core::UserProfile;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ProfileSetupPageProps {
    /// Existing profile to edit, if the server already has one.
    #[prop_or_default]
    pub profile: Option<UserProfile>,
    pub on_save: Callback<UserProfile>,
}

/// Build the profile entity from the form fields.
///
/// Saving from this screen is what flips `profile_complete`; the resolver
/// treats anything short of that as an unfinished profile.
#[must_use]
pub fn build_profile(
    existing: Option<&UserProfile>,
    first_name: &str,
    last_name: &str,
    email: &str,
    home_city: &str,
) -> UserProfile {
    UserProfile {
        id: existing.map(|p| p.id.clone()).unwrap_or_default(),
        email: email.trim().to_string(),
        first_name: first_name.trim().to_string(),
        last_name: last_name.trim().to_string(),
        home_city: home_city.trim().to_string(),
        profile_complete: true,
    }
}

#[function_component(ProfileSetupPage)]
pub fn profile_setup_page(props: &ProfileSetupPageProps) -> Html {
    let first_ref = use_node_ref();
    let last_ref = use_node_ref();
    let email_ref = use_node_ref();
    let city_ref = use_node_ref();

    let onsubmit = {
        let props = props.clone();
        let refs = (
            first_ref.clone(),
            last_ref.clone(),
            email_ref.clone(),
            city_ref.clone(),
        );
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            props.on_save.emit(build_profile(
                props.profile.as_ref(),
                &value(&refs.0),
                &value(&refs.1),
                &value(&refs.2),
                &value(&refs.3),
            ));
        })
    };

    let existing = props.profile.as_ref();
    let field = |label: &str,
                 node: &NodeRef,
                 kind: &str,
                 value: String| {
        html! {
            <label class="field">
                <span>{ label.to_string() }</span>
                <input ref={node.clone()} type={kind.to_string()} value={value} />
            </label>
        }
    };

    html! {
        <div class="page page-profile" data-testid="profile-screen">
            <h1>{ "Tell us about you" }</h1>
            <form {onsubmit}>
                { field("First name", &first_ref, "text",
                    existing.map(|p| p.first_name.clone()).unwrap_or_default()) }
                { field("Last name", &last_ref, "text",
                    existing.map(|p| p.last_name.clone()).unwrap_or_default()) }
                { field("Email", &email_ref, "email",
                    existing.map(|p| p.email.clone()).unwrap_or_default()) }
                { field("Home city", &city_ref, "text",
                    existing.map(|p| p.home_city.clone()).unwrap_or_default()) }
                <button class="btn btn-primary" type="submit">{ "Save and continue" }</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_profile_trims_and_completes() {
        let profile = build_profile(None, "  Ana ", "Reis", " ana@example.com ", "Porto");
        assert_eq!(profile.first_name, "Ana");
        assert_eq!(profile.email, "ana@example.com");
        assert!(profile.profile_complete);
        assert!(profile.id.is_empty());
    }

    #[test]
    fn build_profile_keeps_the_existing_id() {
        let existing = UserProfile {
            id: String::from("u1"),
            ..UserProfile::default()
        };
        let profile = build_profile(Some(&existing), "Ana", "Reis", "ana@example.com", "Porto");
        assert_eq!(profile.id, "u1");
    }
}
