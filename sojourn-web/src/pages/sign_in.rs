use yew::prelude::*;

use crate::auth::{AuthSession, session_from_fragment};

#[derive(Properties, Clone, PartialEq)]
pub struct SignInPageProps {
    pub provider_login_url: AttrValue,
    pub on_signed_in: Callback<AuthSession>,
}

/// Provider hand-off screen.
///
/// The identity provider redirects back with the session in the URL fragment;
/// on entry this page consumes it, hands the session up, and strips the
/// fragment from the address bar.
#[function_component(SignInPage)]
pub fn sign_in_page(props: &SignInPageProps) -> Html {
    let on_signed_in = props.on_signed_in.clone();
    use_effect_with((), move |()| {
        if let Some(session) = callback_session() {
            on_signed_in.emit(session);
        }
        || {}
    });

    html! {
        <div class="page page-signin" data-testid="signin-screen">
            <div class="card">
                <h1>{ "Sojourn" }</h1>
                <p class="subtitle">{ "Plan the trip. Live the days." }</p>
                <a class="btn btn-primary" href={props.provider_login_url.clone()}>
                    { "Continue with your account" }
                </a>
                <p class="fine-print">
                    { "You'll be sent to our sign-in partner and brought straight back." }
                </p>
            </div>
        </div>
    }
}

fn callback_session() -> Option<AuthSession> {
    let location = web_sys::window()?.location();
    let hash = location.hash().ok()?;
    let session = session_from_fragment(&hash)?;
    // Drop the credentials from the visible URL once consumed.
    let _ = location.set_hash("");
    Some(session)
}
