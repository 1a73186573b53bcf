use js_sys::{Array, Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Storage, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Promise that rejects with `message` after `duration_ms`.
fn rejection_timer(duration_ms: i32, message: &'static str) -> Promise {
    Promise::new(&mut |_resolve, reject: Function| {
        let closure = Closure::once(move || {
            let _ = reject.call1(&JsValue::UNDEFINED, &JsValue::from_str(message));
        });
        let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            duration_ms,
        );
        closure.forget();
    })
}

/// Perform a fetch bounded by a client-side timeout.
///
/// The request races a timer; whichever settles first wins, so a stalled
/// network call surfaces as an ordinary rejection instead of hanging the UI.
///
/// # Errors
/// Returns an error if the fetch fails, the timeout fires first, or the
/// result cannot be converted to a `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_with_timeout(
    request: &web_sys::Request,
    timeout_ms: i32,
) -> Result<Response, JsValue> {
    let fetch = window().fetch_with_request(request);
    let timer = rejection_timer(timeout_ms, "request timed out");
    let race = Promise::race(&Array::of2(&fetch, &timer));
    let settled = JsFuture::from(race).await?;
    settled.dyn_into::<Response>()
}

/// Read a response body as text.
///
/// # Errors
/// Returns an error if the body stream cannot be read.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn response_text(response: &Response) -> Result<String, JsValue> {
    let text = JsFuture::from(response.text()?).await?;
    Ok(text.as_string().unwrap_or_default())
}
