//! Transport to the Sojourn backend: the consolidated hydration fetch and the
//! progress writes the live-trip flow is gated on.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

use sojourn_core::{BlockCompleteRequest, DayCompleteRequest, FetchError, HydrationPayload, Itinerary};

use crate::dom;

/// Endpoint configuration embedded at build time.
///
/// Parsed from the static asset; falls back to defaults when the asset is
/// missing or malformed, so a broken deploy still reaches a usable state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u32,
    #[serde(default = "default_provider_login_url")]
    pub provider_login_url: String,
}

fn default_base_url() -> String {
    String::from("/api")
}

const fn default_timeout_ms() -> u32 {
    15_000
}

fn default_provider_login_url() -> String {
    String::from("/auth/login")
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            provider_login_url: default_provider_login_url(),
        }
    }
}

impl ApiConfig {
    /// Load the embedded configuration asset.
    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(include_str!("../static/assets/data/api.json")).unwrap_or_default()
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    #[allow(clippy::cast_possible_wrap)]
    const fn timeout(&self) -> i32 {
        self.timeout_ms as i32
    }
}

fn transient_js(value: &JsValue) -> FetchError {
    FetchError::transient(dom::js_error_message(value))
}

fn build_request(
    config: &ApiConfig,
    token: &str,
    method: &str,
    path: &str,
    body: Option<String>,
) -> Result<web_sys::Request, FetchError> {
    let init = web_sys::RequestInit::new();
    init.set_method(method);
    let headers = web_sys::Headers::new().map_err(|e| transient_js(&e))?;
    headers
        .set("Authorization", &format!("Bearer {token}"))
        .map_err(|e| transient_js(&e))?;
    if let Some(body) = body {
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| transient_js(&e))?;
        init.set_body(&JsValue::from_str(&body));
    }
    init.set_headers(&headers.into());
    web_sys::Request::new_with_str_and_init(&config.endpoint(path), &init)
        .map_err(|e| transient_js(&e))
}

/// Issue a request and surface the response body on 2xx.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
async fn send(
    config: &ApiConfig,
    token: &str,
    method: &str,
    path: &str,
    body: Option<String>,
) -> Result<String, FetchError> {
    let request = build_request(config, token, method, path, body)?;
    let response = dom::fetch_with_timeout(&request, config.timeout())
        .await
        .map_err(|e| transient_js(&e))?;
    if let Some(error) = FetchError::from_status(response.status()) {
        return Err(error);
    }
    dom::response_text(&response)
        .await
        .map_err(|e| transient_js(&e))
}

#[allow(clippy::future_not_send)]
async fn send_json<T: DeserializeOwned>(
    config: &ApiConfig,
    token: &str,
    method: &str,
    path: &str,
    body: Option<String>,
) -> Result<T, FetchError> {
    let text = send(config, token, method, path, body).await?;
    serde_json::from_str(&text).map_err(|_| FetchError::transient("malformed response body"))
}

/// Fetch the authoritative session snapshot.
///
/// One idempotent GET against the consolidated hydration endpoint; individual
/// absent keys in the payload are valid, not errors.
///
/// # Errors
/// `Unauthenticated` on 401/403, `UserNotFound` on 404 (the signal to discard
/// the local cache), `Transient` for anything else including the timeout.
#[allow(clippy::future_not_send)]
pub async fn fetch_snapshot(
    config: &ApiConfig,
    token: &str,
) -> Result<HydrationPayload, FetchError> {
    send_json(config, token, "GET", "session/snapshot", None).await
}

/// Ask the server to assemble the itinerary for a trip.
///
/// The generation itself is the server's concern; the client only stores what
/// comes back.
///
/// # Errors
/// Same taxonomy as [`fetch_snapshot`].
#[allow(clippy::future_not_send)]
pub async fn build_itinerary(
    config: &ApiConfig,
    token: &str,
    trip_id: &str,
) -> Result<Itinerary, FetchError> {
    let body = serde_json::json!({ "tripId": trip_id }).to_string();
    send_json(config, token, "POST", "itinerary/build", Some(body)).await
}

/// Join an existing trip by its share code.
///
/// The server attaches the caller to the trip and returns it; the client
/// stores the result like any other hydrated entity.
///
/// # Errors
/// Same taxonomy as [`fetch_snapshot`]; an unknown code comes back as a
/// non-2xx status and therefore `Transient`.
#[allow(clippy::future_not_send)]
pub async fn join_trip(
    config: &ApiConfig,
    token: &str,
    join_code: &str,
) -> Result<sojourn_core::Trip, FetchError> {
    let body = serde_json::json!({ "joinCode": join_code }).to_string();
    send_json(config, token, "POST", "trip/join", Some(body)).await
}

/// Mark the current block complete on the server.
///
/// The caller must not advance the local pointer unless this returns `Ok`.
///
/// # Errors
/// Same taxonomy as [`fetch_snapshot`].
#[allow(clippy::future_not_send)]
pub async fn mark_block_complete(
    config: &ApiConfig,
    token: &str,
    request: &BlockCompleteRequest,
) -> Result<(), FetchError> {
    let body = serde_json::to_string(request)
        .map_err(|_| FetchError::transient("unencodable request"))?;
    send(config, token, "POST", "progress/block", Some(body)).await?;
    Ok(())
}

/// Record the day's reflection and close the day on the server.
///
/// Gates persisting the carried next-day pointer, same as the block write.
///
/// # Errors
/// Same taxonomy as [`fetch_snapshot`].
#[allow(clippy::future_not_send)]
pub async fn complete_day(
    config: &ApiConfig,
    token: &str,
    request: &DayCompleteRequest,
) -> Result<(), FetchError> {
    let body = serde_json::to_string(request)
        .map_err(|_| FetchError::transient("unencodable request"))?;
    send(config, token, "POST", "progress/day", Some(body)).await?;
    Ok(())
}
