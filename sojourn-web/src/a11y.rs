// Accessibility helpers

/// CSS for visible focus indicators and the screen-reader-only utility class,
/// injected early so keyboard users always see where they are.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus{outline:3px solid #2F6FED;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Announce a status change to assistive technology.
///
/// Writes into the `#status-live` live region when present; used for the
/// "loading your trip" and fetch-failure states so they are not visual-only.
pub fn announce(message: &str) {
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id("status-live"))
    {
        node.set_text_content(Some(message));
    }
}
