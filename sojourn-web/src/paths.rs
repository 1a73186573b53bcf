//! Deployment base-path helpers for hosting under a subdirectory.

/// Router basename, taken from `PUBLIC_URL` at compile time.
///
/// `None` when unset, so the router anchors at the site root.
#[must_use]
pub fn router_base() -> Option<String> {
    normalize_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// URL for a static asset, honoring the configured base.
#[must_use]
pub fn asset_url(relative: &str) -> String {
    let rel = relative.trim_start_matches('/');
    match router_base() {
        Some(base) => format!("{base}/{rel}"),
        None => format!("/{rel}"),
    }
}

fn normalize_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_strips_trailing_slashes() {
        assert_eq!(normalize_base(""), None);
        assert_eq!(normalize_base("  "), None);
        assert_eq!(normalize_base("/plan/"), Some(String::from("/plan")));
    }

    #[test]
    fn asset_url_is_root_anchored_by_default() {
        assert_eq!(
            asset_url("static/assets/data/api.json"),
            "/static/assets/data/api.json"
        );
        assert_eq!(asset_url("/favicon.ico"), "/favicon.ico");
    }
}
