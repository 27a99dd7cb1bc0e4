//! API URL helpers.
//!
//! The backend serves the static pages and the API from the same origin.

/// Origin of the current page, e.g. "http://localhost:3000".
/// Empty string when no window is available.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path starting with "/api/".
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
