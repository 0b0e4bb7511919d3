//! Helpers for locating the generation service
//!
//! The service listens on port 5000 of the host that serves the page.

/// Port the generation service listens on
pub const GENERATE_PORT: u16 = 5000;

/// Used when no window is available
pub const FALLBACK_API_BASE: &str = "http://localhost:5000";

/// Get the base URL of the generation service
///
/// Constructs it from the current window location, using port 5000.
///
/// # Returns
/// - Base URL like "http://localhost:5000"
/// - `FALLBACK_API_BASE` if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return FALLBACK_API_BASE.to_string(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    base_from_location(&protocol, &hostname)
}

/// Build a full URL from a path on the generation service
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/generate");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn base_from_location(protocol: &str, hostname: &str) -> String {
    let hostname = if hostname.is_empty() { "localhost" } else { hostname };
    format!("{}//{}:{}", protocol, hostname, GENERATE_PORT)
}
