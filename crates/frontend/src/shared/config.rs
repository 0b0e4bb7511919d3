//! Application configuration, provided to the component tree via context

use super::api_utils::api_url;

/// User id sent with every generation request
pub const DEFAULT_USER_ID: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Full URL of the generate endpoint
    pub endpoint_url: String,
    pub user_id: u32,
}

impl AppConfig {
    pub fn new(endpoint_url: impl Into<String>, user_id: u32) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            user_id,
        }
    }

    /// `GENERATE_ENDPOINT_URL` at build time wins over the window location
    pub fn from_env() -> Self {
        let endpoint_url = match option_env!("GENERATE_ENDPOINT_URL") {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => api_url("/generate"),
        };
        log::debug!("generate endpoint: {}", endpoint_url);
        Self::new(endpoint_url, DEFAULT_USER_ID)
    }
}
