pub mod api_utils;
pub mod async_endpoint;
pub mod components;
pub mod config;
pub mod request_state;
