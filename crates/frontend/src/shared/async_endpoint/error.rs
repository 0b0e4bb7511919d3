use thiserror::Error;

/// Why a triggered call failed
///
/// Only logged; the request state records a bare failure flag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    #[error("failed to encode request body: {0}")]
    Encode(String),
    #[error("failed to send request: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
}
