//! Wire contract of the `/generate` endpoint

use crate::enums::GenerationModel;
use serde::{Deserialize, Serialize};

/// Body of `POST /generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTextRequest {
    pub text: String,
    pub model: GenerationModel,
    pub user_id: u32,
}

/// Successful response of `POST /generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateTextResponse {
    /// Generated continuation, rendered verbatim
    pub result: String,
}
