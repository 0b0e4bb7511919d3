use serde::{Deserialize, Serialize};

/// GPT-2 checkpoints offered by the generation service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenerationModel {
    #[default]
    #[serde(rename = "gpt2")]
    Small,
    #[serde(rename = "gpt2-medium")]
    Medium,
    #[serde(rename = "gpt2-large")]
    Large,
}

impl GenerationModel {
    /// Model identifier as sent on the wire
    pub fn code(&self) -> &'static str {
        match self {
            GenerationModel::Small => "gpt2",
            GenerationModel::Medium => "gpt2-medium",
            GenerationModel::Large => "gpt2-large",
        }
    }

    /// Human-readable label with parameter count
    pub fn display_name(&self) -> &'static str {
        match self {
            GenerationModel::Small => "Small (117M)",
            GenerationModel::Medium => "Medium (345M)",
            GenerationModel::Large => "Large (774M)",
        }
    }

    /// All models, smallest first
    pub fn all() -> Vec<GenerationModel> {
        vec![
            GenerationModel::Small,
            GenerationModel::Medium,
            GenerationModel::Large,
        ]
    }

    /// Parse from wire identifier
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "gpt2" => Some(GenerationModel::Small),
            "gpt2-medium" => Some(GenerationModel::Medium),
            "gpt2-large" => Some(GenerationModel::Large),
            _ => None,
        }
    }
}

impl std::fmt::Display for GenerationModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
