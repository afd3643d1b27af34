use serde::{Deserialize, Serialize};

use super::GeneratedImage;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub custom_prompt: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RefineRequest {
    #[serde(default)]
    pub original_prompt: String,
    #[serde(default)]
    pub refinement: String,
    #[serde(default)]
    pub seed: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub success: bool,
    pub image: String,
    pub prompt: String,
    pub seed: i64,
}

impl From<GeneratedImage> for GenerationResponse {
    fn from(generated: GeneratedImage) -> Self {
        Self {
            success: true,
            image: generated.image,
            prompt: generated.prompt,
            seed: generated.seed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
