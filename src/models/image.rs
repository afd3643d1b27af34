use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ArtError, Result};

/// A finished generation: the provider's base64 payload, the seed that was
/// submitted, and the prompt text it was generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedImage {
    pub image: String, // Base64 encoded
    pub seed: i64,
    pub prompt: String,
}

impl GeneratedImage {
    pub fn decode(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(self.image.trim())
            .map_err(|e| ArtError::Provider(format!("image payload is not valid base64: {}", e)))
    }
}

// Wire format of the YandexART async generation API.

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtGenerationRequest {
    pub model_uri: String,
    pub generation_options: GenerationOptions,
    pub messages: Vec<ArtMessage>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    pub seed: i64,
    pub aspect_ratio: AspectRatio,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectRatio {
    pub width_ratio: String,
    pub height_ratio: String,
}

impl AspectRatio {
    pub fn square() -> Self {
        Self {
            width_ratio: "1".to_string(),
            height_ratio: "1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtMessage {
    pub weight: String,
    pub text: String,
}

impl ArtGenerationRequest {
    pub fn new(model_uri: String, prompt: &str, seed: i64) -> Self {
        Self {
            model_uri,
            generation_options: GenerationOptions {
                seed,
                aspect_ratio: AspectRatio::square(),
            },
            messages: vec![ArtMessage {
                weight: "1".to_string(),
                text: prompt.to_string(),
            }],
        }
    }
}

/// Status of a long-running operation as returned by both the creation
/// call and the operations endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operation {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub response: Option<OperationResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperationResponse {
    #[serde(default)]
    pub image: Option<String>,
}

impl Operation {
    /// The operation id, if the provider sent a non-empty one.
    pub fn operation_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn image(&self) -> Option<&str> {
        self.response
            .as_ref()
            .and_then(|r| r.image.as_deref())
            .filter(|image| !image.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = ArtGenerationRequest::new(
            "art://b1gfolder/yandex-art/latest".into(),
            "Создай логотип",
            1234,
        );
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["modelUri"], "art://b1gfolder/yandex-art/latest");
        assert_eq!(value["generationOptions"]["seed"], 1234);
        assert_eq!(
            value["generationOptions"]["aspectRatio"]["widthRatio"],
            "1"
        );
        assert_eq!(
            value["generationOptions"]["aspectRatio"]["heightRatio"],
            "1"
        );
        assert_eq!(value["messages"][0]["weight"], "1");
        assert_eq!(value["messages"][0]["text"], "Создай логотип");
    }

    #[test]
    fn test_operation_parsing() {
        let pending: Operation =
            serde_json::from_str(r#"{"id":"op1","done":false,"metadata":null}"#).unwrap();
        assert_eq!(pending.operation_id(), Some("op1"));
        assert!(!pending.done);
        assert!(pending.image().is_none());

        let finished: Operation =
            serde_json::from_str(r#"{"id":"op1","done":true,"response":{"image":"aGk="}}"#)
                .unwrap();
        assert_eq!(finished.image(), Some("aGk="));

        let failed: Operation = serde_json::from_str(
            r#"{"id":"op1","done":true,"error":{"code":3,"message":"bad prompt"}}"#,
        )
        .unwrap();
        assert!(failed.error.is_some());

        let anonymous: Operation = serde_json::from_str(r#"{"id":""}"#).unwrap();
        assert!(anonymous.operation_id().is_none());
    }

    #[test]
    fn test_decode() {
        let image = GeneratedImage {
            image: "aGVsbG8=".into(),
            seed: 7,
            prompt: "p".into(),
        };
        assert_eq!(image.decode().unwrap(), b"hello");

        let broken = GeneratedImage {
            image: "not base64!!".into(),
            ..image
        };
        assert!(broken.decode().is_err());
    }
}
