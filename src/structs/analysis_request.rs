use std::path::Path;
use uuid::Uuid;
use crate::enums::image_payload::ImagePayload;

#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub id: Uuid,
    pub image_ref: String,
    pub payload: ImagePayload,
}

impl AnalysisRequest {
    /// The data URI doubles as the image reference echoed back to the caller.
    pub fn from_data_uri(data_uri: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            image_ref: data_uri.to_string(),
            payload: ImagePayload::DataUri(data_uri.to_string()),
        }
    }

    pub fn from_base64(image_ref: &str, encoded: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            image_ref: image_ref.to_string(),
            payload: ImagePayload::Base64(encoded.to_string()),
        }
    }

    pub fn from_bytes(image_ref: &str, bytes: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            image_ref: image_ref.to_string(),
            payload: ImagePayload::Bytes(bytes),
        }
    }

    /// Data URIs are taken as-is; anything else is read as a file.
    pub fn from_cli_input(input: &str) -> std::io::Result<Self> {
        if input.starts_with("data:") {
            return Ok(Self::from_data_uri(input));
        }

        let bytes = std::fs::read(Path::new(input))?;
        Ok(Self::from_bytes(input, bytes))
    }
}
