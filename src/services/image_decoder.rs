use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use crate::enums::classifier_error::ClassifierError;
use crate::enums::image_payload::ImagePayload;

pub struct ImageDecoder;

impl ImageDecoder {
    /// Turns a captured image into the raw bytes uploaded to the model.
    pub fn decode(payload: &ImagePayload) -> Result<Vec<u8>, ClassifierError> {
        let bytes = match payload {
            ImagePayload::DataUri(uri) => Self::decode_data_uri(uri)?,
            ImagePayload::Base64(encoded) => Self::decode_base64(encoded)?,
            ImagePayload::Bytes(bytes) => bytes.clone(),
        };

        if bytes.is_empty() {
            return Err(ClassifierError::Decode("image payload is empty".to_string()));
        }

        Ok(bytes)
    }

    fn decode_data_uri(uri: &str) -> Result<Vec<u8>, ClassifierError> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| ClassifierError::Decode("not a data URI".to_string()))?;

        let (header, data) = rest
            .split_once(',')
            .ok_or_else(|| ClassifierError::Decode("data URI has no payload separator".to_string()))?;

        let is_base64 = header.split(';').any(|param| param.trim().eq_ignore_ascii_case("base64"));
        if !is_base64 {
            return Err(ClassifierError::Decode(format!(
                "unsupported data URI encoding '{}', expected base64",
                header
            )));
        }

        Self::decode_base64(data)
    }

    fn decode_base64(encoded: &str) -> Result<Vec<u8>, ClassifierError> {
        let cleaned: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();

        STANDARD
            .decode(cleaned.as_bytes())
            .map_err(|e| ClassifierError::Decode(e.to_string()))
    }
}
