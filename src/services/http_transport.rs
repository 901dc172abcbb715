use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use crate::config::constants::IMAGE_CONTENT_TYPE;
use crate::enums::classifier_error::ClassifierError;
use crate::structs::upstream_response::UpstreamResponse;
use crate::traits::inference_transport::InferenceTransport;

#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self { client: Client::new() }
    }

    fn map_error(error: reqwest::Error, timeout: Duration) -> ClassifierError {
        if error.is_timeout() {
            ClassifierError::Transport(format!("request timed out after {:?}", timeout))
        } else if error.is_connect() {
            ClassifierError::Transport(format!("connection failed: {}", error))
        } else {
            ClassifierError::Transport(error.to_string())
        }
    }
}

#[async_trait]
impl InferenceTransport for ReqwestTransport {
    async fn post_image(
        &self,
        url: &str,
        api_token: &str,
        image: Vec<u8>,
        timeout: Duration,
    ) -> Result<UpstreamResponse, ClassifierError> {
        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", api_token))
            .header("Content-Type", IMAGE_CONTENT_TYPE)
            .timeout(timeout)
            .body(image)
            .send()
            .await
            .map_err(|e| Self::map_error(e, timeout))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| Self::map_error(e, timeout))?;

        Ok(UpstreamResponse::new(status, body.to_vec()))
    }
}
