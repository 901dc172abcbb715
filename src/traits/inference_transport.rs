use std::time::Duration;
use async_trait::async_trait;
use crate::enums::classifier_error::ClassifierError;
use crate::structs::upstream_response::UpstreamResponse;

/// Network seam of the gateway: posts one binary image, returns the raw reply.
///
/// Implementations report connection, timeout and body-read failures as
/// `ClassifierError::Transport`. Non-success statuses are NOT errors here; the
/// gateway inspects `UpstreamResponse::status` itself.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InferenceTransport: Send + Sync {
    async fn post_image(
        &self,
        url: &str,
        api_token: &str,
        image: Vec<u8>,
        timeout: Duration,
    ) -> Result<UpstreamResponse, ClassifierError>;
}
