use std::sync::Arc;
use std::time::Duration;
use serde_json::Value;
use crate::config::constants::timeout_duration;
use crate::enums::classification_response::ClassificationResponse;
use crate::enums::classifier_error::ClassifierError;
use crate::helpers::config_helper::ConfigHelper;
use crate::services::http_transport::ReqwestTransport;
use crate::services::image_decoder::ImageDecoder;
use crate::services::response_parser::ResponseParser;
use crate::services::risk_rules::RiskRules;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::config::Config;
use crate::structs::config::gateway_config::GatewayConfig;
use crate::traits::inference_transport::InferenceTransport;

/// Turns one captured image into one display-safe `AnalysisResult`.
///
/// `classify` never fails: every error is folded into a sentinel result.
/// The gateway keeps no per-call state and can be shared behind an `Arc`.
#[derive(Clone)]
pub struct ClassifierGateway {
    api_token: Option<String>,
    model_url: String,
    timeout: Duration,
    rules: RiskRules,
    transport: Arc<dyn InferenceTransport>,
}

impl ClassifierGateway {
    pub fn new(api_token: Option<String>, transport: Arc<dyn InferenceTransport>) -> Self {
        let defaults = GatewayConfig::default();

        Self {
            api_token: api_token.filter(|token| !token.trim().is_empty()),
            model_url: defaults.model_url,
            timeout: timeout_duration(defaults.timeout_secs),
            rules: RiskRules::default(),
            transport,
        }
    }

    /// Resolves the token from the configured environment variables and uses
    /// the reqwest transport.
    pub fn from_config(config: &Config) -> Self {
        let api_token = ConfigHelper::resolve_api_key(&config.gateway.api_key_env);

        Self::new(api_token, Arc::new(ReqwestTransport::new()))
            .with_model_url(config.gateway.model_url.clone())
            .with_timeout(timeout_duration(config.gateway.timeout_secs))
            .with_rules(RiskRules::from_config(&config.rules))
    }

    pub fn with_model_url(mut self, model_url: String) -> Self {
        self.model_url = model_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_rules(mut self, rules: RiskRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn model_url(&self) -> &str {
        &self.model_url
    }

    pub fn has_credential(&self) -> bool {
        self.api_token.is_some()
    }

    pub async fn classify(&self, request: AnalysisRequest) -> AnalysisResult {
        log::info!("🔬 [{}] Classifying image via {}", request.id, self.model_url);

        let result = match self.try_classify(&request).await {
            Ok(result) => result,
            Err(error) => {
                log::warn!("⚠️ [{}] Classification degraded: {}", request.id, error);
                if let ClassifierError::Upstream { status, body } = &error {
                    log::debug!("[{}] Upstream {} body: {}", request.id, status, body);
                }
                AnalysisResult::from_error(&request.image_ref, &error)
            }
        };

        log::info!(
            "✅ [{}] Result: {} ({:.1}%, {} suspicion)",
            request.id,
            result.label,
            result.confidence,
            result.suspicion_level
        );

        result
    }

    async fn try_classify(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ClassifierError> {
        // Checked before decoding so a missing token never touches the network.
        let api_token = self.api_token.as_deref().ok_or(ClassifierError::Configuration)?;

        let image = ImageDecoder::decode(&request.payload)?;
        log::debug!("[{}] Uploading {} bytes", request.id, image.len());

        let response = self
            .transport
            .post_image(&self.model_url, api_token, image, self.timeout)
            .await?;

        if !response.is_success() {
            return Err(ClassifierError::Upstream {
                status: response.status,
                body: response.body_text(),
            });
        }

        let raw: Value = serde_json::from_slice(&response.body)
            .map_err(|e| ClassifierError::Transport(format!("invalid JSON in response: {}", e)))?;
        log::debug!("[{}] Received {} bytes of JSON", request.id, response.body.len());

        self.interpret(&request.image_ref, raw)
    }

    fn interpret(&self, image_ref: &str, raw: Value) -> Result<AnalysisResult, ClassifierError> {
        match ResponseParser::parse(&raw) {
            ClassificationResponse::Candidates(candidates) => {
                let top = ResponseParser::select_top(&candidates).ok_or_else(|| ClassifierError::Format {
                    raw: raw.clone(),
                })?;
                let label = top.label.trim();
                let confidence = ResponseParser::to_percentage(top.score);
                let level = self.rules.classify(label);

                Ok(AnalysisResult::classified(image_ref, label, confidence, level, Some(raw)))
            }
            ClassificationResponse::GeneratedText(text) => Ok(AnalysisResult::generated_text(image_ref, &text, raw)),
            ClassificationResponse::Malformed => Err(ClassifierError::Format { raw }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::{
        DEFAULT_TIMEOUT_SECS, LABEL_CONFIGURATION_ERROR, LABEL_GENERATED_TEXT, LABEL_NETWORK_ERROR,
        LABEL_SERVICE_ERROR, LABEL_UNKNOWN_FORMAT, RECOMMENDATION_HIGH,
    };
    use crate::enums::suspicion_level::SuspicionLevel;
    use crate::structs::config::rules_config::RulesConfig;
    use crate::structs::upstream_response::UpstreamResponse;
    use crate::traits::inference_transport::MockInferenceTransport;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const IMAGE: &str = "data:image/jpeg;base64,/9j/4A==";

    fn replying(status: u16, body: &str) -> MockInferenceTransport {
        let body = body.to_string();
        let mut transport = MockInferenceTransport::new();
        transport
            .expect_post_image()
            .times(1)
            .returning(move |_, _, _, _| Ok(UpstreamResponse::new(status, body.clone())));
        transport
    }

    fn gateway(transport: MockInferenceTransport) -> ClassifierGateway {
        ClassifierGateway::new(Some("hf_test".to_string()), Arc::new(transport))
    }

    #[tokio::test]
    async fn missing_credential_fails_fast_without_network() {
        let mut transport = MockInferenceTransport::new();
        transport.expect_post_image().times(0);
        let gateway = ClassifierGateway::new(None, Arc::new(transport));

        let result = gateway.classify(AnalysisRequest::from_data_uri(IMAGE)).await;

        assert_eq!(result.label, LABEL_CONFIGURATION_ERROR);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.suspicion_level, SuspicionLevel::Low);
        assert!(result.recommendation.contains("API Key missing"));
        assert_eq!(result.image_ref, IMAGE);
    }

    #[tokio::test]
    async fn blank_credential_counts_as_missing() {
        let mut transport = MockInferenceTransport::new();
        transport.expect_post_image().times(0);
        let gateway = ClassifierGateway::new(Some("  ".to_string()), Arc::new(transport));

        assert!(!gateway.has_credential());
        let result = gateway.classify(AnalysisRequest::from_data_uri(IMAGE)).await;
        assert_eq!(result.label, LABEL_CONFIGURATION_ERROR);
    }

    #[test]
    fn new_starts_from_gateway_defaults() {
        let gateway = gateway(MockInferenceTransport::new());
        let defaults = GatewayConfig::default();

        assert_eq!(gateway.model_url(), defaults.model_url);
        assert_eq!(gateway.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(gateway.has_credential());
    }

    #[tokio::test]
    async fn high_grade_label_maps_to_high_with_rounded_confidence() {
        let gateway = gateway(replying(200, r#"[{"label":"High Grade Lesion (CIN2+)","score":0.942}]"#));

        let result = gateway.classify(AnalysisRequest::from_data_uri(IMAGE)).await;

        assert_eq!(result.label, "High Grade Lesion (CIN2+)");
        assert_eq!(result.confidence, 94.2);
        assert_eq!(result.suspicion_level, SuspicionLevel::High);
        assert_eq!(result.recommendation, RECOMMENDATION_HIGH);
        assert!(result.error_detail.is_none());
    }

    #[tokio::test]
    async fn highest_scoring_candidate_is_selected() {
        let gateway = gateway(replying(
            200,
            r#"[{"label":"Suspicious","score":0.12},{"label":"  Negative ","score":0.88}]"#,
        ));

        let result = gateway.classify(AnalysisRequest::from_data_uri(IMAGE)).await;

        assert_eq!(result.label, "Negative");
        assert_eq!(result.confidence, 88.0);
        assert_eq!(result.suspicion_level, SuspicionLevel::Low);
    }

    #[tokio::test]
    async fn non_success_status_is_a_service_error() {
        let gateway = gateway(replying(503, "Service Unavailable"));

        let result = gateway.classify(AnalysisRequest::from_data_uri(IMAGE)).await;

        assert_eq!(result.label, LABEL_SERVICE_ERROR);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.suspicion_level, SuspicionLevel::Low);
        assert!(result.error_detail.unwrap().contains("503"));
    }

    #[tokio::test]
    async fn empty_array_is_unknown_format_and_keeps_raw_body() {
        let gateway = gateway(replying(200, "[]"));

        let result = gateway.classify(AnalysisRequest::from_data_uri(IMAGE)).await;

        assert_eq!(result.label, LABEL_UNKNOWN_FORMAT);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.raw_output, Some(json!([])));
    }

    #[tokio::test]
    async fn generated_text_is_a_degraded_summary_not_a_finding() {
        let gateway = gateway(replying(200, r#"{"generated_text":"Cervical cancer detected"}"#));

        let result = gateway.classify(AnalysisRequest::from_data_uri(IMAGE)).await;

        assert_eq!(result.label, LABEL_GENERATED_TEXT);
        assert_eq!(result.summary.as_deref(), Some("Cervical cancer detected"));
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.suspicion_level, SuspicionLevel::Low);
        assert!(result.is_degraded());
    }

    #[tokio::test]
    async fn blank_generated_text_is_unknown_format() {
        let gateway = gateway(replying(200, r#"[{"generated_text":"   "}]"#));

        let result = gateway.classify(AnalysisRequest::from_data_uri(IMAGE)).await;

        assert_eq!(result.label, LABEL_UNKNOWN_FORMAT);
        assert!(result.summary.is_none());
        assert_eq!(result.raw_output, Some(json!([{"generated_text": "   "}])));
        assert!(result.is_degraded());
    }

    #[tokio::test]
    async fn invalid_json_becomes_network_error() {
        let gateway = gateway(replying(200, "<html>gateway timeout</html>"));

        let result = gateway.classify(AnalysisRequest::from_data_uri(IMAGE)).await;

        assert_eq!(result.label, LABEL_NETWORK_ERROR);
        assert!(result.error_detail.unwrap().contains("invalid JSON"));
    }

    #[tokio::test]
    async fn transport_failure_becomes_network_error() {
        let mut transport = MockInferenceTransport::new();
        transport
            .expect_post_image()
            .times(1)
            .returning(|_, _, _, _| Err(ClassifierError::Transport("request timed out after 30s".to_string())));

        let result = gateway(transport).classify(AnalysisRequest::from_data_uri(IMAGE)).await;

        assert_eq!(result.label, LABEL_NETWORK_ERROR);
        assert_eq!(result.suspicion_level, SuspicionLevel::Low);
        assert!(result.error_detail.unwrap().contains("timed out"));
    }

    #[tokio::test]
    async fn undecodable_image_never_reaches_the_network() {
        let mut transport = MockInferenceTransport::new();
        transport.expect_post_image().times(0);

        let result = gateway(transport)
            .classify(AnalysisRequest::from_data_uri("data:image/png;base64,%%%"))
            .await;

        assert_eq!(result.label, LABEL_NETWORK_ERROR);
        assert_eq!(result.suspicion_level, SuspicionLevel::Low);
    }

    #[tokio::test]
    async fn forwards_url_token_bytes_and_timeout() {
        let mut transport = MockInferenceTransport::new();
        transport
            .expect_post_image()
            .withf(|url, token, image, timeout| {
                url.to_string() == "https://models.test/via"
                    && token.to_string() == "hf_test"
                    && image.as_slice() == &[0xFFu8, 0xD8, 0xFF, 0xE0][..]
                    && *timeout == Duration::from_secs(5)
            })
            .times(1)
            .returning(|_, _, _, _| Ok(UpstreamResponse::new(200, r#"[{"label":"Normal","score":0.7}]"#)));

        let gateway = gateway(transport)
            .with_model_url("https://models.test/via".to_string())
            .with_timeout(Duration::from_secs(5));

        let result = gateway.classify(AnalysisRequest::from_data_uri(IMAGE)).await;
        assert_eq!(result.label, "Normal");
    }

    #[tokio::test]
    async fn custom_rules_are_applied() {
        let rules = RiskRules::from_config(&RulesConfig { bare_cin_is_high: true, ..RulesConfig::default() });
        let gateway = gateway(replying(200, r#"[{"label":"CIN","score":0.61}]"#)).with_rules(rules);

        let result = gateway.classify(AnalysisRequest::from_data_uri(IMAGE)).await;
        assert_eq!(result.suspicion_level, SuspicionLevel::High);
    }

    #[test]
    fn gateway_is_shareable_across_tasks() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClassifierGateway>();
    }
}
