use std::time::Duration;
use reqwest::Client;
use crate::config::constants::{
    timeout_duration, ASSISTANT_CONNECTION_ERROR, ASSISTANT_EMPTY_REPLY, ASSISTANT_UNAVAILABLE,
    DEFAULT_ASSISTANT_CONTEXT, DEFAULT_TIMEOUT_SECS,
};
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::ai::gemini::gemini_response::GeminiResponse;
use crate::structs::config::assistant_config::AssistantConfig;

/// Short-answer helper for screening staff, backed by Gemini `generateContent`.
/// Like the gateway, `ask` always returns displayable text.
#[derive(Clone)]
pub struct ScreeningAssistant {
    api_key: Option<String>,
    base_url: String,
    client: Client,
    model: String,
    system_instruction: String,
    timeout: Duration,
}

impl ScreeningAssistant {
    pub fn new(api_key: Option<String>, config: &AssistantConfig) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            model: config.model.clone(),
            system_instruction: config.system_instruction.clone(),
            timeout: timeout_duration(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_config(config: &AssistantConfig) -> Self {
        let api_key = std::env::var(&config.api_key_env).ok();
        Self::new(api_key, config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn ask(&self, message: &str, context: Option<&str>) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            return ASSISTANT_UNAVAILABLE.to_string();
        };

        match self.generate(api_key, message, context).await {
            Ok(text) if text.trim().is_empty() => ASSISTANT_EMPTY_REPLY.to_string(),
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                log::warn!("⚠️ Assistant request failed: {}", e);
                ASSISTANT_CONNECTION_ERROR.to_string()
            }
        }
    }

    fn get_request(&self, message: &str, context: Option<&str>) -> GeminiRequest {
        let context = context
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_ASSISTANT_CONTEXT);

        GeminiRequest {
            contents: vec![GeminiContent::user(format!(
                "Context: {}. User Question: {}",
                context, message
            ))],
            system_instruction: Some(GeminiContent::instruction(self.system_instruction.clone())),
            generation_config: Some(GeminiGenerationConfig {
                temperature: Some(0.4),
                max_output_tokens: Some(1024),
                candidate_count: Some(1),
            }),
        }
    }

    async fn generate(&self, api_key: &str, message: &str, context: Option<&str>) -> Result<String, reqwest::Error> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        log::debug!("📦 Assistant model: {}", self.model);

        let response: GeminiResponse = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(&self.get_request(message, context))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.first_text())
    }
}
