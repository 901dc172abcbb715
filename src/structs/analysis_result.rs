use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::config::constants::{
    service_error_recommendation, LABEL_CONFIGURATION_ERROR, LABEL_GENERATED_TEXT, LABEL_NETWORK_ERROR,
    LABEL_SERVICE_ERROR, LABEL_UNKNOWN_FORMAT, RECOMMENDATION_GENERATED_TEXT, RECOMMENDATION_MISSING_CREDENTIAL,
    RECOMMENDATION_NETWORK_ERROR, RECOMMENDATION_VERIFY_MANUALLY, SENTINEL_LABELS,
};
use crate::enums::classifier_error::ClassifierError;
use crate::enums::suspicion_level::SuspicionLevel;

/// Normalized, display-safe outcome of one classification call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub image_ref: String,
    pub label: String,
    pub confidence: f64,
    pub suspicion_level: SuspicionLevel,
    pub recommendation: String,
    /// Free-text model output, kept out of `label` so it is never read as a finding.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error_detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub raw_output: Option<serde_json::Value>,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisResult {
    pub fn classified(
        image_ref: &str,
        label: &str,
        confidence: f64,
        suspicion_level: SuspicionLevel,
        raw_output: Option<serde_json::Value>,
    ) -> Self {
        Self {
            image_ref: image_ref.to_string(),
            label: label.to_string(),
            confidence,
            suspicion_level,
            recommendation: suspicion_level.recommendation().to_string(),
            summary: None,
            error_detail: None,
            raw_output,
            analyzed_at: Utc::now(),
        }
    }

    /// Free-text model output goes verbatim into `summary` and is never keyword-mapped.
    /// The label is a sentinel, so the result always reads as degraded.
    pub fn generated_text(image_ref: &str, text: &str, raw_output: serde_json::Value) -> Self {
        Self {
            image_ref: image_ref.to_string(),
            label: LABEL_GENERATED_TEXT.to_string(),
            confidence: 0.0,
            suspicion_level: SuspicionLevel::Low,
            recommendation: RECOMMENDATION_GENERATED_TEXT.to_string(),
            summary: Some(text.trim().to_string()),
            error_detail: None,
            raw_output: Some(raw_output),
            analyzed_at: Utc::now(),
        }
    }

    pub fn from_error(image_ref: &str, error: &ClassifierError) -> Self {
        let (label, recommendation, raw_output) = match error {
            ClassifierError::Configuration => {
                (LABEL_CONFIGURATION_ERROR, RECOMMENDATION_MISSING_CREDENTIAL.to_string(), None)
            }
            ClassifierError::Upstream { status, .. } => {
                (LABEL_SERVICE_ERROR, service_error_recommendation(*status), None)
            }
            ClassifierError::Format { raw } => {
                (LABEL_UNKNOWN_FORMAT, RECOMMENDATION_VERIFY_MANUALLY.to_string(), Some(raw.clone()))
            }
            ClassifierError::Transport(_) | ClassifierError::Decode(_) => {
                (LABEL_NETWORK_ERROR, RECOMMENDATION_NETWORK_ERROR.to_string(), None)
            }
        };

        Self {
            image_ref: image_ref.to_string(),
            label: label.to_string(),
            confidence: 0.0,
            suspicion_level: SuspicionLevel::Low,
            recommendation,
            summary: None,
            error_detail: Some(error.to_string()),
            raw_output,
            analyzed_at: Utc::now(),
        }
    }

    /// Sentinel results must be shown as warnings, not clinical findings.
    pub fn is_degraded(&self) -> bool {
        SENTINEL_LABELS.contains(&self.label.as_str())
    }
}
