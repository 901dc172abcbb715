use std::time::Duration;

pub const DEFAULT_MODEL_ID: &str = "KhanyiTapiwa00/medsiglip-diagnosis";
pub const DEFAULT_INFERENCE_BASE_URL: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const IMAGE_CONTENT_TYPE: &str = "application/octet-stream";

pub const CONFIG_DIR_NAME: &str = "via-screen";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variables checked for the inference token, in order.
pub const DEFAULT_API_KEY_ENVS: &[&str] = &["HF_TOKEN", "VITE_HF_TOKEN", "API_KEY"];

pub const DEFAULT_ASSISTANT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ASSISTANT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_ASSISTANT_API_KEY_ENV: &str = "API_KEY";
pub const DEFAULT_ASSISTANT_CONTEXT: &str = "General Medical Assistant";
pub const DEFAULT_ASSISTANT_INSTRUCTION: &str =
    "You are a helpful medical assistant for a VIA screening app. Keep answers brief and professional.";

pub const ASSISTANT_UNAVAILABLE: &str = "AI Service Unavailable.";
pub const ASSISTANT_EMPTY_REPLY: &str = "I didn't understand that.";
pub const ASSISTANT_CONNECTION_ERROR: &str = "Error connecting to assistant.";

// Sentinel labels for degraded results
pub const LABEL_CONFIGURATION_ERROR: &str = "Configuration Error";
pub const LABEL_SERVICE_ERROR: &str = "Service Error";
pub const LABEL_UNKNOWN_FORMAT: &str = "Unknown Format";
pub const LABEL_NETWORK_ERROR: &str = "Network Error";
pub const LABEL_GENERATED_TEXT: &str = "Generated Text";

pub const SENTINEL_LABELS: &[&str] = &[
    LABEL_CONFIGURATION_ERROR,
    LABEL_SERVICE_ERROR,
    LABEL_UNKNOWN_FORMAT,
    LABEL_NETWORK_ERROR,
    LABEL_GENERATED_TEXT,
];

pub const RECOMMENDATION_HIGH: &str =
    "Refer for colposcopy and biopsy immediately. Consider a same-visit treat-and-see protocol if eligible.";
pub const RECOMMENDATION_MEDIUM: &str =
    "Repeat screening in 6–12 months or refer for secondary triage testing.";
pub const RECOMMENDATION_LOW: &str =
    "Continue routine screening at the standard interval (e.g., every 3–5 years).";

pub const RECOMMENDATION_MISSING_CREDENTIAL: &str =
    "API Key missing. Please set HF_TOKEN or API_KEY in environment variables.";
pub const RECOMMENDATION_VERIFY_MANUALLY: &str =
    "Model returned unrecognized data format. Please verify manually.";
pub const RECOMMENDATION_GENERATED_TEXT: &str =
    "Model returned a free-text summary instead of a classification. Please verify manually.";
pub const RECOMMENDATION_NETWORK_ERROR: &str =
    "Error analyzing image. Please check your internet connection.";

pub const DEFAULT_HIGH_KEYWORDS: &[&str] =
    &["positive", "cancer", "high grade", "cin2", "cin3", "hsil", "abnormal"];
pub const DEFAULT_MEDIUM_KEYWORDS: &[&str] = &["suspicious", "low grade", "cin1", "lsil"];
pub const DEFAULT_LOW_KEYWORDS: &[&str] = &["negative", "normal", "benign"];
pub const BARE_CIN_KEYWORD: &str = "cin";

pub fn service_error_recommendation(status: u16) -> String {
    format!("Analysis Failed: Server returned {}. Please try again later.", status)
}

pub fn default_model_url() -> String {
    format!("{}/{}", DEFAULT_INFERENCE_BASE_URL, DEFAULT_MODEL_ID)
}

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
