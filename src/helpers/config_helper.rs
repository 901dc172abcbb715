use crate::config::constants::{
    default_model_url, DEFAULT_API_KEY_ENVS, DEFAULT_ASSISTANT_API_KEY_ENV, DEFAULT_ASSISTANT_BASE_URL,
    DEFAULT_ASSISTANT_INSTRUCTION, DEFAULT_ASSISTANT_MODEL, DEFAULT_HIGH_KEYWORDS, DEFAULT_LOW_KEYWORDS,
    DEFAULT_MEDIUM_KEYWORDS, DEFAULT_TIMEOUT_SECS,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_model_url() -> String {
        default_model_url()
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }

    pub fn default_api_key_envs() -> Vec<String> {
        DEFAULT_API_KEY_ENVS.iter().map(|s| s.to_string()).collect()
    }

    pub fn default_high_keywords() -> Vec<String> {
        DEFAULT_HIGH_KEYWORDS.iter().map(|s| s.to_string()).collect()
    }

    pub fn default_medium_keywords() -> Vec<String> {
        DEFAULT_MEDIUM_KEYWORDS.iter().map(|s| s.to_string()).collect()
    }

    pub fn default_low_keywords() -> Vec<String> {
        DEFAULT_LOW_KEYWORDS.iter().map(|s| s.to_string()).collect()
    }

    pub fn default_bare_cin_is_high() -> bool {
        false
    }

    pub fn default_assistant_model() -> String {
        DEFAULT_ASSISTANT_MODEL.to_string()
    }

    pub fn default_assistant_base_url() -> String {
        DEFAULT_ASSISTANT_BASE_URL.to_string()
    }

    pub fn default_assistant_api_key_env() -> String {
        DEFAULT_ASSISTANT_API_KEY_ENV.to_string()
    }

    pub fn default_system_instruction() -> String {
        DEFAULT_ASSISTANT_INSTRUCTION.to_string()
    }

    /// First non-empty value among the named environment variables.
    pub fn resolve_api_key(env_names: &[String]) -> Option<String> {
        Self::resolve_with(env_names, |name| std::env::var(name).ok())
    }

    pub fn resolve_with<F>(env_names: &[String], lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        env_names
            .iter()
            .filter_map(|name| lookup(name))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
    }
}
