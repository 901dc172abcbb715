use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GatewayConfig {
    #[serde(default = "ConfigHelper::default_model_url")]
    pub model_url: String,

    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_api_key_envs")]
    pub api_key_env: Vec<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            model_url: ConfigHelper::default_model_url(),
            timeout_secs: ConfigHelper::default_timeout_secs(),
            api_key_env: ConfigHelper::default_api_key_envs(),
        }
    }
}
