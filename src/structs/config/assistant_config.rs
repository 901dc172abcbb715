use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AssistantConfig {
    #[serde(default = "ConfigHelper::default_assistant_model")]
    pub model: String,

    #[serde(default = "ConfigHelper::default_assistant_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_assistant_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "ConfigHelper::default_system_instruction")]
    pub system_instruction: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: ConfigHelper::default_assistant_model(),
            base_url: ConfigHelper::default_assistant_base_url(),
            api_key_env: ConfigHelper::default_assistant_api_key_env(),
            system_instruction: ConfigHelper::default_system_instruction(),
        }
    }
}
