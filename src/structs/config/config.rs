use serde::{Deserialize, Serialize};
use crate::structs::config::assistant_config::AssistantConfig;
use crate::structs::config::gateway_config::GatewayConfig;
use crate::structs::config::rules_config::RulesConfig;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub rules: RulesConfig,

    #[serde(default)]
    pub assistant: AssistantConfig,
}
