pub mod assistant_config;
pub mod config;
pub mod gateway_config;
pub mod rules_config;
