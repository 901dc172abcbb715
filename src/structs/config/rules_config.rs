use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

/// Keyword lists per suspicion bucket. Matching is case-insensitive substring.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RulesConfig {
    #[serde(default = "ConfigHelper::default_high_keywords")]
    pub high: Vec<String>,

    #[serde(default = "ConfigHelper::default_medium_keywords")]
    pub medium: Vec<String>,

    #[serde(default = "ConfigHelper::default_low_keywords")]
    pub low: Vec<String>,

    /// Treat an ungraded "cin" mention as High. Graded keywords are checked first.
    #[serde(default = "ConfigHelper::default_bare_cin_is_high")]
    pub bare_cin_is_high: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            high: ConfigHelper::default_high_keywords(),
            medium: ConfigHelper::default_medium_keywords(),
            low: ConfigHelper::default_low_keywords(),
            bare_cin_is_high: ConfigHelper::default_bare_cin_is_high(),
        }
    }
}
