use crate::config::constants::BARE_CIN_KEYWORD;
use crate::enums::suspicion_level::SuspicionLevel;
use crate::structs::config::rules_config::RulesConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct RiskRule {
    pub level: SuspicionLevel,
    pub keywords: Vec<String>,
}

impl RiskRule {
    pub fn new(level: SuspicionLevel, keywords: &[String]) -> Self {
        Self {
            level,
            keywords: keywords.iter().map(|k| k.trim().to_lowercase()).filter(|k| !k.is_empty()).collect(),
        }
    }

    fn matches(&self, lowered_label: &str) -> bool {
        self.keywords.iter().any(|k| lowered_label.contains(k.as_str()))
    }
}

/// Ordered keyword table mapping a model label to a suspicion bucket.
/// The first rule with a keyword contained in the label wins; no match is Low.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskRules {
    rules: Vec<RiskRule>,
}

impl RiskRules {
    pub fn new(rules: Vec<RiskRule>) -> Self {
        Self { rules }
    }

    /// High, Medium, Low, then the optional ungraded "cin" rule. Putting it
    /// last keeps "cin1" at Medium and "negative for cin" at Low.
    pub fn from_config(config: &RulesConfig) -> Self {
        let mut rules = vec![
            RiskRule::new(SuspicionLevel::High, &config.high),
            RiskRule::new(SuspicionLevel::Medium, &config.medium),
            RiskRule::new(SuspicionLevel::Low, &config.low),
        ];

        if config.bare_cin_is_high {
            rules.push(RiskRule::new(SuspicionLevel::High, &[BARE_CIN_KEYWORD.to_string()]));
        }

        Self::new(rules)
    }

    pub fn classify(&self, label: &str) -> SuspicionLevel {
        let lowered = label.to_lowercase();

        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.level)
            .unwrap_or_default()
    }

    pub fn rules(&self) -> &[RiskRule] {
        &self.rules
    }
}

impl Default for RiskRules {
    fn default() -> Self {
        Self::from_config(&RulesConfig::default())
    }
}
