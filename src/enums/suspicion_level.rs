use std::fmt;
use serde::{Deserialize, Serialize};
use crate::config::constants::{RECOMMENDATION_HIGH, RECOMMENDATION_LOW, RECOMMENDATION_MEDIUM};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord, Default)]
pub enum SuspicionLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl SuspicionLevel {
    /// Fixed next-step sentence for the bucket.
    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::High => RECOMMENDATION_HIGH,
            Self::Medium => RECOMMENDATION_MEDIUM,
            Self::Low => RECOMMENDATION_LOW,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🔴",
        }
    }
}

impl fmt::Display for SuspicionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        write!(f, "{}", name)
    }
}
