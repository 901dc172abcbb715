use serde::{Deserialize, Serialize};

/// One `{label, score}` entry of an image-classification response.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Candidate {
    pub label: String,
    pub score: f64,
}

impl Candidate {
    pub fn new(label: &str, score: f64) -> Self {
        Self {
            label: label.to_string(),
            score,
        }
    }
}
