use serde::{Deserialize, Serialize};
use crate::structs::ai::gemini::gemini_candidate::GeminiCandidate;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

impl GeminiResponse {
    /// Text of the first candidate, empty when there is none.
    pub fn first_text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| content.text())
            .unwrap_or_default()
    }
}
