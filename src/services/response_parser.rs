use serde_json::Value;
use crate::enums::classification_response::ClassificationResponse;
use crate::structs::candidate::Candidate;

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(value: &Value) -> ClassificationResponse {
        match value {
            Value::Array(items) if items.is_empty() => ClassificationResponse::Malformed,
            Value::Array(items) => {
                // Some pipelines wrap the list once more: [[{label, score}, ...]]
                if let [Value::Array(_)] = items.as_slice() {
                    return Self::parse(&items[0]);
                }

                if let [single] = items.as_slice() {
                    if let Some(text) = Self::generated_text(single) {
                        return ClassificationResponse::GeneratedText(text);
                    }
                }

                items
                    .iter()
                    .map(Self::candidate)
                    .collect::<Option<Vec<_>>>()
                    .map(ClassificationResponse::Candidates)
                    .unwrap_or(ClassificationResponse::Malformed)
            }
            Value::Object(_) => Self::generated_text(value)
                .map(ClassificationResponse::GeneratedText)
                .unwrap_or(ClassificationResponse::Malformed),
            _ => ClassificationResponse::Malformed,
        }
    }

    /// Highest score wins; on a tie the earliest candidate is kept.
    pub fn select_top(candidates: &[Candidate]) -> Option<&Candidate> {
        candidates.iter().fold(None, |best: Option<&Candidate>, candidate| match best {
            Some(current) if current.score >= candidate.score => Some(current),
            _ => Some(candidate),
        })
    }

    /// 0-1 score to a 0-100 percentage with one decimal place.
    pub fn to_percentage(score: f64) -> f64 {
        let percent = (score * 1000.0).round() / 10.0;
        percent.clamp(0.0, 100.0)
    }

    fn candidate(item: &Value) -> Option<Candidate> {
        let label = item.get("label")?.as_str()?.trim();
        let score = item.get("score")?.as_f64()?;

        if label.is_empty() || !score.is_finite() {
            return None;
        }

        Some(Candidate::new(label, score))
    }

    fn generated_text(item: &Value) -> Option<String> {
        item.get("generated_text")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    }
}
