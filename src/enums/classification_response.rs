use crate::structs::candidate::Candidate;

/// Shape of an upstream inference body, decided by `ResponseParser`.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationResponse {
    Candidates(Vec<Candidate>),
    GeneratedText(String),
    Malformed,
}
