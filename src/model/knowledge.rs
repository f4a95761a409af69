use serde::{Deserialize, Serialize};

/// A taught question and its answer. `question` is always stored normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaEntry {
    pub question: String,
    pub answer: String,
}

/// On-disk shape of the knowledge store: one document holding every entry in
/// the order it was taught.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeDocument {
    #[serde(default)]
    pub questions: Vec<QaEntry>,
}

/// Normalizes a question for matching and storage.
///
/// Trims surrounding whitespace and lower-cases. Returns `None` when nothing is left.
pub fn normalize_question(question: &str) -> Option<String> {
    let trimmed = question.trim();
    if trimmed.is_empty() {
        return None;
    }

    Some(trimmed.to_lowercase())
}
