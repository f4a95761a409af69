use thiserror::Error;

/// Failures loading or saving the knowledge document.
#[derive(Error, Debug)]
pub enum KnowledgeError {
    /// Reading, writing or renaming the document on disk failed.
    #[error("Knowledge file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document on disk is not valid knowledge JSON.
    #[error("Knowledge file is malformed: {0}")]
    Json(#[from] serde_json::Error),
}
