//! File-backed persistence for the knowledge document.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::{error::knowledge::KnowledgeError, model::knowledge::KnowledgeDocument};

/// The knowledge document on disk, loaded and saved wholesale.
#[derive(Debug, Clone)]
pub struct KnowledgeFile {
    path: PathBuf,
}

impl KnowledgeFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the document. A missing file is an empty store.
    pub async fn load(&self) -> Result<KnowledgeDocument, KnowledgeError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(KnowledgeDocument::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes the document to a sibling temp file, then renames it over the target.
    ///
    /// Readers of the file observe either the previous or the new document, never a
    /// partially written one.
    pub async fn save(&self, document: &KnowledgeDocument) -> Result<(), KnowledgeError> {
        let bytes = serde_json::to_vec_pretty(document)?;
        let tmp = self.tmp_path();

        tokio::fs::write(&tmp, bytes).await?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
