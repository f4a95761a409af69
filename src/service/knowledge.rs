//! Shared owner of the knowledge store.
//!
//! Reads take a cheap snapshot of the current matcher and never wait on a teach in
//! progress. Teaches are serialized through a single writer lock: append, persist,
//! rebuild the matcher, then swap it in. A failed persist leaves both the file and the
//! in-memory store untouched, and two concurrent teaches can never lose each other's
//! entry.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::{
    data::KnowledgeFile,
    error::AppError,
    model::knowledge::{KnowledgeDocument, QaEntry},
    service::matcher::Matcher,
};

/// Cloneable handle to the knowledge store. All clones share one store.
#[derive(Clone)]
pub struct KnowledgeService {
    inner: Arc<Inner>,
}

struct Inner {
    file: KnowledgeFile,
    matcher: RwLock<Arc<Matcher>>,
    writer: Mutex<()>,
}

impl KnowledgeService {
    /// Loads the store from `path`. A missing file starts an empty store.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let file = KnowledgeFile::new(path);
        let document = file.load().await?;

        Ok(Self {
            inner: Arc::new(Inner {
                file,
                matcher: RwLock::new(Arc::new(Matcher::new(document.questions))),
                writer: Mutex::new(()),
            }),
        })
    }

    /// Looks up the answer for a normalized question.
    ///
    /// The fuzzy scan runs on the blocking pool so long questions against a large
    /// store never stall the async workers.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - A stored answer matched
    /// - `Ok(None)` - No usable match
    /// - `Err(AppError::InternalError)` - The matching task panicked or was cancelled
    pub async fn lookup(&self, question: &str) -> Result<Option<String>, AppError> {
        let matcher = self.snapshot().await;
        let question = question.to_string();

        tokio::task::spawn_blocking(move || matcher.best_match(&question).map(str::to_string))
            .await
            .map_err(|e| AppError::InternalError(format!("Question matching failed: {}", e)))
    }

    /// Appends a taught entry and persists it before it becomes visible to lookups.
    ///
    /// # Arguments
    /// - `question` - Normalized question text
    /// - `answer` - Answer text exactly as taught
    ///
    /// # Returns
    /// - `Ok(())` - Entry persisted and visible to subsequent lookups
    /// - `Err(AppError::KnowledgeErr)` - Persist failed; the store is unchanged
    pub async fn teach(&self, question: String, answer: String) -> Result<(), AppError> {
        let _writer = self.inner.writer.lock().await;

        let mut questions = self.snapshot().await.entries().to_vec();
        questions.push(QaEntry { question, answer });
        let document = KnowledgeDocument { questions };

        self.inner.file.save(&document).await?;

        let rebuilt = Arc::new(Matcher::new(document.questions));
        *self.inner.matcher.write().await = rebuilt;

        Ok(())
    }

    /// Number of taught entries, duplicates included.
    pub async fn len(&self) -> usize {
        self.snapshot().await.len()
    }

    async fn snapshot(&self) -> Arc<Matcher> {
        self.inner.matcher.read().await.clone()
    }
}
