use crate::{
    model::outcome::AskOutcome,
    service::{
        ask::{AskService, TEACH_PROMPT, TEACH_TIMEOUT},
        knowledge::KnowledgeService,
    },
};

use super::fake::{FakeResponder, FakeWaiter, Sent};

mod answer;

async fn empty_store(dir: &tempfile::TempDir) -> KnowledgeService {
    KnowledgeService::load(dir.path().join("knowledge.json"))
        .await
        .unwrap()
}
