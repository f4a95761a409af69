use crate::{
    data::knowledge::KnowledgeFile,
    model::knowledge::{KnowledgeDocument, QaEntry},
};

mod save;

fn entry(question: &str, answer: &str) -> QaEntry {
    QaEntry {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}
