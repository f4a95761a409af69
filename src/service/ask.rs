//! Question answering with the teach-me flow.
//!
//! A question that matches a stored entry is answered straight away. On a miss the bot
//! asks the asker to teach it and waits for their next message, bounded by
//! `TEACH_TIMEOUT`. The reply is persisted as the answer; a timeout changes nothing.

use std::time::Duration;

use crate::{
    error::AppError,
    model::{
        knowledge::normalize_question,
        outcome::{AskOutcome, WaitOutcome},
    },
    service::{
        capability::{MessageWaiter, Responder},
        knowledge::KnowledgeService,
    },
};

/// How long the asker has to teach an unknown answer.
pub const TEACH_TIMEOUT: Duration = Duration::from_secs(60);

/// Sent on a miss, before waiting for the asker's reply.
pub const TEACH_PROMPT: &str = "I dont know the answer, please teach me the answer";

pub struct AskService<'a> {
    knowledge: &'a KnowledgeService,
    teach_timeout: Duration,
}

impl<'a> AskService<'a> {
    pub fn new(knowledge: &'a KnowledgeService) -> Self {
        Self {
            knowledge,
            teach_timeout: TEACH_TIMEOUT,
        }
    }

    /// Runs one ask command end to end.
    ///
    /// Defers first, then answers, then sends exactly one terminal message. The teach
    /// prompt on a miss is the only message sent before the terminal one.
    ///
    /// # Returns
    /// - `Ok(AskOutcome)` - The outcome that was reported to the asker
    /// - `Err(AppError)` - The defer or the terminal message could not be delivered
    pub async fn ask(
        &self,
        question: &str,
        user_id: u64,
        responder: &dyn Responder,
        waiter: &dyn MessageWaiter,
    ) -> Result<AskOutcome, AppError> {
        responder.defer().await?;

        let outcome = match self.answer(question, user_id, responder, waiter).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Failed to answer question from user {}: {}", user_id, e);
                AskOutcome::Failed
            }
        };

        responder.followup(&outcome.to_string()).await?;

        Ok(outcome)
    }

    /// Answers a question, learning the answer from the asker on a miss.
    ///
    /// # Arguments
    /// - `question` - Question as typed; normalized before lookup and storage
    /// - `user_id` - The asker; only their next message is taken as the answer
    /// - `responder` - Used to send the teach prompt on a miss
    /// - `waiter` - Used to await the asker's reply on a miss
    ///
    /// # Returns
    /// - `Ok(AskOutcome)` - Empty, Answered, Learned, TimedOut or Failed
    /// - `Err(AppError)` - The prompt could not be sent or the wait failed
    pub async fn answer(
        &self,
        question: &str,
        user_id: u64,
        responder: &dyn Responder,
        waiter: &dyn MessageWaiter,
    ) -> Result<AskOutcome, AppError> {
        let Some(question) = normalize_question(question) else {
            return Ok(AskOutcome::Empty);
        };

        if let Some(answer) = self.knowledge.lookup(&question).await? {
            return Ok(AskOutcome::Answered(answer));
        }

        responder.followup(TEACH_PROMPT).await?;

        match waiter.next_message_from(user_id, self.teach_timeout).await? {
            WaitOutcome::Received(answer) => {
                match self.knowledge.teach(question.clone(), answer).await {
                    Ok(()) => {
                        tracing::info!("Learned answer for '{}' from user {}", question, user_id);
                        Ok(AskOutcome::Learned)
                    }
                    Err(e) => {
                        tracing::error!("Failed to persist answer for '{}': {}", question, e);
                        Ok(AskOutcome::Failed)
                    }
                }
            }
            WaitOutcome::TimedOut => {
                tracing::debug!("User {} did not teach '{}' in time", user_id, question);
                Ok(AskOutcome::TimedOut)
            }
        }
    }
}
