use super::*;

/// Tests that a blank question never reaches the store or the asker.
///
/// Expected: AskOutcome::Empty with no prompt and no wait
#[tokio::test]
async fn blank_question_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let knowledge = empty_store(&dir).await;
    let responder = FakeResponder::default();
    let waiter = FakeWaiter::replying("unused");

    let outcome = AskService::new(&knowledge)
        .answer("   ", 42, &responder, &waiter)
        .await
        .unwrap();

    assert_eq!(outcome, AskOutcome::Empty);
    assert!(responder.sent().is_empty());
    assert!(waiter.waits().is_empty());
    assert_eq!(knowledge.len().await, 0);
}

/// Tests learning an answer on a miss, then answering it.
///
/// The second ask uses different casing and surrounding whitespace.
///
/// Expected: Learned, then Answered with the taught text
#[tokio::test]
async fn learns_on_miss_then_answers() {
    let dir = tempfile::tempdir().unwrap();
    let knowledge = empty_store(&dir).await;
    let service = AskService::new(&knowledge);

    let responder = FakeResponder::default();
    let waiter = FakeWaiter::replying("foo is bar");
    let outcome = service
        .answer("what is foo", 42, &responder, &waiter)
        .await
        .unwrap();

    assert_eq!(outcome, AskOutcome::Learned);
    assert_eq!(responder.followups(), vec![TEACH_PROMPT.to_string()]);
    assert_eq!(waiter.waits(), vec![(42, TEACH_TIMEOUT)]);

    let responder = FakeResponder::default();
    let waiter = FakeWaiter::timing_out();
    let outcome = service
        .answer("  What Is Foo ", 42, &responder, &waiter)
        .await
        .unwrap();

    assert_eq!(outcome, AskOutcome::Answered("foo is bar".to_string()));
    assert!(responder.sent().is_empty());
    assert!(waiter.waits().is_empty());
}

/// Tests that a timed-out teach changes nothing.
///
/// Expected: AskOutcome::TimedOut and the store stays empty
#[tokio::test]
async fn timeout_leaves_store_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let knowledge = empty_store(&dir).await;
    let responder = FakeResponder::default();
    let waiter = FakeWaiter::timing_out();

    let outcome = AskService::new(&knowledge)
        .answer("what is foo", 42, &responder, &waiter)
        .await
        .unwrap();

    assert_eq!(outcome, AskOutcome::TimedOut);
    assert_eq!(knowledge.len().await, 0);
    assert_eq!(knowledge.lookup("what is foo").await.unwrap(), None);
    assert!(!dir.path().join("knowledge.json").exists());
}

/// Tests that the stored question is normalized and the answer is verbatim.
///
/// Expected: Persisted entry has a lowercase question and the exact reply
#[tokio::test]
async fn persists_normalized_question_and_verbatim_answer() {
    let dir = tempfile::tempdir().unwrap();
    let knowledge = empty_store(&dir).await;
    let responder = FakeResponder::default();
    let waiter = FakeWaiter::replying("  It's BAR ");

    AskService::new(&knowledge)
        .answer(" What Is Foo? ", 42, &responder, &waiter)
        .await
        .unwrap();

    let reloaded = crate::data::KnowledgeFile::new(dir.path().join("knowledge.json"))
        .load()
        .await
        .unwrap();

    assert_eq!(reloaded.questions.len(), 1);
    assert_eq!(reloaded.questions[0].question, "what is foo?");
    assert_eq!(reloaded.questions[0].answer, "  It's BAR ");
}

/// Tests that a failed persist is reported without changing the store.
///
/// Expected: AskOutcome::Failed and no entry visible to lookups
#[tokio::test]
async fn failed_persist_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    let knowledge = KnowledgeService::load(dir.path().join("missing").join("knowledge.json"))
        .await
        .unwrap();
    let responder = FakeResponder::default();
    let waiter = FakeWaiter::replying("bar");

    let outcome = AskService::new(&knowledge)
        .answer("what is foo", 42, &responder, &waiter)
        .await
        .unwrap();

    assert_eq!(outcome, AskOutcome::Failed);
    assert_eq!(knowledge.len().await, 0);
}

/// Tests that teaching the same question twice answers with the latest answer.
///
/// Expected: Answered with the second answer
#[tokio::test]
async fn retaught_question_uses_latest_answer() {
    let dir = tempfile::tempdir().unwrap();
    let knowledge = empty_store(&dir).await;
    knowledge
        .teach("what is foo".to_string(), "old".to_string())
        .await
        .unwrap();
    knowledge
        .teach("what is foo".to_string(), "new".to_string())
        .await
        .unwrap();

    let responder = FakeResponder::default();
    let waiter = FakeWaiter::timing_out();
    let outcome = AskService::new(&knowledge)
        .answer("what is foo", 42, &responder, &waiter)
        .await
        .unwrap();

    assert_eq!(outcome, AskOutcome::Answered("new".to_string()));
    assert_eq!(knowledge.len().await, 2);
}

/// Tests that a stored entry with an empty answer counts as unknown.
///
/// Verifies that the asker is prompted and the taught answer replaces the empty
/// one for later lookups.
///
/// Expected: AskOutcome::Learned, then Answered with the taught text
#[tokio::test]
async fn empty_stored_answer_starts_teach_flow() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("knowledge.json");
    std::fs::write(
        &path,
        r#"{"questions": [{"question": "what is foo", "answer": ""}]}"#,
    )
    .unwrap();
    let knowledge = KnowledgeService::load(&path).await.unwrap();
    let service = AskService::new(&knowledge);

    let responder = FakeResponder::default();
    let waiter = FakeWaiter::replying("foo is bar");
    let outcome = service
        .answer("what is foo", 42, &responder, &waiter)
        .await
        .unwrap();

    assert_eq!(outcome, AskOutcome::Learned);
    assert_eq!(responder.followups(), vec![TEACH_PROMPT.to_string()]);

    let responder = FakeResponder::default();
    let outcome = service
        .answer("what is foo", 42, &responder, &FakeWaiter::timing_out())
        .await
        .unwrap();

    assert_eq!(outcome, AskOutcome::Answered("foo is bar".to_string()));
}
