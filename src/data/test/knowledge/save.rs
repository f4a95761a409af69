use super::*;

/// Tests that a saved document loads back unchanged.
///
/// Expected: Ok with identical document
#[tokio::test]
async fn saved_document_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let file = KnowledgeFile::new(dir.path().join("knowledge.json"));
    let document = KnowledgeDocument {
        questions: vec![entry("what is foo", "bar")],
    };

    file.save(&document).await.unwrap();

    assert_eq!(file.load().await.unwrap(), document);
}

/// Tests that saving replaces the previous document and leaves no temp file.
///
/// Expected: Only the target file remains, holding the new document
#[tokio::test]
async fn save_replaces_and_cleans_up() {
    let dir = tempfile::tempdir().unwrap();
    let file = KnowledgeFile::new(dir.path().join("knowledge.json"));

    file.save(&KnowledgeDocument {
        questions: vec![entry("old", "1")],
    })
    .await
    .unwrap();
    file.save(&KnowledgeDocument {
        questions: vec![entry("old", "1"), entry("new", "2")],
    })
    .await
    .unwrap();

    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, vec!["knowledge.json".to_string()]);

    let document = file.load().await.unwrap();
    assert_eq!(document.questions.len(), 2);
}

/// Tests that a save into a missing directory fails without creating anything.
///
/// Expected: Err
#[tokio::test]
async fn save_fails_for_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let file = KnowledgeFile::new(dir.path().join("missing").join("knowledge.json"));

    let result = file.save(&KnowledgeDocument::default()).await;

    assert!(result.is_err());
    assert!(!dir.path().join("missing").exists());
}
