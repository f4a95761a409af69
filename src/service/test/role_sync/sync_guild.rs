use super::*;

/// Tests the default platform-to-store direction end to end.
///
/// Verifies that the response is deferred before anything else and that exactly
/// one terminal message follows.
///
/// Expected: [Defer, Followup(registered message)]
#[tokio::test]
async fn defers_then_sends_one_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let responder = FakeResponder::default();
    let platform = FakePlatform::new(100, "Test Guild", vec![guild_role(111, "Admin", 8)]);

    let outcome = RoleSyncService::new(db)
        .sync_guild(&responder, &platform, false)
        .await
        .unwrap();

    assert!(matches!(outcome, SyncOutcome::Registered { .. }));
    assert_eq!(
        responder.sent(),
        vec![
            Sent::Defer,
            Sent::Followup("Test Guild registered successfully and synced to database".to_string()),
        ]
    );

    let roles = RoleRepository::new(db).get_by_guild_id(100).await?;
    assert_eq!(roles.len(), 1);

    Ok(())
}

/// Tests that the flag routes to the store-to-platform direction.
///
/// Expected: SyncOutcome::Synced with stored roles applied to the guild
#[tokio::test]
async fn flag_applies_store_to_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let responder = FakeResponder::default();
    let platform = FakePlatform::new(100, "Test Guild", vec![guild_role(111, "Admin", 8)]);
    let service = RoleSyncService::new(db);

    service.sync_guild(&responder, &platform, false).await.unwrap();
    assert!(platform.applied().is_empty());

    let responder = FakeResponder::default();
    let outcome = service.sync_guild(&responder, &platform, true).await.unwrap();

    assert!(matches!(outcome, SyncOutcome::Synced { .. }));
    assert_eq!(platform.applied().len(), 1);
    assert_eq!(
        responder.followups(),
        vec!["Database synced with Test Guild".to_string()]
    );

    Ok(())
}

/// Tests that an unreadable guild still gets exactly one message.
///
/// Expected: SyncOutcome::GuildUnavailable with nothing persisted
#[tokio::test]
async fn unreadable_guild_sends_generic_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let responder = FakeResponder::default();
    let platform = FakePlatform::unavailable();

    let outcome = RoleSyncService::new(db)
        .sync_guild(&responder, &platform, false)
        .await
        .unwrap();

    assert_eq!(outcome, SyncOutcome::GuildUnavailable);
    assert_eq!(responder.sent().len(), 2);
    assert_eq!(responder.sent()[0], Sent::Defer);

    let count = entity::prelude::Guild::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
