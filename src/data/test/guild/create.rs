use super::*;

/// Tests registering a new guild.
///
/// Expected: Ok with the guild persisted once
#[tokio::test]
async fn creates_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let guild = repo.create(123456789, "Test Guild").await?;

    assert_eq!(guild.guild_id, 123456789);
    assert_eq!(guild.guild_name, "Test Guild");

    let count = entity::prelude::Guild::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that registering the same guild twice fails.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    repo.create(123456789, "Test Guild").await?;
    let result = repo.create(123456789, "Test Guild").await;

    assert!(result.is_err());

    let count = entity::prelude::Guild::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
