use super::*;

/// Tests bulk-inserting roles for a guild.
///
/// Expected: Ok with all roles persisted
#[tokio::test]
async fn creates_all_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db)
        .guild_id("100")
        .build()
        .await?;

    let repo = RoleRepository::new(db);
    repo.create_many(
        100,
        &[
            guild_role(100, "@everyone", 104324673),
            guild_role(111, "Admin", 8),
            guild_role(222, "Member", 1024),
        ],
    )
    .await?;

    let count = entity::prelude::Role::find()
        .filter(entity::role::Column::GuildId.eq("100"))
        .count(db)
        .await?;
    assert_eq!(count, 3);

    Ok(())
}

/// Tests that an empty role list is a no-op.
///
/// Expected: Ok with no rows inserted
#[tokio::test]
async fn creates_none_with_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db)
        .guild_id("100")
        .build()
        .await?;

    let repo = RoleRepository::new(db);
    repo.create_many(100, &[]).await?;

    let count = entity::prelude::Role::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests that a duplicated role ID fails the whole insert.
///
/// Expected: Err with no rows inserted
#[tokio::test]
async fn fails_whole_insert_on_duplicate_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db)
        .guild_id("100")
        .build()
        .await?;

    let repo = RoleRepository::new(db);
    let result = repo
        .create_many(100, &[guild_role(111, "Admin", 8), guild_role(111, "Admin", 8)])
        .await;

    assert!(result.is_err());

    let count = entity::prelude::Role::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests that roles cannot be stored for an unregistered guild.
///
/// Expected: Err from the foreign key
#[tokio::test]
async fn fails_for_unregistered_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleRepository::new(db);
    let result = repo.create_many(100, &[guild_role(111, "Admin", 8)]).await;

    assert!(result.is_err());

    Ok(())
}
