use super::*;

/// Tests reading the roles of one guild.
///
/// Verifies that only roles of the requested guild are returned and that IDs
/// and permissions are converted back to u64.
///
/// Expected: Ok with the guild's roles only
#[tokio::test]
async fn returns_roles_for_guild_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild::GuildFactory::new(db)
        .guild_id("100")
        .build()
        .await?;
    let other = factory::guild::GuildFactory::new(db)
        .guild_id("200")
        .build()
        .await?;

    factory::role::RoleFactory::new(db, &guild.guild_id)
        .role_id("111")
        .role_name("Admin")
        .role_perm(8)
        .build()
        .await?;
    factory::create_role(db, &guild.guild_id, "222").await?;
    factory::create_role(db, &other.guild_id, "333").await?;

    let repo = RoleRepository::new(db);
    let mut roles = repo.get_by_guild_id(100).await?;
    roles.sort_by_key(|r| r.role_id);

    assert_eq!(roles.len(), 2);
    assert_eq!(roles[0].role_id, 111);
    assert_eq!(roles[0].role_name, "Admin");
    assert_eq!(roles[0].role_perm, 8);
    assert_eq!(roles[0].guild_id, 100);
    assert_eq!(roles[1].role_id, 222);

    Ok(())
}

/// Tests reading roles of a guild that has none.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_unsynced_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleRepository::new(db);
    let roles = repo.get_by_guild_id(100).await?;

    assert!(roles.is_empty());

    Ok(())
}

/// Tests that permission bits above i64::MAX survive the signed column.
///
/// Expected: Ok with the original u64 bitmask
#[tokio::test]
async fn preserves_high_permission_bits() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild::GuildFactory::new(db)
        .guild_id("100")
        .build()
        .await?;

    let repo = RoleRepository::new(db);
    repo.create_many(100, &[guild_role(111, "Everything", u64::MAX)])
        .await?;

    let roles = repo.get_by_guild_id(guild.guild_id.parse().unwrap()).await?;

    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].role_perm, u64::MAX);

    Ok(())
}
