use super::*;

/// Tests deleting a guild's roles.
///
/// Verifies that every role of the guild is removed, the affected row count is
/// returned, and other guilds are untouched.
///
/// Expected: Ok(2)
#[tokio::test]
async fn deletes_only_guild_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, _roles) = factory::create_guild_with_roles(db, &["111", "222"]).await?;
    let (other, _other_roles) = factory::create_guild_with_roles(db, &["333"]).await?;

    let repo = RoleRepository::new(db);
    let removed = repo
        .delete_by_guild_id(guild.guild_id.parse().unwrap())
        .await?;

    assert_eq!(removed, 2);

    let remaining = entity::prelude::Role::find()
        .filter(entity::role::Column::GuildId.eq(&other.guild_id))
        .count(db)
        .await?;
    assert_eq!(remaining, 1);

    let guild_roles = entity::prelude::Role::find()
        .filter(entity::role::Column::GuildId.eq(&guild.guild_id))
        .count(db)
        .await?;
    assert_eq!(guild_roles, 0);

    Ok(())
}

/// Tests deleting roles of a guild with none stored.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deletes_nothing_for_empty_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleRepository::new(db);
    let removed = repo.delete_by_guild_id(100).await?;

    assert_eq!(removed, 0);

    Ok(())
}
