use sea_orm_migration::{prelude::*, schema::*};

use super::m20240312_000001_create_guild_table::Guild;

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(string(Roles::RoleId))
                    .col(string(Roles::RoleName))
                    .col(big_integer(Roles::RolePerm))
                    .col(string(Roles::GuildId))
                    .primary_key(Index::create().col(Roles::RoleId).col(Roles::GuildId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_roles_guild_id")
                            .from(Roles::Table, Roles::GuildId)
                            .to(Guild::Table, Guild::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Roles {
    Table,
    RoleId,
    RoleName,
    RolePerm,
    GuildId,
}
