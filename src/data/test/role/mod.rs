use crate::{data::role::RoleRepository, model::role::GuildRole};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create_many;
mod delete_by_guild_id;
mod get_by_guild_id;

fn guild_role(id: u64, name: &str, permissions: u64) -> GuildRole {
    GuildRole {
        id,
        name: name.to_string(),
        permissions,
    }
}
