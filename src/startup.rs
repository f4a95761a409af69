use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::AppError,
    service::knowledge::KnowledgeService,
};

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and falls back to `info` when unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool capped at the configured pool size, then runs all
/// pending SeaORM migrations so the `guild` and `roles` tables exist. This must
/// complete successfully before the bot starts handling commands.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool size
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.db_pool_size).sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Loads the knowledge document and builds the initial matcher.
pub async fn load_knowledge(config: &Config) -> Result<KnowledgeService, AppError> {
    let knowledge = KnowledgeService::load(config.knowledge_path.clone()).await?;

    tracing::info!(
        "Loaded {} known questions from {}",
        knowledge.len().await,
        config.knowledge_path.display()
    );

    Ok(knowledge)
}
