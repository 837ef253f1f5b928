use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::AppError,
    service::member_code::{clock::LocalClock, MemberCodeGenerator},
};

/// Installs the global `tracing` subscriber.
///
/// Honours `RUST_LOG` and falls back to `info`. Calling it again after a subscriber
/// is installed has no effect.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then runs all pending SeaORM migrations so the schema, including the unique
/// index on member codes, is up-to-date before any member is created.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the process-wide member code generator.
///
/// The counter is recovered from persisted members before the generator is
/// returned. Recovery failures are logged and do not fail startup.
///
/// # Arguments
/// - `db` - Database connection holding the member table
/// - `config` - Application configuration containing the retry budget
///
/// # Returns
/// - `MemberCodeGenerator` - Generator on the server-local calendar
pub async fn init_member_code_generator(
    db: &DatabaseConnection,
    config: &Config,
) -> MemberCodeGenerator<DatabaseConnection, LocalClock> {
    MemberCodeGenerator::init(db.clone(), LocalClock, config.member_code_max_retries).await
}
