use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityName, Schema,
};

use crate::infrastructure::config::Config;
use crate::models::sale;

/// Connect with default pool options (used by tests with `sqlite::memory:`)
pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    connect(ConnectOptions::new(database_url.to_owned())).await
}

/// Connect using the configured pool timeouts
pub async fn init_db_from_config(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.acquire_timeout);

    connect(options).await
}

async fn connect(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;

    ensure_schema(&db).await?;

    Ok(db)
}

/// Create the `sales` table if it does not exist yet. Existing tables are left as-is.
async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut stmt = schema.create_table_from_entity(sale::Entity);
    stmt.if_not_exists();

    tracing::debug!("Ensuring table `{}` exists", sale::Entity.table_name());
    db.execute(backend.build(&stmt)).await?;

    Ok(())
}
