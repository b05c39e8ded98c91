use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sales_api::infrastructure::AppState;
use sales_api::{config, db, server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before reading RUST_LOG or any setting
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sales_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::from_env();

    // Initialize database pool
    let db = db::init_db_from_config(&config).await.map_err(|e| {
        tracing::error!("Failed to initialize database: {}", e);
        e
    })?;

    server::serve(AppState::new(db), config.port).await?;

    Ok(())
}
