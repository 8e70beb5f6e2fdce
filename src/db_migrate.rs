use color_eyre::eyre::Result;
use dotenv::dotenv;
use slotbook_db::{config::StoreConfig, create_pool, schema::initialize_database};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let config = StoreConfig::from_env()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Connecting to database...");
    let db_pool = create_pool(&config.database_url, config.max_connections).await?;

    initialize_database(&db_pool).await?;
    db_pool.close().await;

    Ok(())
}
