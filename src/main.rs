use sqlx::sqlite::SqlitePoolOptions;

use jobkeeper::{app, config::Config, services::Store, MIGRATOR};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize basic tracing subscriber
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load()?;

    // Open the database pool and bring the schema up to date
    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    MIGRATOR.run(&pool).await?;

    // Upload directory must exist before the first upload lands
    std::fs::create_dir_all(&config.upload.dir)?;

    let store = Store::new(pool);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on {}", addr);

    axum::serve(listener, app(store, config).into_make_service()).await?;

    Ok(())
}
