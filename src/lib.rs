pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;

use axum::{
    extract::DefaultBodyLimit,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use serde_json::json;
use tower_http::limit::RequestBodyLimitLayer;

use crate::config::Config;
use crate::services::Store;

/// Embedded schema migrations, run at startup and by the integration tests.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

async fn read_root() -> Json<serde_json::Value> {
    Json(json!({ "Hello": "World" }))
}

/// Build the application router. Shared by `main` and the integration tests.
pub fn app(store: Store, config: Config) -> Router {
    let max_file_size = config.upload.max_file_size;

    Router::new()
        // Auth routes
        .route("/", get(read_root))
        .route("/signup/", post(handlers::signup))
        .route("/users/", get(handlers::list_users))
        .route("/login/", post(handlers::login))
        .route("/users/:username", delete(handlers::delete_user))
        // Job routes
        .route("/jobs/", get(handlers::list_jobs).post(handlers::create_job))
        .route(
            "/jobs/:filename",
            put(handlers::update_job).delete(handlers::delete_job),
        )
        // File upload
        .route("/FileUpload/", post(handlers::upload_file))
        // File upload limits from config
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_file_size))
        // Add state
        .with_state((store, config))
}
