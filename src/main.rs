mod config;
mod db;
mod handlers;
mod models;
mod storage;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use config::{Config, StorageDriver};
use handlers::AppState;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gallery_cloud=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!("Starting gallery cloud service");
    tracing::info!("Storage driver: {:?}", config.storage_driver);

    // Connect to database
    let db = sqlx::PgPool::connect(&config.database_url).await?;
    sqlx::query("SELECT 1")
        .fetch_one(&db)
        .await
        .map_err(|e| anyhow::anyhow!("Database connection test failed: {}", e))?;
    tracing::info!("Connected to database");

    // Initialize storage: constructed once, shared by every request for
    // the process lifetime. A missing bucket for the s3 driver fails here.
    let storage = storage::create_storage(&config).await?;

    // Build application state
    let state = AppState {
        db,
        storage,
        config: config.clone(),
    };

    // Build our application with routes
    let mut app = Router::new()
        .route("/health", get(handlers::health))
        .route("/auth/register", post(handlers::register))
        .route("/auth/login", post(handlers::login))
        .route("/users/:id", get(handlers::get_user).put(handlers::update_user))
        .route("/users/:id/balance", post(handlers::add_balance))
        .route(
            "/users/:id/photo",
            post(handlers::upload_user_photo).get(handlers::get_user_photo),
        )
        .route("/users/:id/notifications", get(handlers::get_notifications))
        .route(
            "/users/:id/notifications/:notification_id/read",
            put(handlers::mark_notification_read),
        )
        .route("/artworks", get(handlers::list_artworks))
        .route("/artworks/created", get(handlers::created_artworks))
        .route("/artworks/mine", get(handlers::my_artworks))
        .route("/artworks/upload", post(handlers::upload_artwork))
        .route("/purchase", post(handlers::purchase));

    // The filesystem driver relies on this mount: public URLs are
    // "/static/{key}" and resolve to files under the upload root.
    if config.storage_driver == StorageDriver::Local {
        app = app.nest_service("/static", ServeDir::new(&config.local_upload_dir));
    }

    let app = app
        // file fields are capped at 10 MB; leave room for the envelope
        .layer(DefaultBodyLimit::max(handlers::MAX_FILE_SIZE + 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
