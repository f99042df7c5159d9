//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors go through
//! `boat::BoatError`.

use base64::Engine;
use base64::engine::general_purpose;
use boat::domain::repository::SessionRepository;
use boat::{BoatConfig, PgSessionRepository, ViewEngine, boat_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,boat=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Startup cleanup: errors here should not prevent server startup
    let session_store_for_cleanup = PgSessionRepository::new(pool.clone());
    match session_store_for_cleanup.cleanup_expired().await {
        Ok(sessions) => {
            tracing::info!(sessions_deleted = sessions, "Session cleanup completed");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session cleanup failed, continuing anyway");
        }
    }

    let config = load_config()?;
    let views = ViewEngine::from_dir(&config.template_dir);

    tracing::info!(
        app_name = %config.app_name,
        session_name = %config.session_name,
        templates = %config.template_dir.display(),
        manifest = %config.manifest_path.display(),
        "Site configured"
    );

    // Build router
    let app = boat_router(pool, views, config).layer(TraceLayer::new_for_http());

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(1323);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn load_config() -> anyhow::Result<BoatConfig> {
    let mut config = if cfg!(debug_assertions) {
        BoatConfig::development()
    } else {
        BoatConfig::default()
    };

    match env::var("SESSION_SECRET") {
        Ok(secret_b64) => {
            let secret_bytes = general_purpose::STANDARD.decode(secret_b64.trim())?;
            config.session_secret = secret_bytes
                .try_into()
                .map_err(|_| anyhow::anyhow!("SESSION_SECRET must decode to 32 bytes"))?;
        }
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("SESSION_SECRET not set, using a random development secret");
        }
        Err(_) => anyhow::bail!("SESSION_SECRET must be set in production"),
    }

    if let Ok(dir) = env::var("TEMPLATE_DIR") {
        config.template_dir = PathBuf::from(dir);
    }
    if let Ok(path) = env::var("MANIFEST_PATH") {
        config.manifest_path = PathBuf::from(path);
    }

    Ok(config)
}
