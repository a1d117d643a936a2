use hr_auth::JwtValidator;
use hr_config::Config;
use hr_db::DependentRepository;
use hr_server::{AppState, ServerError, build_router, logger};

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Pick up JWT_SECRET and friends from a local .env, if present
    let dotenv_path = dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting hr-server v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}", path.display());
    }
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = hr_db::connect(&database_path, config.database.max_connections).await?;

    let Some(secret) = config.auth.jwt_secret.as_deref() else {
        let missing = hr_config::ConfigError::auth("jwt_secret is required");
        return Err(ServerError::Config(missing).into());
    };
    let jwt_validator = JwtValidator::with_hs256(secret.as_bytes(), config.auth.leeway_secs);
    info!("JWT: {} authentication enabled", jwt_validator.algorithm());

    let app_state = AppState::new(jwt_validator, Arc::new(DependentRepository::new(pool)));

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
