//! Guichet server — helpdesk backend.
//!
//! Main entry point: configuration, logging, database, then the HTTP
//! server.

use tracing_subscriber::EnvFilter;

use guichet_core::config::AppConfig;
use guichet_core::error::AppError;

#[tokio::main]
async fn main() {
    // Configuration first: a missing signing secret must abort startup
    // before anything else runs.
    let env = std::env::var("GUICHET_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    let db = guichet_database::DatabasePool::connect(&config.database).await?;

    guichet_database::migration::run_migrations(db.pool()).await?;

    guichet_api::run_server(config, db).await
}
