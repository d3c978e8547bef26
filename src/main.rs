mod config;
mod db;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is normal in production.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env();

    let pool = match db::init_pool(&config.database_url, config.db_max_connections).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, database_url = %config.database_url, "database init failed");
            std::process::exit(1);
        }
    };

    let tips_dismissed = match services::tips::tips_disabled(&pool).await {
        Ok(dismissed) => dismissed,
        Err(e) => {
            tracing::warn!(error = %e, "could not read tip dismissal; tips stay enabled");
            false
        }
    };

    let state = state::AppState::new(pool, config.show_tips, tips_dismissed);
    let app = routes::app(state);

    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, port = config.port, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(port = config.port, show_tips = config.show_tips, tips_dismissed, "themesync listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
