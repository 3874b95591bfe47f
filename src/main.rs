//! Cogni recommendation API server
//!
//! Serves `GET /`, `GET /health` and `POST /getRecommendation`.

use cogni::adapters::http::{build_app, RecommendationAppState};
use cogni::config::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let state = RecommendationAppState::standard(config.dashboard.base_url.clone())?;
    let app = build_app(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "Cogni API listening on {} ({:?})",
        addr,
        config.server.environment
    );
    tracing::info!("Dashboard deep links point at {}", config.dashboard.base_url);

    axum::serve(listener, app).await?;
    Ok(())
}

/// `RUST_LOG` wins over the configured filter. Production logs are JSON.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
