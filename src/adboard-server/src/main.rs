//! Adboard — demonstration REST API for an advertising-campaign platform.
//!
//! Main entry point that merges the per-domain routers and starts the server.

use adboard_alerts::alert_router;
use adboard_auth::auth_router;
use adboard_campaigns::campaign_router;
use adboard_core::AppConfig;
use adboard_geo::geo_router;
use adboard_reporting::reporting_router;
use adboard_roles::role_router;
use axum::routing::get;
use axum::{Json, Router};
use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "adboard-server")]
#[command(about = "Demonstration REST API for an advertising-campaign platform")]
#[command(version)]
struct Cli {
    /// Bind host (overrides config)
    #[arg(long, env = "ADBOARD__API__HOST")]
    host: Option<String>,

    /// HTTP port (overrides config)
    #[arg(long, env = "ADBOARD__API__HTTP_PORT")]
    http_port: Option<u16>,
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Adboard campaign API up and running"
    }))
}

async fn health() -> &'static str {
    "ok"
}

fn build_app(config: &AppConfig) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(campaign_router())
        .merge(role_router())
        .merge(reporting_router())
        .merge(geo_router())
        .merge(alert_router())
        .merge(auth_router(config.auth.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adboard=info,tower_http=info".into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("Adboard starting up");

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(host) = cli.host {
        config.api.host = host;
    }
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }

    info!(
        node_id = %config.node_id,
        host = %config.api.host,
        http_port = config.api.http_port,
        "Configuration loaded"
    );

    let app = build_app(&config);

    let addr = format!("{}:{}", config.api.host, config.api.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Adboard is ready to serve traffic");

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_app_merges_all_routers() {
        // Router construction panics on conflicting paths; building the
        // full app is the regression check that the per-domain routers
        // stay mergeable.
        let config = AppConfig::default();
        let _app = build_app(&config);
    }
}
