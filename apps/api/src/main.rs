mod assistant;
mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod routes;
mod site;
mod state;
mod tools;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::{claude::ClaudeClient, openai::OpenAiClient};
use crate::models::profile::Profile;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (errors on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter_directive(&config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Load the embedded profile record
    let profile = Arc::new(Profile::load()?);
    info!("Profile loaded for {}", profile.name);

    // Initialize chat-provider clients
    let openai = OpenAiClient::new(config.openai_base_url.clone(), config.openai_api_key.clone());
    info!(
        "OpenAI-compatible client initialized (model: {}, base: {})",
        llm_client::openai::MODEL,
        config.openai_base_url
    );
    let claude = ClaudeClient::new(config.anthropic_api_key.clone());
    info!(
        "Claude client initialized (model: {})",
        llm_client::claude::MODEL
    );

    // Build app state
    let state = AppState {
        db,
        openai,
        claude,
        profile,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Directive for the `EnvFilter` fallback when `RUST_LOG` is unset. Tracing
/// targets use the crate's module path, so the package name's hyphens must
/// become underscores or the filter matches nothing.
fn default_filter_directive(level: &str) -> String {
    format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), level)
}

/// Builds the CORS layer: locked to the configured origin when one is set,
/// permissive otherwise (local development).
fn cors_layer(config: &Config) -> Result<CorsLayer> {
    let layer = match &config.allowed_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("ALLOWED_ORIGIN '{origin}' is not a valid origin"))?,
            )
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
        None => CorsLayer::permissive(),
    };
    Ok(layer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_filter_directive_targets_the_module_path() {
        // Tracing targets are module paths, so the package name's hyphen
        // must not survive into the directive or every app log is filtered.
        let directive = default_filter_directive("info");
        assert_eq!(directive, "portfolio_api=info");
        assert!(!directive.contains('-'));
    }
}
