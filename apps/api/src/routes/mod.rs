pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assistant;
use crate::site::handlers;
use crate::state::AppState;
use crate::tools;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Utility tools (single dispatcher, POST only)
        .route("/api/tools", post(tools::handle_tools))
        // Assistant proxies
        .route("/api/assistant", post(assistant::handle_openai))
        .route("/api/assistant/claude", post(assistant::handle_claude))
        // Site data
        .route("/api/profile", get(handlers::handle_profile))
        .route("/api/projects", get(handlers::handle_projects))
        .route("/api/contact", post(handlers::handle_contact))
        .route("/api/visits", post(handlers::handle_visits))
        .with_state(state)
}
