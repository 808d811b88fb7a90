use std::sync::Arc;

use sqlx::PgPool;

use crate::llm_client::{claude::ClaudeClient, openai::OpenAiClient};
use crate::models::profile::Profile;

/// Shared application state injected into all route handlers via Axum
/// extractors. Config values handlers need are baked into these handles at
/// startup; the raw config itself stays in `main`.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub openai: OpenAiClient,
    pub claude: ClaudeClient,
    /// Static résumé record, embedded at build time and loaded once at startup.
    pub profile: Arc<Profile>,
}
