use std::sync::Arc;

use sqlx::PgPool;

use crate::ai::client::AiClient;
use crate::ai::matcher::MatchScorer;
use crate::config::Config;
use crate::mailer::Mailer;
use crate::prefs::PreferenceStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub ai: AiClient,
    pub mailer: Arc<Mailer>,
    /// Pluggable match scorer. Default: LlmMatchScorer. Swap via MATCH_SCORER_BACKEND.
    pub match_scorer: Arc<dyn MatchScorer>,
    /// Client UI state (banner dismissal, cookie settings) behind an
    /// injectable store so tests can swap in the in-memory implementation.
    pub prefs: Arc<dyn PreferenceStore>,
    pub config: Config,
}
