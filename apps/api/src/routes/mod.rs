pub mod health;
pub mod site;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{accounts, ai, billing, jobs, prefs, waitlist};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/robots.txt", get(site::robots_txt))
        .route("/sign-up", get(site::redirect_sign_up))
        .route("/sign-in", get(site::redirect_sign_in))
        .nest_service("/static", site::static_assets())
        // AI endpoints
        .route(
            "/api/v1/ai/analyze-resume",
            post(ai::handlers::handle_analyze_resume),
        )
        .route(
            "/api/v1/ai/enhance-description",
            post(ai::handlers::handle_enhance_description),
        )
        .route("/api/v1/ai/match-job", post(ai::handlers::handle_match_job))
        // Public job lookup by slug
        .route("/api/v1/jobs/:slug", get(jobs::handlers::handle_get_job))
        // Owner-scoped resources
        .route(
            "/api/v1/invoices/:id",
            get(billing::handlers::handle_get_invoice),
        )
        .route(
            "/api/v1/user/company",
            get(accounts::handlers::handle_get_company),
        )
        .route(
            "/api/v1/user/profile",
            get(accounts::handlers::handle_get_profile),
        )
        .route(
            "/api/v1/preferences/:key",
            get(prefs::handle_get_preference).put(prefs::handle_put_preference),
        )
        // Waitlist
        .route("/api/v1/waitlist", post(waitlist::handle_join_waitlist))
        .with_state(state)
}
