//! Site-level plumbing: crawler policy, legacy-path redirects, and the
//! immutable-cache static subtree.

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Redirect},
};
use tower_http::{services::ServeDir, set_header::SetResponseHeader};

use crate::state::AppState;

/// Paths crawlers must stay out of. Account and dashboard surfaces only;
/// public job pages stay indexable.
const DISALLOWED: &[&str] = &[
    "/dashboard/",
    "/company/dashboard/",
    "/edit-job/",
    "/job-alerts/",
    "/applications/",
    "/profile/",
    "/post-job/",
];

/// GET /robots.txt
pub async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_body(&state.config.site_url),
    )
}

pub fn robots_body(site_url: &str) -> String {
    let mut body = String::from("User-agent: *\n");
    for path in DISALLOWED {
        body.push_str(&format!("Disallow: {path}\n"));
    }
    body.push_str(&format!("\nSitemap: {site_url}/sitemap.xml\n"));
    body
}

/// GET /sign-up
/// Permanent redirect to the canonical path.
pub async fn redirect_sign_up() -> Redirect {
    Redirect::permanent("/signup")
}

/// GET /sign-in
/// Permanent redirect to the canonical path.
pub async fn redirect_sign_in() -> Redirect {
    Redirect::permanent("/signin")
}

/// Static assets served with a year-long immutable cache.
pub fn static_assets() -> SetResponseHeader<ServeDir, HeaderValue> {
    SetResponseHeader::overriding(
        ServeDir::new("static"),
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=31536000, immutable"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robots_body_disallows_private_surfaces() {
        let body = robots_body("https://example.com");
        assert!(body.starts_with("User-agent: *\n"));
        assert!(body.contains("Disallow: /dashboard/\n"));
        assert!(body.contains("Disallow: /post-job/\n"));
        assert_eq!(body.matches("Disallow:").count(), 7);
    }

    #[test]
    fn test_robots_body_advertises_absolute_sitemap() {
        let body = robots_body("https://example.com");
        assert!(body.contains("Sitemap: https://example.com/sitemap.xml"));
    }
}
