//! CORS configuration
//!
//! Any origin is allowed unless `CORS_ALLOWED_ORIGINS` lists specific ones.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build the CORS layer from `*` or a comma-separated origin list.
/// An entry that is not a valid header value is skipped; a list with no
/// usable entries falls back to any origin.
pub fn setup_cors(allowed_origins: &str) -> CorsLayer {
    let allow_origin = if allowed_origins.trim().is_empty() || allowed_origins.trim() == "*" {
        // Development default: any origin
        AllowOrigin::any()
    } else {
        // Explicit allow-list, e.g. "https://app.example,https://admin.example"
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .filter_map(|s| {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    HeaderValue::from_str(trimmed).ok()
                }
            })
            .collect();

        if origins.is_empty() {
            // Every entry was malformed
            tracing::warn!(
                "No usable origin in '{}', allowing any origin",
                allowed_origins
            );
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    // Browsers only need GET for the welcome route and POST with a JSON body
    // (plus the preflight) for scoring
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
}
