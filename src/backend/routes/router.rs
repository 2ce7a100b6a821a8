/**
 * Router Configuration
 *
 * Combines all route configurations into a single Axum router and applies
 * the cross-cutting layers (request tracing, CORS).
 */

use axum::{http::StatusCode, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::{configure_auth_routes, configure_upload_routes};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// 1. **Auth Routes**: `/register`, `/login`
/// 2. **Upload Route**: `/upload` behind the token guard
/// 3. **Fallback Handler**: JSON 404
/// 4. **Layers**: `TraceLayer` for request spans, permissive CORS
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_auth_routes(Router::new());
    let router = configure_upload_routes(router, &app_state);

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn not_found() -> BackendError {
    BackendError::handler(StatusCode::NOT_FOUND, "Not found")
}
