/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /register` - User registration
 * - `POST /login` - User login
 *
 * ## Upload
 * - `POST /upload` - Store an image or PDF (requires authentication)
 */

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::post,
    Router,
};

use crate::backend::auth::{login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;
use crate::backend::upload::upload_file;

/// Configure public authentication routes
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Configure the upload route
///
/// `auth_middleware` is attached with `route_layer`, so a missing or invalid
/// token is rejected before the multipart body is read. The body limit comes
/// from `AppConfig::max_upload_bytes`.
pub fn configure_upload_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    router.route(
        "/upload",
        post(upload_file)
            .route_layer(from_fn_with_state(app_state.clone(), auth_middleware))
            .layer(DefaultBodyLimit::max(app_state.config.max_upload_bytes)),
    )
}
