/**
 * Server Initialization
 *
 * # Initialization Process
 *
 * 1. Create the upload directory if it is absent
 * 2. Open the SQLite pool and run migrations
 * 3. Build `AppState` (pool, token keys, config)
 * 4. Create and configure the router
 *
 * Unlike optional services elsewhere, the store is required: any failure
 * here aborts startup.
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{ensure_upload_dir, load_database, AppConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
pub async fn create_app(config: AppConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing Filedrop backend server");

    config.validate()?;
    if config.uses_default_secret() {
        tracing::warn!("JWT_SECRET is not set; tokens are signed with the built-in default secret");
    }

    ensure_upload_dir(&config).await?;
    let db_pool = load_database(&config).await?;

    let app_state = AppState::new(db_pool, config);
    let app = create_router(app_state);

    tracing::info!("Router configured");

    Ok(app)
}
