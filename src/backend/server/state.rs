/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # State Extraction
 *
 * Handlers can take the whole `AppState` or just the part they need:
 *
 * ```rust,ignore
 * async fn handler(State(pool): State<SqlitePool>) { /* ... */ }
 * async fn other(State(tokens): State<Arc<TokenIssuer>>) { /* ... */ }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::server::config::AppConfig;

/// Application state shared by every handler
///
/// Cloning is cheap: the pool is reference-counted internally and the
/// other fields are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool (users and files tables)
    pub db_pool: SqlitePool,

    /// Token signer/verifier built from `config.jwt_secret`
    pub tokens: Arc<TokenIssuer>,

    /// Configuration the server was started with
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, config: AppConfig) -> Self {
        Self {
            db_pool,
            tokens: Arc::new(TokenIssuer::from_config(&config)),
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<TokenIssuer> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
