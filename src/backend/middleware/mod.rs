//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - Bearer token guard for protected routes
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use filedrop::backend::middleware::auth_middleware;
//!
//! let protected = route.route_layer(from_fn_with_state(state.clone(), auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, authenticate, AuthUser, AuthenticatedUser};
