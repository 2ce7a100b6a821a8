//! Authentication Handlers Module
//!
//! # Handlers
//!
//! - **`register`** - POST /register - User registration
//! - **`login`** - POST /login - User authentication
//!
//! Request and response bodies live in `crate::shared::api` so the client
//! module can reuse them.

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

// Re-export handlers
pub use login::login;
pub use register::register;
