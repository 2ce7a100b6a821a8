//! Filedrop - Main Library
//!
//! Filedrop is a small authenticated upload service: users register with an
//! email and password, log in to receive a signed token, and use that token to
//! upload images and PDFs.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - JSON request/response bodies used by server and client
//!
//! - **`backend`** - Axum HTTP server
//!   - Registration and login (bcrypt + JWT)
//!   - Token guard for protected routes
//!   - Upload handling and file records
//!   - SQLite persistence through sqlx
//!
//! - **`client`** - Async HTTP client for the three endpoints
//!
//! # Usage
//!
//! ```rust,no_run
//! use filedrop::backend::server::{config::AppConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `backend::error::BackendError` for everything that can fail in a request
//! - `backend::server::config::ConfigError` for startup configuration
//! - `client::ClientError` for the HTTP client

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;

/// HTTP client for the backend API
pub mod client;
