//! Backend Module
//!
//! This module contains all server-side code for Filedrop: an Axum HTTP
//! server with registration, login and an authenticated upload endpoint.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Router assembly
//! - **`auth`** - User store, password hashing, tokens, auth handlers
//! - **`middleware`** - Token guard for protected routes
//! - **`upload`** - Filename policy, file records, upload handler
//! - **`error`** - Backend error type and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary entry point
//! ├── server/         - Config, state, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── upload/         - File upload
//! └── error/          - Error types
//! ```
//!
//! # Endpoints
//!
//! - `POST /register` - Create a user
//! - `POST /login` - Exchange credentials for a token
//! - `POST /upload` - Store an image or PDF (requires `Authorization: Bearer`)
//!
//! # State Management
//!
//! Every request is independent. The only shared state is the SQLite pool and
//! the token keys, both held in `AppState` and cloned cheaply into handlers.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// File upload handling
pub mod upload;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppConfig, AppState};
