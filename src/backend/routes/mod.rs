//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and layers
//! └── api_routes.rs   - Auth and upload endpoints
//! ```
//!
//! # Routes
//!
//! - `POST /register` - User registration
//! - `POST /login` - User login
//! - `POST /upload` - Authenticated upload
//! - anything else - 404 `{"error": "Not found"}`

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
