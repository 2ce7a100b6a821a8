//! Backend Error Module
//!
//! This module defines the error type used by every handler and by server
//! startup. Errors convert into JSON HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Status Codes
//!
//! - Client input errors (missing field, bad file type) - 400
//! - Authentication failures (unknown user, wrong password, bad token) - 401
//! - Duplicate email on registration - 409
//! - Store, hashing, token and I/O failures - 500, details logged only

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
