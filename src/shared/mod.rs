//! Shared Module
//!
//! This module contains the JSON bodies exchanged between the backend and its
//! clients. Both `backend` handlers and the `client` module serialize the same
//! types, so the wire format is defined in exactly one place.

/// Request and response bodies
pub mod api;

/// Re-export commonly used types for convenience
pub use api::{Credentials, ErrorResponse, MessageResponse, TokenResponse};
