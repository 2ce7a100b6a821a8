//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Temporary database and upload directory fixtures
//! - Authentication test helpers
//! - Multipart request builders
//! - Custom assertion macros

pub mod assertions;
pub mod auth_helpers;
pub mod requests;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use database::*;
pub use requests::*;
