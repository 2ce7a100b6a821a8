//! API integration tests
//!
//! Integration tests for all API endpoints

mod client_test;
