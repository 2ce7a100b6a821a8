//! Integration tests against the assembled router and a temporary store

pub mod api;
