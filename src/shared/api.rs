//! API Types
//!
//! Request and response bodies for `/register`, `/login` and `/upload`.

use serde::{Deserialize, Serialize};

/// Email and password pair
///
/// Body of both `POST /register` and `POST /login`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Credentials {
    /// User's email address
    pub email: String,
    /// Plaintext password (hashed before storage, never logged)
    pub password: String,
}

/// Successful login response
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TokenResponse {
    /// Signed bearer token identifying the user
    pub token: String,
}

/// Plain acknowledgment, returned by `/register` and `/upload`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error body returned with every 4xx/5xx response
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
    /// HTTP status code, repeated in the body for clients that lose it
    #[serde(default)]
    pub status: Option<u16>,
}
