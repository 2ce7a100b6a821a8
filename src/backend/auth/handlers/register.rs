/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Hash password using bcrypt
 * 2. Insert user; the store rejects duplicate emails
 * 3. Return an acknowledgment (no token; clients log in separately)
 *
 * No email format or password strength rules are applied.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::auth::password::hash_password;
use crate::backend::auth::users::{create_user, is_unique_violation};
use crate::backend::error::BackendError;
use crate::shared::{Credentials, MessageResponse};

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - If the password is longer than bcrypt can hash
/// * `400`/`415`/`422` - If the body is not a JSON object with both fields
/// * `409 Conflict` - If the email is already registered
/// * `500 Internal Server Error` - If hashing or the insert fails
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// {"email": "user@example.com", "password": "hunter2"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"message": "User created"}
/// ```
pub async fn register(
    State(pool): State<SqlitePool>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<MessageResponse>, BackendError> {
    let Json(request) = payload?;
    tracing::info!("Register request for email: {}", request.email);

    let password_hash = hash_password(&request.password)?;

    let user_id = create_user(&pool, &request.email, &password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                tracing::warn!("Email already registered: {}", request.email);
                BackendError::DuplicateEmail {
                    email: request.email.clone(),
                }
            } else {
                BackendError::from(e)
            }
        })?;

    tracing::info!("User created: {} (id {})", request.email, user_id);

    Ok(Json(MessageResponse::new("User created")))
}
