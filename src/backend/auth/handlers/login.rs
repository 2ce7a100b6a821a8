/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Sign a token identifying the user by id
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::auth::password::verify_password;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::BackendError;
use crate::shared::{Credentials, TokenResponse};

/// Login handler
///
/// # Errors
///
/// * `400`/`415`/`422` - If the body is not a JSON object with both fields
/// * `401 Unauthorized` - `"User not found"` or `"Wrong password"`
/// * `500 Internal Server Error` - If the query, bcrypt or token signing fails
///
/// # Example Response
///
/// ```json
/// {"token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."}
/// ```
pub async fn login(
    State(pool): State<SqlitePool>,
    State(tokens): State<Arc<TokenIssuer>>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<TokenResponse>, BackendError> {
    let Json(request) = payload?;
    tracing::info!("Login request for: {}", request.email);

    let user = get_user_by_email(&pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.email);
            BackendError::unauthorized("User not found")
        })?;

    if !verify_password(&request.password, &user.password_hash)? {
        tracing::warn!("Invalid password for user: {}", request.email);
        return Err(BackendError::unauthorized("Wrong password"));
    }

    let token = tokens.issue(user.id)?;

    tracing::info!("User logged in: {} (id {})", user.email, user.id);

    Ok(Json(TokenResponse { token }))
}
