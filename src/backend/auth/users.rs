/**
 * User Model and Database Operations
 *
 * Users are created on registration and never updated or deleted.
 * Email uniqueness is enforced by the `users` table itself.
 */

use serde::Serialize;
use sqlx::SqlitePool;

/// User struct representing a row of the `users` table
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// System-assigned user ID
    pub id: i64,
    /// User email address (unique)
    pub email: String,
    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    #[sqlx(rename = "password")]
    pub password_hash: String,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email
/// * `password_hash` - Hashed password
///
/// # Returns
/// The new user's ID. A duplicate email surfaces as a database error for
/// which [`is_unique_violation`] returns true.
pub async fn create_user(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO users (email, password)
        VALUES (?, ?)
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Whether `err` is the store rejecting a duplicate unique key
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}
