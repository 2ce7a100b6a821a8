//! Authentication test helpers
//!
//! Provides utilities for creating test users and tokens without going
//! through the HTTP layer.

use filedrop::backend::auth::password::hash_password;
use filedrop::backend::auth::users::create_user;
use uuid::Uuid;

use super::database::TestApp;

/// Test user credentials
pub struct TestUser {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Create a test user in the database and issue a token for it
pub async fn create_test_user(app: &TestApp, email: &str, password: &str) -> TestUser {
    let password_hash = hash_password(password).expect("Failed to hash password");
    let id = create_user(app.pool(), email, &password_hash)
        .await
        .expect("Failed to create test user");
    let token = app.state.tokens.issue(id).expect("Failed to create test token");

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
        token,
    }
}

/// Create a test user with a unique email
pub async fn create_unique_test_user(app: &TestApp) -> TestUser {
    let email = format!("test_{}@example.com", Uuid::new_v4());
    create_test_user(app, &email, "test_password_123").await
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
