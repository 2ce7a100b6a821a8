//! Database migration and store tests
//!
//! Tests to ensure migrations run correctly and the store enforces its
//! invariants on its own.

use filedrop::backend::auth::users::{create_user, get_user_by_email, is_unique_violation};
use filedrop::backend::upload::files::{get_files_by_name, record_file};
use pretty_assertions::assert_eq;

use crate::common::TestApp;

#[tokio::test]
async fn test_tables_exist() {
    let app = TestApp::new().await;

    for table in ["users", "files"] {
        let result = sqlx::query(&format!("SELECT 1 FROM {table} LIMIT 1"))
            .execute(app.pool())
            .await;
        assert!(result.is_ok(), "{table} table should exist");
    }
}

#[tokio::test]
async fn test_create_and_find_user() {
    let app = TestApp::new().await;

    let id = create_user(app.pool(), "store@example.com", "hash").await.unwrap();
    let user = get_user_by_email(app.pool(), "store@example.com")
        .await
        .unwrap()
        .expect("user should exist");

    assert_eq!(user.id, id);
    assert_eq!(user.email, "store@example.com");
    assert_eq!(user.password_hash, "hash");
}

#[tokio::test]
async fn test_find_missing_user() {
    let app = TestApp::new().await;
    let user = get_user_by_email(app.pool(), "missing@example.com").await.unwrap();
    assert!(user.is_none());
}

#[tokio::test]
async fn test_user_ids_are_unique() {
    let app = TestApp::new().await;
    let first = create_user(app.pool(), "one@example.com", "h").await.unwrap();
    let second = create_user(app.pool(), "two@example.com", "h").await.unwrap();
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_email_uniqueness_enforced_by_store() {
    let app = TestApp::new().await;

    create_user(app.pool(), "same@example.com", "h1").await.unwrap();
    let err = create_user(app.pool(), "same@example.com", "h2")
        .await
        .unwrap_err();

    assert!(is_unique_violation(&err), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_record_file_without_user() {
    let app = TestApp::new().await;

    let id = record_file(app.pool(), "orphan.pdf", None).await.unwrap();
    let records = get_files_by_name(app.pool(), "orphan.pdf").await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, id);
    assert_eq!(records[0].user_id, None);
}

#[tokio::test]
async fn test_file_user_id_is_not_a_foreign_key() {
    let app = TestApp::new().await;

    // No user 999 exists; the insert must still succeed.
    record_file(app.pool(), "dangling.png", Some(999)).await.unwrap();
    let records = get_files_by_name(app.pool(), "dangling.png").await.unwrap();
    assert_eq!(records[0].user_id, Some(999));
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let app = TestApp::new().await;
    let result = sqlx::migrate!().run(app.pool()).await;
    assert!(result.is_ok(), "re-running migrations should be a no-op");
}

#[tokio::test]
async fn test_create_app_prepares_store_and_upload_dir() {
    use filedrop::backend::server::{config::AppConfig, init::create_app};

    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("fresh.db");
    let upload_dir = dir.path().join("nested").join("uploads");
    let config = AppConfig::builder()
        .database_url(format!("sqlite:{}", db_path.display()))
        .upload_dir(&upload_dir)
        .jwt_secret("startup-secret")
        .build()
        .unwrap();

    let _app = create_app(config).await.expect("app should start");

    assert!(upload_dir.is_dir());
    assert!(db_path.exists());
}
