//! End-to-end tests: the HTTP client against a live listener

use std::net::SocketAddr;

use filedrop::client::{ClientError, FiledropClient};
use pretty_assertions::assert_eq;

use crate::common::TestApp;

/// Serve the fixture's router on an ephemeral port
async fn spawn_server(app: &TestApp) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    let router = app.router.clone();

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });

    addr
}

#[tokio::test]
async fn test_client_register_login_upload() {
    let app = TestApp::new().await;
    let addr = spawn_server(&app).await;
    let mut client = FiledropClient::new(format!("http://{addr}"));

    let created = client.register("eve@example.com", "password123").await.unwrap();
    assert_eq!(created.message, "User created");

    let token = client.login("eve@example.com", "password123").await.unwrap();
    assert_eq!(client.token(), Some(token.as_str()));

    let uploaded = client.upload("photo.jpg", b"jpeg-bytes".to_vec()).await.unwrap();
    assert_eq!(uploaded.message, "File uploaded");

    let stored = std::fs::read(app.upload_dir().join("photo.jpg")).unwrap();
    assert_eq!(stored, b"jpeg-bytes");
}

#[tokio::test]
async fn test_client_surfaces_api_errors() {
    let app = TestApp::new().await;
    let addr = spawn_server(&app).await;
    let mut client = FiledropClient::new(format!("http://{addr}"));

    match client.login("ghost@example.com", "pw").await {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "User not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }

    client.register("frank@example.com", "pw").await.unwrap();
    client.login("frank@example.com", "pw").await.unwrap();

    match client.upload("notes.txt", b"hello".to_vec()).await {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Only images and PDFs allowed");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_client_with_bad_token_is_rejected() {
    let app = TestApp::new().await;
    let addr = spawn_server(&app).await;
    let client = FiledropClient::new(format!("http://{addr}")).with_token("garbage");

    match client.upload("a.png", vec![1, 2, 3]).await {
        Err(ClientError::Api { status, .. }) => assert_eq!(status, 401),
        other => panic!("expected Api error, got {other:?}"),
    }
}
