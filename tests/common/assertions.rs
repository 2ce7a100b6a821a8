//! Custom assertion macros and utilities
//!
//! Provides assertion macros with more descriptive failure output for the
//! `(StatusCode, serde_json::Value)` pairs returned by `TestApp::send`.

/// Assert a response status and, optionally, its `error` message
#[macro_export]
macro_rules! assert_error_response {
    ($response:expr, $status:expr) => {
        let (status, body) = &$response;
        assert_eq!(*status, $status, "unexpected status, body: {}", body);
        assert!(
            body.get("error").is_some(),
            "expected an error body, got: {}",
            body
        );
    };
    ($response:expr, $status:expr, $message:expr) => {
        let (status, body) = &$response;
        assert_eq!(*status, $status, "unexpected status, body: {}", body);
        assert_eq!(body["error"], $message, "unexpected error body: {}", body);
    };
}

/// Assert a 200 response carrying `{"message": ...}`
#[macro_export]
macro_rules! assert_message_response {
    ($response:expr, $message:expr) => {
        let (status, body) = &$response;
        assert_eq!(
            *status,
            axum::http::StatusCode::OK,
            "unexpected status, body: {}",
            body
        );
        assert_eq!(body["message"], $message, "unexpected body: {}", body);
    };
}
