/**
 * Filedrop HTTP Client
 *
 * Async client for `/register`, `/login` and `/upload`. After a successful
 * `login` the token is kept and sent as `Authorization: Bearer` on uploads.
 */

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::shared::{Credentials, ErrorResponse, MessageResponse, TokenResponse};

/// Client errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Request failed: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Not logged in")]
    NotAuthenticated,
}

/// Client for a single Filedrop server
#[derive(Debug, Clone)]
pub struct FiledropClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl FiledropClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Reuse a token obtained elsewhere
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Create an account
    pub async fn register(&self, email: &str, password: &str) -> Result<MessageResponse, ClientError> {
        let response = self
            .http
            .post(self.url("/register"))
            .json(&credentials(email, password))
            .send()
            .await?;

        parse_response(response).await
    }

    /// Log in and remember the returned token
    pub async fn login(&mut self, email: &str, password: &str) -> Result<String, ClientError> {
        let response = self
            .http
            .post(self.url("/login"))
            .json(&credentials(email, password))
            .send()
            .await?;

        let TokenResponse { token } = parse_response(response).await?;
        self.token = Some(token.clone());
        Ok(token)
    }

    /// Upload `data` under `filename` as the multipart field `file`
    pub async fn upload(
        &self,
        filename: &str,
        data: Vec<u8>,
    ) -> Result<MessageResponse, ClientError> {
        let token = self.token.as_deref().ok_or(ClientError::NotAuthenticated)?;

        let part = Part::bytes(data).file_name(filename.to_string());
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(self.url("/upload"))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;

        parse_response(response).await
    }
}

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials {
        email: email.to_string(),
        password: password.to_string(),
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&text)
        .map(|body| body.error)
        .unwrap_or_else(|_| if text.is_empty() { status.to_string() } else { text });

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
