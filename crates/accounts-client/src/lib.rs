//! # Accounts Client
//!
//! HTTP client for the account-registration endpoint (`POST /api/accounts`).
//!
//! ## AccountsClient
//!
//! Holds one `reqwest::Client` so every registration in a seeding run reuses
//! the same connection pool. Each call sends the request as JSON with
//! `Content-Type: application/json; charset=utf-8` and hands back the raw
//! status and body text.
//!
//! A non-2xx status is **not** an error here: the server's reply (validation
//! message, duplicate email, ...) is part of what the caller prints. Only
//! transport failures (connect, timeout, unreadable body) come back as `Err`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use accounts_client::{AccountRegistrar, AccountRequest, AccountsClient};
//!
//! async fn example() -> Result<(), anyhow::Error> {
//!     let client = AccountsClient::new(
//!         "http://localhost:8083/api/accounts",
//!         Duration::from_secs(30),
//!     )?;
//!     let request = AccountRequest {
//!         email: "person0@email.com".to_string(),
//!         password: "password".to_string(),
//!         nick_name: "김민준".to_string(),
//!         one_line_introduce: "안녕하세요!".to_string(),
//!     };
//!     let response = client.register(&request).await?;
//!     println!("{}", response.body);
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Content type sent with every registration request.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Body of `POST /api/accounts`; serialized as `{email, password, nickName, oneLineIntroduce}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequest {
    pub email: String,
    pub password: String,
    pub nick_name: String,
    pub one_line_introduce: String,
}

/// Raw outcome of one registration call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterResponse {
    pub status: u16,
    pub body: String,
}

impl RegisterResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can register one account. Implemented by [`AccountsClient`];
/// tests drive the seeding loop through their own implementations.
#[async_trait]
pub trait AccountRegistrar: Send + Sync {
    /// Sends one registration request and returns the server's raw reply.
    async fn register(&self, request: &AccountRequest) -> Result<RegisterResponse, anyhow::Error>;
}

/// reqwest-backed registrar bound to one endpoint.
#[derive(Debug, Clone)]
pub struct AccountsClient {
    client: Client,
    endpoint: Url,
}

impl AccountsClient {
    /// Creates a client for `endpoint` with a per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if `endpoint` is not a valid URL or the HTTP client
    /// cannot be built (e.g. TLS backend initialization fails).
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, anyhow::Error> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| anyhow::anyhow!("Invalid accounts endpoint {}: {}", endpoint, e))?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    /// Returns the endpoint every request is posted to.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

#[async_trait]
impl AccountRegistrar for AccountsClient {
    /// Posts `request` to the registration endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be serialized, the connection
    /// fails or times out, or the response body cannot be read. HTTP error
    /// statuses are returned as `Ok` with the status recorded.
    async fn register(&self, request: &AccountRequest) -> Result<RegisterResponse, anyhow::Error> {
        let payload = serde_json::to_vec(request)?;
        debug!(
            endpoint = %self.endpoint,
            email = %request.email,
            payload_len = payload.len(),
            "POST registration request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status, body_len = body.len(), "registration response");
        Ok(RegisterResponse { status, body })
    }
}

#[cfg(test)]
mod accounts_client_test;
