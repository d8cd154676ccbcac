//! Credential transport: exchanging a username/password for a token pair.
//!
//! One HTTP POST to a configured endpoint with JSON body
//! `{ "username": ..., "password": ... }`, expecting a 2xx response with JSON
//! `{ "accessToken": ..., "refreshToken": ... }`. Any network failure,
//! non-2xx status, or malformed body is surfaced uniformly as a
//! [`TransportError`]; there is no retry or backoff.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// How much of an error response body to keep for diagnostics.
const ERROR_BODY_LIMIT: usize = 200;

/// Errors that can occur while talking to the credential endpoint.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network-level failure (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("login endpoint returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Truncated response body.
        body: String,
    },

    /// The response body was not the expected token JSON.
    #[error("malformed token response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Access/refresh token pair returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// The network call exchanging credentials for tokens.
///
/// Stores are generic over this trait so tests can substitute a stub without
/// touching the network.
#[allow(async_fn_in_trait)]
pub trait CredentialTransport {
    /// Authenticate and return the token pair.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on network failure, a non-2xx response, or
    /// a malformed body.
    async fn authenticate(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<TokenPair, TransportError>;
}

/// [`CredentialTransport`] over HTTP using `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    /// Create a transport for the given login endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Http`] if the underlying client cannot be
    /// constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

impl CredentialTransport for HttpTransport {
    async fn authenticate(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<TokenPair, TransportError> {
        let body = LoginRequest {
            username,
            password: password.expose_secret(),
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        // Read the body as text first so failures keep their diagnostics.
        let text = response.text().await?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: text.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        let tokens: TokenPair = serde_json::from_str(&text)?;
        Ok(tokens)
    }
}
