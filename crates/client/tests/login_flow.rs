//! End-to-end login flow against an in-process credential endpoint.
//!
//! Spins up a stub login endpoint on an ephemeral port and drives the real
//! `HttpTransport` through the session store, covering the success path, the
//! rejected-credentials path, and logout idempotence.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use pocketshop_client::auth::{SessionError, SessionStore};
use pocketshop_client::transport::{HttpTransport, TransportError};
use pocketshop_client::vault::MemoryVault;

#[derive(Deserialize)]
struct Credentials {
    username: String,
    password: String,
}

/// Accepts alice/secret, rejects everyone else with 401.
async fn login(Json(creds): Json<Credentials>) -> impl IntoResponse {
    if creds.username == "alice@example.com" && creds.password == "secret" {
        (
            StatusCode::OK,
            Json(json!({ "accessToken": "A", "refreshToken": "B" })),
        )
            .into_response()
    } else {
        (StatusCode::UNAUTHORIZED, "invalid credentials").into_response()
    }
}

/// Start the stub endpoint and return its login URL.
async fn start_stub() -> String {
    let app = Router::new().route("/login", post(login));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/login")
}

fn session_for(url: &str) -> SessionStore<HttpTransport> {
    let transport =
        HttpTransport::new(url.parse().unwrap(), Duration::from_secs(5)).unwrap();
    SessionStore::new(transport, Box::new(MemoryVault::new()))
}

#[tokio::test]
async fn login_success_sets_identity_and_stores_tokens() {
    let url = start_stub().await;
    let mut session = session_for(&url);

    session.log_in("alice@example.com", "secret").await.unwrap();

    assert!(session.is_authenticated());
    assert_eq!(session.identity(), Some("alice@example.com"));
    assert_eq!(session.vault().access_token().unwrap().as_deref(), Some("A"));
    assert_eq!(session.vault().refresh_token().unwrap().as_deref(), Some("B"));
}

#[tokio::test]
async fn rejected_login_leaves_store_logged_out() {
    let url = start_stub().await;
    let mut session = session_for(&url);

    let result = session.log_in("mallory@example.com", "hunter2").await;

    assert!(matches!(
        result,
        Err(SessionError::Transport(TransportError::Status {
            status: 401,
            ..
        }))
    ));
    assert!(!session.is_authenticated());
    assert_eq!(session.vault().access_token().unwrap(), None);
}

#[tokio::test]
async fn rejected_relogin_keeps_previous_session() {
    let url = start_stub().await;
    let mut session = session_for(&url);

    session.log_in("alice@example.com", "secret").await.unwrap();
    let result = session.log_in("mallory@example.com", "hunter2").await;

    assert!(result.is_err());
    assert_eq!(session.identity(), Some("alice@example.com"));
    assert_eq!(session.vault().access_token().unwrap().as_deref(), Some("A"));
    assert_eq!(session.vault().refresh_token().unwrap().as_deref(), Some("B"));
}

#[tokio::test]
async fn logout_after_login_clears_everything_and_stays_quiet() {
    let url = start_stub().await;
    let mut session = session_for(&url);

    session.log_in("alice@example.com", "secret").await.unwrap();
    session.log_out().unwrap();
    session.log_out().unwrap();

    assert!(!session.is_authenticated());
    assert_eq!(session.vault().access_token().unwrap(), None);
    assert_eq!(session.vault().refresh_token().unwrap(), None);
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Bind a port and drop the listener so nothing is listening there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut session = session_for(&format!("http://{addr}/login"));
    let result = session.log_in("alice@example.com", "secret").await;

    assert!(matches!(
        result,
        Err(SessionError::Transport(TransportError::Http(_)))
    ));
    assert!(!session.is_authenticated());
}
