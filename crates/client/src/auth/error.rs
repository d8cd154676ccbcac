//! Session error types.

use thiserror::Error;

use pocketshop_core::EmailError;

use crate::transport::TransportError;
use crate::vault::VaultError;

/// Errors that can occur during session operations.
///
/// All of these are recovered at the store boundary; none are fatal. The
/// presentation layer renders the `Display` form as the failure message.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The sign-in email failed validation before any network call.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The password failed validation before any network call.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// The credential endpoint rejected the login or was unreachable.
    #[error("login failed: {0}")]
    Transport(#[from] TransportError),

    /// The secure token vault failed.
    #[error("token vault error: {0}")]
    Vault(#[from] VaultError),
}
