//! Session store: the single source of truth for "is a user logged in".
//!
//! Two states: logged out (initial) and logged in. The only way in is a
//! successful [`SessionStore::log_in`], which performs one credential
//! exchange over the transport and one vault write, then sets the identity.
//! The only way out is [`SessionStore::log_out`], which is idempotent.
//!
//! Logging in while already logged in is permitted and last-write-wins; no
//! revocation call is made for the replaced session. The store does not guard
//! against overlapping `log_in` calls: the caller disables the submit action
//! while a call is in flight.

mod error;

pub use error::SessionError;

use secrecy::SecretString;
use tracing::{debug, instrument};

use pocketshop_core::Email;

use crate::transport::CredentialTransport;
use crate::vault::TokenVault;

/// Minimum password length accepted by the sign-in form.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Authentication state for the current app session.
pub struct SessionStore<T> {
    identity: Option<String>,
    transport: T,
    vault: Box<dyn TokenVault>,
}

impl<T: CredentialTransport> SessionStore<T> {
    /// Create a logged-out session store.
    #[must_use]
    pub fn new(transport: T, vault: Box<dyn TokenVault>) -> Self {
        Self {
            identity: None,
            transport,
            vault,
        }
    }

    /// Exchange credentials for a token pair and establish the session.
    ///
    /// On success the token pair is written to the vault and the identity is
    /// set, in that order; a failure at any step leaves the prior session
    /// state untouched. Exactly one vault write and one identity set happen
    /// per successful call.
    ///
    /// Credentials arrive here already validated: the form layer calls
    /// [`validate_credentials`] before dispatching, so malformed input never
    /// reaches the network.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Transport` if the endpoint rejects the login or
    /// is unreachable.
    /// Returns `SessionError::Vault` if the tokens cannot be stored.
    #[instrument(skip(self, password))]
    pub async fn log_in(&mut self, username: &str, password: &str) -> Result<(), SessionError> {
        let password = SecretString::from(password.to_owned());
        let tokens = self.transport.authenticate(username, &password).await?;

        self.vault.store(&tokens)?;
        self.identity = Some(username.to_owned());
        debug!("session established");

        Ok(())
    }

    /// Clear the identity and remove both tokens from the vault.
    ///
    /// Idempotent: logging out while already logged out is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Vault` if the vault cannot be cleared.
    pub fn log_out(&mut self) -> Result<(), SessionError> {
        self.vault.clear()?;
        if self.identity.take().is_some() {
            debug!("session cleared");
        }
        Ok(())
    }

    /// Whether a user is currently logged in.
    ///
    /// Pure in-memory predicate; no network access, no token validation.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// The logged-in identity, if any.
    #[must_use]
    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// Read access to the token vault.
    #[must_use]
    pub fn vault(&self) -> &dyn TokenVault {
        self.vault.as_ref()
    }
}

/// Validate credentials before they reach the session store.
///
/// The sign-in form uses the email address as the username; the password must
/// be at least [`MIN_PASSWORD_LENGTH`] characters. The form layer calls this
/// before dispatching [`SessionStore::log_in`], so no network call is made
/// for input that could never authenticate.
///
/// # Errors
///
/// Returns `SessionError::InvalidEmail` or `SessionError::WeakPassword`.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), SessionError> {
    Email::parse(username)?;

    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(SessionError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}
