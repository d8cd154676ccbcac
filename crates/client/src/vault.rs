//! Secure token vault seam.
//!
//! The vault is device-level secure key-value storage for the session's
//! token pair. The real implementation (platform keychain/keystore with
//! "available while unlocked" accessibility) lives outside this crate; the
//! trait here is the seam it plugs into. [`MemoryVault`] is the in-process
//! implementation used for tests and default wiring.

use std::collections::HashMap;

use thiserror::Error;

use crate::transport::TokenPair;

/// Vault key holding the access token.
pub const ACCESS_TOKEN_KEY: &str = "access";

/// Vault key holding the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh";

/// Errors that can occur during vault operations.
#[derive(Debug, Error)]
pub enum VaultError {
    /// The underlying storage failed.
    #[error("vault storage error: {0}")]
    Storage(String),
}

/// Secure key-value storage for the session token pair.
///
/// Methods are synchronous and dyn-safe; implementations back them with
/// whatever the platform offers. `clear` must succeed when the vault is
/// already empty (logout is idempotent).
pub trait TokenVault: Send + Sync {
    /// Write both tokens under [`ACCESS_TOKEN_KEY`] and [`REFRESH_TOKEN_KEY`].
    ///
    /// # Errors
    ///
    /// Returns [`VaultError`] if the underlying storage fails.
    fn store(&mut self, tokens: &TokenPair) -> Result<(), VaultError>;

    /// Remove both tokens. A no-op when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError`] if the underlying storage fails.
    fn clear(&mut self) -> Result<(), VaultError>;

    /// The stored access token, if any.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError`] if the underlying storage fails.
    fn access_token(&self) -> Result<Option<String>, VaultError>;

    /// The stored refresh token, if any.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError`] if the underlying storage fails.
    fn refresh_token(&self) -> Result<Option<String>, VaultError>;
}

/// In-process [`TokenVault`] backed by a map.
#[derive(Debug, Default)]
pub struct MemoryVault {
    entries: HashMap<&'static str, String>,
}

impl MemoryVault {
    /// Create an empty vault.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenVault for MemoryVault {
    fn store(&mut self, tokens: &TokenPair) -> Result<(), VaultError> {
        self.entries
            .insert(ACCESS_TOKEN_KEY, tokens.access_token.clone());
        self.entries
            .insert(REFRESH_TOKEN_KEY, tokens.refresh_token.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), VaultError> {
        self.entries.remove(ACCESS_TOKEN_KEY);
        self.entries.remove(REFRESH_TOKEN_KEY);
        Ok(())
    }

    fn access_token(&self) -> Result<Option<String>, VaultError> {
        Ok(self.entries.get(ACCESS_TOKEN_KEY).cloned())
    }

    fn refresh_token(&self) -> Result<Option<String>, VaultError> {
        Ok(self.entries.get(REFRESH_TOKEN_KEY).cloned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tokens(access: &str, refresh: &str) -> TokenPair {
        TokenPair {
            access_token: access.to_string(),
            refresh_token: refresh.to_string(),
        }
    }

    #[test]
    fn test_store_and_read_back() {
        let mut vault = MemoryVault::new();
        vault.store(&tokens("A", "B")).unwrap();

        assert_eq!(vault.access_token().unwrap().as_deref(), Some("A"));
        assert_eq!(vault.refresh_token().unwrap().as_deref(), Some("B"));
    }

    #[test]
    fn test_store_overwrites_previous_pair() {
        let mut vault = MemoryVault::new();
        vault.store(&tokens("A1", "B1")).unwrap();
        vault.store(&tokens("A2", "B2")).unwrap();

        assert_eq!(vault.access_token().unwrap().as_deref(), Some("A2"));
        assert_eq!(vault.refresh_token().unwrap().as_deref(), Some("B2"));
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let mut vault = MemoryVault::new();
        vault.store(&tokens("A", "B")).unwrap();
        vault.clear().unwrap();

        assert_eq!(vault.access_token().unwrap(), None);
        assert_eq!(vault.refresh_token().unwrap(), None);
    }

    #[test]
    fn test_clear_on_empty_vault_succeeds() {
        let mut vault = MemoryVault::new();
        assert!(vault.clear().is_ok());
        assert!(vault.clear().is_ok());
    }
}
