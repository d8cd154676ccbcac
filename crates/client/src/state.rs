//! Application state owning the stores.
//!
//! [`App`] is the explicitly constructed context the presentation layer is
//! handed: it owns the configuration, the catalog, the cart store, and the
//! session store, and all mutation funnels through their operations. There
//! are no ambient singletons; drop the `App` and the client state is gone.
//!
//! The cart and session expose `&mut` accessors rather than interior
//! mutability: the UI's single logical thread of user actions is the only
//! writer.

use std::fs;

use thiserror::Error;

use crate::auth::SessionStore;
use crate::cart::CartStore;
use crate::catalog::{Catalog, CatalogError};
use crate::config::ClientConfig;
use crate::transport::{HttpTransport, TransportError};
use crate::vault::{MemoryVault, TokenVault};

/// Errors that can occur while constructing the application state.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog file could not be read.
    #[error("catalog file error: {0}")]
    CatalogFile(#[from] std::io::Error),

    /// Catalog data was invalid.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// HTTP transport could not be constructed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Application context owning all client-core state.
pub struct App {
    config: ClientConfig,
    catalog: Catalog,
    cart: CartStore,
    session: SessionStore<HttpTransport>,
}

impl App {
    /// Build the application state from configuration, wiring the HTTP
    /// transport and an in-memory token vault.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] if the catalog cannot be loaded or the transport
    /// cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, AppError> {
        Self::with_vault(config, Box::new(MemoryVault::new()))
    }

    /// Build the application state with a caller-supplied token vault
    /// (e.g., the platform's secure storage).
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] if the catalog cannot be loaded or the transport
    /// cannot be constructed.
    pub fn with_vault(
        config: ClientConfig,
        vault: Box<dyn TokenVault>,
    ) -> Result<Self, AppError> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_json(&fs::read_to_string(path)?)?,
            None => Catalog::builtin(),
        };

        let transport = HttpTransport::new(config.auth_url.clone(), config.http_timeout)?;
        let session = SessionStore::new(transport, vault);

        Ok(Self {
            config,
            catalog,
            cart: CartStore::new(),
            session,
        })
    }

    /// Get a reference to the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Get mutable access to the cart store.
    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// Get a reference to the session store.
    #[must_use]
    pub const fn session(&self) -> &SessionStore<HttpTransport> {
        &self.session
    }

    /// Get mutable access to the session store.
    pub const fn session_mut(&mut self) -> &mut SessionStore<HttpTransport> {
        &mut self.session
    }
}
