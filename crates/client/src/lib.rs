//! Pocketshop client core.
//!
//! The state-management layer of a mobile storefront: a static product
//! catalog, an in-memory cart aggregate, and a session store that exchanges
//! credentials for a token pair and keeps it in a secure vault.
//!
//! The presentation layer (screens, navigation) lives outside this crate. It
//! reads the [`catalog::Catalog`], mutates the [`cart::CartStore`] and
//! [`auth::SessionStore`] through their operations, and renders the results.
//! All state is owned by an explicitly constructed [`state::App`] context;
//! there are no global singletons.
//!
//! # Example
//!
//! ```rust,ignore
//! use pocketshop_client::config::ClientConfig;
//! use pocketshop_client::state::App;
//!
//! let config = ClientConfig::from_env()?;
//! let mut app = App::new(config)?;
//!
//! let product = app.catalog().by_slug("wireless-earbuds").unwrap();
//! app.cart_mut().add_item(product.id);
//!
//! app.session_mut().log_in("user@example.com", "hunter2!").await?;
//! assert!(app.session().is_authenticated());
//! ```
//!
//! # Known limitations
//!
//! Faithful to the source design, the cart is not persisted across process
//! restarts, tokens are never refreshed or expiry-checked, and an in-flight
//! login cannot be cancelled. Callers must serialize login submissions; the
//! session store does not guard against overlapping calls.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod state;
pub mod transport;
pub mod vault;
