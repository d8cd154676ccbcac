//! Pocketshop Core - Shared types library.
//!
//! This crate provides common types used across all Pocketshop components:
//! - `client` - Storefront client core (catalog, cart, session)
//! - `cli` - Command-line tools for inspecting the catalog and exercising login
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, slugs, prices, and emails,
//!   plus the immutable [`types::Product`] catalog record

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
