//! Scripted cart demo command.
//!
//! # Usage
//!
//! ```bash
//! pocketshop cart demo
//! ```
//!
//! Runs a fixed sequence of cart operations against the catalog (add twice,
//! increment, add a second product, increment and decrement it) and prints
//! the resulting lines and derived totals. Useful as a smoke check that the
//! cart math and catalog pricing agree.

use thiserror::Error;

use pocketshop_client::cart::{CartError, CartStore};
use pocketshop_client::catalog::Catalog;
use pocketshop_core::{CurrencyCode, Price};

use super::catalog::{CatalogCommandError, load_catalog};

/// Errors that can occur during the cart demo.
#[derive(Debug, Error)]
pub enum CartCommandError {
    /// Catalog could not be loaded.
    #[error(transparent)]
    Load(#[from] CatalogCommandError),

    /// The catalog has no products to put in a cart.
    #[error("catalog is empty, nothing to add")]
    EmptyCatalog,

    /// A cart operation failed.
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Run the fixed operation sequence against the catalog's first products.
///
/// The double add on the first product exercises the no-duplicate rule; the
/// increment/decrement pair on the second leaves it back at quantity 1.
fn scripted_cart(catalog: &Catalog) -> Result<CartStore, CartCommandError> {
    let mut products = catalog.products().iter();
    let first = products.next().ok_or(CartCommandError::EmptyCatalog)?;

    let mut cart = CartStore::new();
    cart.add_item(first.id);
    cart.add_item(first.id);
    cart.increment_item(first.id)?;

    if let Some(second) = products.next() {
        cart.add_item(second.id);
        cart.increment_item(second.id)?;
        cart.decrement_item(second.id)?;
    }

    Ok(cart)
}

/// Print the scripted cart with its derived totals.
#[allow(clippy::print_stdout)]
pub fn demo() -> Result<(), CartCommandError> {
    let catalog = load_catalog()?;
    let cart = scripted_cart(&catalog)?;

    for item in cart.items() {
        if let Some(product) = catalog.by_id(item.id) {
            println!(
                "{:<24} x{:<3} {}",
                product.slug.as_str(),
                item.quantity,
                product.price.display()
            );
        }
    }
    println!("total items: {}", cart.total_items());
    println!(
        "total price: {}",
        Price::new(cart.total_price(&catalog), CurrencyCode::USD).display()
    );

    Ok(())
}
