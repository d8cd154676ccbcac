//! Catalog inspection commands.
//!
//! # Usage
//!
//! ```bash
//! pocketshop catalog list
//! pocketshop catalog show wireless-earbuds
//! ```
//!
//! # Environment Variables
//!
//! - `POCKETSHOP_CATALOG_PATH` - External catalog JSON; the bundled demo
//!   catalog is used when unset

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use pocketshop_client::catalog::{Catalog, CatalogError};
use pocketshop_core::{Slug, SlugError};

/// Errors that can occur during catalog commands.
#[derive(Debug, Error)]
pub enum CatalogCommandError {
    /// Catalog file could not be read.
    #[error("could not read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog data was invalid.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The requested slug is not a valid slug at all.
    #[error("invalid slug: {0}")]
    InvalidSlug(#[from] SlugError),

    /// No product carries the requested slug.
    #[error("no product with slug {0:?}")]
    UnknownSlug(String),
}

pub(crate) fn load_catalog() -> Result<Catalog, CatalogCommandError> {
    match std::env::var("POCKETSHOP_CATALOG_PATH").ok().map(PathBuf::from) {
        Some(path) => Ok(Catalog::from_json(&fs::read_to_string(path)?)?),
        None => Ok(Catalog::builtin()),
    }
}

/// Print every product as one line: id, slug, title, price.
#[allow(clippy::print_stdout)]
pub fn list() -> Result<(), CatalogCommandError> {
    let catalog = load_catalog()?;

    for product in catalog.products() {
        println!(
            "{:>4}  {:<24} {:<28} {}",
            product.id.as_i32(),
            product.slug.as_str(),
            product.title,
            product.price.display()
        );
    }
    println!("{} products", catalog.len());

    Ok(())
}

/// Print one product with its image gallery.
#[allow(clippy::print_stdout)]
pub fn show(slug: &str) -> Result<(), CatalogCommandError> {
    let slug = Slug::parse(slug)?;
    let catalog = load_catalog()?;
    let product = catalog
        .by_slug(slug.as_str())
        .ok_or_else(|| CatalogCommandError::UnknownSlug(slug.as_str().to_string()))?;

    println!("id:    {}", product.id);
    println!("slug:  {}", product.slug);
    println!("title: {}", product.title);
    println!("price: {}", product.price.display());
    println!("hero:  {}", product.hero_image);
    for image in &product.images_url {
        println!("image: {image}");
    }

    Ok(())
}
