//! Pocketshop CLI - Catalog inspection and login checks.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog
//! pocketshop catalog list
//!
//! # Show one product by slug
//! pocketshop catalog show wireless-earbuds
//!
//! # Run the scripted cart demo against the catalog
//! pocketshop cart demo
//!
//! # Exercise the login flow against the configured endpoint
//! pocketshop login -u user@example.com -p 'correct-horse'
//! ```
//!
//! # Commands
//!
//! - `catalog list` - Print the product catalog
//! - `catalog show` - Print one product with its gallery
//! - `cart demo` - Run a scripted cart session and print derived totals
//! - `login` - Run the credential exchange and report the session state
//!
//! Configuration comes from the environment (see `pocketshop-client`):
//! `POCKETSHOP_AUTH_URL`, `POCKETSHOP_HTTP_TIMEOUT_SECS`,
//! `POCKETSHOP_CATALOG_PATH`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pocketshop")]
#[command(author, version, about = "Pocketshop CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Exercise the cart against the catalog
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Exchange credentials for a session and report the outcome
    Login {
        /// Account email address
        #[arg(short, long)]
        username: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Run a fixed add/increment/decrement sequence and print the totals
    Demo,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List all products
    List,
    /// Show one product by slug
    Show {
        /// Product slug (e.g., wireless-earbuds)
        slug: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list()?,
            CatalogAction::Show { slug } => commands::catalog::show(&slug)?,
        },
        Commands::Cart { action } => match action {
            CartAction::Demo => commands::cart::demo()?,
        },
        Commands::Login { username, password } => {
            commands::login::check(&username, &password).await?;
        }
    }
    Ok(())
}
