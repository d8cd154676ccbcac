//! Login check command.
//!
//! # Usage
//!
//! ```bash
//! pocketshop login -u user@example.com -p 'correct-horse'
//! ```
//!
//! # Environment Variables
//!
//! - `POCKETSHOP_AUTH_URL` - Login endpoint receiving the credential POST
//! - `POCKETSHOP_HTTP_TIMEOUT_SECS` - Request timeout (default: 10)

use thiserror::Error;

use pocketshop_client::auth::validate_credentials;
use pocketshop_client::config::{ClientConfig, ConfigError};
use pocketshop_client::state::{App, AppError};

/// Errors that can occur during the login check.
#[derive(Debug, Error)]
pub enum LoginCommandError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Application state could not be constructed.
    #[error(transparent)]
    App(#[from] AppError),
}

/// Run the credential exchange and report the session state.
///
/// A rejected login is a reported outcome, not a command failure; the
/// process exits zero either way so scripted checks can parse the output.
#[allow(clippy::print_stdout)]
pub async fn check(username: &str, password: &str) -> Result<(), LoginCommandError> {
    if let Err(e) = validate_credentials(username, password) {
        println!("login failed: {e}");
        println!("authenticated: false");
        return Ok(());
    }

    let config = ClientConfig::from_env()?;
    let mut app = App::new(config)?;

    match app.session_mut().log_in(username, password).await {
        Ok(()) => {
            println!("login successful");
            println!("authenticated: {}", app.session().is_authenticated());
            if let Some(identity) = app.session().identity() {
                println!("identity: {identity}");
            }
        }
        Err(e) => {
            println!("login failed: {e}");
            println!("authenticated: {}", app.session().is_authenticated());
        }
    }

    Ok(())
}
