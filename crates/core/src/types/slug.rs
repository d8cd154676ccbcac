//! URL-safe product slug type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Slug`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum SlugError {
    /// The input string is empty.
    #[error("slug cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("slug must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside `[a-z0-9-]`.
    #[error("slug may only contain lowercase letters, digits, and dashes (found {found:?})")]
    InvalidCharacter {
        /// First offending character.
        found: char,
    },
    /// The input starts or ends with a dash, or contains a double dash.
    #[error("slug dashes must separate non-empty segments")]
    BadDashPlacement,
}

/// A URL-safe product slug.
///
/// Slugs identify products in navigation paths, so they are restricted to
/// characters that never need percent-encoding.
///
/// ## Constraints
///
/// - Length: 1-128 characters
/// - Only ASCII lowercase letters, digits, and `-`
/// - No leading, trailing, or consecutive dashes
///
/// ## Examples
///
/// ```
/// use pocketshop_core::Slug;
///
/// assert!(Slug::parse("wireless-earbuds").is_ok());
/// assert!(Slug::parse("usb-c-hub-4k").is_ok());
///
/// assert!(Slug::parse("").is_err());            // empty
/// assert!(Slug::parse("Wireless").is_err());    // uppercase
/// assert!(Slug::parse("-earbuds").is_err());    // leading dash
/// assert!(Slug::parse("usb--hub").is_err());    // double dash
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Maximum length of a slug.
    pub const MAX_LENGTH: usize = 128;

    /// Parse a `Slug` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Is longer than 128 characters
    /// - Contains characters outside `[a-z0-9-]`
    /// - Has a leading, trailing, or doubled dash
    pub fn parse(s: &str) -> Result<Self, SlugError> {
        if s.is_empty() {
            return Err(SlugError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(SlugError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(found) = s
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(SlugError::InvalidCharacter { found });
        }

        if s.starts_with('-') || s.ends_with('-') || s.contains("--") {
            return Err(SlugError::BadDashPlacement);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Slug` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
