//! Unique Transaction Reference type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Utr`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UtrError {
    /// The input is empty or whitespace only.
    #[error("UTR cannot be empty")]
    Empty,
}

/// A bank transfer reference submitted as proof of payment.
///
/// The reference is not verified against any bank; the only constraint is
/// that it is non-empty once surrounding whitespace is removed.
///
/// ```
/// use otthub_core::Utr;
///
/// assert_eq!(Utr::parse("  ABC123 ").map(|u| u.into_inner()), Ok("ABC123".to_string()));
/// assert!(Utr::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Utr(String);

impl Utr {
    /// Parse a UTR, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`UtrError::Empty`] if nothing remains after trimming.
    pub fn parse(s: &str) -> Result<Self, UtrError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(UtrError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Utr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Utr {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        let utr = Utr::parse("\tUTR998877\n");
        assert_eq!(utr.as_ref().map(Utr::as_str), Ok("UTR998877"));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Utr::parse(""), Err(UtrError::Empty));
        assert_eq!(Utr::parse("    "), Err(UtrError::Empty));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(UtrError::Empty.to_string(), "UTR cannot be empty");
    }
}
