//! Country code type — short ISO-style codes, 1 to 3 characters.

use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A country code of 1 to 3 characters.
///
/// Codes are stored exactly as given — the registry performs no case
/// normalization and no membership check against a known-country list.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CountryCode(String);

impl CountryCode {
    /// Maximum code length in characters.
    pub const MAX_LEN: usize = 3;

    /// Validate and wrap a raw code.
    pub fn new(raw: impl Into<String>) -> Result<Self, RegistryError> {
        let s = raw.into();
        if s.is_empty() || s.chars().count() > Self::MAX_LEN {
            return Err(RegistryError::InvalidCountry(s));
        }
        Ok(Self(s))
    }

    /// Return the raw code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Lets map lookups accept a plain &str. Sound because the derived ordering
// of CountryCode is exactly the ordering of its inner string.
impl Borrow<str> for CountryCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}
