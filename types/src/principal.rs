//! Principal identity type supplied by the host environment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque identity for an external caller: submitter, verifier, or authority.
///
/// The registry never interprets the contents; equality is by value. The one
/// identity it does recognize is the reserved burn principal, which can never
/// be installed as the authority.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrincipalId(String);

impl PrincipalId {
    /// The reserved burn identity.
    pub const BURN: &'static str = "burn";

    /// Create a principal from a raw identity string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The reserved burn principal.
    pub fn burn() -> Self {
        Self(Self::BURN.to_string())
    }

    /// True for the reserved burn principal.
    pub fn is_reserved(&self) -> bool {
        self.0 == Self::BURN
    }

    /// Return the raw identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PrincipalId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for PrincipalId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
