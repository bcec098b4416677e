//! Block-height clock type.
//!
//! The registry has no clock of its own: the host supplies its current block
//! height with every call, and records store whatever value was supplied.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monotonic block height used purely as a timestamp source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlockHeight(u64);

impl BlockHeight {
    /// Height zero (genesis).
    pub const ZERO: Self = Self(0);

    pub fn new(height: u64) -> Self {
        Self(height)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
