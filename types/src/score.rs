//! Raw measurement scores and the fixed-point index score.

use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum value for any single raw score.
pub const MAX_RAW_SCORE: u32 = 100;

/// Index score ceiling in centipoints (100.00 index points).
pub const SCORE_CEILING: u32 = 10_000;

/// One raw data point: the three measurements submitted for a country.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawScores {
    pub bribery: u32,
    pub transparency: u32,
    pub audit: u32,
}

impl RawScores {
    pub fn new(bribery: u32, transparency: u32, audit: u32) -> Self {
        Self {
            bribery,
            transparency,
            audit,
        }
    }

    /// Check every component against `MAX_RAW_SCORE`.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for value in [self.bribery, self.transparency, self.audit] {
            if value > MAX_RAW_SCORE {
                return Err(RegistryError::InvalidScore { value });
            }
        }
        Ok(())
    }
}

/// A published index score in centipoints (hundredths of an index point).
///
/// Fixed-point keeps score arithmetic exact: with weights summing to 100,
/// the raw weighted sum of 0–100 inputs is already a centipoint value
/// (e.g. weights 40/30/30 over scores 80/90/85 give 8450 = 84.50).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Score(u32);

impl Score {
    pub const ZERO: Self = Self(0);

    /// The maximum representable score (100.00).
    pub const MAX: Self = Self(SCORE_CEILING);

    /// Build from centipoints, clamping to the ceiling.
    pub fn from_centis(centis: u32) -> Self {
        Self(centis.min(SCORE_CEILING))
    }

    pub fn as_centis(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
