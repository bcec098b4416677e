//! Scoring weights for the weighted-average method.

use crate::error::RegistryError;
use serde::{Deserialize, Serialize};

/// Required sum of the three weights.
pub const WEIGHT_TOTAL: u32 = 100;

/// The three scoring weights. A constructed value always sums to exactly
/// `WEIGHT_TOTAL`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub bribery: u32,
    pub transparency: u32,
    pub audit: u32,
}

impl ScoreWeights {
    /// Validate and build a weight triple.
    pub fn new(bribery: u32, transparency: u32, audit: u32) -> Result<Self, RegistryError> {
        let sum = bribery as u64 + transparency as u64 + audit as u64;
        if sum != WEIGHT_TOTAL as u64 {
            return Err(RegistryError::InvalidWeight { sum });
        }
        Ok(Self {
            bribery,
            transparency,
            audit,
        })
    }
}

/// The initial registry configuration: 40/30/30.
impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            bribery: 40,
            transparency: 30,
            audit: 30,
        }
    }
}
