//! Index calculation method.

use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a country's index score is computed from an approved submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalcMethod {
    /// Weighted by the configured `ScoreWeights`.
    #[default]
    WeightedAverage,
    /// Plain mean of the three raw scores.
    SimpleAverage,
}

impl CalcMethod {
    pub const WEIGHTED: &'static str = "weighted-average";
    pub const SIMPLE: &'static str = "simple-average";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WeightedAverage => Self::WEIGHTED,
            Self::SimpleAverage => Self::SIMPLE,
        }
    }
}

impl FromStr for CalcMethod {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::WEIGHTED => Ok(Self::WeightedAverage),
            Self::SIMPLE => Ok(Self::SimpleAverage),
            other => Err(RegistryError::InvalidCalcMethod(other.to_string())),
        }
    }
}

impl fmt::Display for CalcMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_names_parse() {
        assert_eq!(
            "weighted-average".parse::<CalcMethod>().unwrap(),
            CalcMethod::WeightedAverage
        );
        assert_eq!(
            "simple-average".parse::<CalcMethod>().unwrap(),
            CalcMethod::SimpleAverage
        );
    }

    #[test]
    fn unrecognized_name_is_rejected() {
        let err = "median".parse::<CalcMethod>().unwrap_err();
        assert!(matches!(err, RegistryError::InvalidCalcMethod(name) if name == "median"));
    }

    #[test]
    fn as_str_round_trips() {
        for method in [CalcMethod::WeightedAverage, CalcMethod::SimpleAverage] {
            assert_eq!(method.as_str().parse::<CalcMethod>().unwrap(), method);
        }
    }
}
