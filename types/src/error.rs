//! The categorical error set shared by every registry entry point.

use crate::SubmissionId;
use thiserror::Error;

/// Common error type for the CPI registry.
///
/// Every failure is total: an entry point that returns an error has written
/// nothing, and the state machine remains usable for the next call.
#[derive(Clone, Debug, Error)]
pub enum RegistryError {
    #[error("caller is not authorized for this operation")]
    Unauthorized,

    #[error("authority has already been set")]
    AlreadySet,

    #[error("principal {0} is reserved and cannot act as authority")]
    InvalidPrincipal(String),

    #[error("weights must sum to 100, got {sum}")]
    InvalidWeight { sum: u64 },

    #[error("unrecognized calculation method: {0}")]
    InvalidCalcMethod(String),

    #[error("invalid country code: {0:?}")]
    InvalidCountry(String),

    #[error("raw score {value} exceeds maximum of 100")]
    InvalidScore { value: u32 },

    #[error("no submission found for id {0}")]
    DataNotFound(SubmissionId),
}
