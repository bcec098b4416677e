//! Fundamental types for the CPI (corruption perception index) registry.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: principals, country codes, the block-height clock, raw scores,
//! weights, the calculation method, and the shared categorical error enum.

pub mod country;
pub mod error;
pub mod id;
pub mod method;
pub mod principal;
pub mod score;
pub mod time;
pub mod weights;

pub use country::CountryCode;
pub use error::RegistryError;
pub use id::SubmissionId;
pub use method::CalcMethod;
pub use principal::PrincipalId;
pub use score::{RawScores, Score, MAX_RAW_SCORE, SCORE_CEILING};
pub use time::BlockHeight;
pub use weights::{ScoreWeights, WEIGHT_TOTAL};
