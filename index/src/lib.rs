//! Configuration store and index aggregator.
//!
//! The configuration (authority, weights, calculation method) gates who may
//! tune scoring; the aggregator folds approved submissions into per-country
//! index records using whatever configuration is current at fold time —
//! configuration changes never apply retroactively.

pub mod aggregate;
pub mod config;

pub use aggregate::{compute_score, fold_submission, CountryIndex, IndexBook};
pub use config::IndexConfig;
