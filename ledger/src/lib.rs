//! The submission ledger: append-only assignment of sequential ids to raw
//! data submissions.
//!
//! The ledger is deliberately dumb — it allocates ids and stores immutable
//! records. All validation happens before `append`, so a rejected submission
//! never consumes an id.

pub mod submission;

pub use submission::{Submission, SubmissionLedger};
