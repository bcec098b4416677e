//! Per-submission quorum tracking.
//!
//! Every submission carries a verification record co-created with it. Each
//! verification call increments the record's counter by one; on the call
//! that first brings the counter to [`QUORUM_THRESHOLD`], the submission is
//! approved and the caller is told to aggregate. Approval is monotone.
//!
//! Quorum counts *calls*, not distinct verifier identities — the same
//! verifier calling three times completes the quorum. Deduplication, if
//! wanted, belongs to the host's verifier roster.

pub mod tracker;

pub use tracker::{QuorumOutcome, VerificationRecord, VerificationTracker, QUORUM_THRESHOLD};
