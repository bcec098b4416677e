//! Verification records and the tracker that owns them.

use cpi_types::{BlockHeight, RegistryError, SubmissionId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of verification calls required before a submission is approved.
pub const QUORUM_THRESHOLD: u32 = 3;

/// Quorum state for one submission.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Count of verification calls received so far.
    pub verifier_count: u32,
    /// Monotone: once true, never reverts.
    pub approved: bool,
    /// Block height of the last update.
    pub timestamp: BlockHeight,
}

/// Outcome of recording one verification call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuorumOutcome {
    /// Below threshold; nothing to aggregate yet.
    Pending,
    /// This call moved the counter to the threshold — aggregate now.
    Reached,
    /// Approved by an earlier call; the counter keeps growing but no
    /// further aggregation happens.
    AlreadyApproved,
}

/// Tracks quorum counters for every submission, keyed by id.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VerificationTracker {
    records: BTreeMap<SubmissionId, VerificationRecord>,
}

impl VerificationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a fresh record for a newly appended submission.
    pub fn open(&mut self, id: SubmissionId, now: BlockHeight) {
        self.records.insert(
            id,
            VerificationRecord {
                verifier_count: 0,
                approved: false,
                timestamp: now,
            },
        );
    }

    /// Record one verification call against `id`.
    ///
    /// Increments the counter by exactly 1, recomputes the approval flag,
    /// and refreshes the timestamp even when the approval state does not
    /// change.
    pub fn record_vote(
        &mut self,
        id: SubmissionId,
        now: BlockHeight,
    ) -> Result<QuorumOutcome, RegistryError> {
        let record = self
            .records
            .get_mut(&id)
            .ok_or(RegistryError::DataNotFound(id))?;
        let was_approved = record.approved;
        record.verifier_count += 1;
        record.approved = record.verifier_count >= QUORUM_THRESHOLD;
        record.timestamp = now;
        Ok(if was_approved {
            QuorumOutcome::AlreadyApproved
        } else if record.approved {
            QuorumOutcome::Reached
        } else {
            QuorumOutcome::Pending
        })
    }

    pub fn get(&self, id: SubmissionId) -> Option<&VerificationRecord> {
        self.records.get(&id)
    }

    /// Number of verification records (equals the number of submissions).
    pub fn len(&self) -> u64 {
        self.records.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_with_open_record(id: SubmissionId) -> VerificationTracker {
        let mut tracker = VerificationTracker::new();
        tracker.open(id, BlockHeight::new(5));
        tracker
    }

    #[test]
    fn open_record_starts_unapproved_at_zero() {
        let id = SubmissionId::ZERO;
        let tracker = tracker_with_open_record(id);
        let record = tracker.get(id).unwrap();
        assert_eq!(record.verifier_count, 0);
        assert!(!record.approved);
        assert_eq!(record.timestamp, BlockHeight::new(5));
    }

    #[test]
    fn quorum_reached_exactly_on_third_call() {
        let id = SubmissionId::ZERO;
        let mut tracker = tracker_with_open_record(id);
        assert_eq!(
            tracker.record_vote(id, BlockHeight::new(6)).unwrap(),
            QuorumOutcome::Pending
        );
        assert_eq!(
            tracker.record_vote(id, BlockHeight::new(7)).unwrap(),
            QuorumOutcome::Pending
        );
        assert_eq!(
            tracker.record_vote(id, BlockHeight::new(8)).unwrap(),
            QuorumOutcome::Reached
        );
        let record = tracker.get(id).unwrap();
        assert_eq!(record.verifier_count, 3);
        assert!(record.approved);
    }

    #[test]
    fn counter_grows_past_threshold_without_reaching_again() {
        let id = SubmissionId::ZERO;
        let mut tracker = tracker_with_open_record(id);
        for _ in 0..3 {
            tracker.record_vote(id, BlockHeight::new(6)).unwrap();
        }
        assert_eq!(
            tracker.record_vote(id, BlockHeight::new(9)).unwrap(),
            QuorumOutcome::AlreadyApproved
        );
        assert_eq!(
            tracker.record_vote(id, BlockHeight::new(10)).unwrap(),
            QuorumOutcome::AlreadyApproved
        );
        let record = tracker.get(id).unwrap();
        assert_eq!(record.verifier_count, 5);
        assert!(record.approved, "approval is monotone");
    }

    #[test]
    fn timestamp_refreshes_on_every_call() {
        let id = SubmissionId::ZERO;
        let mut tracker = tracker_with_open_record(id);
        tracker.record_vote(id, BlockHeight::new(11)).unwrap();
        assert_eq!(tracker.get(id).unwrap().timestamp, BlockHeight::new(11));
        tracker.record_vote(id, BlockHeight::new(12)).unwrap();
        assert_eq!(tracker.get(id).unwrap().timestamp, BlockHeight::new(12));
    }

    #[test]
    fn vote_on_unknown_id_fails_not_found() {
        let mut tracker = VerificationTracker::new();
        let result = tracker.record_vote(SubmissionId::new(9), BlockHeight::ZERO);
        assert!(matches!(result, Err(RegistryError::DataNotFound(id)) if id.value() == 9));
    }
}
