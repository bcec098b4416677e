//! Submission records and the append-only ledger that stores them.

use cpi_types::{BlockHeight, CountryCode, PrincipalId, RawScores, SubmissionId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One raw-data submission. Immutable once appended.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Submission {
    pub country: CountryCode,
    pub scores: RawScores,
    /// Block height at creation.
    pub timestamp: BlockHeight,
    pub submitter: PrincipalId,
}

/// Append-only ledger assigning sequential ids to submissions.
///
/// Ids start at 0, advance by one per append, and are never reused. There is
/// no deduplication: identical payloads each get a distinct id.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SubmissionLedger {
    entries: BTreeMap<SubmissionId, Submission>,
    next_id: SubmissionId,
}

impl SubmissionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a submission, returning its newly allocated id.
    pub fn append(&mut self, submission: Submission) -> SubmissionId {
        let id = self.next_id;
        self.entries.insert(id, submission);
        self.next_id = id.next();
        id
    }

    pub fn get(&self, id: SubmissionId) -> Option<&Submission> {
        self.entries.get(&id)
    }

    /// The id the next append will receive.
    pub fn next_id(&self) -> SubmissionId {
        self.next_id
    }

    /// Number of submissions recorded so far.
    pub fn len(&self) -> u64 {
        self.entries.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
