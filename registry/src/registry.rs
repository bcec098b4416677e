//! The registry facade — every external entry point lives here.

use crate::context::RequestContext;
use crate::directory::VerifierDirectory;
use cpi_index::{CountryIndex, IndexBook, IndexConfig};
use cpi_ledger::{Submission, SubmissionLedger};
use cpi_types::{
    CalcMethod, CountryCode, PrincipalId, RawScores, RegistryError, ScoreWeights, SubmissionId,
};
use cpi_verification::{
    QuorumOutcome, VerificationRecord, VerificationTracker, QUORUM_THRESHOLD,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// The CPI registry state machine.
///
/// Owns all shared state. Every mutating entry point takes `&mut self`, so
/// the serial-execution assumption is enforced by the borrow checker; each
/// call either fully commits or fails with no partial writes.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IndexRegistry {
    config: IndexConfig,
    ledger: SubmissionLedger,
    verifications: VerificationTracker,
    indices: IndexBook,
}

impl IndexRegistry {
    /// Registry schema version.
    pub const VERSION: u32 = 1;

    pub fn new() -> Self {
        Self::default()
    }

    // ── Configuration ────────────────────────────────────────────────────

    /// One-time authority assignment. Callable by anyone, exactly once;
    /// there is no rotation path.
    pub fn set_authority(
        &mut self,
        ctx: &RequestContext,
        principal: PrincipalId,
    ) -> Result<(), RegistryError> {
        let name = principal.to_string();
        self.config.set_authority(principal)?;
        info!(caller = %ctx.caller, authority = %name, "authority set");
        Ok(())
    }

    /// Replace the scoring weights. Authority-only; the triple must sum to
    /// exactly 100 and is replaced atomically.
    pub fn set_weights(
        &mut self,
        ctx: &RequestContext,
        bribery: u32,
        transparency: u32,
        audit: u32,
    ) -> Result<(), RegistryError> {
        self.config
            .set_weights(&ctx.caller, bribery, transparency, audit)?;
        info!(bribery, transparency, audit, "weights replaced");
        Ok(())
    }

    /// Replace the calculation method. Authority-only. Affects only future
    /// aggregations.
    pub fn set_calc_method(
        &mut self,
        ctx: &RequestContext,
        method: &str,
    ) -> Result<(), RegistryError> {
        self.config.set_calc_method(&ctx.caller, method)?;
        info!(method = %self.config.method(), "calculation method replaced");
        Ok(())
    }

    // ── Submission ───────────────────────────────────────────────────────

    /// Record a raw-data submission and open its verification record in one
    /// atomic step, returning the new sequential id.
    ///
    /// All validation precedes any write: a rejected call consumes no id.
    pub fn submit_data(
        &mut self,
        ctx: &RequestContext,
        country: &str,
        bribery: u32,
        transparency: u32,
        audit: u32,
    ) -> Result<SubmissionId, RegistryError> {
        let country = CountryCode::new(country)?;
        let scores = RawScores::new(bribery, transparency, audit);
        scores.validate()?;

        let id = self.ledger.append(Submission {
            country: country.clone(),
            scores,
            timestamp: ctx.now,
            submitter: ctx.caller.clone(),
        });
        self.verifications.open(id, ctx.now);
        debug!(%id, country = %country, submitter = %ctx.caller, "submission recorded");
        Ok(id)
    }

    // ── Verification ─────────────────────────────────────────────────────

    /// Record one verification call from a recognized verifier.
    ///
    /// On the call that first brings the counter to [`QUORUM_THRESHOLD`],
    /// the submission's data is folded into its country's index using the
    /// configuration current at this moment. Later calls keep incrementing
    /// the counter without re-aggregating.
    ///
    /// Returns the approval state as of this call.
    pub fn verify_submission(
        &mut self,
        ctx: &RequestContext,
        directory: &dyn VerifierDirectory,
        id: SubmissionId,
    ) -> Result<bool, RegistryError> {
        let submission = self
            .ledger
            .get(id)
            .ok_or(RegistryError::DataNotFound(id))?;
        if !directory.is_verifier(&ctx.caller) {
            return Err(RegistryError::Unauthorized);
        }
        let country = submission.country.clone();
        let scores = submission.scores;

        // The quorum-completing call also performs the fold, which needs a
        // configured authority. Checked before the counter moves so a
        // failed call leaves the verification record untouched and can be
        // retried once an authority exists.
        let completes_quorum = self
            .verifications
            .get(id)
            .map_or(false, |r| !r.approved && r.verifier_count + 1 >= QUORUM_THRESHOLD);
        if completes_quorum && self.config.authority().is_none() {
            return Err(RegistryError::Unauthorized);
        }

        let outcome = self.verifications.record_vote(id, ctx.now)?;
        if outcome == QuorumOutcome::Reached {
            let score = self
                .indices
                .update(&country, &scores, &self.config, ctx.now)?;
            info!(%id, country = %country, score = %score, "quorum reached, index updated");
        } else {
            debug!(%id, ?outcome, "verification recorded");
        }

        Ok(self.verifications.get(id).map_or(false, |r| r.approved))
    }

    // ── Query surface ────────────────────────────────────────────────────

    /// Published index for a country; `None` until its first approved
    /// submission.
    pub fn index(&self, country: &str) -> Option<&CountryIndex> {
        self.indices.get(country)
    }

    /// Submission record by id.
    pub fn submission(&self, id: SubmissionId) -> Option<&Submission> {
        self.ledger.get(id)
    }

    /// Verification record by id.
    pub fn verification(&self, id: SubmissionId) -> Option<&VerificationRecord> {
        self.verifications.get(id)
    }

    /// The weights currently in effect.
    pub fn current_weights(&self) -> ScoreWeights {
        self.config.weights()
    }

    /// The calculation method currently in effect.
    pub fn calc_method(&self) -> CalcMethod {
        self.config.method()
    }

    /// The configured authority, if any.
    pub fn authority(&self) -> Option<&PrincipalId> {
        self.config.authority()
    }

    /// Total submissions recorded so far.
    pub fn submission_count(&self) -> u64 {
        self.ledger.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::StaticVerifierSet;
    use cpi_types::BlockHeight;

    fn ctx(caller: &str, height: u64) -> RequestContext {
        RequestContext::new(PrincipalId::new(caller), BlockHeight::new(height))
    }

    #[test]
    fn submission_opens_paired_verification_record() {
        let mut registry = IndexRegistry::new();
        let id = registry
            .submit_data(&ctx("alice", 4), "USA", 80, 90, 85)
            .unwrap();
        let record = registry.verification(id).unwrap();
        assert_eq!(record.verifier_count, 0);
        assert!(!record.approved);
        assert_eq!(record.timestamp, BlockHeight::new(4));
    }

    #[test]
    fn failed_submission_consumes_no_id() {
        let mut registry = IndexRegistry::new();
        let first = registry
            .submit_data(&ctx("alice", 0), "USA", 80, 90, 85)
            .unwrap();
        assert!(registry
            .submit_data(&ctx("alice", 0), "USA", 101, 90, 85)
            .is_err());
        assert!(registry
            .submit_data(&ctx("alice", 0), "USAA", 80, 90, 85)
            .is_err());
        let next = registry
            .submit_data(&ctx("alice", 0), "DEU", 80, 90, 85)
            .unwrap();
        assert_eq!(next, first.next());
    }

    #[test]
    fn quorum_completion_without_authority_is_rejected_and_retryable() {
        let mut registry = IndexRegistry::new();
        let verifiers = StaticVerifierSet::new([PrincipalId::new("v")]);
        let id = registry
            .submit_data(&ctx("alice", 0), "USA", 80, 90, 85)
            .unwrap();

        // Below-quorum calls need no authority.
        registry.verify_submission(&ctx("v", 1), &verifiers, id).unwrap();
        registry.verify_submission(&ctx("v", 2), &verifiers, id).unwrap();

        // The completing call does; the counter must not move on failure.
        let result = registry.verify_submission(&ctx("v", 3), &verifiers, id);
        assert!(matches!(result, Err(RegistryError::Unauthorized)));
        assert_eq!(registry.verification(id).unwrap().verifier_count, 2);
        assert!(registry.index("USA").is_none());

        registry
            .set_authority(&ctx("anyone", 4), PrincipalId::new("authority"))
            .unwrap();
        let approved = registry
            .verify_submission(&ctx("v", 5), &verifiers, id)
            .unwrap();
        assert!(approved);
        assert_eq!(registry.index("USA").unwrap().score.as_centis(), 8450);
    }

    #[test]
    fn version_constant_is_exposed() {
        assert_eq!(IndexRegistry::VERSION, 1);
    }
}
