//! Index aggregation — folds approved submissions into per-country scores.

use crate::config::IndexConfig;
use cpi_types::{
    BlockHeight, CalcMethod, CountryCode, RawScores, RegistryError, Score, ScoreWeights,
    SCORE_CEILING, WEIGHT_TOTAL,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The published index for one country.
///
/// Created on the first approved submission, mutated in place thereafter,
/// never deleted. The score is *replaced* on every fold — it is not a
/// running average across submissions; only `submission_count` accumulates.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CountryIndex {
    /// Latest computed score.
    pub score: Score,
    /// Block height of the latest fold.
    pub last_updated: BlockHeight,
    /// Number of approved submissions folded in since creation.
    pub submission_count: u64,
    /// Snapshot of the weights used for the latest fold.
    pub weights: ScoreWeights,
}

/// Compute a score from raw measurements under the given method and weights.
///
/// Centipoint arithmetic throughout: with weights summing to 100, the raw
/// weighted sum of 0–100 inputs is already the centipoint value. The simple
/// average truncates toward zero.
pub fn compute_score(scores: &RawScores, method: CalcMethod, weights: &ScoreWeights) -> Score {
    let centis = match method {
        CalcMethod::WeightedAverage => {
            scores.bribery as u64 * weights.bribery as u64
                + scores.transparency as u64 * weights.transparency as u64
                + scores.audit as u64 * weights.audit as u64
        }
        CalcMethod::SimpleAverage => {
            (scores.bribery as u64 + scores.transparency as u64 + scores.audit as u64)
                * WEIGHT_TOTAL as u64
                / 3
        }
    };
    Score::from_centis(centis.min(SCORE_CEILING as u64) as u32)
}

/// Fold one approved submission into a country's index.
///
/// Pure: the result depends only on the prior index, the submission's
/// scores, and the configuration in effect right now. The prior index
/// contributes nothing but its `submission_count`.
pub fn fold_submission(
    prior: Option<&CountryIndex>,
    scores: &RawScores,
    config: &IndexConfig,
    now: BlockHeight,
) -> CountryIndex {
    CountryIndex {
        score: compute_score(scores, config.method(), &config.weights()),
        last_updated: now,
        submission_count: prior.map_or(0, |p| p.submission_count) + 1,
        weights: config.weights(),
    }
}

/// The per-country index book — the only writer of country index records.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IndexBook {
    indices: BTreeMap<CountryCode, CountryIndex>,
}

impl IndexBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one newly approved submission into `country`'s index.
    ///
    /// Re-validates the scores and requires a configured authority even
    /// though the verification path has already checked both — the book
    /// refuses bad input no matter who calls it. Country validity is
    /// carried by the `CountryCode` type itself.
    pub fn update(
        &mut self,
        country: &CountryCode,
        scores: &RawScores,
        config: &IndexConfig,
        now: BlockHeight,
    ) -> Result<Score, RegistryError> {
        if config.authority().is_none() {
            return Err(RegistryError::Unauthorized);
        }
        scores.validate()?;
        let next = fold_submission(self.indices.get(country), scores, config, now);
        let score = next.score;
        self.indices.insert(country.clone(), next);
        Ok(score)
    }

    /// Look up a country's index. `None` until its first approved submission.
    pub fn get(&self, country: &str) -> Option<&CountryIndex> {
        self.indices.get(country)
    }

    /// Number of countries with a published index.
    pub fn len(&self) -> u64 {
        self.indices.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
