use proptest::prelude::*;

use cpi_types::{
    CalcMethod, CountryCode, RawScores, Score, ScoreWeights, MAX_RAW_SCORE, SCORE_CEILING,
    WEIGHT_TOTAL,
};

proptest! {
    /// Any split of WEIGHT_TOTAL into three parts is a valid weight triple.
    #[test]
    fn weights_accept_any_exact_split(a in 0u32..=WEIGHT_TOTAL, b in 0u32..=WEIGHT_TOTAL) {
        prop_assume!(a + b <= WEIGHT_TOTAL);
        let c = WEIGHT_TOTAL - a - b;
        let weights = ScoreWeights::new(a, b, c).unwrap();
        prop_assert_eq!(weights.bribery + weights.transparency + weights.audit, WEIGHT_TOTAL);
    }

    /// Triples that do not sum to WEIGHT_TOTAL are always rejected.
    #[test]
    fn weights_reject_any_other_sum(a in 0u32..1000, b in 0u32..1000, c in 0u32..1000) {
        prop_assume!(a + b + c != WEIGHT_TOTAL);
        prop_assert!(ScoreWeights::new(a, b, c).is_err());
    }

    /// RawScores::validate accepts a triple iff every component is in range.
    #[test]
    fn raw_scores_validate_matches_componentwise_check(
        bribery in 0u32..300,
        transparency in 0u32..300,
        audit in 0u32..300,
    ) {
        let scores = RawScores::new(bribery, transparency, audit);
        let all_in_range = [bribery, transparency, audit].iter().all(|&v| v <= MAX_RAW_SCORE);
        prop_assert_eq!(scores.validate().is_ok(), all_in_range);
    }

    /// Score construction clamps to the ceiling and otherwise preserves the value.
    #[test]
    fn score_from_centis_clamps(centis in 0u32..50_000) {
        let score = Score::from_centis(centis);
        prop_assert_eq!(score.as_centis(), centis.min(SCORE_CEILING));
    }

    /// Country codes of 1-3 characters are accepted; longer or empty rejected.
    #[test]
    fn country_code_length_gate(code in "[A-Za-z0-9]{0,8}") {
        let ok = CountryCode::new(code.clone()).is_ok();
        let len = code.chars().count();
        prop_assert_eq!(ok, (1..=CountryCode::MAX_LEN).contains(&len));
    }

    /// Calculation methods round-trip through their string names; everything
    /// else fails to parse.
    #[test]
    fn calc_method_parse_is_exact(name in "[a-z-]{0,20}") {
        match name.parse::<CalcMethod>() {
            Ok(method) => prop_assert_eq!(method.as_str(), name.as_str()),
            Err(_) => {
                prop_assert_ne!(name.as_str(), CalcMethod::WEIGHTED);
                prop_assert_ne!(name.as_str(), CalcMethod::SIMPLE);
            }
        }
    }
}
