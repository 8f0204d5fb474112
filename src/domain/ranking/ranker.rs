//! Ranker - Runs a ranking method and turns raw scores into ranks and tiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::domain::foundation::{DataQualityFlag, DomainError, ErrorCode};

use super::{
    promethee, topsis, wsm, CriteriaPolarity, CriteriaWeights, DecisionMatrix, MethodScores,
    PreferenceThresholds, Tier,
};

/// Guards the PROMETHEE min-max rescale against a zero range.
const FLOW_RANGE_EPSILON: f64 = 1e-9;

/// The interchangeable MCDA methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum RankingMethod {
    #[default]
    Topsis,
    Promethee,
    Wsm,
}

impl RankingMethod {
    pub fn label(&self) -> &'static str {
        match self {
            RankingMethod::Topsis => "TOPSIS",
            RankingMethod::Promethee => "PROMETHEE",
            RankingMethod::Wsm => "WSM",
        }
    }
}

impl fmt::Display for RankingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RankingMethod {
    type Err = DomainError;

    /// Parses a method name, case-insensitively. Unknown names are an error,
    /// never a silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TOPSIS" => Ok(RankingMethod::Topsis),
            "PROMETHEE" | "PROMETHEE II" | "PROMETHEE_II" => Ok(RankingMethod::Promethee),
            "WSM" => Ok(RankingMethod::Wsm),
            _ => Err(DomainError::new(
                ErrorCode::UnknownMethod,
                format!("Unknown ranking method '{}'", s),
            )
            .with_detail("method", s)),
        }
    }
}

/// Method selection plus method-specific parameters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RankingOptions {
    pub method: RankingMethod,
    /// Only used by PROMETHEE.
    pub thresholds: PreferenceThresholds,
}

impl RankingOptions {
    pub fn new(method: RankingMethod) -> Self {
        Self {
            method,
            thresholds: PreferenceThresholds::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: PreferenceThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }
}

/// One alternative's position in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub alternative: String,
    /// Score on the method's own scale.
    pub raw_score: f64,
    /// Score on the 0-100 scale, rounded to two decimals.
    pub composite_score: f64,
    /// 1 = best; equal composite scores share the lowest rank.
    pub rank: u32,
    pub tier: Tier,
}

/// Complete output of one ranking run, in matrix row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    pub method: RankingMethod,
    pub criteria: Vec<String>,
    /// Normalized weights actually applied.
    pub weights: Vec<f64>,
    pub alternatives: Vec<RankedAlternative>,
    pub flags: Vec<DataQualityFlag>,
}

impl RankingResult {
    /// Looks up an alternative by name.
    pub fn get(&self, alternative: &str) -> Option<&RankedAlternative> {
        self.alternatives.iter().find(|a| a.alternative == alternative)
    }

    /// Alternatives sorted by rank, preserving row order within ties.
    pub fn by_rank(&self) -> Vec<&RankedAlternative> {
        let mut sorted: Vec<_> = self.alternatives.iter().collect();
        sorted.sort_by_key(|a| a.rank);
        sorted
    }

    /// The first alternative holding rank 1.
    pub fn best(&self) -> Option<&RankedAlternative> {
        self.by_rank().into_iter().next()
    }
}

/// Ranks alternatives with the chosen method.
///
/// # Algorithm
/// 1. Run the method (WSM sees cost columns negated first)
/// 2. Rescale to 0-100: TOPSIS and WSM x100, PROMETHEE min-max x100
/// 3. Round to two decimals, assign min-style ranks, map to tiers
///
/// # Edge Cases
/// - Single alternative: composite 100 for every method
///
/// # Errors
/// - `DimensionMismatch` if weights or polarity don't match the criteria
/// - `NonFiniteValue` if any score is NaN or infinite
pub fn rank(
    matrix: &DecisionMatrix,
    weights: &CriteriaWeights,
    polarity: &CriteriaPolarity,
    options: &RankingOptions,
) -> Result<RankingResult, DomainError> {
    let n = matrix.criterion_count();
    weights.ensure_len(n)?;
    polarity.ensure_len(n)?;

    let MethodScores { scores: raw, mut flags } = match options.method {
        RankingMethod::Topsis => topsis(matrix, weights, polarity)?,
        RankingMethod::Promethee => promethee(matrix, weights, polarity, &options.thresholds)?,
        RankingMethod::Wsm if polarity.has_cost_criteria() => {
            wsm(&matrix.oriented_as_benefits(polarity)?, weights)?
        }
        RankingMethod::Wsm => wsm(matrix, weights)?,
    };

    let composite = if raw.len() == 1 {
        if options.method != RankingMethod::Topsis {
            // TOPSIS already flagged it.
            let alternative = matrix.alternatives()[0].clone();
            warn!(alternative = %alternative, method = %options.method, "Ranking a single alternative");
            flags.push(DataQualityFlag::SingleAlternative { alternative });
        }
        vec![100.0]
    } else {
        to_composite(options.method, &raw)
    };

    if let Some(i) = composite.iter().position(|s| !s.is_finite()) {
        return Err(DomainError::new(
            ErrorCode::NonFiniteValue,
            format!("{} produced a non-finite score", options.method),
        )
        .with_detail("alternative", matrix.alternatives()[i].clone()));
    }

    let ranks = min_ranks(&composite);
    let alternatives = matrix
        .alternatives()
        .iter()
        .zip(raw.iter().zip(&composite))
        .zip(ranks)
        .map(|((name, (&raw_score, &composite_score)), rank)| RankedAlternative {
            alternative: name.clone(),
            raw_score,
            composite_score,
            rank,
            tier: Tier::from_score(composite_score),
        })
        .collect();

    debug!(
        method = %options.method,
        alternatives = matrix.alternative_count(),
        criteria = n,
        flags = flags.len(),
        "Ranking computed"
    );

    Ok(RankingResult {
        method: options.method,
        criteria: matrix.criteria().to_vec(),
        weights: weights.as_slice().to_vec(),
        alternatives,
        flags,
    })
}

fn to_composite(method: RankingMethod, raw: &[f64]) -> Vec<f64> {
    match method {
        RankingMethod::Topsis | RankingMethod::Wsm => raw.iter().map(|s| round2(s * 100.0)).collect(),
        RankingMethod::Promethee => {
            let min = raw.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = raw.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let span = max - min + FLOW_RANGE_EPSILON;
            raw.iter().map(|s| round2((s - min) / span * 100.0)).collect()
        }
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Descending min-style ranks: 1 + the number of strictly greater scores.
fn min_ranks(scores: &[f64]) -> Vec<u32> {
    scores
        .iter()
        .map(|s| 1 + scores.iter().filter(|other| *other > s).count() as u32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(w: &[f64]) -> CriteriaWeights {
        CriteriaWeights::new(w.to_vec()).unwrap()
    }

    fn two_suppliers() -> DecisionMatrix {
        DecisionMatrix::builder()
            .criteria(vec!["quality", "cost"])
            .alternative("Acme", vec![80.0, 5.0])
            .alternative("Globex", vec![60.0, 8.0])
            .build()
            .unwrap()
    }

    #[test]
    fn method_names_parse_case_insensitively() {
        assert_eq!("topsis".parse::<RankingMethod>().unwrap(), RankingMethod::Topsis);
        assert_eq!("PROMETHEE".parse::<RankingMethod>().unwrap(), RankingMethod::Promethee);
        assert_eq!(" wsm ".parse::<RankingMethod>().unwrap(), RankingMethod::Wsm);
    }

    #[test]
    fn unknown_method_fails_fast() {
        let err = "ELECTRE".parse::<RankingMethod>().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownMethod);
        assert_eq!(err.details.get("method"), Some(&"ELECTRE".to_string()));
    }

    #[test]
    fn topsis_end_to_end_ranks_dominant_first() {
        let result = rank(
            &two_suppliers(),
            &weights(&[0.5, 0.5]),
            &CriteriaPolarity::from_flags(&[true, false]),
            &RankingOptions::new(RankingMethod::Topsis),
        )
        .unwrap();

        let acme = result.get("Acme").unwrap();
        let globex = result.get("Globex").unwrap();
        assert_eq!(acme.rank, 1);
        assert_eq!(globex.rank, 2);
        assert_eq!(acme.composite_score, 100.0);
        assert_eq!(acme.tier, Tier::Strategic);
        assert_eq!(globex.tier, Tier::Blocked);
        assert_eq!(result.best().unwrap().alternative, "Acme");
    }

    #[test]
    fn every_method_agrees_on_a_dominant_alternative() {
        for method in [RankingMethod::Topsis, RankingMethod::Promethee, RankingMethod::Wsm] {
            let result = rank(
                &two_suppliers(),
                &weights(&[0.5, 0.5]),
                &CriteriaPolarity::from_flags(&[true, false]),
                &RankingOptions::new(method)
                    .with_thresholds(PreferenceThresholds::new(0.0, 10.0).unwrap()),
            )
            .unwrap();
            assert_eq!(result.best().unwrap().alternative, "Acme", "method {}", method);
        }
    }

    #[test]
    fn huge_magnitudes_still_separate_alternatives() {
        let matrix =
            DecisionMatrix::from_rows(vec![vec![2e200, 1e200], vec![1e200, 2e200]]).unwrap();
        for method in [RankingMethod::Topsis, RankingMethod::Promethee, RankingMethod::Wsm] {
            let result = rank(
                &matrix,
                &weights(&[0.5, 0.5]),
                &CriteriaPolarity::from_flags(&[true, false]),
                &RankingOptions::new(method),
            )
            .unwrap();
            let ranks: Vec<u32> = result.alternatives.iter().map(|a| a.rank).collect();
            assert_eq!(ranks, vec![1, 2], "method {}", method);
            assert_eq!(result.alternatives[0].composite_score, 100.0, "method {}", method);
        }
    }

    #[test]
    fn wsm_orients_cost_criteria() {
        // Acme is cheaper; with all weight on cost it must win.
        let result = rank(
            &two_suppliers(),
            &weights(&[0.0, 1.0]),
            &CriteriaPolarity::from_flags(&[true, false]),
            &RankingOptions::new(RankingMethod::Wsm),
        )
        .unwrap();
        assert_eq!(result.get("Acme").unwrap().composite_score, 100.0);

        let result = rank(
            &two_suppliers(),
            &weights(&[0.0, 1.0]),
            &CriteriaPolarity::all_benefit(2),
            &RankingOptions::new(RankingMethod::Wsm),
        )
        .unwrap();
        assert_eq!(result.get("Globex").unwrap().composite_score, 100.0);
    }

    #[test]
    fn promethee_composite_spans_zero_to_hundred() {
        let matrix = DecisionMatrix::from_rows(vec![
            vec![90.0, 10.0],
            vec![70.0, 30.0],
            vec![40.0, 60.0],
        ])
        .unwrap();
        let result = rank(
            &matrix,
            &weights(&[0.5, 0.5]),
            &CriteriaPolarity::from_flags(&[true, false]),
            &RankingOptions::new(RankingMethod::Promethee),
        )
        .unwrap();

        let scores: Vec<f64> = result.alternatives.iter().map(|a| a.composite_score).collect();
        assert_eq!(scores[0], 100.0);
        assert_eq!(scores[2], 0.0);
        assert!(scores[1] > 0.0 && scores[1] < 100.0);
    }

    #[test]
    fn ties_share_the_lowest_rank() {
        assert_eq!(min_ranks(&[50.0, 80.0, 50.0, 10.0]), vec![2, 1, 2, 4]);
        assert_eq!(min_ranks(&[7.0, 7.0, 7.0]), vec![1, 1, 1]);
    }

    #[test]
    fn composite_rounds_to_two_decimals() {
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(to_composite(RankingMethod::Topsis, &[0.123_456]), vec![12.35]);
    }

    #[test]
    fn single_alternative_scores_hundred_for_every_method() {
        let matrix = DecisionMatrix::from_rows(vec![vec![3.0, 4.0]]).unwrap();
        for method in [RankingMethod::Topsis, RankingMethod::Promethee, RankingMethod::Wsm] {
            let result = rank(
                &matrix,
                &weights(&[1.0, 1.0]),
                &CriteriaPolarity::all_benefit(2),
                &RankingOptions::new(method),
            )
            .unwrap();
            let only = &result.alternatives[0];
            assert_eq!(only.composite_score, 100.0);
            assert_eq!(only.rank, 1);
            assert_eq!(
                result
                    .flags
                    .iter()
                    .filter(|f| matches!(f, DataQualityFlag::SingleAlternative { .. }))
                    .count(),
                1,
                "method {}",
                method
            );
        }
    }

    #[test]
    fn shape_mismatch_surfaces_as_error() {
        let err = rank(
            &two_suppliers(),
            &weights(&[1.0, 1.0, 1.0]),
            &CriteriaPolarity::all_benefit(2),
            &RankingOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::DimensionMismatch);
    }

    #[test]
    fn result_records_weights_and_criteria() {
        let result = rank(
            &two_suppliers(),
            &weights(&[3.0, 1.0]),
            &CriteriaPolarity::all_benefit(2),
            &RankingOptions::default(),
        )
        .unwrap();
        assert_eq!(result.weights, vec![0.75, 0.25]);
        assert_eq!(result.criteria, vec!["quality", "cost"]);
        assert_eq!(result.method, RankingMethod::Topsis);
    }
}
