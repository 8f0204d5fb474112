//! TOPSIS - closeness to the ideal-best point in weighted normalized space.

use tracing::warn;

use crate::domain::foundation::{DataQualityFlag, DomainError};

use super::normalize::{euclidean_distance, vector_normalize};
use super::{CriteriaPolarity, CriteriaWeights, DecisionMatrix, MethodScores};

/// Score given to the sole alternative of a one-row matrix. With nothing to
/// compare against, it is treated as the best available option.
pub const SINGLE_ALTERNATIVE_SCORE: f64 = 1.0;

/// Scores each alternative by relative closeness to the ideal solution.
///
/// # Algorithm
/// 1. Vector-normalize each column (zero norm treated as 1)
/// 2. Multiply by the normalized weights
/// 3. Ideal best = column max for benefit, min for cost; ideal worst inverse
/// 4. closeness = d_worst / (d_best + d_worst)
///
/// # Edge Cases
/// - Single alternative: scores `SINGLE_ALTERNATIVE_SCORE`
/// - Zero denominator (row equals both ideals): denominator treated as 1, score 0
///
/// Scores are in [0, 1], higher is better.
pub fn topsis(
    matrix: &DecisionMatrix,
    weights: &CriteriaWeights,
    polarity: &CriteriaPolarity,
) -> Result<MethodScores, DomainError> {
    let (m, n) = matrix.shape();
    weights.ensure_len(n)?;
    polarity.ensure_len(n)?;

    if m == 1 {
        let alternative = matrix.alternatives()[0].clone();
        warn!(alternative = %alternative, "TOPSIS on a single alternative; using neutral-best score");
        return Ok(MethodScores::with_flags(
            vec![SINGLE_ALTERNATIVE_SCORE],
            vec![DataQualityFlag::SingleAlternative { alternative }],
        ));
    }

    let mut flags = Vec::new();
    let normalized = vector_normalize(matrix);
    for &k in &normalized.degenerate_columns {
        let criterion = matrix.criteria()[k].clone();
        warn!(criterion = %criterion, "TOPSIS column has zero norm");
        flags.push(DataQualityFlag::ZeroNormColumn { criterion });
    }

    let w = weights.as_slice();
    let weighted: Vec<f64> = normalized
        .values
        .iter()
        .enumerate()
        .map(|(idx, v)| v * w[idx % n])
        .collect();

    let mut ideal_best = Vec::with_capacity(n);
    let mut ideal_worst = Vec::with_capacity(n);
    for k in 0..n {
        let (lo, hi) = (0..m)
            .map(|i| weighted[i * n + k])
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if polarity.is_benefit(k) {
            ideal_best.push(hi);
            ideal_worst.push(lo);
        } else {
            ideal_best.push(lo);
            ideal_worst.push(hi);
        }
    }

    let mut scores = Vec::with_capacity(m);
    for i in 0..m {
        let row = &weighted[i * n..(i + 1) * n];
        let d_best = euclidean_distance(row, &ideal_best);
        let d_worst = euclidean_distance(row, &ideal_worst);
        let mut denom = d_best + d_worst;
        if denom == 0.0 {
            let alternative = matrix.alternatives()[i].clone();
            warn!(alternative = %alternative, "TOPSIS zero distance denominator");
            flags.push(DataQualityFlag::ZeroDistanceDenominator { alternative });
            denom = 1.0;
        }
        scores.push(d_worst / denom);
    }

    MethodScores::with_flags(scores, flags)
        .ensure_finite("TOPSIS", matrix.alternatives())
}
