//! Weighted Sum Model - linear aggregation of min-max normalized benefits.

use tracing::warn;

use crate::domain::foundation::{DataQualityFlag, DomainError};

use super::normalize::min_max_normalize;
use super::{CriteriaWeights, DecisionMatrix, MethodScores};

/// Scores alternatives by the weighted sum of min-max normalized columns.
///
/// Every column must already be oriented so that higher is better; use
/// [`DecisionMatrix::oriented_as_benefits`] for cost criteria.
///
/// # Edge Cases
/// - Constant column: range treated as 1, contributes 0 to every score
///
/// Scores are in [0, 1].
pub fn wsm(matrix: &DecisionMatrix, weights: &CriteriaWeights) -> Result<MethodScores, DomainError> {
    let (m, n) = matrix.shape();
    weights.ensure_len(n)?;

    let normalized = min_max_normalize(matrix);
    let flags: Vec<DataQualityFlag> = normalized
        .degenerate_columns
        .iter()
        .map(|&k| {
            let criterion = matrix.criteria()[k].clone();
            // A single alternative always has zero range; not worth a warning.
            if m > 1 {
                warn!(criterion = %criterion, "WSM column has zero range");
            }
            DataQualityFlag::ZeroRangeColumn { criterion }
        })
        .collect();

    let w = weights.as_slice();
    let scores = normalized
        .values
        .chunks(n)
        .map(|row| {
            row.iter()
                .zip(w)
                .map(|(v, wk)| v * wk)
                .sum::<f64>()
                .clamp(0.0, 1.0)
        })
        .collect();

    MethodScores::with_flags(scores, flags)
        .ensure_finite("WSM", matrix.alternatives())
}
