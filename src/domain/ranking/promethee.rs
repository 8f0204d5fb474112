//! PROMETHEE II - net outranking flow from pairwise preference degrees.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

use super::{CriteriaPolarity, CriteriaWeights, DecisionMatrix, MethodScores};

/// Indifference (`q`) and preference (`p`) thresholds of the linear
/// preference function, shared by every criterion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreferenceThresholds {
    q: f64,
    p: f64,
}

impl PreferenceThresholds {
    /// Creates thresholds, requiring finite `0 <= q <= p`.
    ///
    /// `q == p` yields a strict step: any advantage above `q` is full preference.
    pub fn new(q: f64, p: f64) -> Result<Self, DomainError> {
        if !q.is_finite() || !p.is_finite() || q < 0.0 || p < q {
            return Err(DomainError::new(
                ErrorCode::InvalidThreshold,
                format!("PROMETHEE thresholds need 0 <= q <= p, got q={} p={}", q, p),
            )
            .with_detail("q", q.to_string())
            .with_detail("p", p.to_string()));
        }
        Ok(Self { q, p })
    }

    pub fn indifference(&self) -> f64 {
        self.q
    }

    pub fn preference(&self) -> f64 {
        self.p
    }

    /// Linear preference degree for an advantage `d`.
    pub fn preference_degree(&self, d: f64) -> f64 {
        if d <= self.q {
            0.0
        } else if d >= self.p {
            1.0
        } else {
            (d - self.q) / (self.p - self.q)
        }
    }
}

impl Default for PreferenceThresholds {
    fn default() -> Self {
        Self { q: 5.0, p: 20.0 }
    }
}

/// Computes the PROMETHEE II net flow of every alternative.
///
/// For each unordered pair, the weighted preference degrees pi(i,j) and
/// pi(j,i) are computed once and credited to both the outgoing and incoming
/// flows. Flows are averaged over the `m - 1` opponents.
///
/// # Edge Cases
/// - Single alternative: net flow 0
///
/// Net flows sum to zero across all alternatives.
pub fn promethee(
    matrix: &DecisionMatrix,
    weights: &CriteriaWeights,
    polarity: &CriteriaPolarity,
    thresholds: &PreferenceThresholds,
) -> Result<MethodScores, DomainError> {
    let (m, n) = matrix.shape();
    weights.ensure_len(n)?;
    polarity.ensure_len(n)?;

    if m < 2 {
        return Ok(MethodScores::new(vec![0.0; m]));
    }

    let w = weights.as_slice();
    let mut outgoing = vec![0.0; m];
    let mut incoming = vec![0.0; m];

    for i in 0..m {
        let row_i = matrix.row(i);
        for j in (i + 1)..m {
            let row_j = matrix.row(j);
            let mut pi_ij = 0.0;
            let mut pi_ji = 0.0;
            for k in 0..n {
                let diff = row_i[k] - row_j[k];
                let advantage = if polarity.is_benefit(k) { diff } else { -diff };
                pi_ij += w[k] * thresholds.preference_degree(advantage);
                pi_ji += w[k] * thresholds.preference_degree(-advantage);
            }
            outgoing[i] += pi_ij;
            incoming[j] += pi_ij;
            outgoing[j] += pi_ji;
            incoming[i] += pi_ji;
        }
    }

    let opponents = (m - 1) as f64;
    let net = outgoing
        .iter()
        .zip(&incoming)
        .map(|(plus, minus)| (plus - minus) / opponents)
        .collect();

    MethodScores::new(net)
        .ensure_finite("PROMETHEE", matrix.alternatives())
}
