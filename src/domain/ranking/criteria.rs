//! Criteria configuration - weights and benefit/cost polarity.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Direction of preference for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Higher raw value is better.
    #[default]
    Benefit,
    /// Lower raw value is better.
    Cost,
}

impl Polarity {
    /// Maps `true` to `Benefit` and `false` to `Cost`.
    pub fn from_flag(is_benefit: bool) -> Self {
        if is_benefit {
            Polarity::Benefit
        } else {
            Polarity::Cost
        }
    }
}

/// Per-criterion polarity, aligned by position with matrix columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriteriaPolarity(Vec<Polarity>);

impl CriteriaPolarity {
    pub fn new(polarities: Vec<Polarity>) -> Self {
        Self(polarities)
    }

    /// Every criterion treated as a benefit.
    pub fn all_benefit(n: usize) -> Self {
        Self(vec![Polarity::Benefit; n])
    }

    /// Builds from boolean flags, `true` = benefit.
    pub fn from_flags(flags: &[bool]) -> Self {
        Self(flags.iter().map(|&b| Polarity::from_flag(b)).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if criterion `k` is a benefit criterion.
    pub fn is_benefit(&self, k: usize) -> bool {
        self.0[k] == Polarity::Benefit
    }

    /// True when at least one criterion is cost-oriented.
    pub fn has_cost_criteria(&self) -> bool {
        self.0.iter().any(|p| *p == Polarity::Cost)
    }

    pub(crate) fn ensure_len(&self, n: usize) -> Result<(), DomainError> {
        if self.0.len() != n {
            return Err(DomainError::dimension_mismatch("polarity", n, self.0.len()));
        }
        Ok(())
    }
}

/// Criterion weights, normalized to sum to 1 on construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriteriaWeights(Vec<f64>);

impl CriteriaWeights {
    /// Validates and normalizes caller-supplied weights.
    ///
    /// Weights need not sum to 1. Every entry must be finite and
    /// non-negative, and at least one must be positive.
    ///
    /// # Errors
    /// - `ValidationFailed` for an empty vector or a negative entry
    /// - `NonFiniteValue` for NaN or infinite entries
    /// - `DegenerateWeights` if the entries sum to zero
    pub fn new(raw: Vec<f64>) -> Result<Self, DomainError> {
        if raw.is_empty() {
            return Err(ValidationError::empty_field("weights").into());
        }
        for &w in &raw {
            if !w.is_finite() {
                return Err(ValidationError::non_finite("weights", w).into());
            }
            if w < 0.0 {
                return Err(ValidationError::negative("weights", w).into());
            }
        }

        let total: f64 = raw.iter().sum();
        if total <= 0.0 {
            return Err(DomainError::new(
                ErrorCode::DegenerateWeights,
                "Weights sum to zero; at least one criterion must carry weight",
            ));
        }

        Ok(Self(raw.into_iter().map(|w| w / total).collect()))
    }

    /// Equal weight on each of `n` criteria.
    pub fn uniform(n: usize) -> Result<Self, DomainError> {
        Self::new(vec![1.0; n])
    }

    /// Resolves named weights against an ordered list of criteria.
    ///
    /// Criteria missing from `named` receive `default_weight`. Names in
    /// `named` that match no criterion are ignored.
    pub fn from_named(
        criteria: &[String],
        named: &HashMap<String, f64>,
        default_weight: f64,
    ) -> Result<Self, DomainError> {
        let raw = criteria
            .iter()
            .map(|c| named.get(c).copied().unwrap_or(default_weight))
            .collect();
        Self::new(raw)
    }

    /// Normalized weights.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn ensure_len(&self, n: usize) -> Result<(), DomainError> {
        if self.0.len() != n {
            return Err(DomainError::dimension_mismatch("weights", n, self.0.len()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_normalize_to_one() {
        let weights = CriteriaWeights::new(vec![2.0, 1.0, 1.0]).unwrap();
        assert_eq!(weights.as_slice(), &[0.5, 0.25, 0.25]);
    }

    #[test]
    fn already_normalized_weights_unchanged() {
        let weights = CriteriaWeights::new(vec![0.5, 0.5]).unwrap();
        assert_eq!(weights.as_slice(), &[0.5, 0.5]);
    }

    #[test]
    fn zero_weights_are_degenerate() {
        let err = CriteriaWeights::new(vec![0.0, 0.0]).unwrap_err();
        assert_eq!(err.code, ErrorCode::DegenerateWeights);
    }

    #[test]
    fn negative_weight_rejected() {
        let err = CriteriaWeights::new(vec![0.5, -0.1]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn nan_weight_rejected() {
        let err = CriteriaWeights::new(vec![f64::NAN]).unwrap_err();
        assert_eq!(err.code, ErrorCode::NonFiniteValue);
    }

    #[test]
    fn empty_weights_rejected() {
        assert!(CriteriaWeights::new(vec![]).is_err());
    }

    #[test]
    fn uniform_splits_evenly() {
        let weights = CriteriaWeights::uniform(4).unwrap();
        assert!(weights.as_slice().iter().all(|&w| (w - 0.25).abs() < 1e-12));
    }

    #[test]
    fn named_weights_fill_defaults() {
        let criteria = vec!["cost".to_string(), "quality".to_string(), "esg".to_string()];
        let mut named = HashMap::new();
        named.insert("cost".to_string(), 0.2);
        named.insert("quality".to_string(), 0.2);
        named.insert("unused".to_string(), 5.0);

        let weights = CriteriaWeights::from_named(&criteria, &named, 0.1).unwrap();
        let w = weights.as_slice();
        assert!((w[0] - 0.4).abs() < 1e-12);
        assert!((w[1] - 0.4).abs() < 1e-12);
        assert!((w[2] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn length_check_reports_mismatch() {
        let weights = CriteriaWeights::uniform(2).unwrap();
        let err = weights.ensure_len(3).unwrap_err();
        assert_eq!(err.code, ErrorCode::DimensionMismatch);
    }

    #[test]
    fn polarity_from_flags() {
        let polarity = CriteriaPolarity::from_flags(&[true, false]);
        assert!(polarity.is_benefit(0));
        assert!(!polarity.is_benefit(1));
        assert!(polarity.has_cost_criteria());
        assert!(!CriteriaPolarity::all_benefit(3).has_cost_criteria());
    }
}
