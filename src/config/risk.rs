//! Supplier risk configuration

use serde::Deserialize;
use std::collections::HashMap;

use crate::domain::risk::{RiskDimension, RiskWeights};

use super::error::ValidationError;

/// Risk scoring configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RiskConfig {
    /// Per-dimension overrides on top of the built-in weights
    #[serde(default)]
    pub dimension_weights: HashMap<String, f64>,
}

impl RiskConfig {
    /// Built-in dimension weights with the configured overrides applied.
    pub fn weights(&self) -> Result<RiskWeights, ValidationError> {
        let mut raw = RiskDimension::ALL.map(|d| d.default_weight());
        for (name, weight) in &self.dimension_weights {
            let dimension: RiskDimension = name
                .parse()
                .map_err(|_| ValidationError::UnknownRiskDimension(name.clone()))?;
            if !weight.is_finite() || *weight < 0.0 {
                return Err(ValidationError::InvalidWeight(name.clone()));
            }
            raw[dimension as usize] = *weight;
        }
        RiskWeights::new(raw).map_err(|_| ValidationError::DegenerateRiskWeights)
    }

    /// Validate risk configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.weights().map(|_| ())
    }
}
