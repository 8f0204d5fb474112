//! Ranking configuration

use serde::Deserialize;
use std::collections::HashMap;

use crate::domain::ranking::{PreferenceThresholds, RankingMethod};

use super::error::ValidationError;

/// Weight applied to criteria missing from the weight table.
pub const UNLISTED_CRITERION_WEIGHT: f64 = 0.1;

/// Built-in criterion weights (sum to 1).
const DEFAULT_CRITERION_WEIGHTS: [(&str, f64); 7] = [
    ("cost", 0.20),
    ("quality", 0.18),
    ("delivery", 0.15),
    ("risk", 0.15),
    ("esg", 0.12),
    ("innovation", 0.10),
    ("compliance", 0.10),
];

/// Ranking configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    /// Method used when a request names none
    #[serde(default = "default_method")]
    pub default_method: String,

    /// PROMETHEE indifference threshold
    #[serde(default = "default_q")]
    pub promethee_q: f64,

    /// PROMETHEE preference threshold
    #[serde(default = "default_p")]
    pub promethee_p: f64,

    /// Per-criterion overrides on top of the built-in weight table
    #[serde(default)]
    pub criterion_weights: HashMap<String, f64>,

    /// Weight for criteria absent from `criterion_weights`
    #[serde(default = "default_unlisted_weight")]
    pub unlisted_weight: f64,
}

impl RankingConfig {
    /// Parsed default method.
    pub fn method(&self) -> Result<RankingMethod, ValidationError> {
        self.default_method
            .parse()
            .map_err(|_| ValidationError::UnknownRankingMethod(self.default_method.clone()))
    }

    /// PROMETHEE thresholds.
    pub fn thresholds(&self) -> Result<PreferenceThresholds, ValidationError> {
        PreferenceThresholds::new(self.promethee_q, self.promethee_p).map_err(|_| {
            ValidationError::InvalidThresholds {
                q: self.promethee_q,
                p: self.promethee_p,
            }
        })
    }

    /// Built-in criterion weights with the configured overrides applied.
    /// Override names are matched case-insensitively.
    pub fn weight_table(&self) -> HashMap<String, f64> {
        let mut table: HashMap<String, f64> = DEFAULT_CRITERION_WEIGHTS
            .iter()
            .map(|(name, w)| (name.to_string(), *w))
            .collect();
        for (name, weight) in &self.criterion_weights {
            table.insert(name.to_ascii_lowercase(), *weight);
        }
        table
    }

    /// Validate ranking configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.method()?;
        self.thresholds()?;
        for (name, weight) in &self.criterion_weights {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(ValidationError::InvalidWeight(name.clone()));
            }
        }
        if !self.unlisted_weight.is_finite() || self.unlisted_weight < 0.0 {
            return Err(ValidationError::InvalidWeight("<unlisted>".to_string()));
        }
        if self.weight_table().values().sum::<f64>() <= 0.0 && self.unlisted_weight <= 0.0 {
            return Err(ValidationError::DegenerateWeights);
        }
        Ok(())
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            default_method: default_method(),
            promethee_q: default_q(),
            promethee_p: default_p(),
            criterion_weights: HashMap::new(),
            unlisted_weight: default_unlisted_weight(),
        }
    }
}

fn default_method() -> String {
    "TOPSIS".to_string()
}

fn default_q() -> f64 {
    5.0
}

fn default_p() -> f64 {
    20.0
}

fn default_unlisted_weight() -> f64 {
    UNLISTED_CRITERION_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_defaults() {
        let config = RankingConfig::default();
        assert_eq!(config.method().unwrap(), RankingMethod::Topsis);
        assert_eq!(config.thresholds().unwrap(), PreferenceThresholds::default());
        let table = config.weight_table();
        assert_eq!(table.len(), 7);
        let total: f64 = table.values().sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_method_rejected() {
        let config = RankingConfig {
            default_method: "ELECTRE".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::UnknownRankingMethod("ELECTRE".to_string()))
        );
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let config = RankingConfig {
            promethee_q: 30.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidThresholds { .. })
        ));
    }

    #[test]
    fn test_weight_overrides_overlay_defaults() {
        let mut config = RankingConfig::default();
        config.criterion_weights.insert("COST".to_string(), 0.5);
        config.criterion_weights.insert("resilience".to_string(), 0.05);

        let table = config.weight_table();
        assert_eq!(table.len(), 8);
        assert_eq!(table["cost"], 0.5);
        assert_eq!(table["quality"], 0.18);
        assert_eq!(table["resilience"], 0.05);
    }

    #[test]
    fn test_zeroing_every_weight_is_degenerate() {
        let mut config = RankingConfig {
            unlisted_weight: 0.0,
            ..Default::default()
        };
        for (name, _) in DEFAULT_CRITERION_WEIGHTS {
            config.criterion_weights.insert(name.to_string(), 0.0);
        }
        assert_eq!(config.validate(), Err(ValidationError::DegenerateWeights));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut config = RankingConfig::default();
        config.criterion_weights.insert("cost".to_string(), -0.5);
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidWeight("cost".to_string()))
        );
    }
}
