//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Unknown ranking method: {0}")]
    UnknownRankingMethod(String),

    #[error("PROMETHEE thresholds need 0 <= q <= p (q={q}, p={p})")]
    InvalidThresholds { q: f64, p: f64 },

    #[error("Criterion weight for '{0}' must be finite and non-negative")]
    InvalidWeight(String),

    #[error("Default criterion weights sum to zero")]
    DegenerateWeights,

    #[error("Unknown risk dimension: {0}")]
    UnknownRiskDimension(String),

    #[error("Risk dimension weights sum to zero")]
    DegenerateRiskWeights,

    #[error("Simulation defaults must be positive and within their maxima")]
    InvalidLimits,

    #[error("FX volatility for '{0}' must be finite and non-negative")]
    InvalidVolatility(String),

    #[error("FX anchor rate for '{0}' must be finite and positive")]
    InvalidAnchorRate(String),
}
