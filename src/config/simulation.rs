//! Simulation configuration

use serde::Deserialize;
use std::collections::HashMap;

use crate::domain::simulation::{MonteCarloEngine, SimulationLimits};

use super::error::ValidationError;

/// Annual volatility assumed for currencies without a table entry.
pub const DEFAULT_FX_VOLATILITY: f64 = 0.10;
/// USD rate assumed for currencies without a table entry.
pub const DEFAULT_FX_ANCHOR: f64 = 1.0;

/// Built-in annual FX volatilities against USD.
const FX_VOLATILITIES: [(&str, f64); 9] = [
    ("EUR", 0.08),
    ("GBP", 0.10),
    ("CNY", 0.06),
    ("NGN", 0.40),
    ("JPY", 0.12),
    ("KRW", 0.10),
    ("BRL", 0.18),
    ("ZAR", 0.15),
    ("TRY", 0.35),
];

/// Built-in USD anchor rates (units of currency per USD).
const FX_ANCHOR_RATES: [(&str, f64); 9] = [
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("CNY", 7.25),
    ("NGN", 1580.0),
    ("JPY", 149.5),
    ("KRW", 1435.0),
    ("BRL", 5.85),
    ("ZAR", 18.4),
    ("TRY", 36.2),
];

/// Simulation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_paths")]
    pub default_paths: usize,

    #[serde(default = "default_horizon")]
    pub default_horizon: usize,

    #[serde(default = "default_max_paths")]
    pub max_paths: usize,

    #[serde(default = "default_max_horizon")]
    pub max_horizon: usize,

    /// Fixed seed for reproducible runs; unset draws a fresh seed per run
    pub seed: Option<u64>,

    /// Per-currency volatility overrides on top of the built-in table
    #[serde(default)]
    pub fx_volatilities: HashMap<String, f64>,

    /// Per-currency anchor-rate overrides on top of the built-in table
    #[serde(default)]
    pub fx_anchor_rates: HashMap<String, f64>,
}

impl SimulationConfig {
    pub fn limits(&self) -> SimulationLimits {
        SimulationLimits {
            default_paths: self.default_paths,
            default_horizon: self.default_horizon,
            max_paths: self.max_paths,
            max_horizon: self.max_horizon,
        }
    }

    /// Engine honoring these limits and the optional fixed seed.
    pub fn engine(&self) -> MonteCarloEngine {
        let engine = MonteCarloEngine::new(self.limits());
        match self.seed {
            Some(seed) => engine.with_seed(seed),
            None => engine,
        }
    }

    /// Annual volatility for `currency`: override, then built-in, then default.
    pub fn volatility_for(&self, currency: &str) -> f64 {
        lookup(&self.fx_volatilities, &FX_VOLATILITIES, currency).unwrap_or(DEFAULT_FX_VOLATILITY)
    }

    /// USD anchor rate for `currency`: override, then built-in, then default.
    pub fn anchor_rate_for(&self, currency: &str) -> f64 {
        lookup(&self.fx_anchor_rates, &FX_ANCHOR_RATES, currency).unwrap_or(DEFAULT_FX_ANCHOR)
    }

    /// Every currency with a known anchor rate, built-in and overridden.
    pub fn anchor_rates(&self) -> HashMap<String, f64> {
        let mut rates: HashMap<String, f64> = FX_ANCHOR_RATES
            .iter()
            .map(|(code, rate)| (code.to_string(), *rate))
            .collect();
        for (code, rate) in &self.fx_anchor_rates {
            rates.insert(code.to_ascii_uppercase(), *rate);
        }
        rates
    }

    /// Validate simulation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_paths == 0
            || self.default_horizon == 0
            || self.default_paths > self.max_paths
            || self.default_horizon > self.max_horizon
        {
            return Err(ValidationError::InvalidLimits);
        }
        for (code, vol) in &self.fx_volatilities {
            if !vol.is_finite() || *vol < 0.0 {
                return Err(ValidationError::InvalidVolatility(code.clone()));
            }
        }
        for (code, rate) in &self.fx_anchor_rates {
            if !rate.is_finite() || *rate <= 0.0 {
                return Err(ValidationError::InvalidAnchorRate(code.clone()));
            }
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            default_paths: default_paths(),
            default_horizon: default_horizon(),
            max_paths: default_max_paths(),
            max_horizon: default_max_horizon(),
            seed: None,
            fx_volatilities: HashMap::new(),
            fx_anchor_rates: HashMap::new(),
        }
    }
}

// Environment keys arrive lowercased, so overrides match case-insensitively.
fn lookup(overrides: &HashMap<String, f64>, table: &[(&str, f64)], currency: &str) -> Option<f64> {
    overrides
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(currency))
        .map(|(_, v)| *v)
        .or_else(|| {
            table
                .iter()
                .find(|(code, _)| code.eq_ignore_ascii_case(currency))
                .map(|(_, v)| *v)
        })
}

fn default_paths() -> usize {
    10_000
}

fn default_horizon() -> usize {
    90
}

fn default_max_paths() -> usize {
    100_000
}

fn default_max_horizon() -> usize {
    365
}
