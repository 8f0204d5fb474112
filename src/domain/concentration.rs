//! Spend concentration via the Herfindahl-Hirschman Index.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{DomainError, ValidationError};

/// Upper bound (exclusive) of a Low-concentration market.
pub const HHI_LOW_THRESHOLD: f64 = 1500.0;
/// Upper bound (exclusive) of a Moderate-concentration market.
pub const HHI_MODERATE_THRESHOLD: f64 = 2500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConcentrationLevel {
    Low,
    Moderate,
    High,
}

impl ConcentrationLevel {
    pub fn from_hhi(hhi: f64) -> Self {
        if hhi < HHI_LOW_THRESHOLD {
            ConcentrationLevel::Low
        } else if hhi < HHI_MODERATE_THRESHOLD {
            ConcentrationLevel::Moderate
        } else {
            ConcentrationLevel::High
        }
    }
}

impl fmt::Display for ConcentrationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConcentrationLevel::Low => "Low",
            ConcentrationLevel::Moderate => "Moderate",
            ConcentrationLevel::High => "High",
        };
        f.write_str(s)
    }
}

/// HHI of percentage shares: the sum of squared shares, 0 to 10 000.
pub fn compute_hhi(shares_pct: &[f64]) -> Result<f64, DomainError> {
    for share in shares_pct {
        if !share.is_finite() {
            return Err(ValidationError::non_finite("shares_pct", *share).into());
        }
        if *share < 0.0 {
            return Err(ValidationError::negative("shares_pct", *share).into());
        }
    }
    Ok(shares_pct.iter().map(|s| s * s).sum())
}

/// Converts absolute spend amounts into percentage shares.
pub fn spend_shares(spend: &[f64]) -> Result<Vec<f64>, DomainError> {
    let total: f64 = spend.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(DomainError::validation(
            "spend",
            "Total spend must be positive and finite",
        ));
    }
    Ok(spend.iter().map(|s| s / total * 100.0).collect())
}
