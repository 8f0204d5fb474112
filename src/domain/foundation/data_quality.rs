//! Data-quality flags raised when a numerical fallback was applied.
//!
//! Degenerate inputs never abort a computation. The fallback is applied,
//! logged, and recorded here so callers can audit the data they fed in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A numerical fallback that was applied while computing a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataQualityFlag {
    /// Column had zero Euclidean norm; treated as 1.
    ZeroNormColumn { criterion: String },
    /// Column had zero min-max range; treated as 1.
    ZeroRangeColumn { criterion: String },
    /// TOPSIS distance-to-best plus distance-to-worst was zero; treated as 1.
    ZeroDistanceDenominator { alternative: String },
    /// Only one alternative was ranked; it receives the neutral-best score.
    SingleAlternative { alternative: String },
    /// Historical samples below 1 were floored to 1.
    FlooredSamples { count: usize },
    /// Too few usable historical samples; the fallback set was substituted.
    InsufficientHistory { observed: usize, required: usize },
    /// Normal draws fell below a physical floor and were clipped.
    ClippedDraws { source: String, count: usize },
    /// Requested path count exceeded the configured maximum.
    PathCountCapped { requested: usize, cap: usize },
    /// Requested horizon exceeded the configured maximum.
    HorizonCapped { requested: usize, cap: usize },
    /// No rate source could quote the currency; the configured anchor was used.
    DefaultAnchorRate { currency: String, rate: f64 },
}

impl fmt::Display for DataQualityFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataQualityFlag::ZeroNormColumn { criterion } => {
                write!(f, "criterion '{}' has zero norm", criterion)
            }
            DataQualityFlag::ZeroRangeColumn { criterion } => {
                write!(f, "criterion '{}' has zero range", criterion)
            }
            DataQualityFlag::ZeroDistanceDenominator { alternative } => {
                write!(f, "alternative '{}' coincides with both ideals", alternative)
            }
            DataQualityFlag::SingleAlternative { alternative } => {
                write!(f, "'{}' is the only alternative", alternative)
            }
            DataQualityFlag::FlooredSamples { count } => {
                write!(f, "{} historical samples floored to 1", count)
            }
            DataQualityFlag::InsufficientHistory { observed, required } => write!(
                f,
                "{} historical samples available, {} required; fallback set used",
                observed, required
            ),
            DataQualityFlag::ClippedDraws { source, count } => {
                write!(f, "{} draws of '{}' clipped to floor", count, source)
            }
            DataQualityFlag::PathCountCapped { requested, cap } => {
                write!(f, "path count {} capped to {}", requested, cap)
            }
            DataQualityFlag::HorizonCapped { requested, cap } => {
                write!(f, "horizon {} capped to {}", requested, cap)
            }
            DataQualityFlag::DefaultAnchorRate { currency, rate } => {
                write!(f, "no quote for {}; configured anchor {} used", currency, rate)
            }
        }
    }
}
