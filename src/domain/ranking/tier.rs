//! Score-to-tier ladder for supplier recommendations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound (inclusive) of the Strategic tier.
pub const STRATEGIC_THRESHOLD: f64 = 80.0;
/// Lower bound (inclusive) of the Preferred tier.
pub const PREFERRED_THRESHOLD: f64 = 65.0;
/// Lower bound (inclusive) of the Approved tier.
pub const APPROVED_THRESHOLD: f64 = 50.0;
/// Lower bound (inclusive) of the Conditional tier.
pub const CONDITIONAL_THRESHOLD: f64 = 35.0;

/// Qualitative recommendation derived from a 0-100 composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Strategic,
    Preferred,
    Approved,
    Conditional,
    Blocked,
}

impl Tier {
    /// Maps a composite score to its tier. Non-finite scores are Blocked.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= STRATEGIC_THRESHOLD => Tier::Strategic,
            s if s >= PREFERRED_THRESHOLD => Tier::Preferred,
            s if s >= APPROVED_THRESHOLD => Tier::Approved,
            s if s >= CONDITIONAL_THRESHOLD => Tier::Conditional,
            _ => Tier::Blocked,
        }
    }

    /// Returns the display label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Strategic => "Strategic",
            Tier::Preferred => "Preferred",
            Tier::Approved => "Approved",
            Tier::Conditional => "Conditional",
            Tier::Blocked => "Blocked",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
