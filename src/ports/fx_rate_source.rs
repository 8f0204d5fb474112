//! FxRateSource port - Spot FX rates used as simulation anchors.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Timestamp};

/// A spot rate in units of `currency` per USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FxQuote {
    pub currency: String,
    pub rate: f64,
    /// Name of the source that supplied the quote
    pub source: String,
    pub as_of: Timestamp,
}

/// Port for fetching spot FX rates.
///
/// Implementations return `RateUnavailable` when they cannot quote a
/// currency, so callers can fall through to another source.
#[async_trait]
pub trait FxRateSource: Send + Sync {
    /// Short name used in logs and on quotes.
    fn name(&self) -> &str;

    /// Current rate for a currency code (case-insensitive).
    async fn quote(&self, currency: &str) -> Result<FxQuote, DomainError>;
}
