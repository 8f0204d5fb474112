//! Failover FX Rates - Tries rate sources in order until one quotes.
//!
//! # Example
//!
//! ```ignore
//! let rates = FailoverFxRates::new(vec![live_feed, Arc::new(StaticFxRates::from_config(&cfg))]);
//! let quote = rates.quote("EUR").await?;
//! ```

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{FxQuote, FxRateSource};

/// Rate source that falls through an ordered list of sources.
pub struct FailoverFxRates {
    sources: Vec<Arc<dyn FxRateSource>>,
}

impl FailoverFxRates {
    pub fn new(sources: Vec<Arc<dyn FxRateSource>>) -> Self {
        Self { sources }
    }

    /// Appends a lower-priority source.
    pub fn with_fallback(mut self, source: Arc<dyn FxRateSource>) -> Self {
        self.sources.push(source);
        self
    }
}

#[async_trait]
impl FxRateSource for FailoverFxRates {
    fn name(&self) -> &str {
        "failover"
    }

    async fn quote(&self, currency: &str) -> Result<FxQuote, DomainError> {
        let mut failures = Vec::new();
        for source in &self.sources {
            match source.quote(currency).await {
                Ok(quote) => return Ok(quote),
                Err(err) => {
                    warn!(
                        source = source.name(),
                        currency,
                        error = %err,
                        "FX source failed; trying next"
                    );
                    failures.push(format!("{}: {}", source.name(), err.message));
                }
            }
        }

        Err(DomainError::new(
            ErrorCode::RateUnavailable,
            format!("No source could quote {}", currency),
        )
        .with_detail("currency", currency)
        .with_detail("failures", failures.join("; ")))
    }
}
