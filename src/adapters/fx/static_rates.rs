//! Static FX Rates - Quotes from a fixed table.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::config::SimulationConfig;
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::ports::{FxQuote, FxRateSource};

/// Rate source backed by a fixed currency table.
#[derive(Debug, Clone)]
pub struct StaticFxRates {
    name: String,
    rates: HashMap<String, f64>,
}

impl StaticFxRates {
    /// Creates a source from `(currency, rate)` pairs; codes are uppercased.
    pub fn new(name: impl Into<String>, rates: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            name: name.into(),
            rates: rates
                .into_iter()
                .map(|(code, rate)| (code.to_ascii_uppercase(), rate))
                .collect(),
        }
    }

    /// Source quoting the configured anchor table.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new("static", config.anchor_rates())
    }

    pub fn currencies(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }
}

#[async_trait]
impl FxRateSource for StaticFxRates {
    fn name(&self) -> &str {
        &self.name
    }

    async fn quote(&self, currency: &str) -> Result<FxQuote, DomainError> {
        let code = currency.to_ascii_uppercase();
        let rate = self.rates.get(&code).copied().ok_or_else(|| {
            DomainError::new(
                ErrorCode::RateUnavailable,
                format!("No rate for {} in source '{}'", code, self.name),
            )
            .with_detail("currency", code.clone())
        })?;

        Ok(FxQuote {
            currency: code,
            rate,
            source: self.name.clone(),
            as_of: Timestamp::now(),
        })
    }
}
