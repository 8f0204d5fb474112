//! FX Rate Adapters
//!
//! - **StaticFxRates** - Fixed table, typically the configured anchors
//! - **FailoverFxRates** - Ordered fallback across several sources

mod failover_rates;
mod static_rates;

pub use failover_rates::FailoverFxRates;
pub use static_rates::StaticFxRates;
