//! Domain layer containing the analytics engines and their value types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, timestamps, errors, data-quality flags)
//! - `ranking` - MCDA ranking: TOPSIS, PROMETHEE II, WSM, tier mapping
//! - `simulation` - Monte Carlo risk simulation (FX, lead time, scenario shocks)
//! - `concentration` - Herfindahl-Hirschman spend concentration
//! - `risk` - Seven-dimension supplier risk scoring and tiers

pub mod concentration;
pub mod foundation;
pub mod ranking;
pub mod risk;
pub mod simulation;
