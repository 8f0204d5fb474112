//! Procurement Analytics - Supplier ranking and procurement risk simulation
//!
//! This crate ranks suppliers with multi-criteria decision analysis
//! (TOPSIS, PROMETHEE II, weighted sum) and propagates financial risk
//! (FX, lead time, disruption, total cost) through Monte Carlo simulation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
