//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, data-quality flags, and error types
//! that form the vocabulary of the ranking and simulation engines.

mod data_quality;
mod errors;
mod ids;
mod timestamp;

pub use data_quality::DataQualityFlag;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::RunId;
pub use timestamp::Timestamp;
