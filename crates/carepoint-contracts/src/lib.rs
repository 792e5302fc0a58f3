//! # carepoint-contracts
//!
//! Shared types and error contracts for the Carepoint symptom assessment
//! engine.
//!
//! All crates in the workspace import from here. No scoring logic lives in
//! this crate, only data definitions, label parsing, and error types.

pub mod advisory;
pub mod assessment;
pub mod condition;
pub mod duration;
pub mod error;
pub mod severity;

pub use advisory::{Advisory, AdvisoryLevel, DISCLAIMER};
pub use assessment::{AssessmentRequest, AssessmentResult, Confidence, ConditionMatch};
pub use condition::{ConditionDefinition, PRIMARY_WEIGHT, SECONDARY_WEIGHT};
pub use duration::DurationBucket;
pub use error::{CarepointError, CarepointResult};
pub use severity::Severity;
