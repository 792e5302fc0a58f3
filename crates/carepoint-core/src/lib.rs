//! # carepoint-core
//!
//! The deterministic symptom-to-condition scoring pipeline.
//!
//! This crate provides:
//! - The `ConditionCatalog` trait the pipeline reads definitions through
//! - Catalog validation, run once before any scoring
//! - The pipeline stages (normalize, score, classify, rank, fallback,
//!   urgency) as individually testable functions
//! - The `Assessor` that wires them together over a shared catalog
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use carepoint_contracts::AssessmentRequest;
//! use carepoint_core::Assessor;
//!
//! let assessor = Assessor::new(Arc::new(catalog))?;
//! let result = assessor.assess(&AssessmentRequest::new(["Headache", "Nausea"]));
//! ```

pub mod confidence;
pub mod engine;
pub mod fallback;
pub mod normalize;
pub mod rank;
pub mod scoring;
pub mod traits;
pub mod urgency;
pub mod validate;

pub use engine::{assess, Assessor};
pub use scoring::{score_condition, ConditionScore, ScoredCandidate};
pub use traits::ConditionCatalog;
pub use urgency::advise;
