//! Error types for the Carepoint assessment engine.
//!
//! Scoring itself never fails. Every variant here is raised either while a
//! catalog is loaded (fatal, startup-time) or while caller-supplied labels
//! are parsed at the edge of the system.

use thiserror::Error;

/// The unified error type for the Carepoint crates.
#[derive(Debug, Error)]
pub enum CarepointError {
    /// A catalog source could not be read or is not valid TOML for the
    /// expected schema.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A condition definition violates a catalog invariant.
    ///
    /// Raised at load time so that a broken catalog never reaches scoring.
    #[error("invalid catalog entry '{condition}': {reason}")]
    CatalogInvalid { condition: String, reason: String },

    /// A caller-supplied label (severity, duration) is not recognised.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A result could not be encoded for output.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

/// Convenience alias used throughout the Carepoint crates.
pub type CarepointResult<T> = Result<T, CarepointError>;
