//! Error types for the Strider engine.
//!
//! All crates return `StriderResult<T>` from fallible operations.

use thiserror::Error;

use crate::ids::ColliderId;

/// Unified error type for the Strider engine.
#[derive(Debug, Error)]
pub enum StriderError {
    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A movement authority was written from a value outside the enumeration.
    #[error("Invalid movement authority value: {0}")]
    InvalidAuthority(u8),

    /// A collider id does not exist in the physics backend.
    #[error("Unknown collider: {0:?}")]
    UnknownCollider(ColliderId),

    /// A benchmark or simulation scenario is malformed.
    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, StriderError>`.
pub type StriderResult<T> = Result<T, StriderError>;
