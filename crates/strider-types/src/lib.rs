//! # strider-types
//!
//! Shared types, identifiers, error types, and physical constants
//! for the Strider body representation engine.
//!
//! This crate has zero domain logic. It defines the vocabulary
//! that all other Strider crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{StriderError, StriderResult};
pub use ids::{ColliderId, InteractableId, InteractorId, LayerId};
pub use scalar::Scalar;
