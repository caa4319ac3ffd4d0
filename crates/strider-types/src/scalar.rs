//! Scalar type alias for the simulation.
//!
//! Host engines hand positions over as single precision, so the whole
//! pipeline stays in `f32`.

/// The floating-point type used throughout the engine.
pub type Scalar = f32;
