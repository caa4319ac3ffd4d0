//! # strider-bench
//!
//! Benchmark suite for the Strider body engine.
//!
//! Provides 4 canonical scenarios, a runner that drives the body engine
//! against the reference world, metric collection, and CSV export for
//! regression tracking.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{Scenario, ScenarioKind};
