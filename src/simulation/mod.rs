//! Simulation engine and run metrics.
//!
//! `SimulationEngine` replays a job set through one policy on a single
//! simulated CPU. `compute_metrics` scores the completed jobs.

mod engine;
mod metrics;

pub use engine::{SimulationEngine, SimulationOutcome};
pub use metrics::{compute_metrics, SimulationMetrics};
