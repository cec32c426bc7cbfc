//! Workload-driven CPU scheduling evaluation.
//!
//! Replays a fixed job set through a single-CPU discrete-event simulator
//! under a pluggable scheduling policy and scores the outcome.
//!
//! # Modules
//!
//! - **`models`**: `JobSpec`, `Job`, `Event`, `Timeline`
//! - **`policies`**: the `Scheduler` trait and Round Robin, SJF, SRTF,
//!   Priority+Aging, Lottery, MLFQ
//! - **`simulation`**: `SimulationEngine` and `compute_metrics`
//! - **`validation`**: job-set and configuration checks
//! - **`workloads`**: seeded batch / interactive / mixed generators
//! - **`experiments`**: policy × workload runner and report table
//!
//! # Example
//!
//! ```
//! use cpu_sched_eval::models::JobSpec;
//! use cpu_sched_eval::policies::Srtf;
//! use cpu_sched_eval::simulation::{compute_metrics, SimulationEngine};
//!
//! let jobs = vec![JobSpec::new(0, 0, 8), JobSpec::new(1, 2, 3)];
//! let completed = SimulationEngine::new(Srtf::new()).run(&jobs).unwrap();
//! let metrics = compute_metrics(&completed, 100);
//!
//! assert_eq!(metrics.total_jobs, 2);
//! assert_eq!(completed[0].id, 1); // shorter arrival preempts
//! ```
//!
//! # References
//!
//! - Arpaci-Dusseau & Arpaci-Dusseau (2018), "Operating Systems: Three
//!   Easy Pieces", Ch. 7-9
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

pub mod config;
pub mod error;
pub mod experiments;
pub mod models;
pub mod policies;
pub mod simulation;
pub mod validation;
pub mod workloads;

pub use error::SimulationError;
