//! Run quality metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Response | mean(first_run - arrival) |
//! | Tail p95 | nearest-rank 95th percentile turnaround |
//! | Starvation Rate | fraction with response > threshold |
//! | Makespan | latest completion |
//!
//! Empty input yields all-zero metrics.

use serde::{Deserialize, Serialize};

use crate::models::{Job, Time};

/// Aggregate scores for one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Mean turnaround over jobs that completed.
    pub avg_turnaround_time: f64,
    /// Mean response over jobs that were dispatched.
    pub avg_response_time: f64,
    /// 95th-percentile turnaround (nearest rank).
    pub tail_latency_p95: f64,
    /// Fraction of jobs whose response time exceeds the threshold.
    pub starvation_rate: f64,
    /// Number of jobs passed in.
    pub total_jobs: usize,
    /// Number of those with a completion time.
    pub completed_jobs: usize,
    /// Latest completion time.
    pub makespan: Time,
}

impl SimulationMetrics {
    /// Computes metrics from a run's completed jobs.
    ///
    /// # Arguments
    /// * `jobs` - Jobs returned by the engine.
    /// * `starvation_threshold` - Response time above which a job is starved.
    pub fn calculate(jobs: &[Job], starvation_threshold: Time) -> Self {
        if jobs.is_empty() {
            return Self::default();
        }

        let mut turnarounds: Vec<Time> = jobs.iter().filter_map(Job::turnaround_time).collect();
        let responses: Vec<Time> = jobs.iter().filter_map(Job::response_time).collect();

        let starved = responses
            .iter()
            .filter(|&&r| r > starvation_threshold)
            .count();

        turnarounds.sort_unstable();
        let tail_latency_p95 = percentile_nearest_rank(&turnarounds, 0.95)
            .map(|t| t as f64)
            .unwrap_or(0.0);

        Self {
            avg_turnaround_time: mean(&turnarounds),
            avg_response_time: mean(&responses),
            tail_latency_p95,
            starvation_rate: starved as f64 / jobs.len() as f64,
            total_jobs: jobs.len(),
            completed_jobs: turnarounds.len(),
            makespan: jobs
                .iter()
                .filter_map(Job::completion_time)
                .max()
                .unwrap_or(0),
        }
    }
}

/// Computes metrics from a run's completed jobs.
pub fn compute_metrics(jobs: &[Job], starvation_threshold: Time) -> SimulationMetrics {
    SimulationMetrics::calculate(jobs, starvation_threshold)
}

fn mean(values: &[Time]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<Time>() as f64 / values.len() as f64
}

/// `sorted[floor(n * p)]`, clamped to the last element.
fn percentile_nearest_rank(sorted: &[Time], p: f64) -> Option<Time> {
    if sorted.is_empty() {
        return None;
    }
    let idx = ((sorted.len() as f64 * p) as usize).min(sorted.len() - 1);
    Some(sorted[idx])
}
