//! Seeded workload generators.
//!
//! | Workload | Jobs | Burst | Arrivals | Priority |
//! |----------|------|-------|----------|----------|
//! | Batch | 20 | 10..=100 | 0..=50 | 0 |
//! | Interactive | 50 | 1..=10 | 0..=100 | 1 |
//! | Mixed | 10 batch + 30 interactive | 20..=80 / 1..=15 | 0..=120 | 0 / 2 |
//!
//! Output is sorted by arrival time, then job id.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SimulationError;
use crate::models::{JobId, JobSpec, Time};
use crate::validation::validate_workload;

/// Parameters for a homogeneous workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadParams {
    /// Number of jobs.
    pub num_jobs: usize,
    /// Inclusive burst range.
    pub burst: (Time, Time),
    /// Inclusive arrival range.
    pub arrival: (Time, Time),
    /// Priority assigned to every job.
    pub priority: i32,
}

impl WorkloadParams {
    /// Long CPU-bound jobs, sparse arrivals.
    pub fn batch() -> Self {
        Self {
            num_jobs: 20,
            burst: (10, 100),
            arrival: (0, 50),
            priority: 0,
        }
    }

    /// Short latency-sensitive jobs, dense arrivals.
    pub fn interactive() -> Self {
        Self {
            num_jobs: 50,
            burst: (1, 10),
            arrival: (0, 100),
            priority: 1,
        }
    }

    /// Sets the job count.
    pub fn with_jobs(mut self, num_jobs: usize) -> Self {
        self.num_jobs = num_jobs;
        self
    }
}

/// Generates a homogeneous workload.
///
/// Fails with [`SimulationError::InvalidInput`] when a range is empty or
/// would produce non-positive bursts or negative arrivals.
pub fn generate(params: &WorkloadParams, seed: u64) -> Result<Vec<JobSpec>, SimulationError> {
    validate_workload(params).map_err(SimulationError::InvalidInput)?;
    Ok(sample(params, seed))
}

fn sample(params: &WorkloadParams, seed: u64) -> Vec<JobSpec> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut jobs: Vec<JobSpec> = (0..params.num_jobs)
        .map(|i| draw(&mut rng, i as JobId, params))
        .collect();
    sort_by_arrival(&mut jobs);
    jobs
}

/// Batch jobs followed by higher-priority interactive jobs, ids contiguous.
pub fn generate_mixed(seed: u64) -> Vec<JobSpec> {
    let batch = WorkloadParams {
        num_jobs: 10,
        burst: (20, 80),
        arrival: (0, 120),
        priority: 0,
    };
    let interactive = WorkloadParams {
        num_jobs: 30,
        burst: (1, 15),
        arrival: (0, 120),
        priority: 2,
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let mut jobs = Vec::with_capacity(batch.num_jobs + interactive.num_jobs);
    for params in [&batch, &interactive] {
        for _ in 0..params.num_jobs {
            let id = jobs.len() as JobId;
            jobs.push(draw(&mut rng, id, params));
        }
    }
    sort_by_arrival(&mut jobs);
    jobs
}

fn draw<R: Rng>(rng: &mut R, id: JobId, params: &WorkloadParams) -> JobSpec {
    let burst = rng.random_range(params.burst.0..=params.burst.1);
    let arrival = rng.random_range(params.arrival.0..=params.arrival.1);
    JobSpec::new(id, arrival, burst).with_priority(params.priority)
}

fn sort_by_arrival(jobs: &mut [JobSpec]) {
    jobs.sort_by(|a, b| {
        a.arrival_time
            .cmp(&b.arrival_time)
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// The built-in workloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WorkloadKind {
    Batch,
    Interactive,
    Mixed,
}

impl WorkloadKind {
    /// Every built-in workload.
    pub const ALL: [WorkloadKind; 3] = [
        WorkloadKind::Batch,
        WorkloadKind::Interactive,
        WorkloadKind::Mixed,
    ];

    /// Lower-case name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            WorkloadKind::Batch => "batch",
            WorkloadKind::Interactive => "interactive",
            WorkloadKind::Mixed => "mixed",
        }
    }

    /// Generates this workload.
    pub fn generate(self, seed: u64) -> Vec<JobSpec> {
        match self {
            WorkloadKind::Batch => sample(&WorkloadParams::batch(), seed),
            WorkloadKind::Interactive => sample(&WorkloadParams::interactive(), seed),
            WorkloadKind::Mixed => generate_mixed(seed),
        }
    }
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WorkloadKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "batch" => Ok(WorkloadKind::Batch),
            "interactive" => Ok(WorkloadKind::Interactive),
            "mixed" => Ok(WorkloadKind::Mixed),
            other => Err(format!("unknown workload '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_jobs;

    #[test]
    fn test_batch_shape() {
        let jobs = WorkloadKind::Batch.generate(42);
        assert_eq!(jobs.len(), 20);
        assert!(jobs.iter().all(|j| (10..=100).contains(&j.burst_time)));
        assert!(jobs.iter().all(|j| (0..=50).contains(&j.arrival_time)));
        assert!(jobs.iter().all(|j| j.priority == 0));
        assert!(validate_jobs(&jobs).is_ok());
    }

    #[test]
    fn test_interactive_shape() {
        let jobs = WorkloadKind::Interactive.generate(42);
        assert_eq!(jobs.len(), 50);
        assert!(jobs.iter().all(|j| (1..=10).contains(&j.burst_time)));
        assert!(jobs.iter().all(|j| j.priority == 1));
    }

    #[test]
    fn test_mixed_shape() {
        let jobs = WorkloadKind::Mixed.generate(42);
        assert_eq!(jobs.len(), 40);
        for j in &jobs {
            if j.id < 10 {
                assert_eq!(j.priority, 0);
                assert!((20..=80).contains(&j.burst_time));
            } else {
                assert_eq!(j.priority, 2);
                assert!((1..=15).contains(&j.burst_time));
            }
        }
        assert!(validate_jobs(&jobs).is_ok());
    }

    #[test]
    fn test_sorted_by_arrival_then_id() {
        let jobs = WorkloadKind::Interactive.generate(7);
        assert!(jobs
            .windows(2)
            .all(|w| (w[0].arrival_time, w[0].id) < (w[1].arrival_time, w[1].id)));
    }

    #[test]
    fn test_seed_reproducible() {
        assert_eq!(WorkloadKind::Mixed.generate(5), WorkloadKind::Mixed.generate(5));
        assert_ne!(WorkloadKind::Batch.generate(1), WorkloadKind::Batch.generate(2));
    }

    #[test]
    fn test_zero_arrival_range() {
        let params = WorkloadParams::batch().with_jobs(5);
        let params = WorkloadParams {
            arrival: (0, 0),
            ..params
        };
        let jobs = generate(&params, 0).unwrap();
        assert_eq!(jobs.len(), 5);
        assert!(jobs.iter().all(|j| j.arrival_time == 0));
    }

    #[test]
    fn test_rejects_inverted_ranges() {
        let params = WorkloadParams {
            burst: (10, 1),
            ..WorkloadParams::interactive()
        };
        assert!(matches!(
            generate(&params, 0),
            Err(SimulationError::InvalidInput(ref e)) if e.len() == 1
        ));

        let params = WorkloadParams {
            arrival: (5, 0),
            ..WorkloadParams::interactive()
        };
        assert!(generate(&params, 0).is_err());
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("Batch".parse::<WorkloadKind>(), Ok(WorkloadKind::Batch));
        assert!("bursty".parse::<WorkloadKind>().is_err());
    }
}
