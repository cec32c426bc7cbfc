//! Execution timeline of a simulation run.
//!
//! A timeline is the CPU's Gantt chart: every contiguous stretch during
//! which one job held the CPU, and how that stretch ended.

use serde::{Deserialize, Serialize};

use super::{JobId, Time};

/// How a run slice ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SliceOutcome {
    /// The job finished its burst.
    Completed,
    /// The job used up its quantum and went back to the policy.
    QuantumExpired,
    /// An arriving job displaced it.
    Preempted,
}

/// One contiguous stretch of CPU time held by one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSlice {
    /// Job that held the CPU.
    pub job_id: JobId,
    /// Dispatch time.
    pub start: Time,
    /// Time the CPU was released.
    pub end: Time,
    /// Why the CPU was released.
    pub outcome: SliceOutcome,
}

impl RunSlice {
    /// Creates a run slice.
    pub fn new(job_id: JobId, start: Time, end: Time, outcome: SliceOutcome) -> Self {
        Self {
            job_id,
            start,
            end,
            outcome,
        }
    }

    /// CPU time consumed by this slice.
    #[inline]
    pub fn duration(&self) -> Time {
        self.end - self.start
    }
}

/// Ordered, non-overlapping run slices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in dispatch order.
    pub slices: Vec<RunSlice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    pub fn push(&mut self, slice: RunSlice) {
        self.slices.push(slice);
    }

    /// Latest slice end, 0 when empty.
    pub fn makespan(&self) -> Time {
        self.slices.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Total CPU time spent running jobs.
    pub fn busy_time(&self) -> Time {
        self.slices.iter().map(RunSlice::duration).sum()
    }

    /// Busy time over makespan (measured from t=0).
    ///
    /// Returns 0.0 for an empty timeline.
    pub fn utilization(&self) -> f64 {
        let horizon = self.makespan();
        if horizon <= 0 {
            return 0.0;
        }
        self.busy_time() as f64 / horizon as f64
    }

    /// Number of times the CPU switched from one job to a different one.
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|w| w[0].job_id != w[1].job_id)
            .count()
    }

    /// All slices for one job, in order.
    pub fn slices_for(&self, job_id: JobId) -> Vec<&RunSlice> {
        self.slices.iter().filter(|s| s.job_id == job_id).collect()
    }

    /// Job ids in dispatch order (one entry per slice).
    pub fn dispatch_order(&self) -> Vec<JobId> {
        self.slices.iter().map(|s| s.job_id).collect()
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether no job ever ran.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
