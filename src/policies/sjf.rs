//! Shortest Job First (non-preemptive).
//!
//! # Reference
//! Smith (1956), optimal for minimizing mean flow time on a single machine
//! when all jobs are available at once.

use std::collections::BTreeMap;

use super::{Scheduler, SchedulerCapabilities};
use crate::models::{Job, JobId, Time};

/// Shortest Job First.
///
/// Orders by full `burst_time` (not remaining), ties by ascending id.
/// Once dispatched, a job runs to completion.
#[derive(Debug, Default)]
pub struct Sjf {
    ready: BTreeMap<(Time, JobId), Job>,
}

impl Sjf {
    /// Creates an empty SJF queue.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn capabilities(&self) -> SchedulerCapabilities {
        SchedulerCapabilities::non_preemptive()
    }

    fn add_job(&mut self, job: Job, _now: Time) {
        self.ready.insert((job.burst_time, job.id), job);
    }

    fn get_next_job(&mut self, _now: Time) -> Option<Job> {
        self.ready.pop_first().map(|(_, job)| job)
    }

    fn has_ready_jobs(&self) -> bool {
        !self.ready.is_empty()
    }
}
