//! Shortest Remaining Time First (preemptive SJF).

use std::collections::BTreeMap;

use super::{Scheduler, SchedulerCapabilities};
use crate::models::{Job, JobId, Time};

/// Shortest Remaining Time First.
///
/// Orders by `remaining_time` at admission, ties by ascending id. An
/// arrival with strictly less remaining work than the running job
/// displaces it immediately; the quantum still applies.
#[derive(Debug, Default)]
pub struct Srtf {
    ready: BTreeMap<(Time, JobId), Job>,
}

impl Srtf {
    /// Creates an empty SRTF queue.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn capabilities(&self) -> SchedulerCapabilities {
        SchedulerCapabilities::default().with_arrival_preemption()
    }

    fn add_job(&mut self, job: Job, _now: Time) {
        self.ready.insert((job.remaining_time(), job.id), job);
    }

    fn get_next_job(&mut self, _now: Time) -> Option<Job> {
        self.ready.pop_first().map(|(_, job)| job)
    }

    fn has_ready_jobs(&self) -> bool {
        !self.ready.is_empty()
    }

    fn should_preempt(&self, current: &Job, candidate: &Job) -> bool {
        candidate.remaining_time() < current.remaining_time()
    }
}
