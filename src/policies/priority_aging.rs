//! Priority scheduling with aging.
//!
//! Effective priority = `priority + age_bonus`, where
//! `age_bonus = min(max_age_bonus, (wait / age_interval) * 2)`.
//!
//! `wait` counts ready-queue time only. Each stint in the queue adds to a
//! per-job total that is frozen when the job is dispatched and survives
//! re-admission, so running time never ages a job and earlier waiting is
//! never counted twice.
//!
//! Effective priorities are recomputed at every extraction because
//! waiting jobs keep aging between decisions.

use std::collections::HashMap;

use super::Scheduler;
use crate::config::AgingConfig;
use crate::models::{Job, JobId, Time};

/// Priority+Aging.
///
/// Highest effective priority runs first; ties go to the earliest
/// enqueue time, then the lowest job id.
#[derive(Debug)]
pub struct PriorityAging {
    age_interval: Time,
    max_age_bonus: i64,
    ready: Vec<Job>,
    /// Start of the current queue stint.
    enqueue_time: HashMap<JobId, Time>,
    /// Wait from completed stints.
    accumulated_wait: HashMap<JobId, Time>,
}

impl PriorityAging {
    /// Creates a policy with the default aging parameters.
    pub fn new() -> Self {
        Self::with_config(&AgingConfig::default())
    }

    /// Creates a policy from aging settings.
    ///
    /// A non-positive `age_interval` is clamped to 1.
    pub fn with_config(config: &AgingConfig) -> Self {
        Self {
            age_interval: config.age_interval.max(1),
            max_age_bonus: config.max_age_bonus.max(0),
            ready: Vec::new(),
            enqueue_time: HashMap::new(),
            accumulated_wait: HashMap::new(),
        }
    }

    /// Total ready-queue wait of `job_id` as of `now`.
    pub fn total_wait(&self, job_id: JobId, now: Time) -> Time {
        let frozen = self.accumulated_wait.get(&job_id).copied().unwrap_or(0);
        let current = if self.ready.iter().any(|j| j.id == job_id) {
            self.enqueue_time
                .get(&job_id)
                .map(|&t| (now - t).max(0))
                .unwrap_or(0)
        } else {
            0
        };
        frozen + current
    }

    /// Effective priority of `job` as of `now`.
    pub fn effective_priority(&self, job: &Job, now: Time) -> i64 {
        let wait = self.total_wait(job.id, now);
        let age_bonus = ((wait / self.age_interval) * 2).min(self.max_age_bonus);
        job.priority as i64 + age_bonus
    }

    fn select_index(&self, now: Time) -> Option<usize> {
        let mut best: Option<(usize, i64, Time, JobId)> = None;
        for (idx, job) in self.ready.iter().enumerate() {
            let eff = self.effective_priority(job, now);
            let enq = self.enqueue_time.get(&job.id).copied().unwrap_or(now);
            let better = match best {
                None => true,
                Some((_, b_eff, b_enq, b_id)) => {
                    (eff, std::cmp::Reverse(enq), std::cmp::Reverse(job.id))
                        > (b_eff, std::cmp::Reverse(b_enq), std::cmp::Reverse(b_id))
                }
            };
            if better {
                best = Some((idx, eff, enq, job.id));
            }
        }
        best.map(|(idx, ..)| idx)
    }
}

impl Default for PriorityAging {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for PriorityAging {
    fn name(&self) -> &'static str {
        "Priority+Aging"
    }

    fn add_job(&mut self, job: Job, now: Time) {
        // Keeps credit from earlier stints
        self.accumulated_wait.entry(job.id).or_insert(0);
        self.enqueue_time.insert(job.id, now);
        self.ready.push(job);
    }

    fn get_next_job(&mut self, now: Time) -> Option<Job> {
        let idx = self.select_index(now)?;
        let job = self.ready.remove(idx);

        // Freeze this stint's wait before the job runs.
        let enqueued = self.enqueue_time.remove(&job.id).unwrap_or(now);
        *self.accumulated_wait.entry(job.id).or_insert(0) += (now - enqueued).max(0);

        Some(job)
    }

    fn has_ready_jobs(&self) -> bool {
        !self.ready.is_empty()
    }

    fn reset(&mut self) {
        self.ready.clear();
        self.enqueue_time.clear();
        self.accumulated_wait.clear();
    }
}
