//! Multi-Level Feedback Queue.
//!
//! New jobs enter level 0. A job that uses up its quantum is demoted one
//! level (saturating at the bottom) and goes to the back of that level.
//! Jobs are never promoted. Level `i` grants `quanta[i]` ticks.

use std::collections::{HashMap, VecDeque};

use super::{Scheduler, SchedulerCapabilities};
use crate::config::MlfqConfig;
use crate::models::{Job, JobId, Time};

/// Multi-Level Feedback Queue.
#[derive(Debug)]
pub struct Mlfq {
    queues: Vec<VecDeque<Job>>,
    quanta: Vec<Time>,
    level: HashMap<JobId, usize>,
}

impl Mlfq {
    /// Creates an MLFQ with 3 levels and quanta `[1, 2, 4]`.
    pub fn new() -> Self {
        Self::with_config(&MlfqConfig::default())
    }

    /// Creates an MLFQ from settings. At least one level is always present.
    pub fn with_config(config: &MlfqConfig) -> Self {
        let mut quanta: Vec<Time> = config
            .resolved_quanta()
            .into_iter()
            .map(|q| q.max(1))
            .collect();
        if quanta.is_empty() {
            quanta.push(1);
        }
        Self {
            queues: (0..quanta.len()).map(|_| VecDeque::new()).collect(),
            quanta,
            level: HashMap::new(),
        }
    }

    /// Number of levels.
    pub fn num_levels(&self) -> usize {
        self.queues.len()
    }

    /// Current level of a job, if the policy has seen it.
    pub fn level_of(&self, job_id: JobId) -> Option<usize> {
        self.level.get(&job_id).copied()
    }

    /// Number of jobs waiting at `level`.
    pub fn queue_len(&self, level: usize) -> usize {
        self.queues.get(level).map_or(0, VecDeque::len)
    }
}

impl Default for Mlfq {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for Mlfq {
    fn name(&self) -> &'static str {
        "MLFQ"
    }

    fn capabilities(&self) -> SchedulerCapabilities {
        SchedulerCapabilities::default().with_per_job_quantum()
    }

    fn add_job(&mut self, job: Job, _now: Time) {
        self.level.insert(job.id, 0);
        self.queues[0].push_back(job);
    }

    fn get_next_job(&mut self, _now: Time) -> Option<Job> {
        self.queues.iter_mut().find_map(VecDeque::pop_front)
    }

    fn has_ready_jobs(&self) -> bool {
        self.queues.iter().any(|q| !q.is_empty())
    }

    fn on_job_preempted(&mut self, job: Job, _now: Time) {
        let bottom = self.queues.len() - 1;
        let next = self
            .level
            .get(&job.id)
            .map_or(0, |&l| (l + 1).min(bottom));
        self.level.insert(job.id, next);
        self.queues[next].push_back(job);
    }

    fn quantum_for(&self, job: &Job) -> Option<Time> {
        let level = self.level.get(&job.id).copied().unwrap_or(0);
        self.quanta.get(level).copied()
    }

    fn reset(&mut self) {
        self.queues.iter_mut().for_each(VecDeque::clear);
        self.level.clear();
    }
}
