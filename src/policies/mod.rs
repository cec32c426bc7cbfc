//! Scheduling policies.
//!
//! A policy owns the ready queue: the engine hands it every job that
//! becomes ready and asks it which job runs next. Optional behavior
//! (quantum preemption, per-job quanta, arrival preemption) is declared
//! up front through [`SchedulerCapabilities`] and read once per run.
//!
//! | Policy | Order | Preemption |
//! |--------|-------|------------|
//! | Round Robin | FIFO | quantum |
//! | SJF | burst, then id | none |
//! | SRTF | remaining, then id | arrival + quantum |
//! | Priority+Aging | effective priority, enqueue time, id | quantum |
//! | Lottery | weighted draw | quantum |
//! | MLFQ | level, then FIFO | per-level quantum |
//!
//! # Usage
//!
//! ```
//! use cpu_sched_eval::policies::{RoundRobin, Scheduler};
//! use cpu_sched_eval::models::JobSpec;
//!
//! let mut rr = RoundRobin::new();
//! rr.add_job(JobSpec::new(0, 0, 5).instantiate(), 0);
//! rr.add_job(JobSpec::new(1, 0, 3).instantiate(), 0);
//!
//! assert_eq!(rr.get_next_job(0).map(|j| j.id), Some(0));
//! assert!(rr.has_ready_jobs());
//! ```

mod lottery;
mod mlfq;
mod priority_aging;
mod round_robin;
mod sjf;
mod srtf;

pub use lottery::Lottery;
pub use mlfq::Mlfq;
pub use priority_aging::PriorityAging;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::ExperimentConfig;
use crate::models::{Job, Time};

/// Optional behavior a policy opts into.
///
/// Queried once at the start of every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerCapabilities {
    /// Running jobs are interrupted when their quantum expires.
    /// When false, a dispatched job runs to completion.
    pub preempts_on_quantum: bool,
    /// [`Scheduler::quantum_for`] overrides the engine's default quantum.
    pub per_job_quantum: bool,
    /// Arrivals may displace the running job via [`Scheduler::should_preempt`].
    pub preempts_on_arrival: bool,
}

impl Default for SchedulerCapabilities {
    fn default() -> Self {
        Self {
            preempts_on_quantum: true,
            per_job_quantum: false,
            preempts_on_arrival: false,
        }
    }
}

impl SchedulerCapabilities {
    /// Run-to-completion: no quantum, no arrival preemption.
    pub fn non_preemptive() -> Self {
        Self {
            preempts_on_quantum: false,
            ..Self::default()
        }
    }

    /// Enables per-job quanta.
    pub fn with_per_job_quantum(mut self) -> Self {
        self.per_job_quantum = true;
        self
    }

    /// Enables arrival preemption.
    pub fn with_arrival_preemption(mut self) -> Self {
        self.preempts_on_arrival = true;
        self
    }
}

/// A CPU scheduling policy.
///
/// # Contract
/// - `add_job` admits exactly one ready job and never drops it.
/// - `get_next_job` returns `None` only when `has_ready_jobs()` is false.
/// - `get_next_job` only returns jobs previously admitted and not yet
///   returned.
///
/// The engine enforces the last two and aborts the run on violation.
pub trait Scheduler {
    /// Display name (e.g., "Round Robin").
    fn name(&self) -> &'static str;

    /// Optional behavior this policy opts into.
    fn capabilities(&self) -> SchedulerCapabilities {
        SchedulerCapabilities::default()
    }

    /// Admits a job that just became ready.
    fn add_job(&mut self, job: Job, now: Time);

    /// Removes and returns the job to run next.
    fn get_next_job(&mut self, now: Time) -> Option<Job>;

    /// Whether any job is waiting.
    fn has_ready_jobs(&self) -> bool;

    /// Re-admits a job whose run was cut short (quantum or arrival).
    fn on_job_preempted(&mut self, job: Job, now: Time) {
        self.add_job(job, now);
    }

    /// Quantum for `job`, consulted only when `per_job_quantum` is set.
    fn quantum_for(&self, _job: &Job) -> Option<Time> {
        None
    }

    /// Whether `candidate` should displace `current`.
    /// Consulted only when `preempts_on_arrival` is set.
    fn should_preempt(&self, _current: &Job, _candidate: &Job) -> bool {
        false
    }

    /// Forgets per-job bookkeeping left over from an earlier run.
    /// Called by the engine before the first arrival of every run.
    fn reset(&mut self) {}
}

impl<S: Scheduler + ?Sized> Scheduler for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn capabilities(&self) -> SchedulerCapabilities {
        (**self).capabilities()
    }

    fn add_job(&mut self, job: Job, now: Time) {
        (**self).add_job(job, now)
    }

    fn get_next_job(&mut self, now: Time) -> Option<Job> {
        (**self).get_next_job(now)
    }

    fn has_ready_jobs(&self) -> bool {
        (**self).has_ready_jobs()
    }

    fn on_job_preempted(&mut self, job: Job, now: Time) {
        (**self).on_job_preempted(job, now)
    }

    fn quantum_for(&self, job: &Job) -> Option<Time> {
        (**self).quantum_for(job)
    }

    fn should_preempt(&self, current: &Job, candidate: &Job) -> bool {
        (**self).should_preempt(current, candidate)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

/// The built-in policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PolicyKind {
    RoundRobin,
    Sjf,
    Srtf,
    PriorityAging,
    Lottery,
    Mlfq,
}

impl PolicyKind {
    /// Every built-in policy.
    pub const ALL: [PolicyKind; 6] = [
        PolicyKind::RoundRobin,
        PolicyKind::Sjf,
        PolicyKind::Srtf,
        PolicyKind::PriorityAging,
        PolicyKind::Lottery,
        PolicyKind::Mlfq,
    ];

    /// Display name, identical to the built policy's [`Scheduler::name`].
    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::RoundRobin => "Round Robin",
            PolicyKind::Sjf => "SJF",
            PolicyKind::Srtf => "SRTF",
            PolicyKind::PriorityAging => "Priority+Aging",
            PolicyKind::Lottery => "Lottery",
            PolicyKind::Mlfq => "MLFQ",
        }
    }

    /// Builds a fresh policy instance from experiment settings.
    pub fn build(self, config: &ExperimentConfig) -> Box<dyn Scheduler> {
        match self {
            PolicyKind::RoundRobin => Box::new(RoundRobin::new()),
            PolicyKind::Sjf => Box::new(Sjf::new()),
            PolicyKind::Srtf => Box::new(Srtf::new()),
            PolicyKind::PriorityAging => Box::new(PriorityAging::with_config(&config.aging)),
            PolicyKind::Lottery => Box::new(match config.lottery.seed {
                Some(seed) => Lottery::seeded(seed),
                None => Lottery::from_entropy(),
            }),
            PolicyKind::Mlfq => Box::new(Mlfq::with_config(&config.mlfq)),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rr" | "round-robin" | "roundrobin" => Ok(PolicyKind::RoundRobin),
            "sjf" => Ok(PolicyKind::Sjf),
            "srtf" => Ok(PolicyKind::Srtf),
            "priority" | "priority-aging" | "aging" => Ok(PolicyKind::PriorityAging),
            "lottery" => Ok(PolicyKind::Lottery),
            "mlfq" => Ok(PolicyKind::Mlfq),
            other => Err(format!("unknown policy '{other}'")),
        }
    }
}
