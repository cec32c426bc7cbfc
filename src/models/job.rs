//! Job model.
//!
//! A job is a single CPU-bound task with a fixed arrival time and burst
//! length. [`JobSpec`] carries the immutable parameters produced by a
//! workload generator; [`Job`] is the private working copy a simulation
//! run mutates.
//!
//! # Lifecycle
//!
//! ```text
//! New ──► Ready ◄──► Running ──► Done
//! ```
//!
//! Any other transition is rejected with
//! [`SimulationError::IllegalTransition`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SimulationError;

/// Simulation clock value (abstract ticks).
pub type Time = i64;

/// Unique job identifier within one job set.
pub type JobId = u64;

/// Immutable job parameters.
///
/// # Priority
/// Higher = more important. The meaning is policy-defined: Priority+Aging
/// uses it as the base priority, Lottery derives its ticket count from it,
/// the other policies ignore it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpec {
    /// Unique job identifier.
    pub id: JobId,
    /// Time at which the job becomes ready.
    pub arrival_time: Time,
    /// Total CPU time required.
    pub burst_time: Time,
    /// Policy-defined priority (default 0).
    #[serde(default)]
    pub priority: i32,
}

impl JobSpec {
    /// Creates a job spec with priority 0.
    pub fn new(id: JobId, arrival_time: Time, burst_time: Time) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Creates a fresh working copy for one simulation run.
    pub fn instantiate(&self) -> Job {
        Job {
            id: self.id,
            arrival_time: self.arrival_time,
            burst_time: self.burst_time,
            priority: self.priority,
            remaining_time: self.burst_time,
            state: JobState::New,
            first_run_time: None,
            completion_time: None,
        }
    }
}

/// Execution state of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobState {
    /// Not yet arrived.
    New,
    /// Waiting in a policy's ready queue.
    Ready,
    /// Holding the CPU.
    Running,
    /// Finished; read-only from here on.
    Done,
}

impl JobState {
    /// Whether `self → next` is a legal lifecycle step.
    pub fn can_transition_to(self, next: JobState) -> bool {
        matches!(
            (self, next),
            (JobState::New, JobState::Ready)
                | (JobState::Ready, JobState::Running)
                | (JobState::Running, JobState::Ready)
                | (JobState::Running, JobState::Done)
        )
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JobState::New => "new",
            JobState::Ready => "ready",
            JobState::Running => "running",
            JobState::Done => "done",
        };
        f.write_str(name)
    }
}

/// Working copy of a job inside one simulation run.
///
/// Fixed parameters are public. Runtime state is readable through
/// accessors and only mutated by the simulation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub id: JobId,
    /// Time at which the job became ready.
    pub arrival_time: Time,
    /// Total CPU time required.
    pub burst_time: Time,
    /// Policy-defined priority.
    pub priority: i32,
    remaining_time: Time,
    state: JobState,
    first_run_time: Option<Time>,
    completion_time: Option<Time>,
}

impl Job {
    /// CPU time still required.
    #[inline]
    pub fn remaining_time(&self) -> Time {
        self.remaining_time
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> JobState {
        self.state
    }

    /// Time of first dispatch, once dispatched.
    #[inline]
    pub fn first_run_time(&self) -> Option<Time> {
        self.first_run_time
    }

    /// Time of completion, once done.
    #[inline]
    pub fn completion_time(&self) -> Option<Time> {
        self.completion_time
    }

    /// Whether the job has finished.
    pub fn is_done(&self) -> bool {
        self.state == JobState::Done
    }

    /// `completion_time - arrival_time`.
    pub fn turnaround_time(&self) -> Option<Time> {
        self.completion_time.map(|c| c - self.arrival_time)
    }

    /// `first_run_time - arrival_time`.
    pub fn response_time(&self) -> Option<Time> {
        self.first_run_time.map(|f| f - self.arrival_time)
    }

    /// Fixed parameters of this job.
    pub fn spec(&self) -> JobSpec {
        JobSpec {
            id: self.id,
            arrival_time: self.arrival_time,
            burst_time: self.burst_time,
            priority: self.priority,
        }
    }

    pub(crate) fn transition(&mut self, next: JobState) -> Result<(), SimulationError> {
        if !self.state.can_transition_to(next) {
            return Err(SimulationError::IllegalTransition {
                job_id: self.id,
                from: self.state,
                to: next,
            });
        }
        self.state = next;
        Ok(())
    }

    /// Marks the job running and stamps the first dispatch time.
    pub(crate) fn dispatch(&mut self, now: Time) -> Result<(), SimulationError> {
        self.transition(JobState::Running)?;
        if self.first_run_time.is_none() {
            self.first_run_time = Some(now);
        }
        Ok(())
    }

    /// Deducts consumed CPU time. Only legal while running.
    pub(crate) fn consume(&mut self, elapsed: Time) -> Result<(), SimulationError> {
        if self.state != JobState::Running || elapsed < 0 || elapsed > self.remaining_time {
            return Err(SimulationError::InvalidProgress {
                job_id: self.id,
                elapsed,
                remaining: self.remaining_time,
            });
        }
        self.remaining_time -= elapsed;
        Ok(())
    }

    /// Marks the job done at `now`. Requires zero remaining time.
    pub(crate) fn complete(&mut self, now: Time) -> Result<(), SimulationError> {
        if self.remaining_time != 0 {
            return Err(SimulationError::InvalidProgress {
                job_id: self.id,
                elapsed: 0,
                remaining: self.remaining_time,
            });
        }
        self.transition(JobState::Done)?;
        self.completion_time = Some(now);
        Ok(())
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Job({}, arr={}, burst={})",
            self.id, self.arrival_time, self.burst_time
        )
    }
}
