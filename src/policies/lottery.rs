//! Lottery scheduling.
//!
//! Each ready job holds `max(1, priority + 1)` tickets. A draw picks a
//! uniform ticket in `[1, total]` and walks the ready set accumulating
//! ticket counts; the job whose range contains the draw wins and leaves
//! the set.
//!
//! # Reference
//! Waldspurger & Weihl (1994), "Lottery Scheduling: Flexible
//! Proportional-Share Resource Management"

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Scheduler;
use crate::models::{Job, Time};

/// Lottery.
///
/// Owns its RNG; two instances built from the same seed make the same
/// draws for the same admissions.
#[derive(Debug)]
pub struct Lottery {
    ready: Vec<Job>,
    rng: StdRng,
}

impl Lottery {
    /// Creates a reproducible lottery.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a lottery seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            ready: Vec::new(),
            rng,
        }
    }

    /// Ticket count for a job.
    pub fn tickets(job: &Job) -> u64 {
        (job.priority as i64 + 1).max(1) as u64
    }

    /// Total tickets currently in play.
    pub fn total_tickets(&self) -> u64 {
        self.ready.iter().map(Self::tickets).sum()
    }

    /// Index of the job holding ticket `draw` (1-based).
    fn winner(&self, draw: u64) -> usize {
        let mut acc = 0;
        for (idx, job) in self.ready.iter().enumerate() {
            acc += Self::tickets(job);
            if draw <= acc {
                return idx;
            }
        }
        self.ready.len() - 1
    }
}

impl Scheduler for Lottery {
    fn name(&self) -> &'static str {
        "Lottery"
    }

    fn add_job(&mut self, job: Job, _now: Time) {
        self.ready.push(job);
    }

    fn get_next_job(&mut self, _now: Time) -> Option<Job> {
        if self.ready.is_empty() {
            return None;
        }
        let total = self.total_tickets();
        let draw = self.rng.random_range(1..=total);
        let idx = self.winner(draw);
        Some(self.ready.remove(idx))
    }

    fn has_ready_jobs(&self) -> bool {
        !self.ready.is_empty()
    }
}
