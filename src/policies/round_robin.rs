//! Round Robin: FIFO ready queue, fixed engine quantum.

use std::collections::VecDeque;

use super::Scheduler;
use crate::models::{Job, Time};

/// Round Robin.
///
/// Every job gets the engine's default quantum in turn. A preempted job
/// goes to the back of the queue.
#[derive(Debug, Default)]
pub struct RoundRobin {
    ready: VecDeque<Job>,
}

impl RoundRobin {
    /// Creates an empty Round Robin queue.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn add_job(&mut self, job: Job, _now: Time) {
        self.ready.push_back(job);
    }

    fn get_next_job(&mut self, _now: Time) -> Option<Job> {
        self.ready.pop_front()
    }

    fn has_ready_jobs(&self) -> bool {
        !self.ready.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobSpec;

    #[test]
    fn test_fifo_order() {
        let mut rr = RoundRobin::new();
        for id in [3, 1, 2] {
            rr.add_job(JobSpec::new(id, 0, 5).instantiate(), 0);
        }
        let order: Vec<u64> = std::iter::from_fn(|| rr.get_next_job(0).map(|j| j.id)).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn test_preempted_goes_to_back() {
        let mut rr = RoundRobin::new();
        rr.add_job(JobSpec::new(1, 0, 5).instantiate(), 0);
        rr.add_job(JobSpec::new(2, 0, 5).instantiate(), 0);

        let first = rr.get_next_job(0).unwrap();
        rr.on_job_preempted(first, 4);

        assert_eq!(rr.get_next_job(4).unwrap().id, 2);
        assert_eq!(rr.get_next_job(4).unwrap().id, 1);
        assert!(!rr.has_ready_jobs());
        assert!(rr.get_next_job(4).is_none());
    }
}
