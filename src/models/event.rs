//! Simulation events.
//!
//! Only arrivals are ever queued; completion and quantum expiry are
//! computed inline by the engine from the running job's slice. The kinds
//! exist so that traces and future event sources share one vocabulary.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{JobId, Time};

/// Kind of simulation event.
///
/// The declaration order is the tie-break order at equal timestamps:
/// a running job's completion or expiry resolves before arrivals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Running job finished its burst.
    Completion,
    /// Running job exhausted its quantum.
    QuantumExpire,
    /// Job became ready.
    Arrival,
}

/// A timestamped occurrence referring to a job by id.
///
/// Ordered by `(time, kind, job_id)`, which makes same-time arrivals
/// deterministic: ascending job id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    /// Simulation time at which the event fires.
    pub time: Time,
    /// What happens.
    pub kind: EventKind,
    /// Associated job.
    pub job_id: JobId,
}

impl Event {
    /// Creates an arrival event.
    pub fn arrival(time: Time, job_id: JobId) -> Self {
        Self {
            time,
            kind: EventKind::Arrival,
            job_id,
        }
    }
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time
            .cmp(&other.time)
            .then_with(|| self.kind.cmp(&other.kind))
            .then_with(|| self.job_id.cmp(&other.job_id))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
