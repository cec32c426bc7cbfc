//! Simulation domain models.
//!
//! | Type | Role |
//! |------|------|
//! | `JobSpec` | Immutable job parameters from a workload |
//! | `Job` | Per-run working copy with runtime state |
//! | `Event` | Timestamped occurrence driving the clock |
//! | `Timeline` | Record of who held the CPU and when |

mod event;
mod job;
mod timeline;

pub use event::{Event, EventKind};
pub use job::{Job, JobId, JobSpec, JobState, Time};
pub use timeline::{RunSlice, SliceOutcome, Timeline};
