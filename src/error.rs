//! Crate error type.
//!
//! Every variant except `InvalidInput` indicates a bug in a scheduling
//! policy or in the engine itself. None of them is retryable.

use thiserror::Error;

use crate::models::{JobId, JobState, Time};
use crate::validation::ValidationError;

/// Errors produced while setting up or running a simulation.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The job set or configuration failed boundary validation.
    #[error("invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    /// A policy returned a job it does not hold.
    #[error("policy `{policy}` returned job {job_id}, which it was never given")]
    UnknownJob { policy: &'static str, job_id: JobId },

    /// A policy claimed to have ready jobs but yielded none.
    #[error("policy `{policy}` reported ready jobs but returned none")]
    EmptyDispatch { policy: &'static str },

    /// A policy already held jobs when a run started.
    #[error("policy `{policy}` is not empty at the start of a run")]
    PolicyNotEmpty { policy: &'static str },

    /// A job was asked to make an illegal lifecycle step.
    #[error("job {job_id}: illegal transition {from} -> {to}")]
    IllegalTransition {
        job_id: JobId,
        from: JobState,
        to: JobState,
    },

    /// CPU time accounting went out of range.
    #[error("job {job_id}: cannot consume {elapsed} ticks with {remaining} remaining")]
    InvalidProgress {
        job_id: JobId,
        elapsed: Time,
        remaining: Time,
    },

    /// The simulation clock would have moved backwards.
    #[error("clock regression from {from} to {to}")]
    ClockRegression { from: Time, to: Time },

    /// The run terminated with jobs still unfinished.
    #[error("{stranded} of {submitted} jobs never completed")]
    Stranded { stranded: usize, submitted: usize },
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_input_message() {
        let err = SimulationError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate job ID: 1"),
            ValidationError::new(ValidationErrorKind::NonPositiveBurst, "Job 2 has burst 0"),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("Duplicate job ID: 1"));
        assert!(msg.contains("Job 2 has burst 0"));
    }

    #[test]
    fn test_transition_message() {
        let err = SimulationError::IllegalTransition {
            job_id: 4,
            from: JobState::New,
            to: JobState::Done,
        };
        assert_eq!(err.to_string(), "job 4: illegal transition new -> done");
    }
}
