//! Input validation for simulation runs.
//!
//! Checks job sets and configuration before any simulation starts.
//! Detects:
//! - Duplicate job IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Unusable quantum / aging / MLFQ settings
//! - Empty or inverted workload ranges
//!
//! All problems are collected, not just the first one.

use std::collections::HashSet;

use crate::config::{AgingConfig, EngineConfig, MlfqConfig};
use crate::models::JobSpec;
use crate::workloads::WorkloadParams;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two jobs share the same ID.
    DuplicateId,
    /// A job arrives before t=0.
    NegativeArrival,
    /// A job requires no CPU time (or less).
    NonPositiveBurst,
    /// A configuration value cannot drive a simulation.
    InvalidConfig,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a job set.
///
/// Checks:
/// 1. No duplicate job IDs
/// 2. `arrival_time >= 0`
/// 3. `burst_time > 0`
///
/// An empty job set is valid.
pub fn validate_jobs(jobs: &[JobSpec]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for job in jobs {
        if !ids.insert(job.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }

        if job.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Job {} arrives at negative time {}", job.id, job.arrival_time),
            ));
        }

        if job.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Job {} has non-positive burst {}", job.id, job.burst_time),
            ));
        }
    }

    finish(errors)
}

/// Validates engine settings.
pub fn validate_engine(config: &EngineConfig) -> ValidationResult {
    let mut errors = Vec::new();
    if config.default_quantum <= 0 {
        errors.push(invalid_config(format!(
            "Default quantum must be positive, got {}",
            config.default_quantum
        )));
    }
    finish(errors)
}

/// Validates Priority+Aging settings.
pub fn validate_aging(config: &AgingConfig) -> ValidationResult {
    let mut errors = Vec::new();
    if config.age_interval <= 0 {
        errors.push(invalid_config(format!(
            "Age interval must be positive, got {}",
            config.age_interval
        )));
    }
    if config.max_age_bonus < 0 {
        errors.push(invalid_config(format!(
            "Max age bonus must be non-negative, got {}",
            config.max_age_bonus
        )));
    }
    finish(errors)
}

/// Validates MLFQ settings.
pub fn validate_mlfq(config: &MlfqConfig) -> ValidationResult {
    let mut errors = Vec::new();
    if config.num_levels == 0 {
        errors.push(invalid_config("MLFQ needs at least one level"));
    }
    if config.quanta.is_empty() {
        errors.push(invalid_config("MLFQ quanta list is empty"));
    }
    for (level, &q) in config.quanta.iter().enumerate() {
        if q <= 0 {
            errors.push(invalid_config(format!(
                "MLFQ quantum for level {level} must be positive, got {q}"
            )));
        }
    }
    finish(errors)
}

/// Validates workload generator ranges.
pub fn validate_workload(params: &WorkloadParams) -> ValidationResult {
    let mut errors = Vec::new();
    let (lo, hi) = params.burst;
    if lo <= 0 {
        errors.push(invalid_config(format!(
            "workload burst range must start above 0, got {lo}"
        )));
    }
    if lo > hi {
        errors.push(invalid_config(format!(
            "workload burst range {lo}..={hi} is empty"
        )));
    }
    let (lo, hi) = params.arrival;
    if lo < 0 {
        errors.push(invalid_config(format!(
            "workload arrival range must not start below 0, got {lo}"
        )));
    }
    if lo > hi {
        errors.push(invalid_config(format!(
            "workload arrival range {lo}..={hi} is empty"
        )));
    }
    finish(errors)
}

fn invalid_config(message: impl Into<String>) -> ValidationError {
    ValidationError::new(ValidationErrorKind::InvalidConfig, message)
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
