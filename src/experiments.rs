//! Policy × workload experiment runner.
//!
//! Every configured policy is run against every configured workload with
//! a freshly built policy instance, then scored with
//! [`compute_metrics`](crate::simulation::compute_metrics).

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::ExperimentConfig;
use crate::error::SimulationError;
use crate::models::{Job, JobSpec};
use crate::policies::PolicyKind;
use crate::simulation::{compute_metrics, SimulationEngine, SimulationMetrics};
use crate::validation::{validate_aging, validate_mlfq};
use crate::workloads::WorkloadKind;

/// Result of one policy on one workload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentResult {
    /// Policy display name.
    pub scheduler_name: String,
    /// Workload name.
    pub workload_name: String,
    /// Run scores.
    pub metrics: SimulationMetrics,
    /// Jobs in completion order.
    #[serde(skip)]
    pub completed_jobs: Vec<Job>,
}

/// Runs every configured policy on every configured workload.
pub fn run_experiments(config: &ExperimentConfig) -> Result<Vec<ExperimentResult>, SimulationError> {
    let mut errors = Vec::new();
    if let Err(e) = validate_aging(&config.aging) {
        errors.extend(e);
    }
    if let Err(e) = validate_mlfq(&config.mlfq) {
        errors.extend(e);
    }
    if !errors.is_empty() {
        return Err(SimulationError::InvalidInput(errors));
    }

    let mut results = Vec::with_capacity(config.workloads.len() * config.policies.len());

    for &workload in &config.workloads {
        let jobs = workload.generate(config.workload_seed);
        info!("workload {workload}: {} jobs", jobs.len());

        for &policy in &config.policies {
            results.push(run_one(config, policy, workload, &jobs)?);
        }
    }

    Ok(results)
}

fn run_one(
    config: &ExperimentConfig,
    policy: PolicyKind,
    workload: WorkloadKind,
    jobs: &[JobSpec],
) -> Result<ExperimentResult, SimulationError> {
    let mut engine = SimulationEngine::with_config(policy.build(config), config.engine());
    let completed = engine.run(jobs)?;
    let metrics = compute_metrics(&completed, config.starvation_threshold);
    info!(
        "{policy} on {workload}: avg TT {:.1}, avg RT {:.1}",
        metrics.avg_turnaround_time, metrics.avg_response_time
    );

    Ok(ExperimentResult {
        scheduler_name: policy.name().to_string(),
        workload_name: workload.name().to_string(),
        metrics,
        completed_jobs: completed,
    })
}

/// Formats results as one comparison table per workload.
pub fn render_table(results: &[ExperimentResult]) -> String {
    let rule = "=".repeat(90);
    let mut out = format!("\n{rule}\nSCHEDULING EXPERIMENT RESULTS\n{rule}\n");

    let mut workloads: Vec<&str> = results.iter().map(|r| r.workload_name.as_str()).collect();
    workloads.sort_unstable();
    workloads.dedup();
    let mut schedulers: Vec<&str> = results.iter().map(|r| r.scheduler_name.as_str()).collect();
    schedulers.sort_unstable();
    schedulers.dedup();

    for wl in workloads {
        out.push_str(&format!("\n--- Workload: {} ---\n\n", wl.to_uppercase()));
        out.push_str(&format!(
            "{:<20} {:>10} {:>10} {:>10} {:>12}\n",
            "Scheduler", "Avg TT", "Avg RT", "Tail p95", "Starvation"
        ));
        out.push_str(&"-".repeat(65));
        out.push('\n');

        for &sched in &schedulers {
            let Some(r) = results
                .iter()
                .find(|r| r.workload_name == wl && r.scheduler_name == sched)
            else {
                continue;
            };
            let m = &r.metrics;
            out.push_str(&format!(
                "{:<20} {:>10.1} {:>10.1} {:>10.1} {:>11.1}%\n",
                sched,
                m.avg_turnaround_time,
                m.avg_response_time,
                m.tail_latency_p95,
                m.starvation_rate * 100.0
            ));
        }
    }

    out.push_str(&format!("\n{rule}\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LotteryConfig, MlfqConfig};

    fn seeded() -> ExperimentConfig {
        ExperimentConfig::default().with_lottery(LotteryConfig::default().with_seed(1))
    }

    #[test]
    fn test_full_grid() {
        let results = run_experiments(&seeded()).unwrap();
        assert_eq!(results.len(), 18);
        for r in &results {
            assert_eq!(r.metrics.total_jobs, r.completed_jobs.len());
            assert_eq!(r.metrics.completed_jobs, r.metrics.total_jobs);
        }
    }

    #[test]
    fn test_subset_and_conservation() {
        let config = seeded()
            .with_policies(vec![PolicyKind::Sjf, PolicyKind::Mlfq])
            .with_workloads(vec![WorkloadKind::Mixed]);
        let results = run_experiments(&config).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.completed_jobs.len() == 40));
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let config = seeded().with_policies(vec![PolicyKind::Lottery]);
        let a = run_experiments(&config).unwrap();
        let b = run_experiments(&config).unwrap();
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.metrics, y.metrics);
        }
    }

    #[test]
    fn test_invalid_config() {
        let config = seeded().with_mlfq(MlfqConfig::default().with_quanta(vec![0]));
        assert!(matches!(
            run_experiments(&config),
            Err(SimulationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_render_table() {
        let config = seeded()
            .with_policies(vec![PolicyKind::RoundRobin, PolicyKind::Sjf])
            .with_workloads(vec![WorkloadKind::Batch, WorkloadKind::Interactive]);
        let table = render_table(&run_experiments(&config).unwrap());

        assert!(table.contains("--- Workload: BATCH ---"));
        assert!(table.contains("--- Workload: INTERACTIVE ---"));
        assert!(table.contains("Round Robin"));
        assert!(table.contains("SJF"));
        // Workloads sorted
        assert!(table.find("BATCH").unwrap() < table.find("INTERACTIVE").unwrap());

        let rows: Vec<&str> = table.lines().filter(|l| l.starts_with("Round Robin")).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|l| l.ends_with('%')));
        assert!(table.ends_with(&format!("{}\n", "=".repeat(90))));
    }

    #[test]
    fn test_render_empty() {
        let table = render_table(&[]);
        assert!(table.contains("SCHEDULING EXPERIMENT RESULTS"));
        assert!(!table.contains("Workload:"));
    }
}
