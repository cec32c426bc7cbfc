//! sched-eval — compare CPU scheduling policies on synthetic workloads.
//!
//! # Usage
//!
//! ```bash
//! sched-eval --quantum 4 --seed 42 --starvation-threshold 100
//! sched-eval --policy srtf --policy mlfq --workload mixed --json
//! RUST_LOG=debug sched-eval --config experiment.json
//! ```

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Builder;

use cpu_sched_eval::config::ExperimentConfig;
use cpu_sched_eval::experiments::{render_table, run_experiments};
use cpu_sched_eval::models::Time;
use cpu_sched_eval::policies::PolicyKind;
use cpu_sched_eval::workloads::WorkloadKind;

/// Run every scheduler against every workload and print a comparison.
#[derive(Parser, Debug)]
#[command(name = "sched-eval")]
#[command(about = "Workload-driven CPU scheduling evaluation")]
struct Cli {
    /// JSON experiment config; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Default time quantum.
    #[arg(long)]
    quantum: Option<Time>,

    /// Workload generator seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Response time above which a job counts as starved.
    #[arg(long)]
    starvation_threshold: Option<Time>,

    /// Lottery RNG seed (OS entropy if unset).
    #[arg(long)]
    lottery_seed: Option<u64>,

    /// Policy to run (rr, sjf, srtf, aging, lottery, mlfq). Repeatable.
    #[arg(long = "policy")]
    policies: Vec<PolicyKind>,

    /// Workload to run (batch, interactive, mixed). Repeatable.
    #[arg(long = "workload")]
    workloads: Vec<WorkloadKind>,

    /// Emit results as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn load_config(cli: &Cli) -> Result<ExperimentConfig, String> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            serde_json::from_str(&text)
                .map_err(|e| format!("cannot parse {}: {e}", path.display()))?
        }
        None => ExperimentConfig::default(),
    };

    if let Some(q) = cli.quantum {
        config.quantum = q;
    }
    if let Some(seed) = cli.seed {
        config.workload_seed = seed;
    }
    if let Some(threshold) = cli.starvation_threshold {
        config.starvation_threshold = threshold;
    }
    if let Some(seed) = cli.lottery_seed {
        config.lottery.seed = Some(seed);
    }
    if !cli.policies.is_empty() {
        config.policies = cli.policies.clone();
    }
    if !cli.workloads.is_empty() {
        config.workloads = cli.workloads.clone();
    }
    Ok(config)
}

fn main() {
    Builder::from_default_env().init();
    let cli = Cli::parse();

    let config = load_config(&cli).unwrap_or_else(|e| fail(2, e));
    let results = run_experiments(&config).unwrap_or_else(|e| fail(1, e));

    if cli.json {
        match serde_json::to_string_pretty(&results) {
            Ok(s) => println!("{s}"),
            Err(e) => fail(1, e),
        }
    } else {
        println!("Workload-Driven Scheduling Evaluation");
        let names: Vec<&str> = config.policies.iter().map(|p| p.name()).collect();
        println!("Running schedulers: {}", names.join(", "));
        let names: Vec<&str> = config.workloads.iter().map(|w| w.name()).collect();
        println!("Workloads: {}", names.join(", "));
        print!("{}", render_table(&results));
    }
}

fn fail(code: i32, err: impl fmt::Display) -> ! {
    eprintln!("error: {err}");
    process::exit(code)
}
