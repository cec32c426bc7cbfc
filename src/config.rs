//! Simulation and experiment configuration.
//!
//! All types deserialize with per-field defaults, so a JSON file only
//! needs to mention what it overrides:
//!
//! ```
//! use cpu_sched_eval::config::ExperimentConfig;
//!
//! let config: ExperimentConfig = serde_json::from_str(r#"{"quantum": 2}"#).unwrap();
//! assert_eq!(config.quantum, 2);
//! assert_eq!(config.starvation_threshold, 100);
//! ```

use serde::{Deserialize, Serialize};

use crate::models::Time;
use crate::policies::PolicyKind;
use crate::workloads::WorkloadKind;

/// Default time slice when a policy does not supply its own.
pub const DEFAULT_QUANTUM: Time = 4;

/// Simulation engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Quantum applied to every job unless the policy overrides it.
    pub default_quantum: Time,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_quantum: DEFAULT_QUANTUM,
        }
    }
}

impl EngineConfig {
    /// Sets the default quantum.
    pub fn with_quantum(mut self, quantum: Time) -> Self {
        self.default_quantum = quantum;
        self
    }
}

/// Priority+Aging parameters.
///
/// `age_bonus = min(max_age_bonus, (wait / age_interval) * 2)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgingConfig {
    /// Ticks of ready-queue wait per aging step.
    pub age_interval: Time,
    /// Upper bound on the age bonus.
    pub max_age_bonus: i64,
}

impl Default for AgingConfig {
    fn default() -> Self {
        Self {
            age_interval: 5,
            max_age_bonus: 10,
        }
    }
}

impl AgingConfig {
    /// Sets the aging interval.
    pub fn with_age_interval(mut self, age_interval: Time) -> Self {
        self.age_interval = age_interval;
        self
    }

    /// Sets the maximum age bonus.
    pub fn with_max_age_bonus(mut self, max_age_bonus: i64) -> Self {
        self.max_age_bonus = max_age_bonus;
        self
    }
}

/// Multi-level feedback queue parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MlfqConfig {
    /// Number of queue levels (level 0 = highest priority).
    pub num_levels: usize,
    /// Quantum per level. Extended by doubling when shorter than `num_levels`.
    pub quanta: Vec<Time>,
}

impl Default for MlfqConfig {
    fn default() -> Self {
        Self {
            num_levels: 3,
            quanta: vec![1, 2, 4],
        }
    }
}

impl MlfqConfig {
    /// Sets the number of levels.
    pub fn with_levels(mut self, num_levels: usize) -> Self {
        self.num_levels = num_levels;
        self
    }

    /// Sets the per-level quanta.
    pub fn with_quanta(mut self, quanta: Vec<Time>) -> Self {
        self.quanta = quanta;
        self
    }

    /// Quanta padded to exactly `num_levels` entries.
    pub fn resolved_quanta(&self) -> Vec<Time> {
        let mut quanta = self.quanta.clone();
        quanta.truncate(self.num_levels);
        while quanta.len() < self.num_levels {
            let next = quanta.last().map(|q| q.saturating_mul(2)).unwrap_or(1);
            quanta.push(next);
        }
        quanta
    }
}

/// Lottery parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LotteryConfig {
    /// RNG seed. `None` draws from OS entropy (non-reproducible).
    pub seed: Option<u64>,
}

impl LotteryConfig {
    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Full experiment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Default engine quantum.
    pub quantum: Time,
    /// Seed shared by all workload generators.
    pub workload_seed: u64,
    /// Response time above which a job counts as starved.
    pub starvation_threshold: Time,
    /// Policies to evaluate.
    pub policies: Vec<PolicyKind>,
    /// Workloads to evaluate against.
    pub workloads: Vec<WorkloadKind>,
    /// Priority+Aging settings.
    pub aging: AgingConfig,
    /// MLFQ settings.
    pub mlfq: MlfqConfig,
    /// Lottery settings.
    pub lottery: LotteryConfig,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            workload_seed: 42,
            starvation_threshold: 100,
            policies: PolicyKind::ALL.to_vec(),
            workloads: WorkloadKind::ALL.to_vec(),
            aging: AgingConfig::default(),
            mlfq: MlfqConfig::default(),
            lottery: LotteryConfig::default(),
        }
    }
}

impl ExperimentConfig {
    /// Sets the default engine quantum.
    pub fn with_quantum(mut self, quantum: Time) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the workload seed.
    pub fn with_workload_seed(mut self, seed: u64) -> Self {
        self.workload_seed = seed;
        self
    }

    /// Sets the starvation threshold.
    pub fn with_starvation_threshold(mut self, threshold: Time) -> Self {
        self.starvation_threshold = threshold;
        self
    }

    /// Restricts the policies evaluated.
    pub fn with_policies(mut self, policies: Vec<PolicyKind>) -> Self {
        self.policies = policies;
        self
    }

    /// Restricts the workloads evaluated.
    pub fn with_workloads(mut self, workloads: Vec<WorkloadKind>) -> Self {
        self.workloads = workloads;
        self
    }

    /// Sets the aging parameters.
    pub fn with_aging(mut self, aging: AgingConfig) -> Self {
        self.aging = aging;
        self
    }

    /// Sets the MLFQ parameters.
    pub fn with_mlfq(mut self, mlfq: MlfqConfig) -> Self {
        self.mlfq = mlfq;
        self
    }

    /// Sets the lottery parameters.
    pub fn with_lottery(mut self, lottery: LotteryConfig) -> Self {
        self.lottery = lottery;
        self
    }

    /// Engine settings derived from this experiment.
    pub fn engine(&self) -> EngineConfig {
        EngineConfig::default().with_quantum(self.quantum)
    }
}
