//! Discrete-event simulation engine.
//!
//! # Algorithm
//!
//! The clock jumps between two kinds of instants: the earliest pending
//! arrival and the end of the running job's slice. At each instant:
//!
//! 1. If the running job's slice ends now, charge the elapsed time. A job
//!    with nothing left completes; otherwise it goes back to the policy
//!    through `on_job_preempted`.
//! 2. Admit every arrival due now, in ascending job id. If the policy
//!    preempts on arrival and prefers the newcomer, the running job is
//!    stopped and handed back the same way.
//! 3. If the CPU is idle and the policy has ready jobs, dispatch one.
//!
//! The run ends when no arrivals remain, nothing is running and the
//! policy is empty.
//!
//! # Slice length
//! `remaining` for run-to-completion policies, otherwise
//! `min(quantum, remaining)` where the quantum comes from the policy when
//! it supplies per-job quanta and from [`EngineConfig`] otherwise.

use log::{debug, info, trace, warn};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::config::EngineConfig;
use crate::error::SimulationError;
use crate::models::{Event, Job, JobId, JobSpec, JobState, RunSlice, SliceOutcome, Time, Timeline};
use crate::policies::{Scheduler, SchedulerCapabilities};
use crate::validation::{validate_engine, validate_jobs};

/// Completed jobs plus the CPU timeline that produced them.
#[derive(Debug, Clone, Default)]
pub struct SimulationOutcome {
    /// Jobs in completion order.
    pub completed: Vec<Job>,
    /// Every run slice, in dispatch order.
    pub timeline: Timeline,
}

/// The job holding the CPU.
#[derive(Debug)]
struct Running {
    job: Job,
    slice_start: Time,
    /// CPU time up to here is already charged to `job`.
    accounted_to: Time,
    slice_end: Time,
}

impl Running {
    fn account(&mut self, now: Time) -> Result<(), SimulationError> {
        self.job.consume(now - self.accounted_to)?;
        self.accounted_to = now;
        Ok(())
    }
}

/// Per-run bookkeeping.
#[derive(Debug, Default)]
struct RunState {
    /// Jobs currently owned by the policy.
    held: HashSet<JobId>,
    completed: Vec<Job>,
    timeline: Timeline,
}

/// Single-CPU discrete-event simulator driving one scheduling policy.
///
/// # Example
///
/// ```
/// use cpu_sched_eval::models::JobSpec;
/// use cpu_sched_eval::policies::RoundRobin;
/// use cpu_sched_eval::simulation::SimulationEngine;
///
/// let jobs = vec![
///     JobSpec::new(1, 0, 5),
///     JobSpec::new(2, 0, 3),
///     JobSpec::new(3, 0, 8),
/// ];
/// let mut engine = SimulationEngine::new(RoundRobin::new()).with_quantum(2);
/// let completed = engine.run(&jobs).unwrap();
///
/// let order: Vec<u64> = completed.iter().map(|j| j.id).collect();
/// assert_eq!(order, vec![2, 1, 3]);
/// ```
#[derive(Debug)]
pub struct SimulationEngine<S: Scheduler> {
    scheduler: S,
    config: EngineConfig,
}

impl<S: Scheduler> SimulationEngine<S> {
    /// Creates an engine with the default quantum.
    pub fn new(scheduler: S) -> Self {
        Self::with_config(scheduler, EngineConfig::default())
    }

    /// Creates an engine with explicit settings.
    pub fn with_config(scheduler: S, config: EngineConfig) -> Self {
        Self { scheduler, config }
    }

    /// Sets the default quantum.
    pub fn with_quantum(mut self, quantum: Time) -> Self {
        self.config.default_quantum = quantum;
        self
    }

    /// The policy being driven.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Engine settings.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs the job set and returns the jobs in completion order.
    ///
    /// Each call works on fresh copies of `jobs`. The policy must be
    /// empty when the call starts and is [reset](Scheduler::reset) before
    /// the first arrival. The Lottery RNG is not reset, so Lottery should
    /// be rebuilt for reproducible repeated runs.
    pub fn run(&mut self, jobs: &[JobSpec]) -> Result<Vec<Job>, SimulationError> {
        self.run_traced(jobs).map(|outcome| outcome.completed)
    }

    /// Like [`run`](Self::run), also returning the CPU timeline.
    pub fn run_traced(&mut self, jobs: &[JobSpec]) -> Result<SimulationOutcome, SimulationError> {
        let policy = self.scheduler.name();

        validate_engine(&self.config).map_err(SimulationError::InvalidInput)?;
        if let Err(errors) = validate_jobs(jobs) {
            warn!("{policy}: rejected job set with {} problem(s)", errors.len());
            return Err(SimulationError::InvalidInput(errors));
        }
        if self.scheduler.has_ready_jobs() {
            return Err(SimulationError::PolicyNotEmpty { policy });
        }
        self.scheduler.reset();

        let caps = self.scheduler.capabilities();
        let mut pending: HashMap<JobId, Job> =
            jobs.iter().map(|spec| (spec.id, spec.instantiate())).collect();
        let mut arrivals: BinaryHeap<Reverse<Event>> = jobs
            .iter()
            .map(|spec| Reverse(Event::arrival(spec.arrival_time, spec.id)))
            .collect();

        let mut state = RunState {
            completed: Vec::with_capacity(jobs.len()),
            ..RunState::default()
        };
        let mut current: Option<Running> = None;
        let mut now: Time = 0;

        loop {
            let next_arrival = arrivals.peek().map(|Reverse(e)| e.time);
            let next_release = current.as_ref().map(|r| r.slice_end);
            let Some(next_time) = next_arrival.into_iter().chain(next_release).min() else {
                break;
            };
            if next_time < now {
                return Err(SimulationError::ClockRegression {
                    from: now,
                    to: next_time,
                });
            }
            now = next_time;

            // Slice end resolves before same-time arrivals.
            current = match current.take() {
                Some(running) if running.slice_end == now => {
                    self.release(&mut state, running, now, SliceOutcome::QuantumExpired)?;
                    None
                }
                other => other,
            };

            while arrivals.peek().is_some_and(|Reverse(e)| e.time == now) {
                let Some(Reverse(event)) = arrivals.pop() else {
                    break;
                };
                let Some(job) = pending.remove(&event.job_id) else {
                    continue;
                };
                let preempted = self.admit(&mut state, &mut current, job, now, caps)?;
                if let Some(running) = preempted {
                    self.release(&mut state, running, now, SliceOutcome::Preempted)?;
                }
            }

            if current.is_none() && self.scheduler.has_ready_jobs() {
                current = Some(self.dispatch(&mut state, now, caps)?);
            }
        }

        let submitted = jobs.len();
        if !state.held.is_empty() || state.completed.len() != submitted {
            return Err(SimulationError::Stranded {
                stranded: submitted - state.completed.len(),
                submitted,
            });
        }

        info!(
            "{policy}: {submitted} jobs done at t={now} ({} slices, {} context switches)",
            state.timeline.len(),
            state.timeline.context_switches()
        );

        Ok(SimulationOutcome {
            completed: state.completed,
            timeline: state.timeline,
        })
    }

    /// Hands an arriving job to the policy. Returns the running job if the
    /// arrival displaced it.
    fn admit(
        &mut self,
        state: &mut RunState,
        current: &mut Option<Running>,
        mut job: Job,
        now: Time,
        caps: SchedulerCapabilities,
    ) -> Result<Option<Running>, SimulationError> {
        job.transition(JobState::Ready)?;
        trace!("t={now}: job {} arrives (burst {})", job.id, job.burst_time);

        let candidate = caps.preempts_on_arrival.then(|| job.clone());
        state.held.insert(job.id);
        self.scheduler.add_job(job, now);

        let preempt = match (candidate, current.as_mut()) {
            (Some(candidate), Some(running)) => {
                running.account(now)?;
                self.scheduler.should_preempt(&running.job, &candidate)
            }
            _ => false,
        };

        if preempt {
            Ok(current.take())
        } else {
            Ok(None)
        }
    }

    /// Takes the CPU away from `running` at `now`.
    fn release(
        &mut self,
        state: &mut RunState,
        mut running: Running,
        now: Time,
        outcome: SliceOutcome,
    ) -> Result<(), SimulationError> {
        running.account(now)?;
        let mut job = running.job;

        if job.remaining_time() == 0 {
            job.complete(now)?;
            debug!("t={now}: job {} completes", job.id);
            state
                .timeline
                .push(RunSlice::new(job.id, running.slice_start, now, SliceOutcome::Completed));
            state.completed.push(job);
            return Ok(());
        }

        job.transition(JobState::Ready)?;
        debug!(
            "t={now}: job {} stopped ({outcome:?}), {} remaining",
            job.id,
            job.remaining_time()
        );
        state
            .timeline
            .push(RunSlice::new(job.id, running.slice_start, now, outcome));
        state.held.insert(job.id);
        self.scheduler.on_job_preempted(job, now);
        Ok(())
    }

    fn dispatch(
        &mut self,
        state: &mut RunState,
        now: Time,
        caps: SchedulerCapabilities,
    ) -> Result<Running, SimulationError> {
        let policy = self.scheduler.name();
        let mut job = self
            .scheduler
            .get_next_job(now)
            .ok_or(SimulationError::EmptyDispatch { policy })?;
        if !state.held.remove(&job.id) {
            return Err(SimulationError::UnknownJob {
                policy,
                job_id: job.id,
            });
        }
        job.dispatch(now)?;

        let slice = if caps.preempts_on_quantum {
            let quantum = if caps.per_job_quantum {
                self.scheduler
                    .quantum_for(&job)
                    .unwrap_or(self.config.default_quantum)
            } else {
                self.config.default_quantum
            };
            quantum.max(1).min(job.remaining_time())
        } else {
            job.remaining_time()
        };

        debug!(
            "t={now}: dispatch job {} for {slice} (remaining {})",
            job.id,
            job.remaining_time()
        );
        Ok(Running {
            job,
            slice_start: now,
            accounted_to: now,
            slice_end: now + slice,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MlfqConfig;
    use crate::policies::{Lottery, Mlfq, PriorityAging, RoundRobin, Sjf, Srtf};
    use crate::validation::ValidationErrorKind;

    fn by_id(completed: &[Job], id: JobId) -> &Job {
        completed.iter().find(|j| j.id == id).unwrap()
    }

    #[test]
    fn test_round_robin_hand_traced() {
        // 0-2 J1, 2-4 J2, 4-6 J3, 6-8 J1, 8-9 J2✓, 9-11 J3, 11-12 J1✓, 12-16 J3✓
        let jobs = vec![
            JobSpec::new(1, 0, 5),
            JobSpec::new(2, 0, 3),
            JobSpec::new(3, 0, 8),
        ];
        let mut engine = SimulationEngine::new(RoundRobin::new()).with_quantum(2);
        let outcome = engine.run_traced(&jobs).unwrap();
        let done = &outcome.completed;

        assert_eq!(done.iter().map(|j| j.id).collect::<Vec<_>>(), vec![2, 1, 3]);
        assert_eq!(by_id(done, 2).completion_time(), Some(9));
        assert_eq!(by_id(done, 1).completion_time(), Some(12));
        assert_eq!(by_id(done, 3).completion_time(), Some(16));

        assert_eq!(by_id(done, 1).response_time(), Some(0));
        assert_eq!(by_id(done, 2).response_time(), Some(2));
        assert_eq!(by_id(done, 3).response_time(), Some(4));

        assert_eq!(
            outcome.timeline.dispatch_order(),
            vec![1, 2, 3, 1, 2, 3, 1, 3, 3]
        );
        assert_eq!(outcome.timeline.busy_time(), 16);
    }

    #[test]
    fn test_empty_job_set() {
        let mut engine = SimulationEngine::new(RoundRobin::new());
        let outcome = engine.run_traced(&[]).unwrap();
        assert!(outcome.completed.is_empty());
        assert!(outcome.timeline.is_empty());
    }

    #[test]
    fn test_rejects_invalid_jobs() {
        let jobs = vec![JobSpec::new(1, 0, 5), JobSpec::new(1, -3, 0)];
        let mut engine = SimulationEngine::new(RoundRobin::new());
        match engine.run(&jobs) {
            Err(SimulationError::InvalidInput(errors)) => {
                let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
                assert!(kinds.contains(&ValidationErrorKind::DuplicateId));
                assert!(kinds.contains(&ValidationErrorKind::NegativeArrival));
                assert!(kinds.contains(&ValidationErrorKind::NonPositiveBurst));
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_zero_quantum() {
        let mut engine = SimulationEngine::new(RoundRobin::new()).with_quantum(0);
        assert!(matches!(
            engine.run(&[JobSpec::new(1, 0, 1)]),
            Err(SimulationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_sjf_ascending_burst() {
        let jobs = vec![
            JobSpec::new(1, 0, 5),
            JobSpec::new(2, 0, 3),
            JobSpec::new(3, 0, 8),
        ];
        let mut engine = SimulationEngine::new(Sjf::new()).with_quantum(1);
        let outcome = engine.run_traced(&jobs).unwrap();

        // Non-preemptive: one slice per job despite quantum 1
        assert_eq!(outcome.timeline.dispatch_order(), vec![2, 1, 3]);
        assert_eq!(by_id(&outcome.completed, 2).completion_time(), Some(3));
        assert_eq!(by_id(&outcome.completed, 1).completion_time(), Some(8));
        assert_eq!(by_id(&outcome.completed, 3).completion_time(), Some(16));
    }

    #[test]
    fn test_sjf_does_not_preempt_on_arrival() {
        let jobs = vec![JobSpec::new(1, 0, 10), JobSpec::new(2, 1, 1)];
        let mut engine = SimulationEngine::new(Sjf::new());
        let done = engine.run(&jobs).unwrap();
        assert_eq!(by_id(&done, 1).completion_time(), Some(10));
        assert_eq!(by_id(&done, 2).first_run_time(), Some(10));
    }

    #[test]
    fn test_srtf_preempts_and_resumes() {
        let jobs = vec![JobSpec::new(1, 0, 8), JobSpec::new(2, 2, 3)];
        let mut engine = SimulationEngine::new(Srtf::new()).with_quantum(100);
        let outcome = engine.run_traced(&jobs).unwrap();

        assert_eq!(
            outcome.timeline.slices,
            vec![
                RunSlice::new(1, 0, 2, SliceOutcome::Preempted),
                RunSlice::new(2, 2, 5, SliceOutcome::Completed),
                RunSlice::new(1, 5, 11, SliceOutcome::Completed),
            ]
        );
        let j1 = by_id(&outcome.completed, 1);
        assert_eq!(j1.first_run_time(), Some(0));
        assert_eq!(j1.completion_time(), Some(11));
        assert_eq!(j1.remaining_time(), 0);
    }

    #[test]
    fn test_srtf_compares_current_remaining() {
        // At t=4 job 1 has 2 left; a 3-tick arrival must not preempt it.
        let jobs = vec![JobSpec::new(1, 0, 6), JobSpec::new(2, 4, 3)];
        let mut engine = SimulationEngine::new(Srtf::new()).with_quantum(100);
        let outcome = engine.run_traced(&jobs).unwrap();
        assert_eq!(outcome.timeline.dispatch_order(), vec![1, 2]);
        assert_eq!(by_id(&outcome.completed, 1).completion_time(), Some(6));
    }

    #[test]
    fn test_srtf_one_preemption_per_batch() {
        let jobs = vec![
            JobSpec::new(1, 0, 10),
            JobSpec::new(2, 3, 2),
            JobSpec::new(3, 3, 1),
        ];
        let mut engine = SimulationEngine::new(Srtf::new()).with_quantum(100);
        let outcome = engine.run_traced(&jobs).unwrap();
        assert_eq!(
            outcome.timeline.slices,
            vec![
                RunSlice::new(1, 0, 3, SliceOutcome::Preempted),
                RunSlice::new(3, 3, 4, SliceOutcome::Completed),
                RunSlice::new(2, 4, 6, SliceOutcome::Completed),
                RunSlice::new(1, 6, 13, SliceOutcome::Completed),
            ]
        );
    }

    #[test]
    fn test_completion_resolves_before_arrival() {
        // Job 1 expires at t=2 exactly when job 2 arrives: job 1 re-queues first.
        let jobs = vec![JobSpec::new(1, 0, 4), JobSpec::new(2, 2, 1)];
        let mut engine = SimulationEngine::new(RoundRobin::new()).with_quantum(2);
        let outcome = engine.run_traced(&jobs).unwrap();
        assert_eq!(outcome.timeline.dispatch_order(), vec![1, 1, 2]);
        assert_eq!(by_id(&outcome.completed, 2).response_time(), Some(2));
    }

    #[test]
    fn test_same_time_arrivals_by_id() {
        let jobs = vec![
            JobSpec::new(3, 0, 1),
            JobSpec::new(1, 0, 1),
            JobSpec::new(2, 0, 1),
        ];
        let mut engine = SimulationEngine::new(RoundRobin::new());
        let outcome = engine.run_traced(&jobs).unwrap();
        assert_eq!(outcome.timeline.dispatch_order(), vec![1, 2, 3]);
    }

    #[test]
    fn test_idle_gap() {
        let jobs = vec![JobSpec::new(1, 0, 2), JobSpec::new(2, 6, 2)];
        let mut engine = SimulationEngine::new(RoundRobin::new());
        let outcome = engine.run_traced(&jobs).unwrap();
        let j2 = by_id(&outcome.completed, 2);
        assert_eq!(j2.first_run_time(), Some(6));
        assert_eq!(j2.completion_time(), Some(8));
        assert!((outcome.timeline.utilization() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_mlfq_per_level_quanta() {
        let jobs = vec![JobSpec::new(1, 0, 7)];
        let mut engine = SimulationEngine::new(Mlfq::new()).with_quantum(100);
        let outcome = engine.run_traced(&jobs).unwrap();
        let lengths: Vec<Time> = outcome.timeline.slices.iter().map(RunSlice::duration).collect();
        assert_eq!(lengths, vec![1, 2, 4]);
        assert_eq!(engine.scheduler().level_of(1), Some(2));
    }

    #[test]
    fn test_mlfq_bottom_level_repeats() {
        let mlfq = Mlfq::with_config(&MlfqConfig::default().with_levels(2).with_quanta(vec![1, 3]));
        let mut engine = SimulationEngine::new(mlfq);
        let outcome = engine.run_traced(&[JobSpec::new(1, 0, 8)]).unwrap();
        let lengths: Vec<Time> = outcome.timeline.slices.iter().map(RunSlice::duration).collect();
        assert_eq!(lengths, vec![1, 3, 3, 1]);
    }

    #[test]
    fn test_priority_aging_run() {
        let jobs = vec![
            JobSpec::new(1, 0, 6).with_priority(0),
            JobSpec::new(2, 0, 6).with_priority(5),
        ];
        let mut engine = SimulationEngine::new(PriorityAging::new());
        let done = engine.run(&jobs).unwrap();
        assert_eq!(by_id(&done, 2).first_run_time(), Some(0));
        assert_eq!(done.len(), 2);
    }

    #[test]
    fn test_priority_aging_overtakes_during_run() {
        // interval 5, quantum 4
        // 0-4 J2, 4-8 J2, 8-12 J2 (J1 waited 12 → eff 4 > 3)
        // 12-16 J1, 16-18 J1✓ (frozen credit keeps eff 4), 18-22 J2, 22-26 J2✓
        let jobs = vec![
            JobSpec::new(1, 0, 6).with_priority(0),
            JobSpec::new(2, 0, 20).with_priority(3),
        ];
        let mut engine = SimulationEngine::new(PriorityAging::new()).with_quantum(4);
        let outcome = engine.run_traced(&jobs).unwrap();
        let done = &outcome.completed;

        assert_eq!(
            outcome.timeline.dispatch_order(),
            vec![2, 2, 2, 1, 1, 2, 2]
        );
        assert_eq!(by_id(done, 1).first_run_time(), Some(12));
        assert_eq!(by_id(done, 1).completion_time(), Some(18));
        assert_eq!(by_id(done, 2).completion_time(), Some(26));
        assert_eq!(engine.scheduler().total_wait(1, 26), 12);
        assert_eq!(engine.scheduler().total_wait(2, 26), 6);
    }

    #[test]
    fn test_lottery_reproducible() {
        let jobs: Vec<JobSpec> = (0..15)
            .map(|i| JobSpec::new(i, (i % 4) as Time, 3 + (i % 5) as Time).with_priority((i % 3) as i32))
            .collect();
        let run = || {
            SimulationEngine::new(Lottery::seeded(99))
                .with_quantum(2)
                .run_traced(&jobs)
                .unwrap()
                .timeline
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_engine_reusable_for_deterministic_policy() {
        use crate::config::ExperimentConfig;
        use crate::policies::PolicyKind;

        let jobs = vec![
            JobSpec::new(1, 0, 10).with_priority(0),
            JobSpec::new(2, 0, 10).with_priority(3),
            JobSpec::new(3, 3, 7).with_priority(1),
            JobSpec::new(4, 9, 2),
        ];
        let config = ExperimentConfig::default();
        for kind in PolicyKind::ALL.into_iter().filter(|k| *k != PolicyKind::Lottery) {
            let mut engine = SimulationEngine::with_config(kind.build(&config), config.engine());
            let first = engine.run_traced(&jobs).unwrap();
            let second = engine.run_traced(&jobs).unwrap();
            assert_eq!(first.timeline, second.timeline, "{kind}");
            assert_eq!(first.completed, second.completed, "{kind}");
        }
    }

    #[test]
    fn test_priority_aging_reuse_starts_without_credit() {
        let jobs = vec![
            JobSpec::new(1, 0, 10).with_priority(0),
            JobSpec::new(2, 0, 10).with_priority(3),
        ];
        let mut engine = SimulationEngine::new(PriorityAging::new()).with_quantum(4);
        let first = engine.run_traced(&jobs).unwrap().timeline.dispatch_order();
        let second = engine.run_traced(&jobs).unwrap().timeline.dispatch_order();
        assert_eq!(first, vec![2, 2, 2, 1, 1, 1]);
        assert_eq!(first, second);
    }

    // ---- misbehaving policies ----

    #[derive(Default)]
    struct Forger {
        ready: Vec<Job>,
    }

    impl Scheduler for Forger {
        fn name(&self) -> &'static str {
            "Forger"
        }
        fn add_job(&mut self, job: Job, _now: Time) {
            self.ready.push(job);
        }
        fn get_next_job(&mut self, _now: Time) -> Option<Job> {
            self.ready.pop()?;
            let mut fake = JobSpec::new(999, 0, 1).instantiate();
            fake.transition(JobState::Ready).ok()?;
            Some(fake)
        }
        fn has_ready_jobs(&self) -> bool {
            !self.ready.is_empty()
        }
    }

    #[derive(Default)]
    struct BlackHole;

    impl Scheduler for BlackHole {
        fn name(&self) -> &'static str {
            "BlackHole"
        }
        fn add_job(&mut self, _job: Job, _now: Time) {}
        fn get_next_job(&mut self, _now: Time) -> Option<Job> {
            None
        }
        fn has_ready_jobs(&self) -> bool {
            false
        }
    }

    #[derive(Default)]
    struct Liar;

    impl Scheduler for Liar {
        fn name(&self) -> &'static str {
            "Liar"
        }
        fn add_job(&mut self, _job: Job, _now: Time) {}
        fn get_next_job(&mut self, _now: Time) -> Option<Job> {
            None
        }
        fn has_ready_jobs(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_unknown_job_detected() {
        let mut engine = SimulationEngine::new(Forger::default());
        assert!(matches!(
            engine.run(&[JobSpec::new(1, 0, 2)]),
            Err(SimulationError::UnknownJob { job_id: 999, .. })
        ));
    }

    #[test]
    fn test_dropped_jobs_detected() {
        let mut engine = SimulationEngine::new(BlackHole);
        assert!(matches!(
            engine.run(&[JobSpec::new(1, 0, 2), JobSpec::new(2, 1, 2)]),
            Err(SimulationError::Stranded {
                stranded: 2,
                submitted: 2
            })
        ));
    }

    #[test]
    fn test_non_empty_policy_rejected() {
        let mut engine = SimulationEngine::new(Liar);
        assert!(matches!(
            engine.run(&[JobSpec::new(1, 0, 2)]),
            Err(SimulationError::PolicyNotEmpty { .. })
        ));
    }

    #[test]
    fn test_boxed_policy() {
        let boxed: Box<dyn Scheduler> = Box::new(Sjf::new());
        let mut engine = SimulationEngine::new(boxed);
        let done = engine.run(&[JobSpec::new(1, 0, 4), JobSpec::new(2, 0, 1)]).unwrap();
        assert_eq!(done[0].id, 2);
    }
}
