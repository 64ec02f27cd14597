//! Parallel batch driver: many independent epidemics over one graph.
//!
//! [`BatchDriver::run`] validates every initial condition up front, then
//! forks a scoped pool of worker threads that pull epidemic indices from
//! a [`GuidedSchedule`]. Each (index, sample) run gets its own PRNG
//! stream derived from the master seed, so the trace of any single
//! epidemic does not depend on the worker count; only the interleaving
//! of different epidemics in the shared sinks does.
//!
//! The first fatal error closes the schedule. Runs already in flight
//! finish, no new ones start, and the error is returned.

use std::io;
use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use scascade_core::{ConditionError, EpidemicId, InitialCondition};
use scascade_graph::Network;
use thiserror::Error;
use tracing::{debug, info, info_span};

use crate::config::{BatchConfig, ConfigError};
use crate::epidemic::Epidemic;
use crate::error::{CascadeError, EpidemicError};
use crate::metrics::EpidemicSummary;
use crate::output::{OutputHandle, OutputStats};
use crate::schedule::GuidedSchedule;
use crate::sink::TraceSink;
use crate::status::{start_line, stop_line};
use crate::trial::{stream_rng, wall_clock_seed};

// ── BatchError ─────────────────────────────────────────────────────

/// Errors that abort a batch.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The batch configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// An initial condition does not fit the graph.
    #[error("initial condition #{index}: {source}")]
    Condition {
        /// Position of the condition in the batch.
        index: usize,
        /// The validation failure.
        source: ConditionError,
    },
    /// An epidemic could not be constructed.
    #[error("epidemic #{index}: {source}")]
    Epidemic {
        /// Position of the condition in the batch.
        index: usize,
        /// The construction failure.
        source: EpidemicError,
    },
    /// An invariant broke while an epidemic was running.
    #[error("epidemic {id} (#{index}) failed: {source}")]
    Cascade {
        /// Position of the condition in the batch.
        index: usize,
        /// The epidemic's label.
        id: EpidemicId,
        /// The violated invariant.
        source: CascadeError,
    },
    /// A worker thread could not be spawned.
    #[error("could not spawn worker thread: {0}")]
    Spawn(#[source] io::Error),
    /// A worker thread panicked.
    #[error("worker {worker} panicked")]
    WorkerPanicked {
        /// Index of the worker.
        worker: usize,
    },
}

// ── BatchOutputs ───────────────────────────────────────────────────

/// Where a batch sends its trace records and status lines.
///
/// Both sinks are optional. The handles are borrowed by the workers for
/// the duration of [`BatchDriver::run`]; the caller owns the matching
/// [`OutputThread`](crate::OutputThread)s and joins them afterwards.
#[derive(Clone, Debug, Default)]
pub struct BatchOutputs {
    /// Trace sink, one `t u v id` line per successful trial.
    pub trace: Option<OutputHandle>,
    /// Status sink, one start and one stop line per run.
    pub status: Option<OutputHandle>,
}

// ── BatchReport ────────────────────────────────────────────────────

/// Result of a finished batch.
#[derive(Clone, Debug)]
pub struct BatchReport {
    /// Master seed every PRNG stream was derived from.
    pub master_seed: u64,
    /// Worker threads used.
    pub workers: usize,
    /// One summary per run, sorted by (index, sample).
    pub summaries: Vec<EpidemicSummary>,
    /// Wall-clock time spent in [`BatchDriver::run`].
    pub elapsed: Duration,
    /// Trace writer statistics, filled in by the owner of the writer.
    pub trace_output: Option<OutputStats>,
    /// Status writer statistics, filled in by the owner of the writer.
    pub status_output: Option<OutputStats>,
}

impl BatchReport {
    /// Number of runs.
    pub fn runs(&self) -> usize {
        self.summaries.len()
    }

    /// Sum of infected nodes over all runs.
    pub fn total_infected(&self) -> u64 {
        self.summaries.iter().map(|s| s.infected as u64).sum()
    }

    /// Sum of cascade links over all runs.
    pub fn total_cascade_links(&self) -> u64 {
        self.summaries.iter().map(|s| s.cascade_links).sum()
    }

    /// Sum of trace records over all runs.
    pub fn total_trace_records(&self) -> u64 {
        self.summaries.iter().map(|s| s.trace_records).sum()
    }

    /// Output I/O errors reported by either writer.
    pub fn output_errors(&self) -> u64 {
        [&self.trace_output, &self.status_output]
            .into_iter()
            .flatten()
            .map(|s| s.io_errors)
            .sum()
    }
}

// ── BatchDriver ────────────────────────────────────────────────────

/// Runs a batch of epidemics over a shared, read-only graph.
pub struct BatchDriver<'g> {
    graph: &'g dyn Network,
    config: BatchConfig,
    master_seed: u64,
    workers: usize,
}

impl<'g> BatchDriver<'g> {
    /// Validate `config` and fix the master seed.
    ///
    /// When `config.master_seed` is `None`, the seed is taken from the
    /// wall clock once, here.
    pub fn new(graph: &'g dyn Network, config: BatchConfig) -> Result<Self, BatchError> {
        config.validate()?;
        let master_seed = config.master_seed.unwrap_or_else(wall_clock_seed);
        let workers = config.resolved_workers();
        Ok(Self {
            graph,
            config,
            master_seed,
            workers,
        })
    }

    /// The master seed in use.
    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Worker threads that [`run`](Self::run) will spawn at most.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// The validated configuration.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Run every condition `config.samples` times.
    ///
    /// Conditions are consumed: each one is dropped by the worker that
    /// finishes its last sample.
    pub fn run(
        &self,
        conditions: Vec<InitialCondition>,
        outputs: BatchOutputs,
    ) -> Result<BatchReport, BatchError> {
        let started = Instant::now();
        let node_count = self.graph.node_count();
        for (index, ic) in conditions.iter().enumerate() {
            ic.validate(node_count)
                .map_err(|source| BatchError::Condition { index, source })?;
        }

        let len = conditions.len();
        let workers = self.workers.min(len.max(1));
        let slots: Vec<Mutex<Option<InitialCondition>>> =
            conditions.into_iter().map(|ic| Mutex::new(Some(ic))).collect();
        let schedule = GuidedSchedule::new(len, workers);
        info!(
            epidemics = len,
            workers,
            master_seed = self.master_seed,
            "batch started"
        );

        let mut summaries = thread::scope(|scope| {
            let mut handles = Vec::with_capacity(workers);
            let mut first_error = None;
            for index in 0..workers {
                let worker = Worker {
                    index,
                    driver: self,
                    slots: &slots,
                    schedule: &schedule,
                    outputs: &outputs,
                };
                let spawned = thread::Builder::new()
                    .name(format!("scascade-worker-{index}"))
                    .spawn_scoped(scope, move || worker.run());
                match spawned {
                    Ok(handle) => handles.push(handle),
                    Err(e) => {
                        schedule.close();
                        first_error = Some(BatchError::Spawn(e));
                        break;
                    }
                }
            }

            let mut summaries = Vec::with_capacity(len);
            for (worker, handle) in handles.into_iter().enumerate() {
                match handle.join() {
                    Ok(Ok(mut done)) => summaries.append(&mut done),
                    Ok(Err(e)) => {
                        first_error.get_or_insert(e);
                    }
                    Err(_) => {
                        first_error.get_or_insert(BatchError::WorkerPanicked { worker });
                    }
                }
            }
            match first_error {
                Some(e) => Err(e),
                None => Ok(summaries),
            }
        })?;

        summaries.sort_by_key(|s| (s.index, s.sample));
        let report = BatchReport {
            master_seed: self.master_seed,
            workers,
            summaries,
            elapsed: started.elapsed(),
            trace_output: None,
            status_output: None,
        };
        info!(
            runs = report.runs(),
            infected = report.total_infected(),
            links = report.total_cascade_links(),
            records = report.total_trace_records(),
            elapsed_ms = report.elapsed.as_millis() as u64,
            "batch finished"
        );
        Ok(report)
    }
}

impl std::fmt::Debug for BatchDriver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchDriver")
            .field("nodes", &self.graph.node_count())
            .field("config", &self.config)
            .field("master_seed", &self.master_seed)
            .field("workers", &self.workers)
            .finish()
    }
}

// ── Worker ─────────────────────────────────────────────────────────

struct Worker<'s, 'g> {
    index: usize,
    driver: &'s BatchDriver<'g>,
    slots: &'s [Mutex<Option<InitialCondition>>],
    schedule: &'s GuidedSchedule,
    outputs: &'s BatchOutputs,
}

impl Worker<'_, '_> {
    fn run(self) -> Result<Vec<EpidemicSummary>, BatchError> {
        let span = info_span!("worker", index = self.index);
        span.in_scope(|| {
            let mut summaries = Vec::new();
            while let Some(range) = self.schedule.claim() {
                for index in range {
                    if let Err(e) = self.run_condition(index, &mut summaries) {
                        self.schedule.close();
                        return Err(e);
                    }
                }
            }
            Ok(summaries)
        })
    }

    fn run_condition(
        &self,
        index: usize,
        summaries: &mut Vec<EpidemicSummary>,
    ) -> Result<(), BatchError> {
        let taken = self.slots[index]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        let Some(ic) = taken else {
            return Ok(());
        };
        let config = &self.driver.config;
        debug!(
            worker = self.index,
            index,
            id = %ic.id,
            p = config.probability,
            stop = ic.stop.tag(),
            bound = ic.bound,
            "epidemic started"
        );

        for sample in 1..=config.samples {
            let mut rng = stream_rng(self.driver.master_seed, index as u64, u64::from(sample));
            let mut sink = self
                .outputs
                .trace
                .as_ref()
                .map(|handle| handle.trace_sink(config.trace_chunk));

            let summary = {
                let trace = sink.as_mut().map(|s| s as &mut dyn TraceSink);
                let mut epidemic = Epidemic::new(config.probability, self.driver.graph, &ic, trace)
                    .map_err(|source| BatchError::Epidemic { index, source })?;
                if let Some(status) = &self.outputs.status {
                    status.send_line(start_line(&epidemic, sample));
                    status.flush();
                }
                let termination = epidemic
                    .run(&mut rng)
                    .map_err(|source| BatchError::Cascade {
                        index,
                        id: ic.id,
                        source,
                    })?;
                if let Some(status) = &self.outputs.status {
                    status.send_line(stop_line(&epidemic, sample));
                    status.flush();
                }
                epidemic.summarize(index, sample, termination)
            };
            if let Some(sink) = sink.as_mut() {
                sink.finish_run();
            }

            debug!(
                worker = self.index,
                index,
                id = %summary.id,
                steps = summary.last_step,
                infected = summary.infected,
                links = summary.cascade_links,
                termination = summary.termination.as_str(),
                "epidemic finished"
            );
            summaries.push(summary);
        }
        // `ic` dropped here: its seeds are released once all samples ran.
        Ok(())
    }
}

const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<BatchOutputs>();
    assert::<GuidedSchedule>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputThread;
    use scascade_core::{NodeId, StopCriterion};
    use scascade_test_utils::{condition, line_graph, star_graph};

    #[test]
    fn rejects_invalid_config() {
        let g = line_graph(3);
        let err = BatchDriver::new(&g, BatchConfig::new(0.0)).unwrap_err();
        assert!(matches!(
            err,
            BatchError::Config(ConfigError::InvalidProbability { .. })
        ));
    }

    #[test]
    fn explicit_seed_is_kept() {
        let g = line_graph(3);
        let driver = BatchDriver::new(&g, BatchConfig::new(0.5).with_seed(42)).unwrap();
        assert_eq!(driver.master_seed(), 42);
    }

    #[test]
    fn invalid_condition_reported_with_index() {
        let g = line_graph(3);
        let driver = BatchDriver::new(&g, BatchConfig::new(1.0).with_seed(1)).unwrap();
        let conditions = vec![
            condition(1, &[0], 5, StopCriterion::MaxDepth),
            condition(2, &[7], 5, StopCriterion::MaxDepth),
        ];
        let err = driver.run(conditions, BatchOutputs::default()).unwrap_err();
        match err {
            BatchError::Condition { index, source } => {
                assert_eq!(index, 1);
                assert!(matches!(source, ConditionError::SeedOutOfRange { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_batch_is_fine() {
        let g = line_graph(3);
        let driver = BatchDriver::new(&g, BatchConfig::new(1.0).with_workers(4)).unwrap();
        let report = driver.run(Vec::new(), BatchOutputs::default()).unwrap();
        assert_eq!(report.runs(), 0);
        assert_eq!(report.workers, 1);
    }

    #[test]
    fn summaries_sorted_by_index() {
        let g = star_graph(4);
        let driver = BatchDriver::new(&g, BatchConfig::new(1.0).with_workers(3).with_seed(9)).unwrap();
        let conditions: Vec<_> = (0..10)
            .map(|i| condition(100 + i, &[0], 10, StopCriterion::MaxDepth))
            .collect();
        let report = driver.run(conditions, BatchOutputs::default()).unwrap();
        let indices: Vec<usize> = report.summaries.iter().map(|s| s.index).collect();
        assert_eq!(indices, (0..10).collect::<Vec<_>>());
        assert!(report.summaries.iter().all(|s| s.infected == 5));
        assert_eq!(report.total_infected(), 50);
        assert_eq!(report.total_trace_records(), 40);
    }

    #[test]
    fn status_lines_paired_per_run() {
        let g = line_graph(4);
        let (thread, handle) = OutputThread::spawn("status", Vec::new(), 8).unwrap();
        let driver = BatchDriver::new(&g, BatchConfig::new(1.0).with_seed(3)).unwrap();
        let outputs = BatchOutputs {
            trace: None,
            status: Some(handle),
        };
        let conditions = vec![InitialCondition::new(
            EpidemicId(5),
            [NodeId(0)],
            2,
            StopCriterion::MaxDepth,
        )];
        driver.run(conditions, outputs).unwrap();
        let (bytes, stats) = thread.join().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "Epidemic 5 #1: started at t = 1 with 1 / 4 ( 25.00% ) infected nodes\n\
             Epidemic 5 #1: stopped at t = 2 with 3 / 4 ( 75.00% ) infected nodes and 2 links\n"
        );
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.flushes, 2);
    }

    #[test]
    fn status_flushed_after_each_line() {
        let g = line_graph(3);
        let (thread, handle) = OutputThread::spawn("status", Vec::new(), 8).unwrap();
        let driver = BatchDriver::new(&g, BatchConfig::new(1.0).with_seed(9)).unwrap();
        let outputs = BatchOutputs {
            trace: None,
            status: Some(handle),
        };
        let conditions = (0..3)
            .map(|i| InitialCondition::new(EpidemicId(i), [NodeId(0)], 5, StopCriterion::MaxDepth))
            .collect();
        driver.run(conditions, outputs).unwrap();
        let (_, stats) = thread.join().unwrap();
        assert_eq!(stats.lines, 6);
        assert_eq!(stats.flushes, stats.lines);
    }
}
