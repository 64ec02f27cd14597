//! Per-run epidemic state and the cascade algorithm.
//!
//! An [`Epidemic`] is built from a graph, an initial condition, an
//! infection probability and an optional trace sink. [`Epidemic::run`]
//! then drains the active frontier in FIFO order: every dequeued node
//! makes one Bernoulli trial per out-arc, in adjacency order, and every
//! successful trial becomes one trace record `(t, u, v, id)`.
//!
//! # Infection times
//!
//! `infection_time[v] == 0` means `v` was never infected. Seeds are
//! infected at step 1, and a node first reached from a provider infected
//! at step `t` is infected at step `t + 1`. A successful trial whose
//! target was already infected at `t + 1` by another provider is a
//! co-infection and counts as a cascade link; successful trials into
//! nodes infected earlier are traced but not counted.

use rand::RngCore;
use scascade_core::{EpidemicId, InitialCondition, NodeId, Step, StopCriterion, TraceRecord};
use scascade_graph::Network;

use crate::error::{CascadeError, EpidemicError};
use crate::frontier::Frontier;
use crate::metrics::EpidemicSummary;
use crate::sink::TraceSink;
use crate::trial::trial;

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Termination {
    /// The frontier emptied: no more reachable transmissions.
    Exhausted,
    /// The next node to process was infected after the depth bound.
    DepthBound,
    /// The number of infected nodes reached the size bound.
    SizeBound,
}

impl Termination {
    /// Lower-case label for logs and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exhausted => "exhausted",
            Self::DepthBound => "depth-bound",
            Self::SizeBound => "size-bound",
        }
    }
}

/// State of one epidemic run over a borrowed graph.
///
/// Created by [`Epidemic::new`], mutated only by [`Epidemic::run`], and
/// dropped afterwards; the infection-time array and the frontier are
/// released with it.
pub struct Epidemic<'a> {
    id: EpidemicId,
    p: f64,
    graph: &'a dyn Network,
    infection_time: Vec<Step>,
    active: Frontier,
    seeds: usize,
    infected: usize,
    cascade_links: u64,
    trace_records: u64,
    last_step: Step,
    bound: u32,
    stop: StopCriterion,
    trace: Option<&'a mut dyn TraceSink>,
}

impl<'a> Epidemic<'a> {
    /// Seed a new epidemic.
    ///
    /// Seeds are enqueued in the order of `ic.seeds` and get infection
    /// time 1.
    ///
    /// # Errors
    ///
    /// Returns [`EpidemicError::InvalidProbability`] if `p` is not a
    /// finite value in `(0, 1]`, or [`EpidemicError::Condition`] if the
    /// initial condition does not validate against the graph.
    pub fn new(
        p: f64,
        graph: &'a dyn Network,
        ic: &InitialCondition,
        trace: Option<&'a mut dyn TraceSink>,
    ) -> Result<Self, EpidemicError> {
        if !(p.is_finite() && p > 0.0 && p <= 1.0) {
            return Err(EpidemicError::InvalidProbability { value: p });
        }
        let n = graph.node_count();
        ic.validate(n)?;

        let mut infection_time = vec![0; n];
        let mut active = Frontier::new(n)?;
        for &seed in &ic.seeds {
            active.push(seed)?;
            infection_time[seed.index()] = 1;
        }

        Ok(Self {
            id: ic.id,
            p,
            graph,
            infection_time,
            active,
            seeds: ic.seeds.len(),
            infected: ic.seeds.len(),
            cascade_links: 0,
            trace_records: 0,
            last_step: 1,
            bound: ic.bound,
            stop: ic.stop,
            trace,
        })
    }

    /// Spread the infection until the frontier empties or the stop
    /// criterion fires.
    ///
    /// Draws exactly one variate from `rng` per attempted arc.
    ///
    /// `MaxSize` is checked only when a new infection lands, so a seed set
    /// already larger than the bound spreads until the frontier empties.
    ///
    /// # Errors
    ///
    /// Returns a [`CascadeError`] if an internal invariant breaks; the
    /// epidemic state is then unspecified.
    pub fn run<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> Result<Termination, CascadeError> {
        let graph = self.graph;
        let node_count = graph.node_count();

        while let Some(u) = self.active.pop() {
            let t = self.infection_time[u.index()];
            if t == 0 {
                return Err(CascadeError::UninfectedInFrontier { node: u });
            }
            if self.stop == StopCriterion::MaxDepth && t > self.bound {
                return Ok(Termination::DepthBound);
            }
            let next = t
                .checked_add(1)
                .ok_or(CascadeError::StepOverflow { node: u })?;

            for &v in graph.out_neighbours(u) {
                if !trial(rng, self.p) {
                    continue;
                }
                let time_v = self.infection_time.get_mut(v.index()).ok_or(
                    CascadeError::NeighbourOutOfRange {
                        provider: u,
                        client: v,
                        node_count,
                    },
                )?;

                if *time_v == 0 {
                    *time_v = next;
                    self.active
                        .push(v)
                        .map_err(|source| CascadeError::Enqueue { node: v, source })?;
                    self.infected += 1;
                    self.cascade_links += 1;
                    self.last_step = t;
                    if self.stop == StopCriterion::MaxSize && self.infected == self.bound as usize
                    {
                        self.emit(t, u, v);
                        return Ok(Termination::SizeBound);
                    }
                } else if *time_v == next {
                    self.cascade_links += 1;
                }
                self.emit(t, u, v);
            }
        }

        Ok(Termination::Exhausted)
    }

    fn emit(&mut self, step: Step, provider: NodeId, client: NodeId) {
        self.trace_records += 1;
        if let Some(sink) = self.trace.as_deref_mut() {
            sink.record(TraceRecord {
                step,
                provider,
                client,
                epidemic: self.id,
            });
        }
    }

    /// The epidemic's label.
    pub fn id(&self) -> EpidemicId {
        self.id
    }

    /// The infection probability.
    pub fn probability(&self) -> f64 {
        self.p
    }

    /// Infection step of `v`, `0` if never infected.
    ///
    /// # Panics
    ///
    /// Panics if `v` is not a node of the graph.
    pub fn infection_time(&self, v: NodeId) -> Step {
        self.infection_time[v.index()]
    }

    /// Infection steps of all nodes, indexed by node id.
    pub fn infection_times(&self) -> &[Step] {
        &self.infection_time
    }

    /// Number of nodes ever infected, seeds included.
    pub fn infected(&self) -> usize {
        self.infected
    }

    /// Number of cascade links (first infections plus co-infections).
    pub fn cascade_links(&self) -> u64 {
        self.cascade_links
    }

    /// Number of successful trials, i.e. trace records emitted.
    pub fn trace_records(&self) -> u64 {
        self.trace_records
    }

    /// Most recent step at which a node was newly infected; 1 until
    /// the first transmission.
    pub fn last_step(&self) -> Step {
        self.last_step
    }

    /// Number of nodes in the underlying graph.
    pub fn node_count(&self) -> usize {
        self.infection_time.len()
    }

    /// Number of seeds.
    pub fn seed_count(&self) -> usize {
        self.seeds
    }

    /// The bound and the criterion it applies to.
    pub fn bound(&self) -> (u32, StopCriterion) {
        (self.bound, self.stop)
    }

    /// Nodes still waiting in the active frontier.
    pub fn pending(&self) -> usize {
        self.active.len()
    }

    /// Snapshot the run's statistics.
    pub fn summarize(&self, index: usize, sample: u32, termination: Termination) -> EpidemicSummary {
        EpidemicSummary {
            id: self.id,
            index,
            sample,
            seeds: self.seeds,
            last_step: self.last_step,
            infected: self.infected,
            nodes: self.node_count(),
            cascade_links: self.cascade_links,
            trace_records: self.trace_records,
            termination,
        }
    }
}

impl std::fmt::Debug for Epidemic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Epidemic")
            .field("id", &self.id)
            .field("p", &self.p)
            .field("nodes", &self.node_count())
            .field("infected", &self.infected)
            .field("cascade_links", &self.cascade_links)
            .field("last_step", &self.last_step)
            .field("bound", &self.bound)
            .field("stop", &self.stop)
            .finish_non_exhaustive()
    }
}
