//! Per-run statistics collected by the batch driver.

use scascade_core::{EpidemicId, Step};

use crate::epidemic::Termination;

/// Statistics of one finished epidemic run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EpidemicSummary {
    /// The epidemic's label.
    pub id: EpidemicId,
    /// Position of the initial condition in the batch (0-based).
    pub index: usize,
    /// Sample number within the epidemic (1-based).
    pub sample: u32,
    /// Number of seeds.
    pub seeds: usize,
    /// Most recent step with a new infection.
    pub last_step: Step,
    /// Nodes ever infected, seeds included.
    pub infected: usize,
    /// Nodes in the graph.
    pub nodes: usize,
    /// First infections plus co-infections.
    pub cascade_links: u64,
    /// Successful trials, one trace record each.
    pub trace_records: u64,
    /// Why the run stopped.
    pub termination: Termination,
}

impl EpidemicSummary {
    /// Infected share of the graph, in percent.
    pub fn infected_percent(&self) -> f64 {
        if self.nodes == 0 {
            return 0.0;
        }
        100.0 * self.infected as f64 / self.nodes as f64
    }
}
