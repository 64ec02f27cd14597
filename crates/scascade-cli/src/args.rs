//! Command-line arguments.

use std::path::{Path, PathBuf};

use clap::{ArgAction, ArgGroup, Parser};
use scascade_core::StopCriterion;
use scascade_engine::config::DEFAULT_TRACE_CHUNK;

use crate::error::CliError;

/// Simple epidemic cascade simulation.
///
/// Spreads an infection with per-arc probability P over a directed graph
/// from one or more initial conditions, and writes every successful
/// transmission attempt as a `t u v id` trace line.
#[derive(Parser, Debug, Clone)]
#[command(name = "scascade")]
#[command(version, about, long_about = None)]
#[command(group(
    ArgGroup::new("bounds")
        .required(true)
        .args(["max_depth", "depth_bounds", "size_bounds"])
))]
pub struct Args {
    /// Per-arc infection probability, in (0, 1]
    #[arg(short = 'p', long)]
    pub probability: f64,

    /// Graph adjacency-list file; read from stdin when absent
    #[arg(short = 'g', long)]
    pub graph: Option<PathBuf>,

    /// Global maximum infection depth
    #[arg(short = 't', long)]
    pub max_depth: Option<u32>,

    /// Per-epidemic maximum depth file (`<id> <bound>` lines)
    #[arg(short = 'a', long)]
    pub depth_bounds: Option<PathBuf>,

    /// Per-epidemic maximum size file (`<id> <bound>` lines)
    #[arg(short = 'b', long)]
    pub size_bounds: Option<PathBuf>,

    /// Samples per epidemic
    #[arg(short = 's', long, default_value_t = 1)]
    pub samples: u32,

    /// Initial-conditions file; one epidemic seeded at node 0 when absent
    #[arg(short = 'i', long)]
    pub initial: Option<PathBuf>,

    /// Draw seed nodes at random; the initial-conditions file then has no node lists
    #[arg(short = 'r', long, requires = "initial")]
    pub random_seeds: bool,

    /// Worker threads
    #[arg(short = 'w', long, default_value_t = 1)]
    pub workers: usize,

    /// Status output file; stdout when given without a path
    #[arg(short = 'e', long, num_args = 0..=1, default_missing_value = "-")]
    pub status: Option<PathBuf>,

    /// Trace output base name; records go to `<BASE>-<maxdepth|maxsize>.trace`
    #[arg(short = 'o', long, value_name = "BASE")]
    pub output: Option<String>,

    /// Master PRNG seed. When omitted, the wall clock is used.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Add every arc in both directions while loading the graph
    #[arg(long)]
    pub undirected: bool,

    /// Trace records per write batch
    #[arg(long, default_value_t = DEFAULT_TRACE_CHUNK)]
    pub trace_chunk: usize,

    /// Raise the log level (repeatable)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Whether status lines go to stdout.
    pub fn status_to_stdout(&self) -> bool {
        self.status.as_deref() == Some(Path::new("-"))
    }
}

/// Where the epidemics' bounds come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoundSpec {
    /// One `MaxDepth` bound for every epidemic.
    Global(u32),
    /// Per-epidemic `MaxDepth` bounds.
    DepthFile(PathBuf),
    /// Per-epidemic `MaxSize` bounds.
    SizeFile(PathBuf),
}

impl BoundSpec {
    /// Exactly one of `--max-depth`, `--depth-bounds`, `--size-bounds`.
    pub fn from_args(args: &Args) -> Result<Self, CliError> {
        match (&args.max_depth, &args.depth_bounds, &args.size_bounds) {
            (Some(t), None, None) => Ok(Self::Global(*t)),
            (None, Some(path), None) => Ok(Self::DepthFile(path.clone())),
            (None, None, Some(path)) => Ok(Self::SizeFile(path.clone())),
            (t, a, b) => Err(CliError::BoundSelection {
                given: usize::from(t.is_some()) + usize::from(a.is_some()) + usize::from(b.is_some()),
            }),
        }
    }

    /// The stop criterion the bounds apply to.
    pub fn stop(&self) -> StopCriterion {
        match self {
            Self::Global(_) | Self::DepthFile(_) => StopCriterion::MaxDepth,
            Self::SizeFile(_) => StopCriterion::MaxSize,
        }
    }
}
