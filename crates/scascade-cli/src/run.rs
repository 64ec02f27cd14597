//! One complete invocation: load inputs, run the batch, drain outputs.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use scascade_core::{EpidemicId, InitialCondition, NodeId};
use scascade_engine::trial::{stream_rng, SEED_SELECTION_STREAM};
use scascade_engine::{BatchConfig, BatchDriver, BatchOutputs, BatchReport, OutputThread};
use scascade_graph::{load_adjacency_file, read_adjacency, AdjacencyGraph, LoadOptions, Network};
use scascade_io::{
    attach_bounds, attach_global_bound, read_bounds, read_random_seed_records, read_seed_records,
    InputError, SeedRecord,
};
use tracing::{info, warn};

use crate::args::{Args, BoundSpec};
use crate::error::CliError;

type StatusWriter = Box<dyn Write + Send>;

/// Run the simulation described by `args`.
///
/// Returns the batch report with the writer statistics filled in. Sink
/// I/O errors are logged and counted in the report, not returned.
pub fn run(args: &Args) -> Result<BatchReport, CliError> {
    let bounds = BoundSpec::from_args(args)?;
    let stop = bounds.stop();
    let config = BatchConfig {
        probability: args.probability,
        samples: args.samples,
        workers: args.workers,
        master_seed: args.seed,
        trace_chunk: args.trace_chunk,
    };
    config.validate()?;

    info!("simple epidemic cascade simulation");
    info!(
        workers = config.resolved_workers(),
        trace = args.output.as_deref().unwrap_or("none"),
        "configuration accepted"
    );

    let graph = load_graph(args)?;
    info!(
        nodes = graph.node_count(),
        arcs = graph.arc_count(),
        "graph loaded"
    );

    let driver = BatchDriver::new(&graph, config)?;
    info!(master_seed = driver.master_seed(), "master seed");

    let records = load_seed_records(args, graph.node_count(), driver.master_seed())?;
    let conditions = apply_bounds(records, &bounds)?;
    info!(epidemics = conditions.len(), stop = %stop, "epidemics loaded");

    let trace = match &args.output {
        Some(base) if !base.is_empty() => {
            let path = PathBuf::from(stop.trace_file_name(base));
            info!(path = %path.display(), "writing trace");
            let file = BufWriter::new(create(&path)?);
            Some(OutputThread::spawn(
                "scascade-trace",
                file,
                OutputThread::<BufWriter<File>>::DEFAULT_CAPACITY,
            )?)
        }
        _ => None,
    };
    let status = match &args.status {
        Some(path) => {
            let writer: StatusWriter = if args.status_to_stdout() {
                Box::new(io::stdout())
            } else {
                Box::new(BufWriter::new(create(path)?))
            };
            Some(OutputThread::spawn(
                "scascade-status",
                writer,
                OutputThread::<StatusWriter>::DEFAULT_CAPACITY,
            )?)
        }
        None => None,
    };

    let outputs = BatchOutputs {
        trace: trace.as_ref().map(|(_, handle)| handle.clone()),
        status: status.as_ref().map(|(_, handle)| handle.clone()),
    };
    let (trace_thread, status_thread) = (
        trace.map(|(thread, _)| thread),
        status.map(|(thread, _)| thread),
    );

    // The handles inside `outputs` are dropped when `run` returns, which
    // lets the writer threads drain and exit.
    let result = driver.run(conditions, outputs);

    let trace_stats = trace_thread.map(|t| t.join()).transpose()?;
    let status_stats = status_thread.map(|t| t.join()).transpose()?;
    let mut report = result?;
    report.trace_output = trace_stats.map(|(_, stats)| stats);
    report.status_output = status_stats.map(|(_, stats)| stats);

    if report.output_errors() > 0 {
        warn!(
            errors = report.output_errors(),
            "output was truncated by I/O errors"
        );
    }
    info!(
        runs = report.runs(),
        records = report.total_trace_records(),
        elapsed_ms = report.elapsed.as_millis() as u64,
        "done"
    );
    Ok(report)
}

fn load_graph(args: &Args) -> Result<AdjacencyGraph, CliError> {
    let options = LoadOptions {
        undirected: args.undirected,
    };
    match &args.graph {
        Some(path) => {
            load_adjacency_file(path, options).map_err(|source| CliError::Graph {
                source_name: path.display().to_string(),
                source,
            })
        }
        None => {
            info!("reading graph from stdin");
            read_adjacency(io::stdin().lock(), options).map_err(|source| CliError::Graph {
                source_name: "<stdin>".to_owned(),
                source,
            })
        }
    }
}

fn load_seed_records(
    args: &Args,
    node_count: usize,
    master_seed: u64,
) -> Result<Vec<SeedRecord>, CliError> {
    let Some(path) = &args.initial else {
        info!("no initial conditions given; one epidemic seeded at node 0");
        return Ok(vec![SeedRecord {
            id: EpidemicId(0),
            seeds: std::iter::once(NodeId(0)).collect(),
        }]);
    };
    let reader = open(path)?;
    let records = if args.random_seeds {
        let mut rng = stream_rng(master_seed, SEED_SELECTION_STREAM, 0);
        read_random_seed_records(reader, node_count, &mut rng)
    } else {
        read_seed_records(reader)
    };
    records.map_err(|source| input_error(path, source))
}

fn apply_bounds(
    records: Vec<SeedRecord>,
    bounds: &BoundSpec,
) -> Result<Vec<InitialCondition>, CliError> {
    let stop = bounds.stop();
    match bounds {
        BoundSpec::Global(t) => Ok(attach_global_bound(records, *t, stop)),
        BoundSpec::DepthFile(path) | BoundSpec::SizeFile(path) => {
            let parsed = read_bounds(open(path)?, records.len())
                .map_err(|source| input_error(path, source))?;
            attach_bounds(records, &parsed, stop).map_err(|source| input_error(path, source))
        }
    }
}

fn open(path: &Path) -> Result<impl BufRead, CliError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| input_error(path, InputError::Io(e)))
}

fn create(path: &Path) -> Result<File, CliError> {
    File::create(path).map_err(|source| CliError::Create {
        path: path.to_owned(),
        source,
    })
}

fn input_error(path: &Path, source: InputError) -> CliError {
    CliError::Input {
        path: path.to_owned(),
        source,
    }
}
