//! End-to-end runs through the command-line driver.

use std::fs;
use std::path::Path;

use clap::Parser;
use scascade_cli::{run, Args, CliError};
use scascade_engine::{BatchError, ConfigError, Termination};
use scascade_io::InputError;

fn args(dir: &Path, extra: &[&str]) -> Args {
    let graph = dir.join("graph.txt");
    let argv: Vec<String> = ["scascade", "-g", graph.to_str().unwrap()]
        .into_iter()
        .chain(extra.iter().copied())
        .map(str::to_owned)
        .collect();
    Args::try_parse_from(argv).unwrap()
}

fn workspace() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    // 0 -> 1 -> 2 -> 3 -> 4, plus 0 -> 2
    fs::write(
        dir.path().join("graph.txt"),
        "# line with a shortcut\n5\n0 1\n1 2\n2 3\n3 4\n0 2\n",
    )
    .unwrap();
    dir
}

#[test]
fn trivial_epidemic_writes_trace_and_status() {
    let dir = workspace();
    let base = dir.path().join("run");
    let status = dir.path().join("status.txt");
    let a = args(
        dir.path(),
        &[
            "-p",
            "1",
            "-t",
            "2",
            "--seed",
            "1",
            "-o",
            base.to_str().unwrap(),
            "-e",
            status.to_str().unwrap(),
        ],
    );
    let report = run(&a).unwrap();
    assert_eq!(report.runs(), 1);
    assert_eq!(report.summaries[0].termination, Termination::DepthBound);

    let trace = fs::read_to_string(dir.path().join("run-maxdepth.trace")).unwrap();
    assert_eq!(trace, "1 0 1 0\n1 0 2 0\n2 1 2 0\n2 2 3 0\n");
    let status = fs::read_to_string(&status).unwrap();
    let lines: Vec<&str> = status.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "Epidemic 0 #1: started at t = 1 with 1 / 5 ( 20.00% ) infected nodes"
    );
    assert_eq!(
        lines[1],
        "Epidemic 0 #1: stopped at t = 2 with 4 / 5 ( 80.00% ) infected nodes and 3 links"
    );
    let stats = report.trace_output.as_ref().unwrap();
    assert_eq!(stats.records, 4);
    assert_eq!(report.output_errors(), 0);
}

#[test]
fn size_bounds_from_files() {
    let dir = workspace();
    fs::write(dir.path().join("ic.txt"), "2\n10 1 0\n11 2 3 4\n").unwrap();
    fs::write(dir.path().join("sizes.txt"), "10 2\n11 5\n").unwrap();
    let base = dir.path().join("sz");
    let a = args(
        dir.path(),
        &[
            "-p",
            "1",
            "-i",
            dir.path().join("ic.txt").to_str().unwrap(),
            "-b",
            dir.path().join("sizes.txt").to_str().unwrap(),
            "-o",
            base.to_str().unwrap(),
            "-w",
            "2",
            "--seed",
            "3",
        ],
    );
    let report = run(&a).unwrap();
    assert_eq!(report.summaries[0].infected, 2);
    assert_eq!(report.summaries[0].termination, Termination::SizeBound);
    // Seeds 3 and 4 reach nothing new.
    assert_eq!(report.summaries[1].infected, 2);
    assert_eq!(report.summaries[1].termination, Termination::Exhausted);

    let trace = fs::read_to_string(dir.path().join("sz-maxsize.trace")).unwrap();
    let mut lines: Vec<&str> = trace.lines().collect();
    lines.sort_unstable();
    assert_eq!(lines, vec!["1 0 1 10", "1 3 4 11"]);
}

#[test]
fn random_seeds_use_counts_only() {
    let dir = workspace();
    fs::write(dir.path().join("ic.txt"), "1\n4 4\n").unwrap();
    let a = args(
        dir.path(),
        &[
            "-p",
            "0.5",
            "-t",
            "3",
            "-r",
            "-i",
            dir.path().join("ic.txt").to_str().unwrap(),
            "--seed",
            "11",
        ],
    );
    let report = run(&a).unwrap();
    assert_eq!(report.summaries[0].seeds, 4);
    assert!(report.summaries[0].infected >= 4);
}

#[test]
fn bound_id_mismatch_is_fatal() {
    let dir = workspace();
    fs::write(dir.path().join("ic.txt"), "1\n10 1 0\n").unwrap();
    fs::write(dir.path().join("depths.txt"), "12 3\n").unwrap();
    let a = args(
        dir.path(),
        &[
            "-p",
            "1",
            "-i",
            dir.path().join("ic.txt").to_str().unwrap(),
            "-a",
            dir.path().join("depths.txt").to_str().unwrap(),
        ],
    );
    assert!(matches!(
        run(&a),
        Err(CliError::Input {
            source: InputError::BoundIdMismatch { .. },
            ..
        })
    ));
}

#[test]
fn seed_outside_graph_is_fatal() {
    let dir = workspace();
    fs::write(dir.path().join("ic.txt"), "1\n10 1 9\n").unwrap();
    let a = args(
        dir.path(),
        &[
            "-p",
            "1",
            "-t",
            "3",
            "-i",
            dir.path().join("ic.txt").to_str().unwrap(),
        ],
    );
    assert!(matches!(
        run(&a),
        Err(CliError::Batch(BatchError::Condition { index: 0, .. }))
    ));
}

#[test]
fn bad_probability_rejected_before_loading() {
    let dir = tempfile::tempdir().unwrap();
    // No graph file exists: the configuration error must come first.
    let a = args(dir.path(), &["-p", "1.5", "-t", "3"]);
    assert!(matches!(
        run(&a),
        Err(CliError::Config(ConfigError::InvalidProbability { .. }))
    ));
}

#[test]
fn multiple_samples_unsupported() {
    let dir = workspace();
    let a = args(dir.path(), &["-p", "0.5", "-t", "3", "-s", "2"]);
    assert!(matches!(
        run(&a),
        Err(CliError::Config(ConfigError::UnsupportedSamples { samples: 2 }))
    ));
}

#[test]
fn missing_graph_reported() {
    let dir = tempfile::tempdir().unwrap();
    let a = args(dir.path(), &["-p", "0.5", "-t", "3"]);
    assert!(matches!(run(&a), Err(CliError::Graph { .. })));
}
