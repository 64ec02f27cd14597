//! Top-level error type of the command-line driver.

use std::io;
use std::path::PathBuf;

use scascade_engine::{BatchError, ConfigError, OutputError};
use scascade_graph::GraphError;
use scascade_io::InputError;
use thiserror::Error;

/// Anything that stops a run before it completes.
#[derive(Debug, Error)]
pub enum CliError {
    /// Not exactly one bound source was given.
    #[error("exactly one of --max-depth, --depth-bounds, --size-bounds is required, {given} given")]
    BoundSelection {
        /// How many were given.
        given: usize,
    },
    /// Invalid batch parameters.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// The graph could not be loaded.
    #[error("cannot load graph {source_name}: {source}")]
    Graph {
        /// File name, or `<stdin>`.
        source_name: String,
        /// The loader failure.
        source: GraphError,
    },
    /// An initial-conditions or bounds file is invalid.
    #[error("cannot read {path}: {source}")]
    Input {
        /// The offending file.
        path: PathBuf,
        /// The parse failure.
        source: InputError,
    },
    /// An output file could not be created.
    #[error("cannot create {path}: {source}")]
    Create {
        /// The file.
        path: PathBuf,
        /// The OS error.
        source: io::Error,
    },
    /// The batch failed.
    #[error(transparent)]
    Batch(#[from] BatchError),
    /// An output thread failed.
    #[error(transparent)]
    Output(#[from] OutputError),
}
