//! Input error type.

use std::io;

use scascade_core::EpidemicId;
use thiserror::Error;

/// Errors reading initial conditions, bounds or traces.
#[derive(Debug, Error)]
pub enum InputError {
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The input ended while a token was still expected.
    #[error("unexpected end of input after line {line}: expected {what}")]
    UnexpectedEof {
        /// What was being read.
        what: &'static str,
        /// Last line read.
        line: usize,
    },
    /// A token could not be parsed.
    #[error("line {line}: `{token}` is not a valid {what}")]
    Malformed {
        /// 1-based line of the token.
        line: usize,
        /// The offending token.
        token: String,
        /// What was expected.
        what: &'static str,
    },
    /// A record has the wrong number of fields.
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        /// 1-based line.
        line: usize,
        /// Fields required.
        expected: usize,
        /// Fields present.
        found: usize,
    },
    /// The epidemic count in the header is zero.
    #[error("line {line}: the file declares no epidemics")]
    NoEpidemics {
        /// 1-based line of the header.
        line: usize,
    },
    /// An epidemic declares zero seeds.
    #[error("line {line}: epidemic {id} declares no seeds")]
    NoSeeds {
        /// 1-based line of the seed count.
        line: usize,
        /// The epidemic's label.
        id: EpidemicId,
    },
    /// Fewer records than epidemics.
    #[error("expected {expected} records, found {found}")]
    CountMismatch {
        /// Records required.
        expected: usize,
        /// Records present.
        found: usize,
    },
    /// A bound record names a different epidemic than its position
    /// requires.
    #[error("bound #{position} is for epidemic {found}, expected {expected}")]
    BoundIdMismatch {
        /// 0-based position in the file.
        position: usize,
        /// Id of the initial condition at that position.
        expected: EpidemicId,
        /// Id found in the bounds file.
        found: EpidemicId,
    },
    /// More random seeds requested than the graph has nodes, or none.
    #[error("cannot choose {requested} distinct seeds from {node_count} nodes")]
    SeedRequest {
        /// Seeds requested.
        requested: usize,
        /// Nodes available.
        node_count: usize,
    },
}
