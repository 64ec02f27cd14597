//! File formats consumed and produced by scascade.
//!
//! - Initial conditions: `<E>` then `E` records `<id> <k> [<v_1> ... <v_k>]`.
//!   With random seeding the node lists are absent and [`choose_seeds`]
//!   draws `k` distinct nodes instead.
//! - Bounds: `E` records `<id> <bound>`, matched to the initial
//!   conditions by position.
//! - Traces: one `<t> <u> <v> <id>` line per successful transmission,
//!   read back with [`TraceReader`].
//!
//! Initial-condition and bounds files are token streams: records may
//! wrap across lines, and errors report the 1-based line of the
//! offending token.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod error;
pub mod initial;
pub mod random;
mod tokens;
pub mod trace;

pub use bounds::{attach_bounds, attach_global_bound, read_bounds, BoundRecord};
pub use error::InputError;
pub use initial::{read_random_seed_records, read_seed_records, SeedRecord};
pub use random::choose_seeds;
pub use trace::{parse_trace_line, TraceReader};
