//! Cascade engine and parallel batch driver for scascade.
//!
//! Provides the per-epidemic state machine ([`Epidemic`]) that spreads an
//! infection over a shared [`Network`](scascade_graph::Network) and
//! emits every successful transmission attempt as a trace record, and the
//! [`BatchDriver`] that runs many independent epidemics over one graph
//! on a pool of worker threads.
//!
//! Trace and status output leave the workers through [`OutputThread`]s:
//! one writer thread per sink, fed over a bounded channel, so records
//! are never interleaved mid-line.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batched;
pub mod config;
pub mod epidemic;
pub mod error;
pub mod frontier;
pub mod metrics;
pub mod output;
pub mod schedule;
pub mod sink;
pub mod status;
pub mod trial;

pub use batched::{BatchDriver, BatchError, BatchOutputs, BatchReport};
pub use config::{BatchConfig, ConfigError};
pub use epidemic::{Epidemic, Termination};
pub use error::{CascadeError, EpidemicError, FrontierError, OutputError};
pub use frontier::Frontier;
pub use metrics::EpidemicSummary;
pub use output::{ChannelTraceSink, OutputHandle, OutputStats, OutputThread};
pub use schedule::GuidedSchedule;
pub use sink::TraceSink;
