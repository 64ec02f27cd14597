//! Command-line driver for scascade.
//!
//! [`Args`] is the clap surface, [`run`] wires the input files, the
//! batch driver and the output writer threads together, and
//! [`init_logging`] installs the stderr subscriber used by the binary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod args;
pub mod error;
pub mod logging;
pub mod run;

pub use args::{Args, BoundSpec};
pub use error::CliError;
pub use logging::init_logging;
pub use run::run;
