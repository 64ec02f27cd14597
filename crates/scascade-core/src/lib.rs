//! Core types for the scascade epidemic cascade simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: node and epidemic
//! identifiers, stop criteria, initial conditions, trace records, and
//! the errors raised when an initial condition does not fit a graph.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod condition;
pub mod error;
pub mod id;
pub mod stop;
pub mod trace;

pub use condition::{InitialCondition, SeedList};
pub use error::ConditionError;
pub use id::{EpidemicId, NodeId, Step};
pub use stop::StopCriterion;
pub use trace::TraceRecord;
