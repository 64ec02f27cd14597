//! Trace records: one per successful transmission attempt.

use std::fmt;

use crate::id::{EpidemicId, NodeId, Step};

/// A successful transmission attempt `provider → client` at `step`.
///
/// Displays as the trace line `<t> <u> <v> <id>` without the newline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TraceRecord {
    /// Step at which the provider attempted the transmission.
    pub step: Step,
    /// The already-infected node.
    pub provider: NodeId,
    /// The target of the attempt.
    pub client: NodeId,
    /// The epidemic the attempt belongs to.
    pub epidemic: EpidemicId,
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.step, self.provider, self.client, self.epidemic
        )
    }
}
