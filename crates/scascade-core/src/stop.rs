//! Stop criteria bounding an epidemic run.

use std::fmt;

/// How the `bound` of an initial condition terminates a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StopCriterion {
    /// Stop before processing a node whose infection step exceeds the bound.
    MaxDepth,
    /// Stop as soon as the number of infected nodes reaches the bound.
    MaxSize,
}

impl StopCriterion {
    /// Short tag used in trace file names (`<base>-<tag>.trace`).
    pub fn tag(self) -> &'static str {
        match self {
            Self::MaxDepth => "maxdepth",
            Self::MaxSize => "maxsize",
        }
    }

    /// Trace file name for the given base name.
    pub fn trace_file_name(self, base: &str) -> String {
        format!("{base}-{}.trace", self.tag())
    }
}

impl fmt::Display for StopCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
