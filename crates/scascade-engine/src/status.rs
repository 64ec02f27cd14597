//! Human-readable status lines, one pair per run.
//!
//! ```text
//! Epidemic 7 #1: started at t = 1 with 1 / 5 ( 20.00% ) infected nodes
//! Epidemic 7 #1: stopped at t = 2 with 3 / 5 ( 60.00% ) infected nodes and 2 links
//! ```

use crate::epidemic::Epidemic;

fn percent(infected: usize, nodes: usize) -> f64 {
    if nodes == 0 {
        0.0
    } else {
        100.0 * infected as f64 / nodes as f64
    }
}

/// Line emitted before a run.
pub fn start_line(epidemic: &Epidemic<'_>, sample: u32) -> String {
    format!(
        "Epidemic {} #{}: started at t = {} with {} / {} ( {:.2}% ) infected nodes",
        epidemic.id(),
        sample,
        epidemic.last_step(),
        epidemic.infected(),
        epidemic.node_count(),
        percent(epidemic.infected(), epidemic.node_count()),
    )
}

/// Line emitted after a run.
pub fn stop_line(epidemic: &Epidemic<'_>, sample: u32) -> String {
    format!(
        "Epidemic {} #{}: stopped at t = {} with {} / {} ( {:.2}% ) infected nodes and {} links",
        epidemic.id(),
        sample,
        epidemic.last_step(),
        epidemic.infected(),
        epidemic.node_count(),
        percent(epidemic.infected(), epidemic.node_count()),
        epidemic.cascade_links(),
    )
}
