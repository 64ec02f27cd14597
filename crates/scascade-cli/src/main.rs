//! `scascade`: simple epidemic cascade simulation.
//!
//! ```bash
//! # Depth-bounded cascades from an initial-conditions file, 8 workers
//! scascade -p 0.1 -g graph.txt -i epidemics.txt -t 10 -w 8 -o run
//!
//! # Size-bounded cascades from random seeds, status to stdout
//! scascade -p 0.05 -g graph.txt -i counts.txt -r -b sizes.txt -e
//! ```

use clap::Parser;
use scascade_cli::{init_logging, run, Args};
use tracing::error;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        error!("{e}");
        std::process::exit(1);
    }
}
