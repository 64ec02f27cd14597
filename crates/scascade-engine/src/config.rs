//! Batch configuration and validation.

use thiserror::Error;

/// Upper bound applied by [`BatchConfig::resolved_workers`].
pub const MAX_WORKERS: usize = 256;

/// Default number of trace records per output message.
pub const DEFAULT_TRACE_CHUNK: usize = 4096;

/// Parameters shared by every epidemic in a batch.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchConfig {
    /// Per-arc infection probability, in `(0, 1]`.
    pub probability: f64,
    /// Samples per initial condition. Only `1` is supported.
    pub samples: u32,
    /// Worker threads.
    pub workers: usize,
    /// Master PRNG seed. `None` draws one from the wall clock.
    pub master_seed: Option<u64>,
    /// Trace records buffered per worker before they are sent to the
    /// trace writer.
    pub trace_chunk: usize,
}

impl BatchConfig {
    /// One sample, one worker, wall-clock seed.
    pub fn new(probability: f64) -> Self {
        Self {
            probability,
            samples: 1,
            workers: 1,
            master_seed: None,
            trace_chunk: DEFAULT_TRACE_CHUNK,
        }
    }

    /// Set the worker count.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Fix the master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.master_seed = Some(seed);
        self
    }

    /// Check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = self.probability;
        if !p.is_finite() || p <= 0.0 || p > 1.0 {
            return Err(ConfigError::InvalidProbability { value: p });
        }
        if self.workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        if self.samples != 1 {
            return Err(ConfigError::UnsupportedSamples {
                samples: self.samples,
            });
        }
        if self.trace_chunk == 0 {
            return Err(ConfigError::ZeroTraceChunk);
        }
        Ok(())
    }

    /// Worker count clamped to `[1, MAX_WORKERS]`.
    pub fn resolved_workers(&self) -> usize {
        self.workers.clamp(1, MAX_WORKERS)
    }
}

/// Errors detected by [`BatchConfig::validate`].
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Probability outside `(0, 1]`, or not finite.
    #[error("infection probability must be in (0, 1], got {value}")]
    InvalidProbability {
        /// The rejected value.
        value: f64,
    },
    /// Zero worker threads requested.
    #[error("at least one worker is required")]
    NoWorkers,
    /// More than one sample per epidemic.
    #[error("{samples} samples per epidemic requested; only 1 is supported")]
    UnsupportedSamples {
        /// The requested sample count.
        samples: u32,
    },
    /// Trace chunk size of zero.
    #[error("trace chunk size must be at least 1")]
    ZeroTraceChunk,
}
