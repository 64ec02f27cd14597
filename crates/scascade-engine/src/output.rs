//! Writer threads for the shared trace and status sinks.
//!
//! Each sink is owned by one [`OutputThread`]. Workers talk to it through
//! cloned [`OutputHandle`]s over a bounded crossbeam channel; every
//! message is written contiguously, so lines from different workers are
//! never interleaved mid-line. Trace records travel in chunks built by
//! a per-run [`ChannelTraceSink`].
//!
//! I/O errors are not fatal: the first one is logged, counted, and all
//! later output to that sink is dropped while the channel keeps draining,
//! so in-flight runs still finish.

use std::io::{self, Write};
use std::mem;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use scascade_core::TraceRecord;
use tracing::{trace, warn};

use crate::error::OutputError;
use crate::sink::TraceSink;

/// A unit of work for a writer thread.
#[derive(Debug)]
enum OutputMsg {
    /// Trace records from one run, in emission order.
    Records(Vec<TraceRecord>),
    /// One text line, without its newline.
    Line(String),
    /// Flush the underlying writer.
    Flush,
}

/// Counters reported by a writer thread when it exits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputStats {
    /// Trace records written.
    pub records: u64,
    /// Text lines written.
    pub lines: u64,
    /// Flushes performed.
    pub flushes: u64,
    /// Write or flush failures (at most one per thread, plus a failed
    /// final flush).
    pub io_errors: u64,
    /// Messages discarded after a failure.
    pub dropped: u64,
}

/// Cloneable sending side of an [`OutputThread`].
#[derive(Clone, Debug)]
pub struct OutputHandle {
    tx: Sender<OutputMsg>,
}

impl OutputHandle {
    fn send(&self, msg: OutputMsg) {
        // A closed channel means the writer thread is gone; `join`
        // reports why.
        let _ = self.tx.send(msg);
    }

    /// Queue one line of text.
    pub fn send_line(&self, line: impl Into<String>) {
        self.send(OutputMsg::Line(line.into()));
    }

    /// Ask the writer to flush after everything queued so far.
    pub fn flush(&self) {
        self.send(OutputMsg::Flush);
    }

    /// A trace sink for one run, sending chunks of up to `chunk` records.
    pub fn trace_sink(&self, chunk: usize) -> ChannelTraceSink {
        ChannelTraceSink {
            handle: self.clone(),
            buffer: Vec::new(),
            chunk: chunk.max(1),
        }
    }
}

/// Trace sink that batches records and ships them to an [`OutputThread`].
///
/// Call [`finish_run`](Self::finish_run) when the run ends; dropping the
/// sink sends any buffered records but does not request a flush.
#[derive(Debug)]
pub struct ChannelTraceSink {
    handle: OutputHandle,
    buffer: Vec<TraceRecord>,
    chunk: usize,
}

impl ChannelTraceSink {
    fn send_buffered(&mut self) {
        if !self.buffer.is_empty() {
            let batch = mem::take(&mut self.buffer);
            self.handle.send(OutputMsg::Records(batch));
        }
    }

    /// Send buffered records and flush the trace file.
    pub fn finish_run(&mut self) {
        self.send_buffered();
        self.handle.flush();
    }

    /// Records waiting to be sent.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }
}

impl TraceSink for ChannelTraceSink {
    fn record(&mut self, record: TraceRecord) {
        self.buffer.push(record);
        if self.buffer.len() >= self.chunk {
            self.send_buffered();
        }
    }
}

impl Drop for ChannelTraceSink {
    fn drop(&mut self) {
        self.send_buffered();
    }
}

/// A thread owning one output writer.
///
/// The thread exits once every [`OutputHandle`] (including the one
/// returned by [`spawn`](Self::spawn)) has been dropped; only then can
/// [`join`](Self::join) return.
pub struct OutputThread<W> {
    name: String,
    handle: JoinHandle<(W, OutputStats)>,
}

impl<W: Write + Send + 'static> OutputThread<W> {
    /// Messages buffered in the channel before senders block.
    pub const DEFAULT_CAPACITY: usize = 64;

    /// Spawn a writer thread named `name` around `writer`.
    ///
    /// `writer` should be buffered (e.g. `BufWriter<File>`); the thread
    /// issues one `write` per line.
    pub fn spawn(
        name: impl Into<String>,
        writer: W,
        capacity: usize,
    ) -> Result<(Self, OutputHandle), OutputError> {
        let name = name.into();
        let (tx, rx) = crossbeam_channel::bounded(capacity.max(1));
        let thread_name = name.clone();
        let handle = thread::Builder::new()
            .name(name.clone())
            .spawn(move || writer_loop(&thread_name, writer, rx))
            .map_err(|source| OutputError::Spawn {
                name: name.clone(),
                source,
            })?;
        Ok((Self { name, handle }, OutputHandle { tx }))
    }

    /// Thread name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wait for the thread to drain its channel and return the writer.
    pub fn join(self) -> Result<(W, OutputStats), OutputError> {
        self.handle
            .join()
            .map_err(|_| OutputError::Panicked { name: self.name })
    }
}

fn apply<W: Write>(writer: &mut W, msg: &OutputMsg) -> io::Result<()> {
    match msg {
        OutputMsg::Records(batch) => {
            for record in batch {
                writeln!(writer, "{record}")?;
            }
            Ok(())
        }
        OutputMsg::Line(line) => writeln!(writer, "{line}"),
        OutputMsg::Flush => writer.flush(),
    }
}

fn writer_loop<W: Write>(name: &str, mut writer: W, rx: Receiver<OutputMsg>) -> (W, OutputStats) {
    let mut stats = OutputStats::default();
    let mut healthy = true;

    while let Ok(msg) = rx.recv() {
        if !healthy {
            stats.dropped += 1;
            continue;
        }
        match apply(&mut writer, &msg) {
            Ok(()) => match msg {
                OutputMsg::Records(batch) => {
                    stats.records += batch.len() as u64;
                    trace!(output = name, records = batch.len(), "trace chunk written");
                }
                OutputMsg::Line(_) => stats.lines += 1,
                OutputMsg::Flush => stats.flushes += 1,
            },
            Err(error) => {
                healthy = false;
                stats.io_errors += 1;
                warn!(output = name, %error, "write failed; dropping further output");
            }
        }
    }

    if healthy {
        if let Err(error) = writer.flush() {
            stats.io_errors += 1;
            warn!(output = name, %error, "final flush failed");
        }
    }
    (writer, stats)
}
