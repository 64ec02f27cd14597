//! The `TraceSink` trait: where an epidemic sends its trace records.

use scascade_core::TraceRecord;

/// Append-only destination for the trace records of one epidemic run.
///
/// Records arrive in the exact order transmissions are processed. The
/// batch driver hands each run a
/// [`ChannelTraceSink`](crate::ChannelTraceSink); tests typically use a
/// plain `Vec<TraceRecord>`.
pub trait TraceSink {
    /// Accept one record.
    fn record(&mut self, record: TraceRecord);
}

impl TraceSink for Vec<TraceRecord> {
    fn record(&mut self, record: TraceRecord) {
        self.push(record);
    }
}
