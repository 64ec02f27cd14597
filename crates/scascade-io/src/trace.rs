//! Reading trace files back.

use std::io::{BufRead, Lines};

use scascade_core::{EpidemicId, NodeId, TraceRecord};

use crate::error::InputError;
use crate::tokens::parse;

/// Parse one trace line `<t> <u> <v> <id>`.
pub fn parse_trace_line(line: &str, line_no: usize) -> Result<TraceRecord, InputError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 4 {
        return Err(InputError::FieldCount {
            line: line_no,
            expected: 4,
            found: fields.len(),
        });
    }
    Ok(TraceRecord {
        step: parse(fields[0], line_no, "step")?,
        provider: NodeId(parse(fields[1], line_no, "node id")?),
        client: NodeId(parse(fields[2], line_no, "node id")?),
        epidemic: EpidemicId(parse(fields[3], line_no, "epidemic id")?),
    })
}

/// Iterator over the records of a trace file.
///
/// Stops at the first error; the error is yielded once.
pub struct TraceReader<R> {
    lines: Lines<R>,
    line_no: usize,
    failed: bool,
}

impl<R: BufRead> TraceReader<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<TraceRecord, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let line = self.lines.next()?;
        self.line_no += 1;
        let record = line
            .map_err(InputError::from)
            .and_then(|l| parse_trace_line(&l, self.line_no));
        self.failed = record.is_err();
        Some(record)
    }
}
