//! Whitespace token stream with line tracking.

use std::io::BufRead;
use std::str::FromStr;

use crate::error::InputError;

pub(crate) struct Tokens<R> {
    reader: R,
    line: usize,
    // Tokens of the current line, reversed.
    pending: Vec<String>,
    buf: String,
}

impl<R: BufRead> Tokens<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            pending: Vec::new(),
            buf: String::new(),
        }
    }

    /// Line of the most recently returned token.
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    /// Next token, or `None` at end of input.
    pub(crate) fn next_token(&mut self) -> Result<Option<String>, InputError> {
        while self.pending.is_empty() {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            self.pending = self.buf.split_whitespace().rev().map(str::to_owned).collect();
        }
        Ok(self.pending.pop())
    }

    /// Next token parsed as `T`; end of input is an error.
    pub(crate) fn expect<T: FromStr>(&mut self, what: &'static str) -> Result<T, InputError> {
        match self.next_token()? {
            Some(token) => parse(&token, self.line, what),
            None => Err(InputError::UnexpectedEof {
                what,
                line: self.line,
            }),
        }
    }

    /// Like [`expect`](Self::expect), but `None` at a clean end of input.
    pub(crate) fn maybe<T: FromStr>(&mut self, what: &'static str) -> Result<Option<T>, InputError> {
        match self.next_token()? {
            Some(token) => parse(&token, self.line, what).map(Some),
            None => Ok(None),
        }
    }
}

pub(crate) fn parse<T: FromStr>(token: &str, line: usize, what: &'static str) -> Result<T, InputError> {
    token.parse().map_err(|_| InputError::Malformed {
        line,
        token: token.to_owned(),
        what,
    })
}
