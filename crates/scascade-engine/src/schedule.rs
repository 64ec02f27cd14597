//! Guided self-scheduling over epidemic indices.

use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands out contiguous index ranges of shrinking size.
///
/// Each [`claim`](Self::claim) takes `max(1, ceil(remaining / workers))`
/// indices, so early claims are large and the tail is split finely
/// enough that one long epidemic does not leave other workers idle.
/// Every index in `0..len` is handed out exactly once.
#[derive(Debug)]
pub struct GuidedSchedule {
    cursor: AtomicUsize,
    len: usize,
    workers: usize,
}

impl GuidedSchedule {
    /// Schedule `len` indices across `workers` workers (at least 1).
    pub fn new(len: usize, workers: usize) -> Self {
        Self {
            cursor: AtomicUsize::new(0),
            len,
            workers: workers.max(1),
        }
    }

    /// Total number of indices.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there was nothing to schedule.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Indices not yet claimed.
    pub fn remaining(&self) -> usize {
        self.len.saturating_sub(self.cursor.load(Ordering::Acquire))
    }

    /// Claim the next range, or `None` once everything is handed out.
    pub fn claim(&self) -> Option<Range<usize>> {
        let mut start = self.cursor.load(Ordering::Acquire);
        loop {
            if start >= self.len {
                return None;
            }
            let remaining = self.len - start;
            let size = remaining.div_ceil(self.workers).max(1);
            let end = start + size;
            match self
                .cursor
                .compare_exchange_weak(start, end, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return Some(start..end),
                Err(current) => start = current,
            }
        }
    }

    /// Stop handing out work; later claims return `None`.
    pub fn close(&self) {
        self.cursor.fetch_max(self.len, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn chunks_shrink_guided() {
        let s = GuidedSchedule::new(10, 3);
        let sizes: Vec<usize> = std::iter::from_fn(|| s.claim()).map(|r| r.len()).collect();
        // ceil(10/3)=4, ceil(6/3)=2, ceil(4/3)=2, ceil(2/3)=1, ceil(1/3)=1
        assert_eq!(sizes, vec![4, 2, 2, 1, 1]);
        assert_eq!(s.remaining(), 0);
    }

    #[test]
    fn single_worker_takes_everything() {
        let s = GuidedSchedule::new(7, 1);
        assert_eq!(s.claim(), Some(0..7));
        assert_eq!(s.claim(), None);
    }

    #[test]
    fn empty_schedule() {
        let s = GuidedSchedule::new(0, 4);
        assert!(s.is_empty());
        assert_eq!(s.claim(), None);
    }

    #[test]
    fn zero_workers_treated_as_one() {
        let s = GuidedSchedule::new(3, 0);
        assert_eq!(s.claim(), Some(0..3));
    }

    #[test]
    fn close_stops_claims() {
        let s = GuidedSchedule::new(100, 4);
        assert!(s.claim().is_some());
        s.close();
        assert_eq!(s.claim(), None);
        assert_eq!(s.remaining(), 0);
    }

    #[test]
    fn concurrent_claims_cover_each_index_once() {
        let s = GuidedSchedule::new(10_000, 8);
        let seen = Mutex::new(vec![0u32; 10_000]);
        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    while let Some(range) = s.claim() {
                        let mut seen = seen.lock().unwrap();
                        for i in range {
                            seen[i] += 1;
                        }
                    }
                });
            }
        });
        assert!(seen.into_inner().unwrap().iter().all(|&c| c == 1));
    }
}
