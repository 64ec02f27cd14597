//! Per-epidemic bounds file: `E` records `<id> <bound>`.
//!
//! Bounds are matched to seed records by position; the ids must agree.

use std::io::BufRead;

use scascade_core::{EpidemicId, InitialCondition, StopCriterion};

use crate::error::InputError;
use crate::initial::SeedRecord;
use crate::tokens::Tokens;

/// One line of a bounds file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundRecord {
    /// Epidemic the bound belongs to.
    pub id: EpidemicId,
    /// The bound itself.
    pub bound: u32,
}

/// Read exactly `expected` bound records. Anything after them is ignored.
pub fn read_bounds<R: BufRead>(reader: R, expected: usize) -> Result<Vec<BoundRecord>, InputError> {
    let mut tokens = Tokens::new(reader);
    let mut bounds = Vec::with_capacity(expected.min(1 << 16));
    while bounds.len() < expected {
        let Some(id) = tokens.maybe::<i64>("epidemic id")? else {
            return Err(InputError::CountMismatch {
                expected,
                found: bounds.len(),
            });
        };
        let bound: u32 = tokens.expect("bound")?;
        bounds.push(BoundRecord {
            id: EpidemicId(id),
            bound,
        });
    }
    Ok(bounds)
}

/// Pair seed records with per-epidemic bounds under `stop`.
///
/// # Errors
///
/// [`InputError::CountMismatch`] if the lengths differ and
/// [`InputError::BoundIdMismatch`] at the first position whose ids
/// disagree.
pub fn attach_bounds(
    records: Vec<SeedRecord>,
    bounds: &[BoundRecord],
    stop: StopCriterion,
) -> Result<Vec<InitialCondition>, InputError> {
    if records.len() != bounds.len() {
        return Err(InputError::CountMismatch {
            expected: records.len(),
            found: bounds.len(),
        });
    }
    records
        .into_iter()
        .zip(bounds)
        .enumerate()
        .map(|(position, (record, bound))| {
            if record.id != bound.id {
                return Err(InputError::BoundIdMismatch {
                    position,
                    expected: record.id,
                    found: bound.id,
                });
            }
            Ok(InitialCondition::new(record.id, record.seeds, bound.bound, stop))
        })
        .collect()
}

/// Give every seed record the same bound.
pub fn attach_global_bound(
    records: Vec<SeedRecord>,
    bound: u32,
    stop: StopCriterion,
) -> Vec<InitialCondition> {
    records
        .into_iter()
        .map(|r| InitialCondition::new(r.id, r.seeds, bound, stop))
        .collect()
}
