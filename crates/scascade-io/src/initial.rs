//! Initial-conditions file.
//!
//! ```text
//! <E>
//! <id_1> <k_1> [<v_1_1> ... <v_1_k>]
//! ...
//! ```
//!
//! Bounds are not part of this file; see [`crate::bounds`].

use std::io::BufRead;

use rand::Rng;
use scascade_core::{EpidemicId, NodeId, SeedList};
use tracing::debug;

use crate::error::InputError;
use crate::random::choose_seeds;
use crate::tokens::Tokens;

/// An epidemic's label and seed set, before a bound is attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedRecord {
    /// The epidemic's label.
    pub id: EpidemicId,
    /// Seeds, in file order (or ascending when drawn at random).
    pub seeds: SeedList,
}

/// Read records with explicit seed lists.
///
/// Seed ids are not range-checked here; that happens once the graph is
/// known, when the conditions are validated.
///
/// # Examples
///
/// ```
/// use scascade_core::{EpidemicId, NodeId};
/// use scascade_io::read_seed_records;
///
/// let records = read_seed_records("2\n10 1 4\n11 2 0 3\n".as_bytes()).unwrap();
/// assert_eq!(records[1].id, EpidemicId(11));
/// assert_eq!(records[1].seeds.as_slice(), &[NodeId(0), NodeId(3)]);
/// ```
pub fn read_seed_records<R: BufRead>(reader: R) -> Result<Vec<SeedRecord>, InputError> {
    parse_records(reader, |tokens, k| {
        (0..k)
            .map(|_| tokens.expect::<u32>("node id").map(NodeId))
            .collect()
    })
}

/// Read records without seed lists, drawing `k` distinct seeds per
/// epidemic from `[0, node_count)`.
pub fn read_random_seed_records<R: BufRead, G: Rng + ?Sized>(
    reader: R,
    node_count: usize,
    rng: &mut G,
) -> Result<Vec<SeedRecord>, InputError> {
    parse_records(reader, |_tokens, k| choose_seeds(k, node_count, &mut *rng))
}

fn parse_records<R, F>(reader: R, mut seeds_for: F) -> Result<Vec<SeedRecord>, InputError>
where
    R: BufRead,
    F: FnMut(&mut Tokens<R>, usize) -> Result<SeedList, InputError>,
{
    let mut tokens = Tokens::new(reader);
    let count: usize = tokens.expect("epidemic count")?;
    if count == 0 {
        return Err(InputError::NoEpidemics {
            line: tokens.line(),
        });
    }

    let mut records = Vec::with_capacity(count.min(1 << 16));
    for _ in 0..count {
        let Some(id) = tokens.maybe::<i64>("epidemic id")? else {
            return Err(InputError::CountMismatch {
                expected: count,
                found: records.len(),
            });
        };
        let id = EpidemicId(id);
        let k: usize = tokens.expect("seed count")?;
        if k == 0 {
            return Err(InputError::NoSeeds {
                line: tokens.line(),
                id,
            });
        }
        let seeds = seeds_for(&mut tokens, k)?;
        records.push(SeedRecord { id, seeds });
    }
    debug!(epidemics = records.len(), "initial conditions parsed");
    Ok(records)
}
