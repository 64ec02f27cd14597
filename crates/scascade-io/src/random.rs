//! Uniform seed selection without replacement.

use rand::Rng;
use scascade_core::{NodeId, SeedList};

use crate::error::InputError;

/// Choose `k` distinct nodes of `[0, n)` uniformly at random.
///
/// For `k <= n / 2` the seeds are rejection-sampled directly; otherwise
/// the `n - k` excluded nodes are sampled and the complement returned.
/// The result is sorted ascending.
///
/// # Errors
///
/// [`InputError::SeedRequest`] if `k == 0` or `k > n`.
pub fn choose_seeds<R: Rng + ?Sized>(k: usize, n: usize, rng: &mut R) -> Result<SeedList, InputError> {
    if k == 0 || k > n {
        return Err(InputError::SeedRequest {
            requested: k,
            node_count: n,
        });
    }

    let direct = k <= n / 2;
    let draws = if direct { k } else { n - k };
    let mut marked = vec![false; n];
    let mut drawn = 0;
    while drawn < draws {
        let v = rng.random_range(0..n);
        if !marked[v] {
            marked[v] = true;
            drawn += 1;
        }
    }

    Ok(marked
        .iter()
        .enumerate()
        .filter(|&(_, &m)| m == direct)
        .map(|(v, _)| NodeId(v as u32))
        .collect())
}
