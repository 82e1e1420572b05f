//! Shared helpers for ordinal benchmark suites.

use ordinal_kernel::carrier::collection::CollectionV1;
use ordinal_kernel::carrier::record::RecordV1;
use ordinal_search::ordered::OrderedSearch;
use ordinal_search::policy::SearchPolicyV1;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Collection sizes swept by the size-parameterized groups.
pub const SIZES: [usize; 4] = [16, 256, 4096, 65_536];

/// A prepared dataset: a search over shuffled records plus lookup keys.
pub struct Dataset {
    /// Search holding `n` records in shuffled storage order.
    pub search: OrderedSearch,
    /// Sorted key slice, for benchmarking the algorithms without view cost.
    pub sorted_keys: Vec<i64>,
    /// Keys to look up: half present, half absent.
    pub lookups: Vec<i64>,
}

/// Build a dataset of `n` records with even keys `0, 2, ..., 2(n-1)`.
///
/// Storage order is a seeded shuffle so the sorted view has real work to do.
/// Odd lookup keys are guaranteed absent.
#[must_use]
pub fn dataset(n: usize, policy: SearchPolicyV1, seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let sorted_keys: Vec<i64> = (0..n).map(|k| i64::try_from(k).unwrap_or(i64::MAX) * 2).collect();

    let mut shuffled = sorted_keys.clone();
    shuffled.shuffle(&mut rng);
    let collection: CollectionV1 =
        shuffled.iter().map(|k| RecordV1::new(*k, format!("v{k}"))).collect();

    let span = i64::try_from(2 * n.max(1)).unwrap_or(i64::MAX);
    let lookups = (0..64)
        .map(|i| {
            let k = rng.gen_range(0..span);
            if i % 2 == 0 {
                k & !1
            } else {
                k | 1
            }
        })
        .collect();

    Dataset {
        search: OrderedSearch::from_collection(collection, policy),
        sorted_keys,
        lookups,
    }
}

/// A collection of `n` records drawn from `distinct` keys, so each key is
/// duplicated about `n / distinct` times.
#[must_use]
pub fn duplicated(n: usize, distinct: i64, seed: u64) -> CollectionV1 {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| RecordV1::new(rng.gen_range(0..distinct.max(1)), format!("d{i}")))
        .collect()
}
