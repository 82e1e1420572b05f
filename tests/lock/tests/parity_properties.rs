//! Property tests over seeded generated data.
//!
//! Proves, for every seed:
//! 1. Correctness parity: binary, jump, exponential and ternary search agree
//!    with linear search on found/absent and on the key found
//! 2. Boundary invariant under both count strategies
//! 3. Insertion invariant
//! 4. Rotation invariant over every rotation offset
//! 5. Peak invariant
//! 6. Probe-count bounds for binary and jump search

use lock_tests::generators::{
    probe_keys, random_collection, random_keys, rotate_left, sorted_unique_keys,
};
use ordinal_kernel::carrier::record::RecordV1;
use ordinal_search::bisect;
use ordinal_search::jump::jump_search;
use ordinal_search::ordered::OrderedSearch;
use ordinal_search::peak::peak_index;
use ordinal_search::policy::{CountStrategyV1, PreconditionChecksV1, SearchPolicyV1};
use ordinal_search::probe::{NoProbe, ProbeLog};
use ordinal_search::rotated::search_rotated;

const SEEDS: std::ops::Range<u64> = 0..24;

/// Sizes cover the degenerate lengths and a few block/power boundaries.
const SIZES: [usize; 9] = [0, 1, 2, 3, 8, 9, 17, 64, 101];

fn strict_policy(count_strategy: CountStrategyV1) -> SearchPolicyV1 {
    SearchPolicyV1 {
        count_strategy,
        precondition_checks: PreconditionChecksV1::Always,
    }
}

// ---------------------------------------------------------------------------
// 1. Correctness parity
// ---------------------------------------------------------------------------

#[test]
fn sorted_searches_agree_with_linear_search() {
    for seed in SEEDS {
        for n in SIZES {
            let s = OrderedSearch::from_collection(
                random_collection(seed, n, 12),
                SearchPolicyV1::default(),
            );
            let view = s.sorted_view();
            for key in probe_keys(&s.collection().keys()) {
                let expected = s.linear_search(key).is_some();
                let results = [
                    ("binary", s.binary_search_index(key)),
                    ("jump", s.jump_search(key)),
                    ("exponential", s.exponential_search(key)),
                    ("ternary", s.ternary_search(key)),
                ];
                for (name, found) in results {
                    assert_eq!(found.is_some(), expected, "{name} seed={seed} n={n} key={key}");
                    if let Some(i) = found {
                        assert_eq!(view.as_slice()[i].key, key, "{name} seed={seed} n={n}");
                    }
                }
                assert_eq!(s.binary_search(key).map(|r| r.key), expected.then_some(key));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 2. Boundary invariant
// ---------------------------------------------------------------------------

#[test]
fn boundaries_bracket_every_occurrence() {
    for strategy in [CountStrategyV1::Scan, CountStrategyV1::Boundary] {
        for seed in SEEDS {
            // Span 4 over 60 records guarantees heavy duplication.
            let s = OrderedSearch::from_collection(
                random_collection(seed, 60, 4),
                strict_policy(strategy),
            );
            let view_keys = s.sorted_view().keys();
            for key in -6..=6 {
                let count = s.count_occurrences(key, true);
                assert_eq!(count, s.count_occurrences(key, false), "seed={seed} key={key}");
                match (s.first_occurrence_index(key), s.last_occurrence_index(key)) {
                    (Some(first), Some(last)) => {
                        assert!(first <= last);
                        assert_eq!(last - first + 1, count, "{strategy:?} seed={seed} key={key}");
                        assert!(view_keys[first..=last].iter().all(|k| *k == key));
                        assert!(first == 0 || view_keys[first - 1] < key);
                        assert!(last + 1 == view_keys.len() || view_keys[last + 1] > key);
                        assert_eq!(s.occurrence_bounds(key), Some((first, last)));
                        assert_eq!(s.occurrence_bounds_linear(key), Some((first, last)));
                    }
                    (None, None) => {
                        assert_eq!(count, 0);
                        assert_eq!(s.occurrence_bounds(key), None);
                    }
                    other => panic!("one-sided bounds {other:?} seed={seed} key={key}"),
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 3. Insertion invariant
// ---------------------------------------------------------------------------

#[test]
fn inserting_at_insert_position_keeps_order() {
    for seed in SEEDS {
        for n in SIZES {
            let collection = random_collection(seed, n, 20);
            for key in -22..=22 {
                let mut s = OrderedSearch::from_collection(
                    collection.clone(),
                    SearchPolicyV1::default(),
                );
                let mut keys = s.sorted_view().keys();
                let pos = s.insert_position(key, "probe");
                assert!(pos <= keys.len(), "seed={seed} n={n} key={key} pos={pos}");
                if n > 0 {
                    keys.insert(pos, key);
                    assert!(
                        keys.windows(2).all(|w| w[0] <= w[1]),
                        "seed={seed} n={n} key={key} pos={pos}: {keys:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn insert_position_of_present_key_is_a_match() {
    for seed in SEEDS {
        let keys = sorted_unique_keys(seed, 40);
        for (i, k) in keys.iter().enumerate() {
            assert_eq!(bisect::insert_position(&keys, *k, &mut NoProbe), i);
        }
    }
}

// ---------------------------------------------------------------------------
// 4. Rotation invariant
// ---------------------------------------------------------------------------

#[test]
fn rotated_search_is_rotation_independent() {
    for seed in SEEDS {
        let sorted = sorted_unique_keys(seed, 23);
        let present: std::collections::BTreeSet<i64> = sorted.iter().copied().collect();
        let s = OrderedSearch::with_policy(strict_policy(CountStrategyV1::Scan));
        for r in 0..sorted.len() {
            let rotated = rotate_left(&sorted, r);
            for key in probe_keys(&sorted) {
                let found = s.search_in_rotated_sorted(key, &rotated);
                if present.contains(&key) {
                    let i = found.unwrap_or_else(|| panic!("seed={seed} r={r} missed {key}"));
                    assert_eq!(rotated[i], key);
                } else {
                    assert_eq!(found, None, "seed={seed} r={r} key={key}");
                }
            }
        }
    }
}

#[test]
fn rotated_search_over_small_lengths() {
    for n in 0..6 {
        let sorted: Vec<i64> = (0..n).collect();
        for r in 0..n.max(1) {
            let rotated = rotate_left(&sorted, usize::try_from(r).unwrap());
            for key in -1..=n {
                let found = search_rotated(&rotated, key, &mut NoProbe);
                assert_eq!(found.map(|i| rotated[i]), (0..n).contains(&key).then_some(key));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 5. Peak invariant
// ---------------------------------------------------------------------------

#[test]
fn peak_is_at_least_its_neighbours() {
    for seed in SEEDS {
        for n in SIZES.into_iter().filter(|n| *n > 0) {
            let keys = random_keys(seed, n, -30, 30);
            let i = peak_index(&keys, &mut NoProbe).expect("non-empty");
            assert!(i == 0 || keys[i] >= keys[i - 1], "seed={seed} {keys:?} -> {i}");
            assert!(i + 1 == n || keys[i] >= keys[i + 1], "seed={seed} {keys:?} -> {i}");

            let records: Vec<RecordV1> =
                keys.iter().map(|k| RecordV1::new(*k, String::new())).collect();
            let s = OrderedSearch::from_collection(
                records.into_iter().collect(),
                strict_policy(CountStrategyV1::Scan),
            );
            assert_eq!(s.peak_index(), Some(i));
        }
    }
}

// ---------------------------------------------------------------------------
// 6. Probe bounds
// ---------------------------------------------------------------------------

fn floor_log2_plus_one(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

fn ceil_sqrt(n: usize) -> usize {
    let mut s = 0usize;
    while s * s < n {
        s += 1;
    }
    s
}

#[test]
fn binary_search_probe_bound() {
    for n in 1..300 {
        let keys: Vec<i64> = (0..n).map(|k| i64::try_from(k).unwrap() * 2).collect();
        for key in -1..=i64::try_from(2 * n).unwrap() {
            let mut log = ProbeLog::new();
            bisect::binary_search(&keys, key, &mut log);
            assert!(
                log.len() <= floor_log2_plus_one(n),
                "n={n} key={key} probes={:?}",
                log.indices()
            );
        }
    }
}

#[test]
fn jump_search_probe_bound() {
    for n in 1..300 {
        let keys: Vec<i64> = (0..n).map(|k| i64::try_from(k).unwrap() * 2).collect();
        for key in -1..=i64::try_from(2 * n).unwrap() {
            let mut log = ProbeLog::new();
            jump_search(&keys, key, &mut log);
            assert!(
                log.len() <= 2 * ceil_sqrt(n) + 1,
                "n={n} key={key} probes={}",
                log.len()
            );
        }
    }
}
