//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store's expiry, capacity and statistics rules.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use chrono::{DateTime, Utc};
use proptest::prelude::*;

use crate::cache::CacheStore;

// == Test Configuration ==
const TEST_MAX_ENTRIES: usize = 50;
const TTL: Duration = Duration::from_secs(30 * 60);

fn epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(1_724_680_800, 0).unwrap()
}

// == Strategies ==
/// Postal-code shaped keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[0-9]{5}(-[0-9]{4})?"
}

#[derive(Debug, Clone)]
enum CacheOp {
    Write { key: String, value: u32 },
    Read { key: String },
    /// Advance the clock by this many seconds
    Wait { secs: u64 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), any::<u32>()).prop_map(|(key, value)| CacheOp::Write { key, value }),
        key_strategy().prop_map(|key| CacheOp::Read { key }),
        (0u64..1200).prop_map(|secs| CacheOp::Wait { secs }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A read within the TTL returns exactly the value written.
    #[test]
    fn prop_read_within_ttl_returns_written(
        key in key_strategy(),
        value in any::<u32>(),
        elapsed in 0i64..1800,
    ) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES);
        store.set(&key, value, TTL, epoch()).unwrap();

        let now = epoch() + chrono::Duration::seconds(elapsed);
        prop_assert_eq!(store.get(&key, now), Some(value));
    }

    // A read at or after the TTL is a miss.
    #[test]
    fn prop_read_after_ttl_misses(
        key in key_strategy(),
        value in any::<u32>(),
        elapsed in 1800i64..100_000,
    ) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES);
        store.set(&key, value, TTL, epoch()).unwrap();

        let now = epoch() + chrono::Duration::seconds(elapsed);
        prop_assert_eq!(store.get(&key, now), None);
    }

    // The store never holds more than its capacity.
    #[test]
    fn prop_capacity_enforcement(keys in prop::collection::vec(key_strategy(), 1..200)) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES);
        for key in &keys {
            store.set(key, 0u32, TTL, epoch()).unwrap();
        }

        let distinct: HashSet<&String> = keys.iter().collect();
        prop_assert_eq!(store.len(), distinct.len().min(TEST_MAX_ENTRIES));
    }

    // Reads match an independent model of TTL expiry, and the counters match
    // the model's hits and misses.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        // Large enough that no entry is evicted for capacity.
        let mut store = CacheStore::new(100);
        let mut model: HashMap<String, (u32, DateTime<Utc>)> = HashMap::new();
        let mut now = epoch();
        let mut expected_hits = 0u64;
        let mut expected_misses = 0u64;

        for op in ops {
            match op {
                CacheOp::Write { key, value } => {
                    store.set(&key, value, TTL, now).unwrap();
                    let expires_at = now + chrono::Duration::seconds(TTL.as_secs() as i64);
                    model.insert(key, (value, expires_at));
                }
                CacheOp::Read { key } => {
                    let expected = match model.get(&key) {
                        Some(&(value, expires_at)) if now < expires_at => Some(value),
                        Some(_) => {
                            model.remove(&key);
                            None
                        }
                        None => None,
                    };
                    match expected {
                        Some(_) => expected_hits += 1,
                        None => expected_misses += 1,
                    }
                    prop_assert_eq!(store.get(&key, now), expected);
                }
                CacheOp::Wait { secs } => {
                    now += chrono::Duration::seconds(secs as i64);
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.total_entries, model.len());
    }

    // A later write always wins over an earlier one.
    #[test]
    fn prop_overwrite_semantics(key in key_strategy(), first in any::<u32>(), second in any::<u32>()) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES);
        store.set(&key, first, TTL, epoch()).unwrap();
        store.set(&key, second, TTL, epoch()).unwrap();

        prop_assert_eq!(store.get(&key, epoch()), Some(second));
        prop_assert_eq!(store.len(), 1);
    }
}
