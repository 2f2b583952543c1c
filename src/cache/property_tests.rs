//! Cache Store Properties
//!
//! Uses proptest to check the store's counters, capacity bound and
//! compare-and-set versioning across arbitrary operation sequences.

use proptest::prelude::*;

use crate::cache::CacheStore;

const CAPACITY: usize = 100;

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,16}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,64}"
}

#[derive(Debug, Clone)]
enum Op {
    Set { key: String, value: String },
    Get { key: String },
    Cas { key: String, version: u64, value: String },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (key_strategy(), value_strategy())
            .prop_map(|(key, value)| Op::Set { key, value }),
        key_strategy().prop_map(|key| Op::Get { key }),
        (key_strategy(), 0u64..20, value_strategy())
            .prop_map(|(key, version, value)| Op::Cas { key, version, value }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Hits and misses reported by the store match what the reads observed.
    #[test]
    fn prop_read_counters_match_observed(ops in prop::collection::vec(op_strategy(), 1..50)) {
        let mut store = CacheStore::new(CAPACITY, None);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                Op::Set { key, value } => {
                    let _ = store.set(&key, value, None);
                }
                Op::Get { key } => match store.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                Op::Cas { key, version, value } => {
                    let _ = store.compare_and_set(&key, version, value);
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "hits");
        prop_assert_eq!(stats.misses, expected_misses, "misses");
        prop_assert_eq!(stats.total_entries, store.len(), "total_entries");
    }

    // The number of keys never exceeds the configured capacity.
    #[test]
    fn prop_never_exceeds_capacity(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..200)
    ) {
        let max_entries = 20;
        let mut store = CacheStore::new(max_entries, None);

        for (key, value) in entries {
            let _ = store.set(&key, value, None);
            prop_assert!(store.len() <= max_entries);
        }
    }

    // Of several writers racing from the same read, exactly one wins.
    #[test]
    fn prop_single_cas_winner_per_version(
        key in key_strategy(),
        values in prop::collection::vec(value_strategy(), 2..10)
    ) {
        let mut store = CacheStore::new(CAPACITY, None);
        let version = store.set(&key, "seed".to_string(), None).unwrap();

        let winners = values
            .iter()
            .filter(|value| {
                store
                    .compare_and_set(&key, version, (*value).clone())
                    .unwrap()
                    .is_some()
            })
            .count();

        prop_assert_eq!(winners, 1);
        prop_assert_eq!(store.get(&key).unwrap().value, values[0].clone());
        prop_assert_eq!(store.stats().cas_conflicts, (values.len() - 1) as u64);
    }

    // Versions strictly increase across writes to any key.
    #[test]
    fn prop_versions_increase(
        writes in prop::collection::vec((key_strategy(), value_strategy()), 1..50)
    ) {
        let mut store = CacheStore::new(CAPACITY, None);
        let mut last = 0u64;

        for (key, value) in writes {
            let version = store.set(&key, value, None).unwrap();
            prop_assert!(version > last);
            last = version;
        }
    }
}
