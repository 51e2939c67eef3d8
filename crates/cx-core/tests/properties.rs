//! Property-based tests for the fixed containers.
//!
//! Every lookup is checked against a naive reference computed over the same
//! entries as a plain slice.

use std::io;
use std::sync::{Arc, Mutex};

use cx_core::{CxError, FixedArray, FixedMap};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Six entries drawn from a small key space so duplicates are common.
fn entries_strategy() -> impl Strategy<Value = [(u8, i32); 6]> {
    prop::array::uniform6((0u8..4, any::<i32>()))
}

// ============================================================================
// ARRAY PROPERTIES
// ============================================================================

proptest! {
    /// Property: checked access agrees with indexing inside the bounds and
    /// reports the index and length outside them.
    #[test]
    fn prop_at_matches_index(
        values in prop::array::uniform8(any::<i32>()),
        index in 0usize..16,
    ) {
        let array = FixedArray::new(values);

        if index < array.len() {
            prop_assert_eq!(array.at(index), &array[index]);
            prop_assert_eq!(array.try_at(index), Ok(&values[index]));
        } else {
            prop_assert_eq!(array.try_at(index), Err(CxError::OutOfRange { index, len: 8 }));
            prop_assert!(array.get(index).is_none());
        }
    }

    /// Property: equality of fixed arrays is equality of their elements.
    #[test]
    fn prop_equality_is_elementwise(
        lhs in prop::array::uniform4(0u8..3),
        rhs in prop::array::uniform4(0u8..3),
    ) {
        let (a, b) = (FixedArray::new(lhs), FixedArray::new(rhs));
        prop_assert_eq!(a == b, lhs == rhs);
        prop_assert_eq!(a.const_eq(&b), lhs == rhs);
    }

    /// Property: slice construction succeeds exactly when the length matches.
    #[test]
    fn prop_slice_construction_checks_length(
        values in prop::collection::vec(any::<u16>(), 0..10),
    ) {
        let result = FixedArray::<u16, 5>::try_from_slice(&values);

        if values.len() == 5 {
            let array = result.unwrap();
            prop_assert_eq!(array.as_slice(), values.as_slice());
        } else {
            prop_assert_eq!(
                result.unwrap_err(),
                CxError::CapacityMismatch { expected: 5, actual: values.len() }
            );
        }
    }
}

// ============================================================================
// MAP PROPERTIES
// ============================================================================

proptest! {
    /// Property: lookup returns the value of the first matching entry.
    #[test]
    fn prop_lookup_is_first_match(entries in entries_strategy(), key in 0u8..5) {
        let map = FixedMap::from_pairs(entries);
        let expected = entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v);

        prop_assert_eq!(map.get(&key), expected);
        prop_assert_eq!(map.const_get(key), expected);
        match expected {
            Some(value) => {
                prop_assert_eq!(map.try_at(&key), Ok(value));
            }
            None => {
                prop_assert_eq!(map.try_at(&key), Err(CxError::NotFound));
            }
        }
    }

    /// Property: count sees every duplicate, and counts over the whole key
    /// space add up to N.
    #[test]
    fn prop_count_matches_naive(entries in entries_strategy()) {
        let map = FixedMap::from_pairs(entries);

        let mut total = 0;
        for key in 0u8..5 {
            let expected = entries.iter().filter(|(k, _)| *k == key).count();
            prop_assert_eq!(map.count(&key), expected);
            prop_assert_eq!(map.const_count(key), expected);
            prop_assert_eq!(map.contains_key(&key), expected > 0);
            total += expected;
        }
        prop_assert_eq!(total, map.size());
    }

    /// Property: iteration preserves insertion order.
    #[test]
    fn prop_iteration_in_insertion_order(entries in entries_strategy()) {
        let map = FixedMap::from_pairs(entries);
        let seen: Vec<(u8, i32)> = map.iter().map(|entry| (entry.first, entry.second)).collect();
        prop_assert_eq!(seen, entries.to_vec());
    }

    /// Property: runtime construction rejects any other entry count.
    #[test]
    fn prop_vec_construction_checks_length(
        entries in prop::collection::vec((any::<u8>(), any::<u8>()), 0..10),
    ) {
        let len = entries.len();
        let result = FixedMap::<u8, u8, 6>::try_from(entries);
        prop_assert_eq!(result.is_ok(), len == 6);
        if let Err(err) = result {
            prop_assert_eq!(err, CxError::CapacityMismatch { expected: 6, actual: len });
        }
    }
}

// ============================================================================
// DIAGNOSTICS
// ============================================================================

/// Shared buffer the test subscriber writes formatted events into.
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter("cx_core=debug")
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    log.contents()
}

#[test]
fn test_capacity_mismatch_emits_one_event() {
    let output = capture(|| {
        assert!(FixedArray::<u8, 2>::try_from_slice(&[1]).is_err());
    });
    assert_eq!(output.lines().count(), 1);
    assert!(output.contains("DEBUG"));
    assert!(output.contains("expected=2 actual=1"));

    let output = capture(|| {
        assert!(FixedMap::<u8, u8, 3>::try_from(vec![(1, 1)]).is_err());
    });
    assert_eq!(output.lines().count(), 1);
    assert!(output.contains("expected=3 actual=1"));
}

#[test]
fn test_lookup_failures_emit_one_event_each() {
    let map: FixedMap<u8, &str, 1> = FixedMap::from_pairs([(1, "one")]);

    let output = capture(|| {
        assert_eq!(map.try_at(&2), Err(CxError::NotFound));
    });
    assert_eq!(output.matches("lookup matched no entry").count(), 1);
    assert!(output.contains("len=1"));

    let output = capture(|| {
        assert!(map.entries().try_at(4).is_err());
    });
    assert_eq!(output.lines().count(), 1);
    assert!(output.contains("index=4 len=1"));
}

#[test]
fn test_successful_lookups_are_silent() {
    let map: FixedMap<u8, &str, 1> = FixedMap::from_pairs([(1, "one")]);
    let output = capture(|| {
        assert_eq!(map.try_at(&1), Ok(&"one"));
        assert!(FixedArray::<u8, 1>::try_from_slice(&[1]).is_ok());
    });
    assert!(output.is_empty());
}
