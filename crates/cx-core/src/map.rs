//! Fixed-size key/value table with linear-scan lookup
//!
//! `FixedMap<K, V, N>` is an ordered list of `N` [`Pair`]s stored in a
//! [`FixedArray`]. Lookups walk the entries in insertion order and the first
//! matching key wins. Keys need not be unique; [`FixedMap::count`] reports
//! how many entries share a key.
//!
//! The entry count is part of the type, so a table literal with the wrong
//! number of entries does not compile:
//!
//! ```compile_fail
//! use cx_core::{fixed_map, FixedMap};
//!
//! const NAMES: FixedMap<u8, &str, 3> = fixed_map! {
//!     1 => "one",
//!     2 => "two",
//! };
//! ```
//!
//! Lookups on integer, `char`, `bool` and `&str` keys have `const`
//! counterparts. A missing key inside const evaluation fails the build:
//!
//! ```compile_fail
//! use cx_core::{fixed_map, FixedMap};
//!
//! const NAMES: FixedMap<u8, &str, 2> = fixed_map! {
//!     1 => "one",
//!     2 => "two",
//! };
//! const THREE: &str = *NAMES.const_at(3);
//! assert_eq!(THREE, "three");
//! ```

use std::ops::Index;

use crate::{CxError, CxResult, FixedArray, Pair, NOT_FOUND_MSG};

/// An ordered table of `N` key/value entries
#[derive(Clone, Copy, Debug, Hash)]
pub struct FixedMap<K, V, const N: usize> {
    entries: FixedArray<Pair<K, V>, N>,
}

impl<K, V, const N: usize> FixedMap<K, V, N> {
    /// Build from exactly `N` entries
    #[inline]
    pub const fn new(entries: [Pair<K, V>; N]) -> Self {
        FixedMap {
            entries: FixedArray::new(entries),
        }
    }

    /// Build from exactly `N` `(key, value)` tuples
    pub fn from_pairs(pairs: [(K, V); N]) -> Self {
        FixedMap::new(pairs.map(Pair::from))
    }

    /// Build from a slice, failing unless it holds exactly `N` entries
    pub fn try_from_slice(entries: &[(K, V)]) -> CxResult<Self>
    where
        K: Clone,
        V: Clone,
    {
        if entries.len() != N {
            return Err(CxError::capacity_mismatch(N, entries.len()));
        }
        let pairs: Vec<Pair<K, V>> = entries.iter().cloned().map(Pair::from).collect();
        Ok(FixedMap {
            entries: FixedArray::try_from(pairs)?,
        })
    }

    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    #[inline]
    pub const fn max_size(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    #[inline]
    pub const fn empty(&self) -> bool {
        self.is_empty()
    }

    /// Backing storage, in insertion order
    #[inline]
    pub const fn entries(&self) -> &FixedArray<Pair<K, V>, N> {
        &self.entries
    }

    /// Iterate entries in insertion order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Pair<K, V>> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.entries.iter().map(|entry| &entry.first)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.entries.iter().map(|entry| &entry.second)
    }
}

impl<K: PartialEq, V, const N: usize> FixedMap<K, V, N> {
    /// Value of the first entry whose key equals `key`
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .iter()
            .find(|entry| entry.first == *key)
            .map(|entry| &entry.second)
    }

    /// Value of the first entry whose key equals `key`.
    ///
    /// Panics if no entry matches.
    pub fn at(&self, key: &K) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("{}", NOT_FOUND_MSG),
        }
    }

    pub fn try_at(&self, key: &K) -> CxResult<&V> {
        self.get(key).ok_or_else(|| CxError::not_found(N))
    }

    /// Number of entries whose key compares equal to `key` (0..=N).
    ///
    /// `key` may be of any type `K` can be compared with, e.g. `&str` for
    /// `String` keys.
    pub fn count<Q: ?Sized>(&self, key: &Q) -> usize
    where
        K: PartialEq<Q>,
    {
        self.entries.iter().filter(|entry| entry.first == *key).count()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

macro_rules! impl_const_lookup {
    ($($k:ty),* $(,)?) => {
        $(
            impl<V, const N: usize> FixedMap<$k, V, N> {
                /// Const-evaluable [`get`](Self::get)
                pub const fn const_get(&self, key: $k) -> Option<&V> {
                    let entries = self.entries.as_array();
                    let mut i = 0;
                    while i < N {
                        if entries[i].first == key {
                            return Some(&entries[i].second);
                        }
                        i += 1;
                    }
                    None
                }

                /// Const-evaluable [`at`](Self::at); a miss during const
                /// evaluation is a compile error
                pub const fn const_at(&self, key: $k) -> &V {
                    match self.const_get(key) {
                        Some(value) => value,
                        None => panic!("{}", NOT_FOUND_MSG),
                    }
                }

                pub const fn const_count(&self, key: $k) -> usize {
                    let entries = self.entries.as_array();
                    let mut count = 0;
                    let mut i = 0;
                    while i < N {
                        if entries[i].first == key {
                            count += 1;
                        }
                        i += 1;
                    }
                    count
                }

                pub const fn const_contains_key(&self, key: $k) -> bool {
                    self.const_get(key).is_some()
                }
            }
        )*
    };
}

impl_const_lookup!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool);

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

impl<V, const N: usize> FixedMap<&'static str, V, N> {
    pub const fn const_get(&self, key: &str) -> Option<&V> {
        let entries = self.entries.as_array();
        let mut i = 0;
        while i < N {
            if str_eq(entries[i].first, key) {
                return Some(&entries[i].second);
            }
            i += 1;
        }
        None
    }

    pub const fn const_at(&self, key: &str) -> &V {
        match self.const_get(key) {
            Some(value) => value,
            None => panic!("{}", NOT_FOUND_MSG),
        }
    }

    pub const fn const_count(&self, key: &str) -> usize {
        let entries = self.entries.as_array();
        let mut count = 0;
        let mut i = 0;
        while i < N {
            if str_eq(entries[i].first, key) {
                count += 1;
            }
            i += 1;
        }
        count
    }

    pub const fn const_contains_key(&self, key: &str) -> bool {
        self.const_get(key).is_some()
    }
}

impl<K: PartialEq, V, const N: usize> Index<&K> for FixedMap<K, V, N> {
    type Output = V;

    fn index(&self, key: &K) -> &V {
        self.at(key)
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for FixedMap<K, V, N> {
    fn from(pairs: [(K, V); N]) -> Self {
        FixedMap::from_pairs(pairs)
    }
}

impl<K, V, const N: usize> TryFrom<Vec<(K, V)>> for FixedMap<K, V, N> {
    type Error = CxError;

    fn try_from(pairs: Vec<(K, V)>) -> CxResult<Self> {
        let pairs: Vec<Pair<K, V>> = pairs.into_iter().map(Pair::from).collect();
        Ok(FixedMap {
            entries: FixedArray::try_from(pairs)?,
        })
    }
}

impl<'a, K, V, const N: usize> IntoIterator for &'a FixedMap<K, V, N> {
    type Item = &'a Pair<K, V>;
    type IntoIter = std::slice::Iter<'a, Pair<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Build a [`FixedMap`] from `key => value` entries, in order
#[macro_export]
macro_rules! fixed_map {
    ($($key:expr => $value:expr),* $(,)?) => {
        $crate::FixedMap::new([$($crate::Pair::new($key, $value)),*])
    };
}
