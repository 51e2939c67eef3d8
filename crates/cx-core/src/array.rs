//! Fixed-length immutable sequence
//!
//! `FixedArray<T, N>` holds exactly `N` values supplied in one aggregate
//! step. There is no way to replace an element after construction: no
//! `IndexMut`, no `DerefMut`, no `iter_mut`.
//!
//! The checked accessors are `const fn`, so an out-of-range index used while
//! evaluating a `const` item fails the build:
//!
//! ```compile_fail
//! use cx_core::FixedArray;
//!
//! const A: FixedArray<i32, 2> = FixedArray::new([1, 2]);
//! const E: i32 = *A.at(5);
//! assert_eq!(E, 1);
//! ```
//!
//! `front` and `back` require `N > 0`; calling them on an empty array does
//! not compile:
//!
//! ```compile_fail
//! use cx_core::FixedArray;
//!
//! let a: FixedArray<i32, 0> = FixedArray::new([]);
//! let _ = a.back();
//! ```

use std::ops::{Deref, Index};

use crate::{CxError, CxResult, OUT_OF_RANGE_MSG};

/// An ordered sequence of exactly `N` values of type `T`
#[derive(Clone, Copy, Debug, Hash)]
pub struct FixedArray<T, const N: usize> {
    elems: [T; N],
}

impl<T, const N: usize> FixedArray<T, N> {
    /// Build from exactly `N` values
    #[inline]
    pub const fn new(elems: [T; N]) -> Self {
        FixedArray { elems }
    }

    /// Build from a slice, failing unless it holds exactly `N` values
    pub fn try_from_slice(slice: &[T]) -> CxResult<Self>
    where
        T: Clone,
    {
        let elems: &[T; N] = slice
            .try_into()
            .map_err(|_| CxError::capacity_mismatch(N, slice.len()))?;
        Ok(FixedArray::new(elems.clone()))
    }

    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Same as [`len`](Self::len); capacity and length coincide
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

    /// Checked access. Panics if `index >= N`; inside const evaluation that
    /// panic is a compile error.
    pub const fn at(&self, index: usize) -> &T {
        if index >= N {
            panic!("{}", OUT_OF_RANGE_MSG);
        }
        &self.elems[index]
    }

    #[inline]
    pub const fn get(&self, index: usize) -> Option<&T> {
        if index < N {
            Some(&self.elems[index])
        } else {
            None
        }
    }

    pub fn try_at(&self, index: usize) -> CxResult<&T> {
        self.get(index).ok_or_else(|| CxError::out_of_range(index, N))
    }

    /// Access without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`.
    #[allow(unsafe_code)]
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: the caller guarantees index < N.
        unsafe { self.elems.get_unchecked(index) }
    }

    /// First element. Requires `N > 0`.
    #[inline]
    pub const fn front(&self) -> &T {
        const { assert!(N > 0, "FixedArray::front on an empty array") };
        &self.elems[0]
    }

    /// Last element. Requires `N > 0`.
    #[inline]
    pub const fn back(&self) -> &T {
        const { assert!(N > 0, "FixedArray::back on an empty array") };
        &self.elems[N - 1]
    }

    /// Contiguous read-only view of the elements
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.elems
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.elems
    }

    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.elems.as_ptr()
    }

    /// Iterate in order; `.rev()` walks back to front
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elems.iter()
    }

    #[inline]
    pub fn into_inner(self) -> [T; N] {
        self.elems
    }
}

macro_rules! impl_const_eq {
    ($($t:ty),* $(,)?) => {
        $(
            impl<const N: usize> FixedArray<$t, N> {
                /// Element-wise equality usable in const contexts
                pub const fn const_eq(&self, other: &Self) -> bool {
                    let mut i = 0;
                    while i < N {
                        if self.elems[i] != other.elems[i] {
                            return false;
                        }
                        i += 1;
                    }
                    true
                }
            }
        )*
    };
}

impl_const_eq!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool);

impl<T: PartialEq, const N: usize> PartialEq for FixedArray<T, N> {
    /// Stops at the first mismatching index
    fn eq(&self, other: &Self) -> bool {
        for i in 0..N {
            if self.elems[i] != other.elems[i] {
                return false;
            }
        }
        true
    }
}

impl<T: Eq, const N: usize> Eq for FixedArray<T, N> {}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(elems: [T; N]) -> Self {
        FixedArray::new(elems)
    }
}

impl<T, const N: usize> TryFrom<Vec<T>> for FixedArray<T, N> {
    type Error = CxError;

    fn try_from(vec: Vec<T>) -> CxResult<Self> {
        let actual = vec.len();
        let elems: [T; N] = vec
            .try_into()
            .map_err(|_| CxError::capacity_mismatch(N, actual))?;
        Ok(FixedArray::new(elems))
    }
}

impl<T, const N: usize> Index<usize> for FixedArray<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.elems[index]
    }
}

impl<T, const N: usize> Deref for FixedArray<T, N> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.elems
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedArray<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.elems
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.iter()
    }
}

impl<T, const N: usize> IntoIterator for FixedArray<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.into_iter()
    }
}

/// Build a [`FixedArray`] whose length is the number of listed values
#[macro_export]
macro_rules! fixed_array {
    ($($elem:expr),* $(,)?) => {
        $crate::FixedArray::new([$($elem),*])
    };
    ($elem:expr; $n:expr) => {
        $crate::FixedArray::new([$elem; $n])
    };
}
