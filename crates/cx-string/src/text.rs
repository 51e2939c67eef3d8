//! Text-like types with a length known at compile time
//!
//! [`TextLength`] is what lets equality and concatenation mix fixed strings
//! and byte-string literals without passing a length around. Rust byte
//! literals carry no terminator, so `b"Test"` has length 4, the same as
//! `FixedString<4>`.

use crate::FixedString;

/// A text-like type whose logical length is part of its type.
///
/// `text_bytes` must return exactly `LEN` bytes. An implementation that
/// does not compares unequal to everything and panics when concatenated.
pub trait TextLength {
    /// Logical length in bytes, excluding any terminator
    const LEN: usize;

    /// The `LEN` data bytes
    fn text_bytes(&self) -> &[u8];

    #[inline]
    fn text_len(&self) -> usize {
        Self::LEN
    }
}

impl<const N: usize> TextLength for FixedString<N> {
    const LEN: usize = N;

    #[inline]
    fn text_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<const W: usize> TextLength for [u8; W] {
    const LEN: usize = W;

    #[inline]
    fn text_bytes(&self) -> &[u8] {
        self
    }
}

impl<T: TextLength> TextLength for &T {
    const LEN: usize = T::LEN;

    #[inline]
    fn text_bytes(&self) -> &[u8] {
        (**self).text_bytes()
    }
}

/// Compare two text-like values.
///
/// Different lengths are unequal without looking at any byte; otherwise
/// bytes are compared in order up to the first mismatch.
pub fn text_eq<L: TextLength, R: TextLength>(lhs: &L, rhs: &R) -> bool {
    if L::LEN != R::LEN {
        return false;
    }
    let (lhs, rhs) = (lhs.text_bytes(), rhs.text_bytes());
    if lhs.len() != L::LEN || rhs.len() != R::LEN {
        return false;
    }
    lhs.iter().zip(rhs).all(|(a, b)| a == b)
}

impl<const N: usize, const M: usize> PartialEq<FixedString<M>> for FixedString<N> {
    fn eq(&self, other: &FixedString<M>) -> bool {
        text_eq(self, other)
    }
}

impl<const N: usize> Eq for FixedString<N> {}

impl<const N: usize, const M: usize> PartialEq<[u8; M]> for FixedString<N> {
    fn eq(&self, other: &[u8; M]) -> bool {
        text_eq(self, other)
    }
}

impl<const N: usize, const M: usize> PartialEq<&[u8; M]> for FixedString<N> {
    fn eq(&self, other: &&[u8; M]) -> bool {
        text_eq(self, *other)
    }
}

impl<const N: usize, const M: usize> PartialEq<FixedString<N>> for [u8; M] {
    fn eq(&self, other: &FixedString<N>) -> bool {
        text_eq(self, other)
    }
}

impl<const N: usize> PartialEq<str> for FixedString<N> {
    fn eq(&self, other: &str) -> bool {
        self.eq_str(other)
    }
}

impl<const N: usize> PartialEq<&str> for FixedString<N> {
    fn eq(&self, other: &&str) -> bool {
        self.eq_str(other)
    }
}

impl<const N: usize> PartialEq<FixedString<N>> for str {
    fn eq(&self, other: &FixedString<N>) -> bool {
        other.eq_str(self)
    }
}

impl<const N: usize> PartialEq<FixedString<N>> for &str {
    fn eq(&self, other: &FixedString<N>) -> bool {
        other.eq_str(self)
    }
}
