//! Fixed-length immutable text buffer
//!
//! Layout of `FixedString<N>` (`#[repr(C)]`, N + 1 bytes, alignment 1):
//! - Bytes 0..N: data
//! - Byte N: sentinel, always `0`
//!
//! The sentinel is never part of the logical text: it is not counted by
//! `len`, not reachable through `at`/`Index`, and not compared by equality.
//! It exists so the buffer can be handed out as a C string.
//!
//! Constructors that fix the length are checked in const evaluation, so a
//! literal of the wrong length does not compile:
//!
//! ```compile_fail
//! use cx_string::FixedString;
//!
//! const NAME: FixedString<4> = FixedString::from_text("Test2");
//! assert_eq!(NAME.len(), 4);
//! ```
//!
//! ```compile_fail
//! use cx_string::FixedString;
//!
//! // width must be N + 1
//! let name: FixedString<4> = FixedString::from_bytes_with_nul(b"Tes\0");
//! ```

use std::ffi::CStr;
use std::fmt;
use std::ops::Index;

use cx_core::{
    CxError, CxResult, CAPACITY_MISMATCH_MSG, MISSING_NUL_MSG, OUT_OF_RANGE_MSG,
};

/// Exactly `N` bytes of text followed by a nul sentinel
#[repr(C)]
#[derive(Clone, Copy, Hash)]
pub struct FixedString<const N: usize> {
    bytes: [u8; N],
    nul: u8,
}

impl<const N: usize> FixedString<N> {
    /// Build from exactly `N` characters; the sentinel is appended
    #[inline]
    pub const fn new(bytes: [u8; N]) -> Self {
        FixedString { bytes, nul: 0 }
    }

    /// Build from a `&str` of exactly `N` bytes.
    ///
    /// Panics on a length mismatch; inside const evaluation that panic is a
    /// compile error.
    pub const fn from_text(text: &str) -> Self {
        Self::__from_slices(&[text.as_bytes()])
    }

    /// Build from a nul-terminated literal of width `N + 1`, e.g. `b"Test\0"`.
    ///
    /// The width is checked at compile time. Panics if the last byte is not
    /// the terminator.
    pub const fn from_bytes_with_nul<const W: usize>(text: &[u8; W]) -> Self {
        const { assert!(W == N + 1, "literal width must be N + 1") };
        if text[N] != 0 {
            panic!("{}", MISSING_NUL_MSG);
        }
        let mut bytes = [0u8; N];
        let mut i = 0;
        while i < N {
            bytes[i] = text[i];
            i += 1;
        }
        FixedString::new(bytes)
    }

    pub fn try_from_bytes_with_nul<const W: usize>(text: &[u8; W]) -> CxResult<Self> {
        const { assert!(W == N + 1, "literal width must be N + 1") };
        if text[N] != 0 {
            tracing::debug!(width = W, last = text[N], "literal is not nul-terminated");
            return Err(CxError::MissingNul { width: W });
        }
        Ok(Self::from_bytes_with_nul(text))
    }

    /// Build by copying consecutive slices whose lengths sum to `N`.
    ///
    /// Backs concatenation and `fixed_concat!`; not part of the public API.
    #[doc(hidden)]
    pub const fn __from_slices(parts: &[&[u8]]) -> Self {
        let mut total = 0;
        let mut p = 0;
        while p < parts.len() {
            total += parts[p].len();
            p += 1;
        }
        assert!(total == N, "{}", CAPACITY_MISMATCH_MSG);

        let mut bytes = [0u8; N];
        let mut at = 0;
        let mut p = 0;
        while p < parts.len() {
            let part = parts[p];
            let mut i = 0;
            while i < part.len() {
                bytes[at] = part[i];
                at += 1;
                i += 1;
            }
            p += 1;
        }
        FixedString::new(bytes)
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
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Checked access. Index `N` (the sentinel slot) is rejected like any
    /// other index past the end.
    pub const fn at(&self, index: usize) -> u8 {
        if index >= N {
            panic!("{}", OUT_OF_RANGE_MSG);
        }
        self.bytes[index]
    }

    #[inline]
    pub const fn get(&self, index: usize) -> Option<u8> {
        if index < N {
            Some(self.bytes[index])
        } else {
            None
        }
    }

    pub fn try_at(&self, index: usize) -> CxResult<u8> {
        self.get(index).ok_or_else(|| CxError::out_of_range(index, N))
    }

    /// The `N` data bytes, without the sentinel
    #[inline]
    pub const fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The `N` data bytes followed by the sentinel
    #[allow(unsafe_code)]
    pub const fn as_bytes_with_nul(&self) -> &[u8] {
        debug_assert!(self.nul == 0);
        // SAFETY: `#[repr(C)]` places `bytes` at offset 0 and `nul` at offset N
        // with no padding (every field has alignment 1), so `self` is N + 1
        // initialized bytes that live as long as the borrow.
        unsafe { std::slice::from_raw_parts((self as *const Self).cast::<u8>(), N + 1) }
    }

    /// C string view. Stops at the first nul, so text with interior nul
    /// bytes is truncated.
    pub fn as_c_str(&self) -> &CStr {
        CStr::from_bytes_until_nul(self.as_bytes_with_nul()).unwrap_or_default()
    }

    pub fn as_str(&self) -> CxResult<&str> {
        Ok(std::str::from_utf8(&self.bytes)?)
    }

    /// Owned copy of the text; invalid UTF-8 is replaced with U+FFFD
    pub fn to_owned_string(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    /// Const-evaluable equality with another fixed string
    pub const fn const_eq<const M: usize>(&self, other: &FixedString<M>) -> bool {
        N == M && self.eq_bytes(&other.bytes)
    }

    /// Const-evaluable equality with a `&str`
    pub const fn eq_str(&self, text: &str) -> bool {
        self.eq_bytes(text.as_bytes())
    }

    /// Const-evaluable equality with raw bytes (no terminator)
    pub const fn eq_bytes(&self, other: &[u8]) -> bool {
        if other.len() != N {
            return false;
        }
        let mut i = 0;
        while i < N {
            if self.bytes[i] != other[i] {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl<const N: usize> Index<usize> for FixedString<N> {
    type Output = u8;

    /// Same bounds check as [`at`](FixedString::at): index `N` is rejected.
    #[inline]
    fn index(&self, index: usize) -> &u8 {
        if index >= N {
            panic!("{}", OUT_OF_RANGE_MSG);
        }
        &self.bytes[index]
    }
}

impl<const N: usize> TryFrom<&str> for FixedString<N> {
    type Error = CxError;

    fn try_from(text: &str) -> CxResult<Self> {
        if text.len() != N {
            return Err(CxError::capacity_mismatch(N, text.len()));
        }
        Ok(FixedString::from_text(text))
    }
}

impl<const N: usize> From<[u8; N]> for FixedString<N> {
    fn from(bytes: [u8; N]) -> Self {
        FixedString::new(bytes)
    }
}

impl<const N: usize> From<FixedString<N>> for String {
    fn from(text: FixedString<N>) -> Self {
        text.to_owned_string()
    }
}

impl<const N: usize> AsRef<[u8]> for FixedString<N> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<const N: usize> fmt::Debug for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedString<{}>({:?})", N, String::from_utf8_lossy(&self.bytes))
    }
}

impl<const N: usize> fmt::Display for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}
