//! Concatenation and literal decomposition
//!
//! The result length `O` of a concatenation is a const parameter checked
//! against the operand lengths when the call is compiled, so it is usually
//! written once on the binding and inferred from there:
//!
//! ```
//! use cx_string::{lit, FixedString};
//!
//! const TEST: FixedString<4> = lit(b"Test");
//! const TWICE: FixedString<8> = TEST.concat(&TEST);
//! assert_eq!(TWICE, "TestTest");
//! ```
//!
//! A wrong `O` does not compile, even when the call happens at run time:
//!
//! ```compile_fail
//! use cx_string::{lit, FixedString};
//!
//! let test = lit(b"Test");
//! let twice: FixedString<7> = test.concat(&test);
//! ```
//!
//! Stable Rust cannot name `FixedString<{N + M}>` in a signature, which is
//! why there is no `+` operator; [`fixed_concat!`](crate::fixed_concat)
//! infers the length for constant operands instead.

use crate::{FixedString, TextLength};

impl<const N: usize> FixedString<N> {
    /// Append another fixed string
    pub const fn concat<const M: usize, const O: usize>(
        &self,
        rhs: &FixedString<M>,
    ) -> FixedString<O> {
        const { assert!(O == N + M, "O must be the sum of operand lengths") };
        FixedString::__from_slices(&[self.as_bytes(), rhs.as_bytes()])
    }

    /// Append a byte-string literal
    pub const fn concat_bytes<const M: usize, const O: usize>(
        &self,
        rhs: &[u8; M],
    ) -> FixedString<O> {
        const { assert!(O == N + M, "O must be the sum of operand lengths") };
        FixedString::__from_slices(&[self.as_bytes(), rhs.as_slice()])
    }

    /// Append a `&str`. Its length is only known at run time, so a mismatch
    /// panics (and fails the build inside const evaluation).
    pub const fn concat_str<const O: usize>(&self, rhs: &str) -> FixedString<O> {
        FixedString::__from_slices(&[self.as_bytes(), rhs.as_bytes()])
    }
}

/// Concatenate any two text-like values
pub fn concat<L: TextLength, R: TextLength, const O: usize>(lhs: &L, rhs: &R) -> FixedString<O> {
    const { assert!(O == L::LEN + R::LEN, "O must be the sum of operand lengths") };
    FixedString::__from_slices(&[lhs.text_bytes(), rhs.text_bytes()])
}

/// Fixed string from a byte-string literal, e.g. `lit(b"Test")`
#[inline]
pub const fn lit<const N: usize>(text: &[u8; N]) -> FixedString<N> {
    FixedString::new(*text)
}

/// Fixed string from a `&str` literal, with the length taken from the literal
#[macro_export]
macro_rules! fixed_str {
    ($text:expr) => {
        $crate::FixedString::<{ $text.len() }>::from_text($text)
    };
}

/// Concatenate constant `FixedString` and `&str` operands, inferring the
/// result length
#[macro_export]
macro_rules! fixed_concat {
    ($($part:expr),+ $(,)?) => {{
        const LEN: usize = 0 $(+ $part.len())+;
        $crate::FixedString::<LEN>::__from_slices(&[$($part.as_bytes()),+])
    }};
}
