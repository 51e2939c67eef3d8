//! cx String - Fixed-length immutable text
//!
//! This crate implements the text primitive of cx:
//! - FixedString (N bytes plus a nul sentinel, bounds-checked access)
//! - TextLength (compile-time length of text-like types)
//! - Cross-type equality with length short-circuit
//! - Concatenation with a compile-time checked result length
//! - Literal decomposition (`lit`, `fixed_str!`)
//!
//! ```
//! use cx_string::{fixed_concat, fixed_str, lit, FixedString};
//!
//! const NAME: FixedString<4> = lit(b"Test");
//! const FULL: FixedString<9> = fixed_concat!(NAME, " ", fixed_str!("case"));
//! assert_eq!(FULL, "Test case");
//! ```

pub mod concat;
pub mod string;
pub mod text;

pub use concat::*;
pub use string::*;
pub use text::*;

pub use cx_core::{CxError, CxResult};
