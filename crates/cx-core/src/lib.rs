//! cx Core - Fixed-capacity containers built before execution
//!
//! This crate defines the immutable container primitives of cx:
//! - Pair (two independently typed fields)
//! - FixedArray (exactly N values of one type)
//! - FixedMap (N key/value pairs, linear-scan lookup, duplicates allowed)
//! - Error taxonomy shared with `cx-string`
//!
//! Every constructor and checked accessor that can be is a `const fn`. Used
//! in a `const` item, a wrong entry count, an index past the end or a missing
//! key fails the build; used at run time the same mistake panics, and the
//! `try_*` variants return a [`CxError`] instead.

pub mod array;
pub mod error;
pub mod map;
pub mod pair;

pub use array::*;
pub use error::*;
pub use map::*;
pub use pair::*;
