//! Deterministic JSON serialization for the local storage file.
//!
//! Keys are sorted (via `BTreeMap`), indentation is two spaces and the
//! output ends with a newline, so the file stays readable when inspected.

mod json;

pub use json::*;
