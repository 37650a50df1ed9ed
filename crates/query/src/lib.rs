//! Free-text query handling shared by client-side filtering and highlighting.
//!
//! A query is a string of whitespace-separated terms compared
//! case-insensitively. There is no operator syntax: every term must match.

pub mod pattern;
pub mod terms;

pub use pattern::{PatternError, TermPattern};
pub use terms::Terms;
