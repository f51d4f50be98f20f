//! Ready-made tables.
//!
//! Each function returns a fresh, empty table. Applications that want a
//! shared "default" table build one here and pass it around themselves.

use crate::mux::{Mux, MuxBuilder};
use crate::strategy::{HierarchicalPath, PathTrim, Prefix, RegexMatch, Suffix};

/// Hierarchical path routing.
///
/// Patterns and queries are rooted with [`PathTrim`]. A pattern ending in `/`
/// covers its whole subtree and the longest covering pattern wins.
pub fn path<V>() -> Mux<V> {
    MuxBuilder::new()
        .trim(PathTrim)
        .matcher(HierarchicalPath)
        .build()
}

/// Longest literal prefix wins.
pub fn prefix<V>() -> Mux<V> {
    MuxBuilder::new().matcher(Prefix).build()
}

/// Longest literal suffix wins.
pub fn suffix<V>() -> Mux<V> {
    MuxBuilder::new().matcher(Suffix).build()
}

/// Patterns are regular expressions; the latest registration wins ties.
pub fn regex<V>() -> Mux<V> {
    MuxBuilder::new().matcher(RegexMatch).build()
}
