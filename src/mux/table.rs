//! The dispatch table.
//!
//! # Responsibilities
//! - Store normalized pattern → entry bindings
//! - Assign registration order from a monotonic counter
//! - Run a lookup by scoring every stored pattern
//!
//! # Design Decisions
//! - One `RwLock` guards the map and the counter together
//! - Patterns are trimmed before the lock is taken, queries too
//! - Strategies run under the read lock and must not re-enter the table
//! - O(n) scan per lookup; the matcher is opaque so there is no index

use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::observability::metrics;
use crate::strategy::{Identity, MatchError, Matcher, Score, Strict, Trim};

/// Metrics label of tables that were never given one.
pub const DEFAULT_LABEL: &str = "default";

/// A single binding.
#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    /// Assigned at first insertion, kept across value replacement.
    order: u64,
}

#[derive(Debug)]
struct Bindings<V> {
    entries: HashMap<String, Entry<V>>,
    next_order: u64,
}

impl<V> Bindings<V> {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
            next_order: 0,
        }
    }

    /// Insert or replace. Returns the replaced value, if any.
    fn insert(&mut self, pattern: String, value: V) -> Option<V> {
        if let Some(entry) = self.entries.get_mut(&pattern) {
            tracing::debug!(pattern = %pattern, order = entry.order, "Pattern rebound");
            return Some(std::mem::replace(&mut entry.value, value));
        }

        let order = self.next_order;
        self.next_order += 1;
        tracing::debug!(pattern = %pattern, order, "Pattern bound");
        self.entries.insert(pattern, Entry { value, order });
        None
    }
}

/// A matching binding returned by a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit<V> {
    /// The bound value.
    pub value: V,
    /// The stored (normalized) pattern.
    pub pattern: String,
    /// Score assigned by the matcher.
    pub score: Score,
}

/// Registry mapping string patterns to values, queried for the best match.
///
/// All methods take `&self`; share the table with `Arc<Mux<V>>`.
/// The label tags this table's metrics so several tables can share a recorder.
#[derive(Debug)]
pub struct Mux<V> {
    label: String,
    pattern_trim: Box<dyn Trim>,
    query_trim: Box<dyn Trim>,
    matcher: Box<dyn Matcher>,
    bindings: RwLock<Bindings<V>>,
}

impl<V> Mux<V> {
    /// Create a table with identity trims and the `Strict` matcher.
    pub fn new() -> Self {
        Self::with_strategies(Box::new(Identity), Box::new(Identity), Box::new(Strict))
    }

    /// Create a table from an explicit strategy triple.
    pub fn with_strategies(
        pattern_trim: Box<dyn Trim>,
        query_trim: Box<dyn Trim>,
        matcher: Box<dyn Matcher>,
    ) -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            pattern_trim,
            query_trim,
            matcher,
            bindings: RwLock::new(Bindings::new()),
        }
    }

    /// Set the `table` label reported with this table's metrics.
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    fn read(&self) -> RwLockReadGuard<'_, Bindings<V>> {
        self.bindings.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Bindings<V>> {
        self.bindings.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Bind `pattern` to `value`.
    ///
    /// Re-binding an existing (normalized) pattern replaces its value in place
    /// and keeps its registration order. Returns the replaced value.
    pub fn bind(&self, pattern: &str, value: V) -> Option<V> {
        let key = self.pattern_trim.trim(pattern).into_owned();
        let mut bindings = self.write();
        let previous = bindings.insert(key, value);
        metrics::record_bindings(&self.label, bindings.entries.len());
        previous
    }

    /// Remove the binding for `pattern`. Absent patterns are a no-op.
    pub fn unbind(&self, pattern: &str) -> Option<V> {
        let key = self.pattern_trim.trim(pattern);
        let mut bindings = self.write();
        let removed = bindings.entries.remove(key.as_ref()).map(|entry| entry.value);
        if removed.is_some() {
            tracing::debug!(pattern = %key, "Pattern unbound");
            metrics::record_bindings(&self.label, bindings.entries.len());
        }
        removed
    }

    /// Replace the whole binding set in one write.
    ///
    /// Patterns present before and after keep their registration order,
    /// new patterns get fresh orders in iteration order, the rest are removed.
    /// Lookups observe either the old set or the new one.
    pub fn replace_bindings<I, P>(&self, bindings: I)
    where
        I: IntoIterator<Item = (P, V)>,
        P: AsRef<str>,
    {
        let incoming: Vec<(String, V)> = bindings
            .into_iter()
            .map(|(pattern, value)| (self.pattern_trim.trim(pattern.as_ref()).into_owned(), value))
            .collect();

        let keep: HashSet<&str> = incoming.iter().map(|(p, _)| p.as_str()).collect();

        let mut current = self.write();
        let before = current.entries.len();
        current.entries.retain(|pattern, _| keep.contains(pattern.as_str()));
        let removed = before - current.entries.len();
        for (pattern, value) in incoming {
            current.insert(pattern, value);
        }

        tracing::debug!(
            removed,
            bindings = current.entries.len(),
            "Binding set replaced"
        );
        metrics::record_bindings(&self.label, current.entries.len());
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().entries.is_empty()
    }

    /// Whether `pattern` (after normalization) is bound.
    pub fn contains(&self, pattern: &str) -> bool {
        let key = self.pattern_trim.trim(pattern);
        self.read().entries.contains_key(key.as_ref())
    }

    /// Stored patterns in registration order.
    pub fn patterns(&self) -> Vec<String> {
        let bindings = self.read();
        let mut patterns: Vec<(u64, &String)> = bindings
            .entries
            .iter()
            .map(|(pattern, entry)| (entry.order, pattern))
            .collect();
        patterns.sort_unstable_by_key(|(order, _)| *order);
        patterns.into_iter().map(|(_, p)| p.clone()).collect()
    }
}

impl<V: Clone> Mux<V> {
    /// Return the highest-scoring binding for `query`, or `None`.
    ///
    /// Equal scores are resolved by map iteration order; use an order-aware
    /// tie-break combinator when that matters.
    pub fn lookup(&self, query: &str) -> Result<Option<Hit<V>>, MatchError> {
        let query = self.query_trim.trim(query);
        let bindings = self.read();

        let mut best: Option<(Score, &String, &Entry<V>)> = None;
        for (pattern, entry) in &bindings.entries {
            let score = match self.matcher.matches(pattern, &query, entry.order) {
                Ok(Some(score)) => score,
                Ok(None) => continue,
                Err(e) => {
                    metrics::record_lookup_error(&self.label);
                    return Err(e);
                }
            };
            if best.as_ref().map_or(true, |(max, _, _)| score > *max) {
                best = Some((score, pattern, entry));
            }
        }

        let hit = best.map(|(score, pattern, entry)| Hit {
            value: entry.value.clone(),
            pattern: pattern.clone(),
            score,
        });
        tracing::trace!(
            query = %query,
            pattern = ?hit.as_ref().map(|h| h.pattern.as_str()),
            "Lookup"
        );
        metrics::record_lookup(&self.label, hit.is_some());
        Ok(hit)
    }

    /// Return every binding matching `query`, in no particular order.
    pub fn lookup_all(&self, query: &str) -> Result<Vec<Hit<V>>, MatchError> {
        let query = self.query_trim.trim(query);
        let bindings = self.read();

        let mut hits = Vec::new();
        for (pattern, entry) in &bindings.entries {
            match self.matcher.matches(pattern, &query, entry.order) {
                Ok(Some(score)) => hits.push(Hit {
                    value: entry.value.clone(),
                    pattern: pattern.clone(),
                    score,
                }),
                Ok(None) => {}
                Err(e) => {
                    metrics::record_lookup_error(&self.label);
                    return Err(e);
                }
            }
        }

        tracing::trace!(query = %query, matches = hits.len(), "Lookup all");
        metrics::record_lookup(&self.label, !hits.is_empty());
        Ok(hits)
    }
}

impl<V> Default for Mux<V> {
    fn default() -> Self {
        Self::new()
    }
}
