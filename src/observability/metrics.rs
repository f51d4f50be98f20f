//! Metrics collection.
//!
//! # Metrics
//! - `mux_lookups_total` (counter): lookups by `table`, `outcome` (`hit`, `miss`)
//! - `mux_lookup_errors_total` (counter): lookups aborted by a matcher fault, by `table`
//! - `mux_bindings` (gauge): bindings per `table`
//!
//! # Design Decisions
//! - Uses the `metrics` facade; the embedding application picks the exporter
//! - Every series carries the table label, so tables sharing a recorder
//!   do not overwrite each other's gauge

/// Record a completed lookup.
pub fn record_lookup(table: &str, hit: bool) {
    let outcome = if hit { "hit" } else { "miss" };
    ::metrics::counter!(
        "mux_lookups_total",
        "table" => table.to_owned(),
        "outcome" => outcome
    )
    .increment(1);
}

/// Record a lookup aborted by a matcher error.
pub fn record_lookup_error(table: &str) {
    ::metrics::counter!("mux_lookup_errors_total", "table" => table.to_owned()).increment(1);
}

/// Record the binding count after a mutation.
pub fn record_bindings(table: &str, count: usize) {
    ::metrics::gauge!("mux_bindings", "table" => table.to_owned()).set(count as f64);
}
