//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! mux::table (bind / unbind / lookup)
//!     → tracing events (debug: mutations, trace: lookups)
//!     → metrics.rs (counters, gauges)
//!
//! Binaries:
//!     → logging.rs (install subscriber once at startup)
//!     → optional metrics recorder of the caller's choice
//! ```
//!
//! # Design Decisions
//! - The library never installs a subscriber or a recorder itself
//! - Metric updates are no-ops when no recorder is installed

pub mod logging;
pub mod metrics;
