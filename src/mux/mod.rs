//! Dispatch table subsystem.
//!
//! # Data Flow
//! ```text
//! Setup / hot reload:
//!     builder.rs or presets.rs (choose strategy triple)
//!     → table.rs Mux::bind / unbind / replace_bindings
//!
//! Hot path:
//!     Mux::lookup(query)      → best Hit or None
//!     Mux::lookup_all(query)  → every Hit, unordered
//! ```
//!
//! # Design Decisions
//! - Strategy triple is fixed at construction
//! - No process-wide default table; presets are factory functions
//! - Values are cloned out of the table (store `Arc<T>` for heavy payloads)

pub mod builder;
pub mod presets;
pub mod table;

pub use builder::MuxBuilder;
pub use table::{Hit, Mux};
