//! Pattern dispatch tables.
//!
//! A [`Mux`] maps string patterns to values and answers "which registered
//! pattern best matches this string?". What "match" and "best" mean is
//! pluggable through two small strategy traits:
//!
//! ```text
//!   bind(pattern, value) ──▶ Trim (pattern) ──▶ ┌──────────────────────┐
//!                                               │   Mux (RwLock)        │
//!   lookup(query) ─────────▶ Trim (query) ────▶ │   pattern → entry     │
//!                                               │   Matcher per entry   │
//!   ◀── best Hit / all Hits ─────────────────── └──────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! let mux = pattern_mux::presets::path();
//! mux.bind("/", "root");
//! mux.bind("/api/", "api");
//!
//! let hit = mux.lookup("api/users").unwrap().unwrap();
//! assert_eq!(hit.value, "api");
//! assert_eq!(hit.pattern, "/api/");
//! ```

pub mod config;
pub mod mux;
pub mod observability;
pub mod strategy;

pub use config::MuxConfig;
pub use mux::{presets, Hit, Mux, MuxBuilder};
pub use strategy::{MatchError, Matcher, Score, Trim};
