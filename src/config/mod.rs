//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MuxConfig::build (strategies + initial bindings)
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → MuxConfig::apply (atomic binding swap on the live table)
//! ```
//!
//! # Design Decisions
//! - Strategies are fixed once a table is built; reloads only swap bindings
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{BindingConfig, MatcherKind, MuxConfig, StrategyConfig, TieBreak, TrimKind};
pub use validation::ValidationError;
pub use watcher::{read_reload, ConfigWatcher};
