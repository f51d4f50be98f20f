//! Strategy subsystem.
//!
//! # Data Flow
//! ```text
//! bind(pattern) / unbind(pattern)
//!     → trim.rs (pattern trim, applied once before storage)
//!
//! lookup(query)
//!     → trim.rs (query trim)
//!     → matcher.rs (decide match + base score per stored pattern)
//!     → tie_break.rs (optional: rewrite score, never the decision)
//! ```
//!
//! # Design Decisions
//! - Two capability traits (`Trim`, `Matcher`); built-ins are plain structs
//! - Combinators are decorators over another strategy instance
//! - Strategies are pure and shared across threads (`Send + Sync`)
//! - Matcher faults are returned, not swallowed

pub mod matcher;
pub mod tie_break;
pub mod trim;

use std::borrow::Cow;
use std::sync::Arc;
use thiserror::Error;

pub use matcher::{HierarchicalPath, Prefix, RegexMatch, Strict, Suffix};
pub use tie_break::{
    PreferFirstRegistered, PreferLastRegistered, PreferLongestPattern, PreferShortestPattern,
};
pub use trim::{AsciiLowercase, ChainTrim, Identity, PathTrim};

/// Tie-break score. Only compared among matches of a single lookup.
pub type Score = i64;

/// Errors a matcher may raise while evaluating a pattern.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The pattern could not be compiled as a regular expression.
    #[error("invalid regex pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Failure raised by a caller-supplied matcher.
    #[error("matcher failed: {0}")]
    Custom(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Normalizes a pattern or query string before use.
pub trait Trim: Send + Sync + std::fmt::Debug {
    /// Returns the normalized form of `input`.
    fn trim<'a>(&self, input: &'a str) -> Cow<'a, str>;
}

/// Decides whether a stored pattern matches a query.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns `Ok(Some(score))` on a match, `Ok(None)` otherwise.
    ///
    /// `order` is the registration order of the pattern's entry. Implementations
    /// must cope with empty patterns and empty queries.
    fn matches(&self, pattern: &str, query: &str, order: u64) -> Result<Option<Score>, MatchError>;
}

impl<T: Trim + ?Sized> Trim for Box<T> {
    fn trim<'a>(&self, input: &'a str) -> Cow<'a, str> {
        (**self).trim(input)
    }
}

impl<T: Trim + ?Sized> Trim for Arc<T> {
    fn trim<'a>(&self, input: &'a str) -> Cow<'a, str> {
        (**self).trim(input)
    }
}

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    fn matches(&self, pattern: &str, query: &str, order: u64) -> Result<Option<Score>, MatchError> {
        (**self).matches(pattern, query, order)
    }
}

impl<M: Matcher + ?Sized> Matcher for Arc<M> {
    fn matches(&self, pattern: &str, query: &str, order: u64) -> Result<Option<Score>, MatchError> {
        (**self).matches(pattern, query, order)
    }
}

/// Score derived from a pattern's byte length.
pub(crate) fn length_score(pattern: &str) -> Score {
    Score::try_from(pattern.len()).unwrap_or(Score::MAX)
}

/// Score derived from a registration order.
pub(crate) fn order_score(order: u64) -> Score {
    Score::try_from(order).unwrap_or(Score::MAX)
}
