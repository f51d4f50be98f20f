//! Built-in matchers.
//!
//! # Responsibilities
//! - Exact equality (`Strict`)
//! - Directory-style path prefixes (`HierarchicalPath`)
//! - Literal prefixes and suffixes
//! - Regular expressions, compiled on every call
//!
//! # Design Decisions
//! - Length-scored matchers let the more specific pattern win
//! - Lengths are byte lengths
//! - `RegexMatch` does not cache; wrap it if compilation cost matters

use regex::Regex;
use crate::strategy::{length_score, order_score, MatchError, Matcher, Score};

/// Matches iff pattern and query are equal. Score is always 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Strict;

impl Matcher for Strict {
    fn matches(&self, pattern: &str, query: &str, _order: u64) -> Result<Option<Score>, MatchError> {
        Ok((pattern == query).then_some(0))
    }
}

/// Path semantics: a pattern ending in `/` matches every query below it,
/// any other pattern must equal the query. Score is the pattern length.
#[derive(Debug, Clone, Copy, Default)]
pub struct HierarchicalPath;

impl Matcher for HierarchicalPath {
    fn matches(&self, pattern: &str, query: &str, _order: u64) -> Result<Option<Score>, MatchError> {
        let matched = if pattern.ends_with('/') {
            query.starts_with(pattern)
        } else {
            pattern == query
        };
        Ok(matched.then(|| length_score(pattern)))
    }
}

/// Matches when the query starts with the pattern. Score is the pattern length.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prefix;

impl Matcher for Prefix {
    fn matches(&self, pattern: &str, query: &str, _order: u64) -> Result<Option<Score>, MatchError> {
        Ok(query.starts_with(pattern).then(|| length_score(pattern)))
    }
}

/// Matches when the query ends with the pattern. Score is the pattern length.
#[derive(Debug, Clone, Copy, Default)]
pub struct Suffix;

impl Matcher for Suffix {
    fn matches(&self, pattern: &str, query: &str, _order: u64) -> Result<Option<Score>, MatchError> {
        Ok(query.ends_with(pattern).then(|| length_score(pattern)))
    }
}

/// Compiles the pattern as a regex and tests it against the query (unanchored).
/// Score is the registration order, so later registrations win ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexMatch;

impl Matcher for RegexMatch {
    fn matches(&self, pattern: &str, query: &str, order: u64) -> Result<Option<Score>, MatchError> {
        let re = Regex::new(pattern).map_err(|source| MatchError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(re.is_match(query).then(|| order_score(order)))
    }
}
