//! Built-in trim strategies.
//!
//! # Responsibilities
//! - Identity (no change)
//! - Path normalization (rooted, non-empty)
//! - ASCII lowercasing (case-insensitive keys such as host names)
//! - Chaining two trims in caller-chosen order

use std::borrow::Cow;
use crate::strategy::Trim;

/// Leaves the input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Trim for Identity {
    fn trim<'a>(&self, input: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(input)
    }
}

/// Roots a path: `""` becomes `"/"`, and a missing leading `/` is prepended.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathTrim;

impl Trim for PathTrim {
    fn trim<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if input.starts_with('/') {
            Cow::Borrowed(input)
        } else {
            Cow::Owned(format!("/{input}"))
        }
    }
}

/// Lowercases ASCII letters, leaving other characters untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiLowercase;

impl Trim for AsciiLowercase {
    fn trim<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if input.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(input.to_ascii_lowercase())
        } else {
            Cow::Borrowed(input)
        }
    }
}

/// Applies `inner` first, then `outer`.
#[derive(Debug, Clone, Default)]
pub struct ChainTrim<F, G> {
    outer: F,
    inner: G,
}

impl<F: Trim, G: Trim> ChainTrim<F, G> {
    /// Build `outer(inner(input))`.
    pub fn new(outer: F, inner: G) -> Self {
        Self { outer, inner }
    }
}

impl<F: Trim, G: Trim> Trim for ChainTrim<F, G> {
    fn trim<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match self.inner.trim(input) {
            Cow::Borrowed(s) => self.outer.trim(s),
            Cow::Owned(s) => Cow::Owned(self.outer.trim(&s).into_owned()),
        }
    }
}
