//! Builder for tables with a custom strategy triple.

use crate::mux::Mux;
use crate::strategy::{Identity, Matcher, Strict, Trim};

/// Assembles a [`Mux`] from individually chosen strategies.
///
/// Unset trims default to [`Identity`], an unset matcher to [`Strict`].
#[derive(Debug, Default)]
pub struct MuxBuilder {
    label: Option<String>,
    pattern_trim: Option<Box<dyn Trim>>,
    query_trim: Option<Box<dyn Trim>>,
    matcher: Option<Box<dyn Matcher>>,
}

impl MuxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim applied to patterns on bind/unbind.
    pub fn pattern_trim(mut self, trim: impl Trim + 'static) -> Self {
        self.pattern_trim = Some(Box::new(trim));
        self
    }

    /// Trim applied to queries on lookup.
    pub fn query_trim(mut self, trim: impl Trim + 'static) -> Self {
        self.query_trim = Some(Box::new(trim));
        self
    }

    /// Use the same trim for patterns and queries.
    pub fn trim<T: Trim + Clone + 'static>(self, trim: T) -> Self {
        self.pattern_trim(trim.clone()).query_trim(trim)
    }

    pub fn matcher(mut self, matcher: impl Matcher + 'static) -> Self {
        self.matcher = Some(Box::new(matcher));
        self
    }

    /// Metrics label of the built table.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn build<V>(self) -> Mux<V> {
        let mux = Mux::with_strategies(
            self.pattern_trim.unwrap_or_else(|| Box::new(Identity)),
            self.query_trim.unwrap_or_else(|| Box::new(Identity)),
            self.matcher.unwrap_or_else(|| Box::new(Strict)),
        );
        match self.label {
            Some(label) => mux.labeled(label),
            None => mux,
        }
    }
}
