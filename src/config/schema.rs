//! Configuration schema definitions.
//!
//! A config file names a strategy combination and the initial bindings.
//! All types derive Serde traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

use crate::config::loader::ConfigError;
use crate::mux::table::DEFAULT_LABEL;
use crate::mux::Mux;
use crate::strategy::{
    AsciiLowercase, ChainTrim, HierarchicalPath, Identity, Matcher, PathTrim,
    PreferFirstRegistered, PreferLastRegistered, PreferLongestPattern, PreferShortestPattern,
    Prefix, RegexMatch, Strict, Suffix, Trim,
};

/// Root configuration for a dispatch table.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MuxConfig {
    /// Trims, matcher and tie-break policy.
    pub strategy: StrategyConfig,

    /// Logging settings for binaries.
    pub observability: ObservabilityConfig,

    /// Pattern → value bindings, registered in file order.
    pub bindings: Vec<BindingConfig>,
}

/// Strategy selection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct StrategyConfig {
    /// Trims applied to patterns, left to right. Empty = identity.
    pub pattern_trim: Vec<TrimKind>,

    /// Trims applied to queries, left to right. Empty = identity.
    pub query_trim: Vec<TrimKind>,

    /// Base matcher.
    pub matcher: MatcherKind,

    /// Optional score override wrapped around the matcher.
    pub tie_break: TieBreak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrimKind {
    Identity,
    Path,
    Lowercase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatcherKind {
    #[default]
    Strict,
    Path,
    Prefix,
    Suffix,
    Regex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Keep the matcher's own score.
    #[default]
    Matcher,
    FirstRegistered,
    LastRegistered,
    ShortestPattern,
    LongestPattern,
}

/// A single binding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BindingConfig {
    pub pattern: String,
    pub value: String,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// `table` label on the table's metrics.
    pub table_label: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            table_label: DEFAULT_LABEL.to_string(),
        }
    }
}

impl TrimKind {
    fn boxed(self) -> Box<dyn Trim> {
        match self {
            TrimKind::Identity => Box::new(Identity),
            TrimKind::Path => Box::new(PathTrim),
            TrimKind::Lowercase => Box::new(AsciiLowercase),
        }
    }
}

/// Compose a trim list so the first entry runs first.
fn trim_chain(kinds: &[TrimKind]) -> Box<dyn Trim> {
    kinds
        .iter()
        .fold(Box::new(Identity) as Box<dyn Trim>, |acc, kind| {
            Box::new(ChainTrim::new(kind.boxed(), acc))
        })
}

impl StrategyConfig {
    pub fn pattern_trim(&self) -> Box<dyn Trim> {
        trim_chain(&self.pattern_trim)
    }

    pub fn query_trim(&self) -> Box<dyn Trim> {
        trim_chain(&self.query_trim)
    }

    pub fn matcher(&self) -> Box<dyn Matcher> {
        let base: Box<dyn Matcher> = match self.matcher {
            MatcherKind::Strict => Box::new(Strict),
            MatcherKind::Path => Box::new(HierarchicalPath),
            MatcherKind::Prefix => Box::new(Prefix),
            MatcherKind::Suffix => Box::new(Suffix),
            MatcherKind::Regex => Box::new(RegexMatch),
        };

        match self.tie_break {
            TieBreak::Matcher => base,
            TieBreak::FirstRegistered => Box::new(PreferFirstRegistered::new(base)),
            TieBreak::LastRegistered => Box::new(PreferLastRegistered::new(base)),
            TieBreak::ShortestPattern => Box::new(PreferShortestPattern::new(base)),
            TieBreak::LongestPattern => Box::new(PreferLongestPattern::new(base)),
        }
    }
}

impl MuxConfig {
    /// Build a table with the configured strategies and bindings.
    pub fn build(&self) -> Mux<String> {
        let mux = Mux::with_strategies(
            self.strategy.pattern_trim(),
            self.strategy.query_trim(),
            self.strategy.matcher(),
        )
        .labeled(self.observability.table_label.clone());
        self.apply(&mux);
        mux
    }

    /// Swap the bindings of a live table built from `live` for this config's.
    ///
    /// The table keeps the strategies it was built with, and this config was
    /// validated against its own, so a config whose `[strategy]` differs is
    /// rejected and the table is left untouched.
    pub fn reload_into(&self, mux: &Mux<String>, live: &StrategyConfig) -> Result<(), ConfigError> {
        if self.strategy != *live {
            return Err(ConfigError::StrategyChanged);
        }
        self.apply(mux);
        Ok(())
    }

    fn apply(&self, mux: &Mux<String>) {
        mux.replace_bindings(
            self.bindings
                .iter()
                .map(|b| (b.pattern.as_str(), b.value.clone())),
        );
    }
}
