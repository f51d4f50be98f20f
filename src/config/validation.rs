//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic checks that serde cannot express
//! - Detect bindings that collapse onto the same pattern after trimming
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Patterns are never compiled here; a bad regex surfaces at lookup

use std::collections::HashMap;
use thiserror::Error;

use crate::config::schema::MuxConfig;

/// A semantic problem in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Binding at `index` has an empty value.
    #[error("binding #{index} ({pattern:?}) has an empty value")]
    EmptyValue { index: usize, pattern: String },

    /// Two bindings normalize to the same stored pattern.
    #[error("bindings #{first} and #{second} both normalize to {pattern:?}")]
    DuplicatePattern {
        pattern: String,
        first: usize,
        second: usize,
    },
}

/// Validate a parsed config.
pub fn validate_config(config: &MuxConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let trim = config.strategy.pattern_trim();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (index, binding) in config.bindings.iter().enumerate() {
        if binding.value.is_empty() {
            errors.push(ValidationError::EmptyValue {
                index,
                pattern: binding.pattern.clone(),
            });
        }

        let key = trim.trim(&binding.pattern).into_owned();
        if let Some(&first) = seen.get(&key) {
            errors.push(ValidationError::DuplicatePattern {
                pattern: key,
                first,
                second: index,
            });
        } else {
            seen.insert(key, index);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{BindingConfig, TrimKind};

    fn binding(pattern: &str, value: &str) -> BindingConfig {
        BindingConfig {
            pattern: pattern.into(),
            value: value.into(),
        }
    }

    #[test]
    fn test_valid_config() {
        let mut config = MuxConfig::default();
        config.bindings.push(binding("/a", "a"));
        config.bindings.push(binding("/b", "b"));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = MuxConfig::default();
        config.strategy.pattern_trim = vec![TrimKind::Path];
        config.bindings.push(binding("api", "one"));
        config.bindings.push(binding("/api", "two"));
        config.bindings.push(binding("/empty", ""));

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::DuplicatePattern {
                    pattern: "/api".into(),
                    first: 0,
                    second: 1,
                },
                ValidationError::EmptyValue {
                    index: 2,
                    pattern: "/empty".into(),
                },
            ]
        );
    }

    #[test]
    fn test_duplicates_depend_on_trim() {
        let mut config = MuxConfig::default();
        config.bindings.push(binding("api", "one"));
        config.bindings.push(binding("/api", "two"));
        // identity trim keeps them distinct
        assert!(validate_config(&config).is_ok());
    }
}
