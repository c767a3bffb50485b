//! Pagination policy configuration
//!
//! The engine itself is permissive. Integrators who want strict argument
//! validation describe it in YAML and load it here:
//!
//! ```yaml
//! unmatched_cursor: reject
//! negative_count: reject
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Policies
// ============================================================================

/// What to do with a `before`/`after` cursor that matches no edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorPolicy {
    /// Treat the boundary as absent
    #[default]
    Ignore,
    /// Fail with `Error::UnmatchedCursor`
    Reject,
}

/// What to do with a negative `first`/`last`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountPolicy {
    /// Treat the count as "no limit"
    #[default]
    Unbounded,
    /// Fail with `Error::NegativeCount`
    Reject,
}

// ============================================================================
// Pagination Config
// ============================================================================

/// Strictness of argument validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationConfig {
    pub unmatched_cursor: CursorPolicy,
    pub negative_count: CountPolicy,
}

impl PaginationConfig {
    /// Permissive policy (the default)
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Reject everything the permissive policy ignores
    pub fn strict() -> Self {
        Self {
            unmatched_cursor: CursorPolicy::Reject,
            negative_count: CountPolicy::Reject,
        }
    }

    /// Check if any check is enabled
    pub fn is_strict(&self) -> bool {
        self.unmatched_cursor == CursorPolicy::Reject || self.negative_count == CountPolicy::Reject
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load a pagination policy from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<PaginationConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_config_from_str(&content)
}

/// Load a pagination policy from a YAML string.
///
/// An empty document yields the default policy.
pub fn load_config_from_str(yaml: &str) -> Result<PaginationConfig> {
    if yaml.trim().is_empty() {
        return Ok(PaginationConfig::default());
    }

    serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse pagination config: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_is_permissive() {
        let config = PaginationConfig::default();
        assert_eq!(config.unmatched_cursor, CursorPolicy::Ignore);
        assert_eq!(config.negative_count, CountPolicy::Unbounded);
        assert!(!config.is_strict());
        assert!(PaginationConfig::strict().is_strict());
    }

    #[test]
    fn test_load_from_str() {
        let config = load_config_from_str("unmatched_cursor: reject\n").unwrap();
        assert_eq!(
            config,
            PaginationConfig {
                unmatched_cursor: CursorPolicy::Reject,
                negative_count: CountPolicy::Unbounded,
            }
        );

        let config =
            load_config_from_str("unmatched_cursor: reject\nnegative_count: reject\n").unwrap();
        assert_eq!(config, PaginationConfig::strict());
    }

    #[test]
    fn test_load_empty_document() {
        assert_eq!(load_config_from_str("").unwrap(), PaginationConfig::default());
        assert_eq!(
            load_config_from_str("  \n").unwrap(),
            PaginationConfig::default()
        );
    }

    #[test]
    fn test_load_rejects_unknown_values() {
        let err = load_config_from_str("unmatched_cursor: explode\n").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        let err = load_config_from_str("max_page_size: 10\n").unwrap_err();
        assert!(err.to_string().contains("Failed to parse pagination config"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "negative_count: reject").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.negative_count, CountPolicy::Reject);
        assert_eq!(config.unmatched_cursor, CursorPolicy::Ignore);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
