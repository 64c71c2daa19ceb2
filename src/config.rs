//! Table options
//!
//! Options are loaded from YAML or JSON and validated before a table is
//! built from them.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Layout Enums
// ============================================================================

/// Where the search box sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchPosition {
    /// Left side
    Start,
    /// Centered
    Center,
    /// Right side
    #[default]
    End,
}

/// Arrangement of the info text and pagination controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ControlsLayout {
    /// Info on the left, pagination on the right
    #[default]
    InfoLeftPaginationRight,
    /// Info on the right, pagination on the left
    InfoRightPaginationLeft,
    /// Both centered
    Centered,
    /// Info above pagination
    Stacked,
}

// ============================================================================
// Table Options
// ============================================================================

/// Configuration options for a table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableOptions {
    /// Page size used until the user picks another
    pub default_page_size: u64,

    /// Delay before a typed search is sent, in milliseconds
    pub search_debounce_ms: u64,

    /// Enable debug logging
    pub debug: bool,

    /// Search box position
    pub search_position: SearchPosition,

    /// Info/pagination layout
    pub controls_layout: ControlsLayout,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            search_debounce_ms: 300,
            debug: false,
            search_position: SearchPosition::default(),
            controls_layout: ControlsLayout::default(),
        }
    }
}

impl TableOptions {
    /// Load options from a file. `.yaml`/`.yml` is parsed as YAML, anything
    /// else as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

        if is_yaml {
            Self::from_yaml_str(&contents)
        } else {
            Self::from_json_str(&contents)
        }
    }

    /// Parse and validate options from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let options: Self = serde_yaml::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    /// Parse and validate options from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Check option values
    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            return Err(Error::invalid_config(
                "defaultPageSize",
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Set the default page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.default_page_size = page_size;
        self
    }

    /// Enable or disable debug logging
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let options = TableOptions::default();
        assert_eq!(options.default_page_size, 10);
        assert_eq!(options.search_debounce_ms, 300);
        assert!(!options.debug);
        assert_eq!(options.search_position, SearchPosition::End);
        assert_eq!(
            options.controls_layout,
            ControlsLayout::InfoLeftPaginationRight
        );
    }

    #[test]
    fn test_from_yaml_partial() {
        let yaml = r"
defaultPageSize: 25
debug: true
searchPosition: start
controlsLayout: stacked
";
        let options = TableOptions::from_yaml_str(yaml).unwrap();
        assert_eq!(options.default_page_size, 25);
        assert!(options.debug);
        assert_eq!(options.search_debounce_ms, 300);
        assert_eq!(options.search_position, SearchPosition::Start);
        assert_eq!(options.controls_layout, ControlsLayout::Stacked);
    }

    #[test]
    fn test_from_json() {
        let options =
            TableOptions::from_json_str(r#"{"defaultPageSize": 50, "searchDebounceMs": 0}"#)
                .unwrap();
        assert_eq!(options.default_page_size, 50);
        assert_eq!(options.search_debounce_ms, 0);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = TableOptions::from_json_str(r#"{"defaultPageSize": 0}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_unknown_layout_rejected() {
        let err = TableOptions::from_yaml_str("controlsLayout: diagonal").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_equality_and_hash() {
        let a = TableOptions::default().with_page_size(20);
        let b = a.clone();
        let c = TableOptions::default().with_debug(true);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<TableOptions> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("table.yaml");
        let mut file = std::fs::File::create(&yaml_path).unwrap();
        writeln!(file, "defaultPageSize: 15").unwrap();
        assert_eq!(
            TableOptions::from_file(&yaml_path).unwrap().default_page_size,
            15
        );

        let json_path = dir.path().join("table.json");
        std::fs::write(&json_path, r#"{"debug": true}"#).unwrap();
        assert!(TableOptions::from_file(&json_path).unwrap().debug);

        let missing = dir.path().join("missing.yaml");
        assert!(matches!(
            TableOptions::from_file(&missing).unwrap_err(),
            Error::FileNotFound { .. }
        ));
    }
}
