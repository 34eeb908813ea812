//! Layout configuration module.
//!
//! Handles loading, validating, and merging `docu-layout.toml`. Values are
//! layered: stock defaults, then the config file, then command-line flags
//! (applied by the binary through [`LayoutConfig::with_overrides`]).
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! output_root = "./docs"     # Root of the generated tree
//! strategy = "hierarchical"  # "hierarchical" or "flat"
//! extension = ".md"          # File extension for pages, with leading dot
//! clean_stale = false        # Remove previously generated pages not seen in this run
//!
//! [category]                 # Extra fields copied into every _category_.json
//! collapsible = true
//! collapsed = false
//! class_name = "red"
//!
//! [category.link]
//! type = "generated-index"
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown keys
//! are rejected to catch typos early.

use crate::types::{CategoryLink, CategoryMetadata};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "docu-layout.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Which layout strategy builds the output tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// One directory per outline level, pages named after their titles.
    #[default]
    Hierarchical,
    /// Every page directly under the root, named after its id.
    Flat,
}

/// Layout configuration loaded from `docu-layout.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Root directory of the generated tree.
    pub output_root: String,
    /// Layout strategy.
    pub strategy: StrategyKind,
    /// Page file extension including the leading dot.
    pub extension: String,
    /// Delete `.md`/`.mdx` files under the root that this run did not produce.
    pub clean_stale: bool,
    /// Optional fields added to every category sidecar.
    pub category: CategoryConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            output_root: "./docs".to_string(),
            strategy: StrategyKind::default(),
            extension: ".md".to_string(),
            clean_stale: false,
            category: CategoryConfig::default(),
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub output_root: Option<PathBuf>,
    pub strategy: Option<StrategyKind>,
    pub extension: Option<String>,
    pub clean_stale: bool,
}

impl LayoutConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_root.trim().is_empty() {
            return Err(ConfigError::Validation(
                "output_root must not be empty".into(),
            ));
        }
        if !self.extension.starts_with('.') || self.extension.len() < 2 {
            return Err(ConfigError::Validation(format!(
                "extension must start with '.' and name a type, got {:?}",
                self.extension
            )));
        }
        if self.extension.contains('/') {
            return Err(ConfigError::Validation(
                "extension must not contain '/'".into(),
            ));
        }
        Ok(())
    }

    /// Apply command-line overrides on top of the loaded values, then
    /// re-validate.
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self, ConfigError> {
        if let Some(root) = overrides.output_root {
            self.output_root = root.to_string_lossy().into_owned();
        }
        if let Some(strategy) = overrides.strategy {
            self.strategy = strategy;
        }
        if let Some(extension) = overrides.extension {
            self.extension = extension;
        }
        self.clean_stale |= overrides.clean_stale;
        self.validate()?;
        Ok(self)
    }
}

/// Extra Docusaurus category fields. Unset fields are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CategoryConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<CategoryLink>,
}

impl CategoryConfig {
    /// Sidecar record for one level: the given position and label plus
    /// whatever optional fields are configured.
    pub fn metadata(&self, position: u32, label: &str) -> CategoryMetadata {
        CategoryMetadata {
            collapsible: self.collapsible,
            collapsed: self.collapsed,
            class_name: self.class_name.clone(),
            link: self.link.clone(),
            ..CategoryMetadata::new(position, label)
        }
    }
}

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(LayoutConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<LayoutConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: LayoutConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from the file at `path`, falling back to stock defaults when
/// it does not exist.
pub fn load_config(path: &Path) -> Result<LayoutConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `docu-layout.toml`.
pub fn stock_config_toml() -> &'static str {
    r##"# docu-layout Configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.
#
# Command-line flags (--output, --strategy, --extension, --clean) override
# the values in this file.

# Root of the generated docs tree.
output_root = "./docs"

# How outline levels map to the filesystem:
#   "hierarchical" - one directory per level, with a _category_.json sidecar,
#                    pages named after their slug or title
#   "flat"         - every page directly under output_root, named by page id
strategy = "hierarchical"

# Extension for page files, including the leading dot (".md" or ".mdx").
extension = ".md"

# Delete .md/.mdx files under output_root that were not produced by this run.
clean_stale = false

# ---------------------------------------------------------------------------
# Category sidecars
# ---------------------------------------------------------------------------
# Optional Docusaurus fields written into every _category_.json next to
# "position" and "label". Leave unset to omit them.
[category]
# collapsible = true
# collapsed = false
# class_name = "red"

# [category.link]
# type = "generated-index"
# title = "Overview"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = LayoutConfig::default();
        assert_eq!(config.output_root, "./docs");
        assert_eq!(config.strategy, StrategyKind::Hierarchical);
        assert_eq!(config.extension, ".md");
        assert!(!config.clean_stale);
        assert_eq!(config.category, CategoryConfig::default());
    }

    #[test]
    fn parse_partial_config() {
        let config: LayoutConfig = toml::from_str(r#"strategy = "flat""#).unwrap();
        assert_eq!(config.strategy, StrategyKind::Flat);
        // Default values preserved
        assert_eq!(config.output_root, "./docs");
        assert_eq!(config.extension, ".md");
    }

    #[test]
    fn unknown_keys_rejected() {
        let result: Result<LayoutConfig, _> = toml::from_str("outptu_root = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn parse_category_table() {
        let toml = r#"
[category]
collapsible = true
class_name = "red"

[category.link]
type = "generated-index"
title = "Overview"
"#;
        let config: LayoutConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.category.collapsible, Some(true));
        assert_eq!(config.category.collapsed, None);
        assert_eq!(config.category.class_name.as_deref(), Some("red"));
        assert_eq!(
            config.category.link,
            Some(CategoryLink::GeneratedIndex {
                title: Some("Overview".into())
            })
        );
    }

    #[test]
    fn category_metadata_carries_configured_fields() {
        let category = CategoryConfig {
            collapsed: Some(true),
            ..CategoryConfig::default()
        };
        let meta = category.metadata(4, "Reference");
        assert_eq!(meta.position, 4);
        assert_eq!(meta.label, "Reference");
        assert_eq!(meta.collapsed, Some(true));
        assert_eq!(meta.collapsible, None);
    }

    #[test]
    fn validate_rejects_extension_without_dot() {
        let config = LayoutConfig {
            extension: "md".into(),
            ..LayoutConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_bare_dot_extension() {
        let config = LayoutConfig {
            extension: ".".into(),
            ..LayoutConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_empty_root() {
        let config = LayoutConfig {
            output_root: "  ".into(),
            ..LayoutConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn overrides_win_over_file_values() {
        let config = LayoutConfig::default()
            .with_overrides(Overrides {
                output_root: Some(PathBuf::from("site/docs")),
                strategy: Some(StrategyKind::Flat),
                extension: Some(".mdx".into()),
                clean_stale: true,
            })
            .unwrap();
        assert_eq!(config.output_root, "site/docs");
        assert_eq!(config.strategy, StrategyKind::Flat);
        assert_eq!(config.extension, ".mdx");
        assert!(config.clean_stale);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let result = LayoutConfig::default().with_overrides(Overrides {
            extension: Some("mdx".into()),
            ..Overrides::default()
        });
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, LayoutConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(CONFIG_FILENAME);
        fs::write(
            &config_path,
            r#"
output_root = "website/docs"
extension = ".mdx"

[category]
collapsed = false
"#,
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.output_root, "website/docs");
        assert_eq!(config.extension, ".mdx");
        assert_eq!(config.category.collapsed, Some(false));
        // Unspecified values should be defaults
        assert_eq!(config.strategy, StrategyKind::Hierarchical);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(CONFIG_FILENAME);
        fs::write(&config_path, "this is not valid toml [[[").unwrap();

        let result = load_config(&config_path);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_invalid_values_is_validation_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(CONFIG_FILENAME);
        fs::write(&config_path, "extension = \"md\"").unwrap();

        let result = load_config(&config_path);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let config: LayoutConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, LayoutConfig::default());
    }

    #[test]
    fn stock_defaults_round_trip_through_resolve() {
        let config = resolve_config(stock_defaults_value(), None).unwrap();
        assert_eq!(config, LayoutConfig::default());
    }
}
