// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Inspector configuration.
//!
//! Fixed at construction and read-only afterwards. With the `config-loaders`
//! feature it can also be read from YAML or JSON:
//!
//! ```yaml
//! include_attributes: false
//! max_depth: 4
//! ```

#[cfg(feature = "config-loaders")]
use std::path::Path;

/// Traversal settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "config-loaders",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct InspectorConfig {
    /// Descend into attribute maps of attribute-bearing values.
    pub include_attributes: bool,
    /// Deepest depth still inspected; `None` = unbounded.
    ///
    /// Depth 0 is the root, so `Some(0)` inspects the root only.
    pub max_depth: Option<usize>,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            include_attributes: true,
            max_depth: None,
        }
    }
}

impl InspectorConfig {
    /// Check whether `depth` lies past the configured bound.
    pub fn exceeds_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth > max)
    }
}

/// Errors while loading a configuration.
#[cfg(feature = "config-loaders")]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(feature = "config-loaders")]
impl InspectorConfig {
    /// Parse from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Parse from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load from a file; the format follows the extension
    /// (`.yaml`, `.yml` or `.json`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&std::fs::read_to_string(path)?),
            "json" => Self::from_json_str(&std::fs::read_to_string(path)?),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}
