//! Fill policy: resolving regions to display colors
//!
//! A policy is a default fill plus optional per-region overrides. An
//! override entry may exist without setting a fill, in which case the
//! region still falls back to the default. Resolution is pure and has no
//! error cases; an absent entry is the expected common case.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Fill used when the caller does not supply one
pub const DEFAULT_FILL: &str = "#d3d3d3";

/// Errors that can occur when loading or parsing a fill policy
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("failed to read style file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse style TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Per-region style override
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegionStyle {
    /// Override fill color; `None` falls back to the policy default
    pub fill: Option<String>,
}

/// A fill policy mapping region identifiers to display colors
#[derive(Debug, Clone)]
pub struct FillPolicy {
    /// Fill for regions without an override
    pub default_fill: String,
    /// Overrides keyed by region identifier. Entries naming identifiers
    /// absent from the rendered table are ignored.
    pub overrides: HashMap<String, RegionStyle>,
}

/// TOML structure for deserializing fill policies
#[derive(Deserialize)]
struct TomlPolicy {
    metadata: Option<TomlMetadata>,
    #[serde(rename = "default-fill")]
    default_fill: Option<String>,
    #[serde(default)]
    regions: HashMap<String, RegionStyle>,
}

#[derive(Deserialize)]
#[allow(dead_code)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

impl FillPolicy {
    /// Create a policy with the given default fill and no overrides
    pub fn new(default_fill: impl Into<String>) -> Self {
        Self {
            default_fill: default_fill.into(),
            overrides: HashMap::new(),
        }
    }

    /// Add or replace an override fill for one region
    pub fn with_fill(mut self, id: impl Into<String>, fill: impl Into<String>) -> Self {
        self.overrides.insert(
            id.into(),
            RegionStyle {
                fill: Some(fill.into()),
            },
        );
        self
    }

    /// Load a fill policy from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, StyleError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a fill policy from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, StyleError> {
        let parsed: TomlPolicy = toml::from_str(content)?;
        Ok(Self {
            default_fill: parsed
                .default_fill
                .unwrap_or_else(|| DEFAULT_FILL.to_string()),
            overrides: parsed.regions,
        })
    }

    /// Resolve one region identifier to its display color
    pub fn resolve(&self, id: &str) -> &str {
        self.overrides
            .get(id)
            .and_then(|style| style.fill.as_deref())
            .unwrap_or(&self.default_fill)
    }
}

impl Default for FillPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_FILL)
    }
}
