//! Configuration module
//!
//! A TOML file can hold defaults for the `segment` command:
//!
//! ```toml
//! [segment]
//! language = "ja"
//! max_length = 8
//! use_entities = true
//!
//! [attributes]
//! class = "ww"
//!
//! [cache]
//! dir = ".wakachi-cache"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use wakachi_core::{SegmentOptions, SegmentOptionsBuilder};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Segmentation defaults
    #[serde(default)]
    pub segment: SegmentConfig,

    /// Attributes for wrapped chunks
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    /// Result cache settings
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Segmentation-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SegmentConfig {
    /// Language hint passed to the annotator
    pub language: Option<String>,

    /// Leave CJK chunks longer than this unwrapped
    pub max_length: Option<usize>,

    /// Keep named entities in one chunk
    #[serde(default)]
    pub use_entities: bool,

    /// Read and write the result cache when one is configured
    #[serde(default = "default_use_cache")]
    pub use_cache: bool,
}

fn default_use_cache() -> bool {
    wakachi_core::api::defaults::USE_CACHE
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            language: None,
            max_length: None,
            use_entities: false,
            use_cache: default_use_cache(),
        }
    }
}

/// Cache-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Directory holding `cache.json`; no cache when unset
    pub dir: Option<PathBuf>,
}

impl CliConfig {
    /// Parse a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CliError::ConfigError(e.to_string()))
            .context("Failed to parse configuration")
    }

    /// Load a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Options builder seeded with the file values
    pub fn options_builder(&self) -> SegmentOptionsBuilder {
        let mut builder = SegmentOptions::builder()
            .attributes(self.attributes.clone())
            .use_entities(self.segment.use_entities)
            .use_cache(self.segment.use_cache);

        if let Some(language) = &self.segment.language {
            builder = builder.language(language.clone());
        }
        if let Some(max_length) = self.segment.max_length {
            builder = builder.max_length(max_length);
        }
        builder
    }

    /// Check that the file values form valid segmentation options
    pub fn validate(&self) -> Result<SegmentOptions> {
        self.options_builder()
            .build()
            .map_err(CliError::from)
            .context("Invalid segmentation settings")
    }

    /// Commented template written by `generate-config`
    pub fn template() -> &'static str {
        r#"# wakachi configuration

[segment]
# Language hint; "ko" splits on spaces and needs no annotations
# language = "ja"

# CJK chunks longer than this many characters are left unwrapped
# max_length = 8

# Keep named entities from the annotations file in one chunk
use_entities = false

# Use the result cache when [cache] dir is set
use_cache = true

# Attributes written on every wrapped chunk (default: class = "ww")
[attributes]
class = "ww"

[cache]
# dir = ".wakachi-cache"
"#
    }
}
