//! Options for a segmentation call

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::api::Error;
use crate::application::html::default_attributes;

/// Default configuration constants
pub mod defaults {
    pub use crate::application::html::DEFAULT_CLASS;

    /// Language hint that selects whitespace splitting instead of the annotator.
    ///
    /// Korean already separates words with spaces.
    pub const WHITESPACE_LANGUAGE: &str = "ko";

    /// Whether results are cached when a cache is configured
    pub const USE_CACHE: bool = true;
}

/// Per-call options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentOptions {
    pub(crate) attributes: BTreeMap<String, String>,
    pub(crate) language: Option<String>,
    pub(crate) max_length: Option<usize>,
    pub(crate) use_entities: bool,
    pub(crate) use_cache: bool,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            attributes: BTreeMap::new(),
            language: None,
            max_length: None,
            use_entities: false,
            use_cache: defaults::USE_CACHE,
        }
    }
}

impl SegmentOptions {
    pub fn builder() -> SegmentOptionsBuilder {
        SegmentOptionsBuilder::default()
    }

    /// Attributes given by the caller, without the defaults
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Attributes for wrapped chunks: caller values over `class="ww"`
    pub fn merged_attributes(&self) -> BTreeMap<String, String> {
        let mut attributes = default_attributes();
        attributes.extend(
            self.attributes
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        attributes
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn use_entities(&self) -> bool {
        self.use_entities
    }

    pub fn use_cache(&self) -> bool {
        self.use_cache
    }

    /// True when the language hint selects whitespace splitting
    pub fn splits_on_whitespace(&self) -> bool {
        self.language() == Some(defaults::WHITESPACE_LANGUAGE)
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.max_length == Some(0) {
            return Err(Error::Configuration(
                "max_length must be greater than 0".into(),
            ));
        }

        if let Some(key) = self.attributes.keys().find(|key| !is_valid_attribute_name(key)) {
            return Err(Error::Configuration(format!(
                "invalid attribute name: {key:?}"
            )));
        }

        if self.language.as_deref().is_some_and(str::is_empty) {
            return Err(Error::Configuration("language must not be empty".into()));
        }

        Ok(())
    }
}

/// Attribute names are written into markup as is, so they must not be able
/// to close the tag or start another attribute.
fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|ch| {
            ch.is_whitespace() || ch.is_control() || matches!(ch, '"' | '\'' | '>' | '<' | '/' | '=')
        })
}

/// Fluent builder for [`SegmentOptions`]
#[derive(Debug, Default)]
pub struct SegmentOptionsBuilder {
    attributes: BTreeMap<String, String>,
    language: Option<String>,
    max_length: Option<usize>,
    use_entities: Option<bool>,
    use_cache: Option<bool>,
}

impl SegmentOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one attribute for wrapped chunks
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Add several attributes for wrapped chunks
    pub fn attributes<K, V, I>(mut self, attributes: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.attributes.extend(
            attributes
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
        self
    }

    /// Set the language hint by code
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Set the wrap threshold in characters
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn use_entities(mut self, enabled: bool) -> Self {
        self.use_entities = Some(enabled);
        self
    }

    pub fn use_cache(mut self, enabled: bool) -> Self {
        self.use_cache = Some(enabled);
        self
    }

    /// Build and validate the options
    pub fn build(self) -> Result<SegmentOptions, Error> {
        let mut options = SegmentOptions {
            attributes: self.attributes,
            language: self.language,
            max_length: self.max_length,
            ..SegmentOptions::default()
        };

        if let Some(enabled) = self.use_entities {
            options.use_entities = enabled;
        }

        if let Some(enabled) = self.use_cache {
            options.use_cache = enabled;
        }

        options.validate()?;
        Ok(options)
    }
}
