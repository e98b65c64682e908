//! HTML serialization of a chunk sequence
//!
//! Output is a single root `<span>`. CJK chunks are wrapped in their own
//! `<span>` carrying the configured attributes so a stylesheet can keep each
//! of them on one line (`display: inline-block` or `white-space: nowrap`).
//! Everything else is emitted as plain text under the root.
//!
//! Text content is escaped. Attribute values are written verbatim; callers
//! passing untrusted values must escape them first.

use std::collections::BTreeMap;

use crate::domain::Chunk;

/// Class given to wrapped chunks when no attributes are configured
pub const DEFAULT_CLASS: &str = "ww";

const ROOT_TAG: &str = "span";

/// Escape `& < > " '` for use as element text
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Attribute map holding only `class="ww"`
pub fn default_attributes() -> BTreeMap<String, String> {
    BTreeMap::from([("class".to_string(), DEFAULT_CLASS.to_string())])
}

/// Renders chunks as wrapped markup
#[derive(Debug, Clone)]
pub struct HtmlSerializer {
    attributes: BTreeMap<String, String>,
    max_length: Option<usize>,
}

impl Default for HtmlSerializer {
    fn default() -> Self {
        Self::new(default_attributes())
    }
}

impl HtmlSerializer {
    pub fn new(attributes: BTreeMap<String, String>) -> Self {
        Self {
            attributes,
            max_length: None,
        }
    }

    /// CJK chunks longer than `max_length` characters are left unwrapped
    pub fn with_max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    fn should_wrap(&self, chunk: &Chunk) -> bool {
        chunk.has_cjk()
            && self
                .max_length
                .map_or(true, |max_length| chunk.char_len() <= max_length)
    }

    fn push_wrapped(&self, out: &mut String, word: &str) {
        out.push('<');
        out.push_str(ROOT_TAG);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out.push('>');
        out.push_str(&escape_text(word));
        out.push_str("</");
        out.push_str(ROOT_TAG);
        out.push('>');
    }

    /// Render the chunks inside one root element.
    ///
    /// A space chunk before any text has been written is dropped.
    pub fn serialize<'a, I>(&self, chunks: I) -> String
    where
        I: IntoIterator<Item = &'a Chunk>,
    {
        let mut inner = String::new();
        let mut has_text = false;

        for chunk in chunks {
            if chunk.is_space() {
                if has_text {
                    inner.push(' ');
                }
                continue;
            }

            if !chunk.is_break() && self.should_wrap(chunk) {
                self.push_wrapped(&mut inner, chunk.word());
            } else {
                inner.push_str(&escape_text(chunk.word()));
            }
            has_text |= !chunk.word().is_empty();
        }

        format!("<{ROOT_TAG}>{inner}</{ROOT_TAG}>")
    }
}
