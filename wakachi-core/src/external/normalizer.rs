//! HTML fragment to plain text

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use super::TextNormalizer;

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n|\r").expect("static line break pattern"));
static REPEATED_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("static space pattern"));

/// Extracts the text content of an HTML fragment.
///
/// Tags are dropped (their text is kept, `<script>` included), line breaks
/// are removed rather than turned into spaces, and runs of spaces collapse
/// to one.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlNormalizer;

impl HtmlNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl TextNormalizer for HtmlNormalizer {
    fn normalize(&self, source: &str) -> String {
        let fragment = Html::parse_fragment(source);
        let text: String = fragment.root_element().text().collect();

        let text = LINE_BREAKS.replace_all(text.trim(), "");
        REPEATED_SPACES.replace_all(&text, " ").into_owned()
    }
}
