//! DOM-based candidate extraction
//!
//! The page is parsed with `scraper` (html5ever), which recovers from
//! malformed markup on its own and records problems per document instead of
//! in process-wide state, so nothing has to be toggled around a parse.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::debug;

use crate::parser::traits::CandidateExtractor;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));

/// Extracts the `href` of every anchor element
pub struct AnchorExtractor;

impl AnchorExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AnchorExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateExtractor for AnchorExtractor {
    fn extract(&self, content: &str) -> Vec<String> {
        let document = Html::parse_document(content);

        if !document.errors.is_empty() {
            debug!(
                "Recovered from {} HTML parse errors in releases page",
                document.errors.len()
            );
        }

        document
            .select(&ANCHOR_SELECTOR)
            .filter_map(|anchor| anchor.value().attr("href"))
            .map(str::trim)
            .filter(|href| !href.is_empty())
            .map(str::to_string)
            .collect()
    }
}
