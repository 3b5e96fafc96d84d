//! Pattern-based candidate extraction for non-HTML sources

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::traits::CandidateExtractor;

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)https?://[^\s"'<>]+"#).expect("link regex is valid"));

/// Sentence punctuation that follows a link in prose rather than belonging to it
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}'];

/// Extracts every absolute http(s) link from raw text
pub struct TextExtractor;

impl TextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateExtractor for TextExtractor {
    fn extract(&self, content: &str) -> Vec<String> {
        LINK_RE
            .find_iter(content)
            .map(|m| m.as_str().trim_end_matches(TRAILING_PUNCTUATION).to_string())
            .collect()
    }
}
