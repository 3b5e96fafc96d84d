//! Common types for extractors

use serde::Deserialize;

use crate::parser::anchors::AnchorExtractor;
use crate::parser::text::TextExtractor;
use crate::parser::traits::CandidateExtractor;

/// How candidate URLs are found in the releases page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractStrategy {
    /// `href` of every anchor element in the parsed HTML document
    #[default]
    Anchors,
    /// Every absolute http(s) link found by scanning the raw text
    Text,
}

impl ExtractStrategy {
    /// Returns the string representation of the strategy
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractStrategy::Anchors => "anchors",
            ExtractStrategy::Text => "text",
        }
    }

    /// Returns the extractor implementing this strategy
    pub fn extractor(&self) -> Box<dyn CandidateExtractor> {
        match self {
            ExtractStrategy::Anchors => Box::new(AnchorExtractor::new()),
            ExtractStrategy::Text => Box::new(TextExtractor::new()),
        }
    }
}

impl std::str::FromStr for ExtractStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anchors" => Ok(ExtractStrategy::Anchors),
            "text" => Ok(ExtractStrategy::Text),
            other => Err(format!("unknown extract strategy: {other}")),
        }
    }
}

impl std::fmt::Display for ExtractStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
