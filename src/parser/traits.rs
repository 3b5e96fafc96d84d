//! Candidate extractor trait definition

/// Trait for pulling candidate release URLs out of a releases page
///
/// Extraction only finds strings; deciding which of them are release
/// archives is left to [`crate::release::is_valid_release_url`].
pub trait CandidateExtractor: Send + Sync {
    /// Returns every candidate string in document order, duplicates included
    fn extract(&self, content: &str) -> Vec<String>;
}
