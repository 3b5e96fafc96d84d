//! Collection of discovered releases
//!
//! A repository is built once from a releases page: candidate URLs are
//! extracted, their `#fragment` removed, exact duplicates dropped, each survivor parsed into a
//! [`Release`], and the result sorted ascending by version precedence.

pub mod error;

use std::collections::HashSet;

use tracing::debug;

use crate::parser::{AnchorExtractor, CandidateExtractor};
use crate::release::{PackageEntry, Release};

pub use error::RepositoryError;

/// Releases sorted ascending by version, with no two releases sharing a version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseRepository {
    releases: Vec<Release>,
}

impl ReleaseRepository {
    /// Sort releases ascending by version
    ///
    /// Fails if two releases compare equal, since the resulting order would
    /// depend on input order rather than on the versions themselves.
    pub fn new(mut releases: Vec<Release>) -> Result<Self, RepositoryError> {
        releases.sort_by(|a, b| a.parsed_version().cmp(b.parsed_version()));

        if let Some(pair) = releases
            .windows(2)
            .find(|pair| pair[0].parsed_version() == pair[1].parsed_version())
        {
            return Err(RepositoryError::OrderingInconsistency {
                version: pair[0].parsed_version().normalized(),
                first_url: pair[0].dist_url().to_string(),
                second_url: pair[1].dist_url().to_string(),
            });
        }

        Ok(Self { releases })
    }

    /// Build a repository from an HTML releases page using anchor extraction
    pub fn from_html(html: &str) -> Result<Self, RepositoryError> {
        Self::from_page(html, &AnchorExtractor)
    }

    /// Build a repository from page content using the given extractor
    ///
    /// A page without any release links yields an empty repository.
    pub fn from_page(
        content: &str,
        extractor: &dyn CandidateExtractor,
    ) -> Result<Self, RepositoryError> {
        let candidates = extractor.extract(content);
        let candidate_count = candidates.len();

        let mut seen = HashSet::new();
        let releases: Vec<Release> = candidates
            .iter()
            .map(|candidate| without_fragment(candidate))
            .filter(|candidate| seen.insert(*candidate))
            .filter_map(Release::parse)
            .collect();

        debug!(
            "Extracted {} candidates ({} unique), {} releases",
            candidate_count,
            seen.len(),
            releases.len()
        );

        Self::new(releases)
    }

    /// Returns a new repository holding only the releases matching `predicate`
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Release) -> bool,
    {
        Self {
            releases: self
                .releases
                .iter()
                .filter(|release| predicate(release))
                .cloned()
                .collect(),
        }
    }

    /// Highest version, pre-releases included
    pub fn latest_version(&self) -> Option<&Release> {
        self.releases.last()
    }

    /// Highest version without a pre-release or dev modifier
    pub fn latest_stable_version(&self) -> Option<&Release> {
        self.releases.iter().rev().find(|release| release.is_stable())
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Release> {
        self.releases.iter()
    }

    pub fn releases(&self) -> &[Release] {
        &self.releases
    }

    /// Render every release, in ascending version order
    pub fn to_package_list(&self) -> Vec<PackageEntry> {
        self.releases.iter().map(Release::to_package_entry).collect()
    }
}

impl<'a> IntoIterator for &'a ReleaseRepository {
    type Item = &'a Release;
    type IntoIter = std::slice::Iter<'a, Release>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A fragment never reaches the server, so `a.zip` and `a.zip#zip` are one download
fn without_fragment(candidate: &str) -> &str {
    candidate
        .split_once('#')
        .map_or(candidate, |(location, _)| location)
}
