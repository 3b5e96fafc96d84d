//! A single discovered WordPress core release
//!
//! # Modules
//!
//! - [`policy`]: Whitelist/blacklist policy for release archive URLs
//! - [`package`]: Manifest entry shape rendered for each release

pub mod package;
pub mod policy;

use url::Url;

use crate::version::{Version, parse_version};

pub use package::PackageEntry;
pub use policy::{RELEASE_HOST, extract_version, is_valid_release_url};

/// Composer package name every release is published under
pub const PACKAGE_NAME: &str = "itinerisltd/wordpress";

/// Archive type of every release
pub const DIST_TYPE: &str = "zip";

/// A validated release archive
///
/// Only constructed through [`Release::parse`], so `dist_url` always passes
/// [`is_valid_release_url`] and `version` always parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    name: String,
    dist_type: String,
    dist_url: String,
    version: String,
    parsed: Version,
}

impl Release {
    /// Parse a candidate URL into a release, or `None` if it fails the URL policy
    pub fn parse(url: &str) -> Option<Self> {
        if !is_valid_release_url(url) {
            return None;
        }

        let parsed_url = Url::parse(url).ok()?;
        let version = extract_version(policy::basename(&parsed_url)?)?;
        let parsed = parse_version(version).ok()?;

        Some(Self {
            name: PACKAGE_NAME.to_string(),
            dist_type: DIST_TYPE.to_string(),
            dist_url: url.to_string(),
            version: version.to_string(),
            parsed,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dist_type(&self) -> &str {
        &self.dist_type
    }

    pub fn dist_url(&self) -> &str {
        &self.dist_url
    }

    /// Version token exactly as it appeared in the archive name
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn parsed_version(&self) -> &Version {
        &self.parsed
    }

    pub fn is_stable(&self) -> bool {
        self.parsed.is_stable()
    }

    pub fn greater_than_or_equal_to(&self, boundary: &Version) -> bool {
        self.parsed >= *boundary
    }

    pub fn to_package_entry(&self) -> PackageEntry {
        PackageEntry::wordpress_core(&self.name, &self.version, &self.dist_url, &self.dist_type)
    }
}
