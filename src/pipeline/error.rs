use thiserror::Error;

use crate::manifest::ManifestError;
use crate::repository::RepositoryError;
use crate::source::SourceError;
use crate::version::VersionError;

/// Failure of a manifest generation run, tagged with the stage that failed
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Invalid minimum version {value:?}: {source}")]
    InvalidMinimumVersion {
        value: String,
        #[source]
        source: VersionError,
    },

    #[error("Fetch failed for {location}: {source}")]
    Fetch {
        location: String,
        #[source]
        source: SourceError,
    },

    #[error("Parse failed: {0}")]
    Parse(#[from] RepositoryError),

    #[error("Found {found} releases, expected at least {minimum}; refusing to publish")]
    TooFewReleases { found: usize, minimum: usize },

    #[error("Merge failed: {0}")]
    Merge(#[source] ManifestError),

    #[error("Write failed: {0}")]
    Write(#[source] ManifestError),
}
