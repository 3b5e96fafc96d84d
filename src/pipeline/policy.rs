//! Release count circuit breaker

use tracing::warn;

use crate::pipeline::error::PipelineError;
use crate::repository::ReleaseRepository;

/// Aborts a run when the releases page yields suspiciously few releases
///
/// An upstream markup change usually shows up as a sudden drop in the
/// number of releases found rather than as a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseCountPolicy {
    pub minimum: usize,
}

impl ReleaseCountPolicy {
    pub fn new(minimum: usize) -> Self {
        Self { minimum }
    }

    pub fn check(&self, repository: &ReleaseRepository) -> Result<(), PipelineError> {
        let found = repository.len();
        if found < self.minimum {
            warn!("Found {} releases, expected at least {}", found, self.minimum);
            return Err(PipelineError::TooFewReleases {
                found,
                minimum: self.minimum,
            });
        }
        Ok(())
    }
}
