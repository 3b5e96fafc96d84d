//! Manifest generation run
//!
//! Ties the stages together: fetch the releases page, build the release
//! repository, apply the release count policy, filter by minimum version,
//! merge into the base manifest and write the result. Nothing is written
//! unless every earlier stage succeeded.
//!
//! # Modules
//!
//! - [`policy`]: Release count circuit breaker
//! - [`error`]: Stage-tagged error type

pub mod error;
pub mod policy;

use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::GenerateConfig;
use crate::manifest::{generate, read_template, write_manifest};
use crate::repository::ReleaseRepository;
use crate::source::ReleaseSource;
use crate::version::parse_version;

pub use error::PipelineError;
pub use policy::ReleaseCountPolicy;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Releases found on the page
    pub discovered: usize,
    /// Releases written to the manifest after version filtering
    pub published: usize,
    pub latest: Option<String>,
    pub latest_stable: Option<String>,
    pub output: PathBuf,
}

/// Generate the manifest described by `config` from `source`
pub async fn run(
    config: &GenerateConfig,
    source: &dyn ReleaseSource,
) -> Result<Summary, PipelineError> {
    let boundary = parse_version(&config.minimum_version).map_err(|source| {
        PipelineError::InvalidMinimumVersion {
            value: config.minimum_version.clone(),
            source,
        }
    })?;

    let location = source.describe();
    info!("Fetching releases page from {}", location);
    let page = source
        .fetch_page()
        .await
        .map_err(|source| PipelineError::Fetch { location, source })?;

    let extractor = config.strategy.extractor();
    let repository = ReleaseRepository::from_page(&page, extractor.as_ref())?;
    info!(
        "Discovered {} releases using {} extraction",
        repository.len(),
        config.strategy
    );

    ReleaseCountPolicy::new(config.minimum_releases).check(&repository)?;

    let published = repository.filter(|release| release.greater_than_or_equal_to(&boundary));
    if published.is_empty() {
        warn!(
            "No releases at or above {}; manifest will list no packages",
            config.minimum_version
        );
    }

    let latest = published.latest_version().map(|r| r.version().to_string());
    let latest_stable = published
        .latest_stable_version()
        .map(|r| r.version().to_string());
    info!(
        "Publishing {} releases (latest: {}, latest stable: {})",
        published.len(),
        latest.as_deref().unwrap_or("none"),
        latest_stable.as_deref().unwrap_or("none")
    );

    let base = read_template(&config.template_path).map_err(PipelineError::Merge)?;
    let document = generate(&base, &published).map_err(PipelineError::Merge)?;
    write_manifest(&config.output_path, &document).map_err(PipelineError::Write)?;

    Ok(Summary {
        discovered: repository.len(),
        published: published.len(),
        latest,
        latest_stable,
        output: config.output_path.clone(),
    })
}
