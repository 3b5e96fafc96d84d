//! Satis manifest generation
//!
//! The base document is passed through unchanged apart from one appended
//! `repositories` entry holding every release as an inline package.
//!
//! # Modules
//!
//! - [`template`]: Reading the base manifest document
//! - [`writer`]: Rendering and writing the final document
//! - [`error`]: Error type for manifest operations

pub mod error;
pub mod template;
pub mod writer;

use serde::Serialize;
use serde_json::Value;

use crate::release::PackageEntry;
use crate::repository::ReleaseRepository;

pub use error::ManifestError;
pub use template::read_template;
pub use writer::{render, write_manifest};

const REPOSITORIES_KEY: &str = "repositories";

/// Inline `package` repository appended to the base manifest
#[derive(Debug, Serialize)]
struct PackageRepository {
    #[serde(rename = "type")]
    repository_type: &'static str,
    package: Vec<PackageEntry>,
}

/// Merge the repository's releases into a copy of `base`
///
/// A missing `repositories` key is created; every other field keeps its
/// value and position.
pub fn generate(base: &Value, repository: &ReleaseRepository) -> Result<Value, ManifestError> {
    let mut document = base.clone();
    let object = document.as_object_mut().ok_or(ManifestError::BaseNotObject)?;

    let entry = serde_json::to_value(PackageRepository {
        repository_type: "package",
        package: repository.to_package_list(),
    })?;

    object
        .entry(REPOSITORIES_KEY)
        .or_insert_with(|| Value::Array(Vec::new()))
        .as_array_mut()
        .ok_or(ManifestError::RepositoriesNotArray)?
        .push(entry);

    Ok(document)
}
