//! Base manifest template loading

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::manifest::error::ManifestError;

/// Read and parse the base manifest document
pub fn read_template(path: &Path) -> Result<Value, ManifestError> {
    debug!("Reading base manifest from {:?}", path);

    let content = fs::read_to_string(path).map_err(|source| ManifestError::ReadTemplate {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ManifestError::InvalidTemplate {
        path: path.to_path_buf(),
        source,
    })
}
