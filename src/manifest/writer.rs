//! Manifest rendering and durable output

use std::io::Write;
use std::path::Path;

use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::info;

use crate::manifest::error::ManifestError;

/// Render the manifest as pretty-printed JSON with a trailing newline
pub fn render(document: &Value) -> Result<String, ManifestError> {
    let mut rendered = serde_json::to_string_pretty(document)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Render and write the manifest to `path`
///
/// The document is written to a temporary file next to `path` and renamed
/// into place, so `path` is either untouched or holds the full document.
pub fn write_manifest(path: &Path, document: &Value) -> Result<(), ManifestError> {
    let rendered = render(document)?;

    let write_error = |source: std::io::Error| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    };

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(directory).map_err(write_error)?;
    file.write_all(rendered.as_bytes()).map_err(write_error)?;
    file.as_file().sync_all().map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;

    info!("Wrote manifest to {:?} ({} bytes)", path, rendered.len());
    Ok(())
}
