use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::parser::ExtractStrategy;

// =============================================================================
// Source and output defaults
// =============================================================================

/// Official WordPress releases listing
pub const DEFAULT_RELEASES_URL: &str = "https://wordpress.org/download/releases/";

/// Base manifest merged into the output
pub const DEFAULT_TEMPLATE_PATH: &str = "satis.base.json";

/// Generated manifest
pub const DEFAULT_OUTPUT_PATH: &str = "satis.json";

/// Oldest release published in the manifest
pub const DEFAULT_MINIMUM_VERSION: &str = "4";

/// Fewest releases a page may yield before the run is aborted
pub const DEFAULT_MINIMUM_RELEASES: usize = 1;

/// Timeout for fetching the releases page in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Manifest generation configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateConfig {
    /// Releases page fetched when no page file is given
    pub source_url: String,
    /// Saved releases page read instead of fetching `source_url`
    pub page_file: Option<PathBuf>,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
    /// Releases below this version are left out of the manifest
    pub minimum_version: String,
    /// Circuit breaker against upstream markup changes
    pub minimum_releases: usize,
    pub strategy: ExtractStrategy,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_RELEASES_URL.to_string(),
            page_file: None,
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            minimum_version: DEFAULT_MINIMUM_VERSION.to_string(),
            minimum_releases: DEFAULT_MINIMUM_RELEASES,
            strategy: ExtractStrategy::default(),
        }
    }
}

impl GenerateConfig {
    /// Load a JSON config file; missing fields take their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<GenerateConfig>(json!({
            "minimumVersion": "5"
        }))
        .unwrap();

        assert_eq!(result.minimum_version, "5");
        assert_eq!(result.source_url, DEFAULT_RELEASES_URL);
        assert_eq!(result.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(result.minimum_releases, DEFAULT_MINIMUM_RELEASES);
    }

    #[test]
    fn config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<GenerateConfig>(json!({
            "sourceUrl": "https://example.com/releases/",
            "pageFile": "releases.html",
            "templatePath": "base.json",
            "outputPath": "out/satis.json",
            "minimumVersion": "4.9",
            "minimumReleases": 250,
            "strategy": "text"
        }))
        .unwrap();

        assert_eq!(
            result,
            GenerateConfig {
                source_url: "https://example.com/releases/".to_string(),
                page_file: Some(PathBuf::from("releases.html")),
                template_path: PathBuf::from("base.json"),
                output_path: PathBuf::from("out/satis.json"),
                minimum_version: "4.9".to_string(),
                minimum_releases: 250,
                strategy: ExtractStrategy::Text,
            }
        );
    }

    #[test]
    fn config_rejects_unknown_strategy() {
        let result = serde_json::from_value::<GenerateConfig>(json!({"strategy": "dom"}));

        assert!(result.is_err());
    }

    #[test]
    fn from_file_reads_json_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wp-satis.json");
        std::fs::write(&path, r#"{"minimumReleases": 10}"#).unwrap();

        let config = GenerateConfig::from_file(&path).unwrap();

        assert_eq!(config.minimum_releases, 10);
    }

    #[test]
    fn from_file_reports_missing_file() {
        let dir = TempDir::new().unwrap();

        let result = GenerateConfig::from_file(&dir.path().join("missing.json"));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn from_file_reports_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wp-satis.json");
        std::fs::write(&path, "minimumReleases = 10").unwrap();

        let result = GenerateConfig::from_file(&path);

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
