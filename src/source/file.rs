//! Releases page read from a local file

use std::path::{Path, PathBuf};

use crate::source::error::SourceError;
use crate::source::ReleaseSource;

/// Reads a previously saved releases page
pub struct FileReleaseSource {
    path: PathBuf,
}

impl FileReleaseSource {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl ReleaseSource for FileReleaseSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_page(&self) -> Result<String, SourceError> {
        let content =
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|source| SourceError::Read {
                    path: self.path.clone(),
                    source,
                })?;

        if content.trim().is_empty() {
            return Err(SourceError::EmptyBody(self.describe()));
        }

        Ok(content)
    }
}
