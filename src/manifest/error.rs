use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read template {path:?}: {source}")]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template {path:?} is not valid JSON: {source}")]
    InvalidTemplate {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Base manifest must be a JSON object")]
    BaseNotObject,

    #[error("Base manifest field `repositories` must be an array")]
    RepositoriesNotArray,

    #[error("Failed to encode manifest: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to write manifest {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
