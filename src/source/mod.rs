//! Releases page sources
//!
//! # Modules
//!
//! - [`http`]: Fetches the live releases page over HTTPS
//! - [`file`]: Reads a saved releases page from disk
//! - [`error`]: Error type for retrieval failures

pub mod error;
pub mod file;
pub mod http;

#[cfg(test)]
use mockall::automock;

pub use error::SourceError;
pub use file::FileReleaseSource;
pub use http::HttpReleaseSource;

/// Trait for retrieving the raw releases page
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Human-readable location of the page, used in logs and errors
    fn describe(&self) -> String;

    /// Fetches the page content
    ///
    /// # Returns
    /// * `Ok(String)` - Non-blank page content
    /// * `Err(SourceError)` - If retrieval fails or the page is blank
    async fn fetch_page(&self) -> Result<String, SourceError>;
}
