//! HTTPS releases page source

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::{DEFAULT_RELEASES_URL, FETCH_TIMEOUT_MS};
use crate::source::error::SourceError;
use crate::source::ReleaseSource;

const USER_AGENT: &str = concat!("wp-satis/", env!("CARGO_PKG_VERSION"));

/// Fetches the releases page with a plain GET request
pub struct HttpReleaseSource {
    client: reqwest::Client,
    url: String,
}

impl HttpReleaseSource {
    /// Creates a source for a custom releases page URL
    pub fn new(url: &str) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_millis(FETCH_TIMEOUT_MS))
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Creates a source for the official WordPress releases page
    pub fn official() -> Result<Self, SourceError> {
        Self::new(DEFAULT_RELEASES_URL)
    }
}

#[async_trait::async_trait]
impl ReleaseSource for HttpReleaseSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch_page(&self) -> Result<String, SourceError> {
        debug!("Fetching releases page {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();

        if !status.is_success() {
            warn!("Releases page returned status {}: {}", status, self.url);
            return Err(SourceError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.text().await.inspect_err(|e| {
            warn!("Failed to read releases page body: {}", e);
        })?;

        if body.trim().is_empty() {
            return Err(SourceError::EmptyBody(self.url.clone()));
        }

        debug!("Fetched {} bytes from {}", body.len(), self.url);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn fetch_page_returns_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/download/releases/")
            .with_status(200)
            .with_header("content-type", "text/html; charset=UTF-8")
            .with_body(r#"<a href="https://wordpress.org/wordpress-5.2.1.zip">zip</a>"#)
            .create_async()
            .await;

        let source =
            HttpReleaseSource::new(&format!("{}/download/releases/", server.url())).unwrap();
        let body = source.fetch_page().await.unwrap();

        mock.assert_async().await;
        assert!(body.contains("wordpress-5.2.1.zip"));
    }

    #[tokio::test]
    async fn fetch_page_returns_unexpected_status_for_server_error() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/download/releases/")
            .with_status(503)
            .create_async()
            .await;

        let source =
            HttpReleaseSource::new(&format!("{}/download/releases/", server.url())).unwrap();
        let result = source.fetch_page().await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(SourceError::UnexpectedStatus { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn fetch_page_returns_empty_body_error_for_blank_page() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/download/releases/")
            .with_status(200)
            .with_body("  \n")
            .create_async()
            .await;

        let source =
            HttpReleaseSource::new(&format!("{}/download/releases/", server.url())).unwrap();
        let result = source.fetch_page().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(SourceError::EmptyBody(_))));
    }

    #[test]
    fn official_source_points_at_wordpress_releases_page() {
        let source = HttpReleaseSource::official().unwrap();

        assert_eq!(source.describe(), "https://wordpress.org/download/releases/");
    }
}
