//! Release archive URL policy
//!
//! A candidate is a release archive only when it is an `https` URL on the
//! canonical host, written in lowercase exactly as served, whose basename is `wordpress-<version>.zip`, is not one of
//! the legacy WordPress MU or IIS builds, and carries a valid version.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;
use url::Url;

use crate::version::is_version;

/// Host that serves official release archives
pub const RELEASE_HOST: &str = "wordpress.org";

const REQUIRED_SCHEME: &str = "https";
const BASENAME_PREFIX: &str = "wordpress-";
const BASENAME_SUFFIX: &str = ".zip";
const BLOCKED_PREFIX: &str = "wordpress-mu";
const BLOCKED_SUFFIX: &str = "-IIS.zip";

static BASENAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^wordpress-(?<version>.+)\.zip$").expect("basename regex is valid")
});

/// Check whether a URL points at a WordPress core release archive
pub fn is_valid_release_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };

    if written_authority(url) != Some(RELEASE_HOST) || parsed.host_str() != Some(RELEASE_HOST) {
        trace!("Rejected {}: not an {} URL on {}", url, REQUIRED_SCHEME, RELEASE_HOST);
        return false;
    }

    let Some(basename) = basename(&parsed) else {
        return false;
    };

    if !basename.starts_with(BASENAME_PREFIX) || !basename.ends_with(BASENAME_SUFFIX) {
        return false;
    }

    if basename.starts_with(BLOCKED_PREFIX) || basename.ends_with(BLOCKED_SUFFIX) {
        trace!("Rejected {}: blocked release variant", url);
        return false;
    }

    extract_version(basename).is_some_and(is_version)
}

/// Authority of an `https://` URL as written, before any case folding
///
/// `Url` lowercases the scheme and host, so the raw text is checked to keep
/// `HTTPS://WordPress.org/...` out of the manifest.
fn written_authority(url: &str) -> Option<&str> {
    url.strip_prefix(REQUIRED_SCHEME)?
        .strip_prefix("://")?
        .split(['/', '?', '#'])
        .next()
}

/// Extract the version token from a `wordpress-<version>.zip` basename
///
/// The match is anchored at both ends; anything else yields `None`.
pub fn extract_version(basename: &str) -> Option<&str> {
    BASENAME_RE
        .captures(basename)
        .and_then(|captures| captures.name("version"))
        .map(|m| m.as_str())
}

/// Final non-empty path segment of a URL
pub(crate) fn basename(url: &Url) -> Option<&str> {
    url.path_segments()?
        .next_back()
        .filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://wordpress.org/wordpress-5.2.1.zip")]
    #[case("https://wordpress.org/future/proof/wordpress-5.2.1.zip")]
    #[case("https://wordpress.org/wordpress-1.5.1.3.zip")]
    #[case("https://wordpress.org/wordpress-5.2-beta1.zip")]
    #[case("https://wordpress.org/wordpress-5.2-RC2.zip")]
    #[case("https://wordpress.org/wordpress-4.0.zip?download=1")]
    fn is_valid_release_url_accepts_release_archives(#[case] url: &str) {
        assert!(is_valid_release_url(url), "expected '{url}' to be valid");
    }

    #[rstest]
    #[case("")]
    #[case("not a url")]
    #[case("/wordpress-5.2.1.zip")]
    #[case("https://www.itineris.co.uk/")]
    #[case("https://wordpress.org/")]
    #[case("https://wordpress.org/completely-unrelated.zip")]
    #[case("http://wordpress.org/wordpress-5.2.1.zip")]
    #[case("ftp://wordpress.org/wordpress-5.2.1.zip")]
    #[case("https://downloads.wordpress.org/wordpress-5.2.1.zip")]
    #[case("https://wordpress.org.evil.com/wordpress-5.2.1.zip")]
    #[case("https://wordpress.org/wordpress-5.2.1.tar.gz")]
    #[case("https://wordpress.org/wordpress-5.2.1.zip.md5")]
    #[case("https://wordpress.org/wordpress-5.2.1.zip/")]
    #[case("https://wordpress.org/wordpress-.zip")]
    #[case("https://wordpress.org/wordpress-latest.zip")]
    #[case("https://wordpress.org/wordpress-5.2.1-no-content.zip")]
    #[case("https://wordpress.org/xwordpress-5.2.1.zip")]
    #[case("HTTPS://WordPress.org/wordpress-5.2.1.zip")]
    #[case("HTTPS://wordpress.org/wordpress-5.2.1.zip")]
    #[case("https://WordPress.org/wordpress-5.2.1.zip")]
    #[case("https://user@wordpress.org/wordpress-5.2.1.zip")]
    #[case("https://wordpress.org:443/wordpress-5.2.1.zip")]
    fn is_valid_release_url_rejects_non_release_urls(#[case] url: &str) {
        assert!(!is_valid_release_url(url), "expected '{url}' to be invalid");
    }

    #[rstest]
    #[case("https://wordpress.org/wordpress-mu-2.9.2.zip")]
    #[case("https://wordpress.org/wordpress-mu-1.0.zip")]
    #[case("https://wordpress.org/wordpress-2.0.5-IIS.zip")]
    fn is_valid_release_url_rejects_blocked_variants(#[case] url: &str) {
        assert!(!is_valid_release_url(url), "expected '{url}' to be invalid");
    }

    #[rstest]
    #[case("https://wordpress.org/wordpress-5.2.1.zip", Some("wordpress.org"))]
    #[case("https://wordpress.org?x=1", Some("wordpress.org"))]
    #[case("https://WordPress.org/", Some("WordPress.org"))]
    #[case("HTTPS://wordpress.org/", None)]
    #[case("http://wordpress.org/", None)]
    fn written_authority_keeps_original_case(#[case] url: &str, #[case] expected: Option<&str>) {
        assert_eq!(written_authority(url), expected);
    }

    #[rstest]
    #[case("wordpress-5.2.1.zip", Some("5.2.1"))]
    #[case("wordpress-5.2-beta1.zip", Some("5.2-beta1"))]
    #[case("wordpress-mu-2.9.zip", Some("mu-2.9"))]
    #[case("wordpress-.zip", None)]
    #[case("wordpress-5.2.1.zip.md5", None)]
    #[case("my-wordpress-5.2.1.zip", None)]
    #[case("wordpress-5.2.1.tar.gz", None)]
    fn extract_version_is_anchored(#[case] basename: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_version(basename), expected);
    }
}
