use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::version::error::VersionError;

/// Classical Composer version shape: up to four numeric segments, an optional
/// modifier with a numeric tail, and an optional trailing `dev` marker.
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^v?(\d{1,5})(\.\d+)?(\.\d+)?(\.\d+)?[._-]?(?:(stable|beta|b|rc|alpha|a|patch|pl|p)((?:[.-]?\d+)*)?)?([.-]?dev)?$",
    )
    .expect("version regex is valid")
});

/// Maturity of a version, from least to most mature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Dev,
    Alpha,
    Beta,
    RC,
    Stable,
}

impl Stability {
    /// Returns the string Composer uses for this stability flag
    pub fn as_str(&self) -> &'static str {
        match self {
            Stability::Dev => "dev",
            Stability::Alpha => "alpha",
            Stability::Beta => "beta",
            Stability::RC => "RC",
            Stability::Stable => "stable",
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Modifier attached after the numeric release segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Modifier {
    Alpha,
    Beta,
    Rc,
    Patch,
}

impl Modifier {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "a" | "alpha" => Some(Modifier::Alpha),
            "b" | "beta" => Some(Modifier::Beta),
            "rc" => Some(Modifier::Rc),
            "p" | "pl" | "patch" => Some(Modifier::Patch),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Modifier::Alpha => "alpha",
            Modifier::Beta => "beta",
            Modifier::Rc => "RC",
            Modifier::Patch => "patch",
        }
    }

    /// Rank on the shared dev/alpha/beta/RC/stable/patch scale
    fn rank(&self) -> u8 {
        match self {
            Modifier::Alpha => 1,
            Modifier::Beta => 2,
            Modifier::Rc => 3,
            Modifier::Patch => 5,
        }
    }
}

const DEV_RANK: u8 = 0;
const STABLE_RANK: u8 = 4;

/// A normalized release version.
///
/// Partial versions are padded with zeros, so `4`, `4.0` and `4.0.0.0` are
/// the same version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    release: [u64; 4],
    modifier: Option<(Modifier, Vec<u64>)>,
    dev: bool,
}

impl Version {
    /// Numeric release segments (major, minor, patch, build)
    pub fn release(&self) -> [u64; 4] {
        self.release
    }

    /// Maturity classification; any `dev` marker wins over the modifier
    pub fn stability(&self) -> Stability {
        if self.dev {
            return Stability::Dev;
        }
        match &self.modifier {
            Some((Modifier::Alpha, _)) => Stability::Alpha,
            Some((Modifier::Beta, _)) => Stability::Beta,
            Some((Modifier::Rc, _)) => Stability::RC,
            Some((Modifier::Patch, _)) | None => Stability::Stable,
        }
    }

    pub fn is_stable(&self) -> bool {
        self.stability() == Stability::Stable
    }

    /// Canonical four-segment form, e.g. `5.2.0.0-beta1`
    pub fn normalized(&self) -> String {
        self.to_string()
    }

    fn rank(&self) -> u8 {
        match &self.modifier {
            Some((modifier, _)) => modifier.rank(),
            None if self.dev => DEV_RANK,
            None => STABLE_RANK,
        }
    }

    fn modifier_numbers(&self) -> &[u64] {
        self.modifier
            .as_ref()
            .map(|(_, numbers)| numbers.as_slice())
            .unwrap_or_default()
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.release
            .cmp(&other.release)
            .then_with(|| self.rank().cmp(&other.rank()))
            .then_with(|| self.modifier_numbers().cmp(other.modifier_numbers()))
            // A trailing -dev marker sorts below the same version without it
            .then_with(|| other.dev.cmp(&self.dev))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [major, minor, patch, build] = self.release;
        write!(f, "{major}.{minor}.{patch}.{build}")?;
        if let Some((modifier, numbers)) = &self.modifier {
            write!(f, "-{}", modifier.as_str())?;
            let tail: Vec<String> = numbers.iter().map(u64::to_string).collect();
            f.write_str(&tail.join("."))?;
        }
        if self.dev {
            f.write_str("-dev")?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}

/// Parse a version string into a [`Version`], normalizing partial versions.
///
/// Accepts a leading `v`, and drops `+build` metadata.
///
/// Examples:
/// - "4" -> 4.0.0.0
/// - "5.2-beta1" -> 5.2.0.0-beta1
/// - "1.5.1.3" -> 1.5.1.3
pub fn parse_version(version: &str) -> Result<Version, VersionError> {
    let trimmed = version.trim();
    if trimmed.is_empty() {
        return Err(VersionError::Empty);
    }

    let without_build = match trimmed.split_once('+') {
        Some((head, meta)) if !head.is_empty() && !meta.is_empty() => head,
        _ => trimmed,
    };

    let invalid = || VersionError::Invalid(version.to_string());
    let captures = VERSION_RE.captures(without_build).ok_or_else(invalid)?;

    let mut release = [0u64; 4];
    for (slot, index) in release.iter_mut().zip(1..=4) {
        if let Some(segment) = captures.get(index) {
            *slot = segment
                .as_str()
                .trim_start_matches('.')
                .parse()
                .map_err(|_| invalid())?;
        }
    }

    // An explicit "stable" modifier carries no information
    let modifier = match captures.get(5).and_then(|m| Modifier::parse(m.as_str())) {
        Some(modifier) => {
            let numbers = captures
                .get(6)
                .map(|m| parse_modifier_numbers(m.as_str()))
                .transpose()
                .map_err(|_| invalid())?
                .unwrap_or_default();
            Some((modifier, numbers))
        }
        None => None,
    };

    Ok(Version {
        release,
        modifier,
        dev: captures.get(7).is_some(),
    })
}

fn parse_modifier_numbers(tail: &str) -> Result<Vec<u64>, std::num::ParseIntError> {
    tail.split(['.', '-'])
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}

/// Returns true if the string normalizes to a valid version
pub fn is_version(version: &str) -> bool {
    parse_version(version).is_ok()
}

/// Compare two version strings by precedence
pub fn compare_versions(a: &str, b: &str) -> Result<Ordering, VersionError> {
    Ok(parse_version(a)?.cmp(&parse_version(b)?))
}

/// Classify the maturity of a version string
pub fn stability(version: &str) -> Result<Stability, VersionError> {
    parse_version(version).map(|v| v.stability())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("4", "4.0.0.0")]
    #[case("4.0", "4.0.0.0")]
    #[case("5.2.1", "5.2.1.0")]
    #[case("1.5.1.3", "1.5.1.3")]
    #[case("v5.2.1", "5.2.1.0")]
    #[case("5.2-beta1", "5.2.0.0-beta1")]
    #[case("5.2-RC2", "5.2.0.0-RC2")]
    #[case("5.2-rc2", "5.2.0.0-RC2")]
    #[case("3.0-alpha", "3.0.0.0-alpha")]
    #[case("1.0a1", "1.0.0.0-alpha1")]
    #[case("1.0-b2", "1.0.0.0-beta2")]
    #[case("1.0.0-pl1", "1.0.0.0-patch1")]
    #[case("1.0-stable", "1.0.0.0")]
    #[case("1.0-dev", "1.0.0.0-dev")]
    #[case("1.0-beta1-dev", "1.0.0.0-beta1-dev")]
    #[case("1.0.0+build.5", "1.0.0.0")]
    #[case(" 5.2.1 ", "5.2.1.0")]
    fn parse_version_normalizes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse_version(input).unwrap().normalized(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("mu-2.9")]
    #[case("5.2.1-IIS")]
    #[case("5.2.1-no-content")]
    #[case("5.2.1-new-bundled")]
    #[case("1.2.3.4.5")]
    #[case("latest")]
    #[case("123456.0")]
    fn is_version_rejects_malformed(#[case] input: &str) {
        assert!(!is_version(input));
    }

    #[test]
    fn parse_version_reports_empty_input() {
        assert_eq!(parse_version(""), Err(VersionError::Empty));
    }

    #[rstest]
    #[case("5.2-beta1", "5.2.1", Ordering::Less)]
    #[case("5.1", "5.2-beta1", Ordering::Less)]
    #[case("5.2-beta1", "5.2", Ordering::Less)]
    #[case("5.2-alpha", "5.2-beta1", Ordering::Less)]
    #[case("5.2-beta2", "5.2-RC1", Ordering::Less)]
    #[case("5.2-beta", "5.2-beta1", Ordering::Less)]
    #[case("5.2-dev", "5.2-alpha", Ordering::Less)]
    #[case("5.2-beta1-dev", "5.2-beta1", Ordering::Less)]
    #[case("5.2", "5.2-patch1", Ordering::Less)]
    #[case("4.9.10", "4.9.9", Ordering::Greater)]
    #[case("5.10", "5.9", Ordering::Greater)]
    #[case("1.5.1.3", "1.5.1", Ordering::Greater)]
    #[case("4", "4.0.0", Ordering::Equal)]
    #[case("5.2", "5.2.0.0", Ordering::Equal)]
    fn compare_versions_uses_precedence(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_versions(a, b).unwrap(), expected);
        assert_eq!(compare_versions(b, a).unwrap(), expected.reverse());
    }

    #[test]
    fn compare_versions_fails_on_invalid_input() {
        assert!(matches!(
            compare_versions("5.2", "not-a-version"),
            Err(VersionError::Invalid(_))
        ));
    }

    #[rstest]
    #[case("5.2.1", Stability::Stable)]
    #[case("5.2-patch1", Stability::Stable)]
    #[case("5.2-RC1", Stability::RC)]
    #[case("5.2-beta1", Stability::Beta)]
    #[case("5.2-b1", Stability::Beta)]
    #[case("3.0-alpha", Stability::Alpha)]
    #[case("5.2-dev", Stability::Dev)]
    #[case("5.2-beta1-dev", Stability::Dev)]
    fn stability_classifies_modifier(#[case] input: &str, #[case] expected: Stability) {
        assert_eq!(stability(input).unwrap(), expected);
    }

    #[test]
    fn bare_major_boundary_includes_dot_zero_and_excludes_its_prereleases() {
        let boundary = parse_version("4").unwrap();

        assert!(parse_version("4.0").unwrap() >= boundary);
        assert!(parse_version("4.0.1").unwrap() >= boundary);
        assert!(parse_version("4.0-beta1").unwrap() < boundary);
        assert!(parse_version("3.9.2").unwrap() < boundary);
    }
}
