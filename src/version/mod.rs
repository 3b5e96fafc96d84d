//! Version validation layer for WordPress release versions
//!
//! WordPress has published releases under several numbering shapes over the
//! years (`1.5.1.3`, `4.0`, `5.2-beta1`, `5.2-RC2`), none of which are strict
//! semver. This module normalizes them the way Composer does so that release
//! archives can be validated, ordered and classified.
//!
//! # Modules
//!
//! - [`semver`]: Parsing, normalization, precedence and stability classification
//! - [`error`]: Error type for version parsing

pub mod error;
pub mod semver;

pub use error::VersionError;
pub use semver::{Stability, Version, compare_versions, is_version, parse_version, stability};
