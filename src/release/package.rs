//! Rendered manifest entry for a single release

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const CORE_INSTALLER: &str = "roots/wordpress-core-installer";
pub const CORE_INSTALLER_CONSTRAINT: &str = ">=1.0.0";
pub const PACKAGE_TYPE: &str = "wordpress-core";
pub const DESCRIPTION: &str =
    "WordPress is web software you can use to create a beautiful website or blog.";
pub const HOMEPAGE: &str = "http://wordpress.org/";
pub const LICENSE: &str = "GPL-2.0-or-later";
const KEYWORDS: [&str; 3] = ["wordpress", "blog", "cms"];

/// One `package` entry of a Composer repository
///
/// Field order matches the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageEntry {
    pub name: String,
    pub version: String,
    pub dist: Dist,
    pub require: BTreeMap<String, String>,
    #[serde(rename = "type")]
    pub package_type: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub homepage: String,
    pub license: String,
    pub authors: Vec<Author>,
    pub support: Support,
}

/// Downloadable archive descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dist {
    pub url: String,
    #[serde(rename = "type")]
    pub dist_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub homepage: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Support {
    pub issues: String,
    pub forum: String,
    pub wiki: String,
    pub irc: String,
    pub source: String,
}

impl PackageEntry {
    /// Build an entry with the fixed WordPress core metadata
    pub fn wordpress_core(name: &str, version: &str, dist_url: &str, dist_type: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            dist: Dist {
                url: dist_url.to_string(),
                dist_type: dist_type.to_string(),
            },
            require: BTreeMap::from([(
                CORE_INSTALLER.to_string(),
                CORE_INSTALLER_CONSTRAINT.to_string(),
            )]),
            package_type: PACKAGE_TYPE.to_string(),
            description: DESCRIPTION.to_string(),
            keywords: KEYWORDS.iter().map(|k| k.to_string()).collect(),
            homepage: HOMEPAGE.to_string(),
            license: LICENSE.to_string(),
            authors: vec![Author {
                name: "WordPress Community".to_string(),
                homepage: "http://wordpress.org/about/".to_string(),
            }],
            support: Support {
                issues: "http://core.trac.wordpress.org/".to_string(),
                forum: "http://wordpress.org/support/".to_string(),
                wiki: "http://codex.wordpress.org/".to_string(),
                irc: "irc://irc.freenode.net/wordpress".to_string(),
                source: "http://core.trac.wordpress.org/browser".to_string(),
            },
        }
    }
}
