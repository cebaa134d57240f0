//! Element domain types
//!
//! Elements are the two kinds of buildable units: bundles (plugins and
//! fragments) and features.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Version written in references to mean "whatever is available"
pub const GENERIC_VERSION: &str = "0.0.0";

/// Kind of a buildable element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// A plugin or a fragment
    Bundle,
    /// A feature
    Feature,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Bundle => write!(f, "bundle"),
            ElementKind::Feature => write!(f, "feature"),
        }
    }
}

/// A typed request for one element, as written by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRequest {
    pub kind: ElementKind,
    pub id: String,
    /// `None` resolves to whatever version the site offers
    pub version: Option<String>,
}

impl ElementRequest {
    pub fn bundle(id: impl Into<String>, version: Option<String>) -> Self {
        Self {
            kind: ElementKind::Bundle,
            id: id.into(),
            version,
        }
    }

    pub fn feature(id: impl Into<String>, version: Option<String>) -> Self {
        Self {
            kind: ElementKind::Feature,
            id: id.into(),
            version,
        }
    }
}

/// Renders the request as an element token the classifier accepts
impl fmt::Display for ElementRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            ElementKind::Bundle => "plugin",
            ElementKind::Feature => "feature",
        };
        match &self.version {
            Some(version) => write!(f, "{kind}@{}:{version}", self.id),
            None => write!(f, "{kind}@{}", self.id),
        }
    }
}

/// A concrete, resolved element identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VersionedId {
    pub id: String,
    pub version: String,
}

impl VersionedId {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for VersionedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.id, self.version)
    }
}

/// Drop versions that carry no constraint (empty or the generic `0.0.0`)
pub fn requested_version(version: Option<&str>) -> Option<&str> {
    version
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != GENERIC_VERSION)
}

/// Compare two dotted version strings
///
/// Numeric segments compare numerically, anything else lexically; a version
/// with extra segments sorts after its prefix (`1.2` < `1.2.0`).
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ordering = match (l.parse::<u64>(), r.parse::<u64>()) {
                    (Ok(l), Ok(r)) => l.cmp(&r),
                    _ => l.cmp(r),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}
