//! Site repository
//!
//! A site is where element ids are resolved to concrete descriptors. The
//! resolver only depends on the [`Repository`] trait; [`Site`] is the
//! in-memory implementation, loaded from a directory of YAML descriptors by
//! [`Site::load`].
//!
//! ## Lookup rules
//!
//! - With a version, the descriptor with exactly that version wins.
//! - Without a version (or with the generic `0.0.0`), the highest version wins.
//! - There is no range matching and no backtracking.

pub mod loader;

use crate::domain::element::{compare_versions, requested_version};
use crate::domain::{BundleDescriptor, FeatureDescriptor};
use crate::error::Result;
use crate::error::resolve::{bundle_missing, feature_missing};

/// Source of feature and bundle metadata
pub trait Repository {
    /// Resolve a feature
    ///
    /// # Errors
    ///
    /// Returns `FeatureMissing` when no descriptor matches.
    fn feature(&self, id: &str, version: Option<&str>) -> Result<FeatureDescriptor>;

    /// Resolve a bundle
    ///
    /// # Errors
    ///
    /// Returns `BundleMissing` when no descriptor matches.
    fn bundle(&self, id: &str, version: Option<&str>) -> Result<BundleDescriptor>;
}

/// In-memory site holding feature and bundle descriptors
#[derive(Debug, Clone, Default)]
pub struct Site {
    features: Vec<FeatureDescriptor>,
    bundles: Vec<BundleDescriptor>,
}

impl Site {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_feature(mut self, feature: FeatureDescriptor) -> Self {
        self.add_feature(feature);
        self
    }

    #[must_use]
    pub fn with_bundle(mut self, bundle: BundleDescriptor) -> Self {
        self.add_bundle(bundle);
        self
    }

    pub fn add_feature(&mut self, feature: FeatureDescriptor) {
        self.features.push(feature);
    }

    pub fn add_bundle(&mut self, bundle: BundleDescriptor) {
        self.bundles.push(bundle);
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    pub fn bundle_count(&self) -> usize {
        self.bundles.len()
    }
}

/// Pick the descriptor matching `version`, or the highest one when unversioned
fn select<'a, T>(
    candidates: impl Iterator<Item = &'a T>,
    version: Option<&str>,
    version_of: impl Fn(&T) -> &str,
) -> Option<&'a T> {
    match requested_version(version) {
        Some(wanted) => candidates.into_iter().find(|c| version_of(*c) == wanted),
        None => candidates.max_by(|a, b| compare_versions(version_of(*a), version_of(*b))),
    }
}

impl Repository for Site {
    fn feature(&self, id: &str, version: Option<&str>) -> Result<FeatureDescriptor> {
        select(
            self.features.iter().filter(|f| f.id == id),
            version,
            |f| f.version.as_str(),
        )
        .cloned()
        .ok_or_else(|| feature_missing(id, requested_version(version), false))
    }

    fn bundle(&self, id: &str, version: Option<&str>) -> Result<BundleDescriptor> {
        select(
            self.bundles.iter().filter(|b| b.id == id),
            version,
            |b| b.version.as_str(),
        )
        .cloned()
        .ok_or_else(|| bundle_missing(id, requested_version(version)))
    }
}
