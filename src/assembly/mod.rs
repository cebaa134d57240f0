//! Assembly manifest
//!
//! The assembly manifest records, per platform configuration, which bundles
//! and features must be packaged together. It is filled by the closure
//! resolver and consumed by the assemble and packaging script writers.
//!
//! All operations have set semantics:
//! - adding an element twice leaves one entry
//! - removing an element that was never added is a no-op
//! - iteration order is sorted, so equal inputs give equal output

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::domain::{PlatformConfig, VersionedId};

/// Bundles and features slated for one configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigContents {
    pub bundles: BTreeSet<VersionedId>,
    pub features: BTreeSet<VersionedId>,
}

/// Owned view of the manifest for one configuration, handed to script writers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestSlice {
    pub config: PlatformConfig,
    pub bundles: Vec<VersionedId>,
    pub features: Vec<VersionedId>,
}

/// Per-configuration record of what must be packaged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyManifest {
    entries: BTreeMap<PlatformConfig, ConfigContents>,
}

impl AssemblyManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bundle under `config`; returns `false` if it was already present
    pub fn add_bundle(&mut self, config: &PlatformConfig, bundle: VersionedId) -> bool {
        self.entries
            .entry(config.clone())
            .or_default()
            .bundles
            .insert(bundle)
    }

    /// Add a feature under `config`; returns `false` if it was already present
    pub fn add_feature(&mut self, config: &PlatformConfig, feature: VersionedId) -> bool {
        self.entries
            .entry(config.clone())
            .or_default()
            .features
            .insert(feature)
    }

    /// Remove a feature from `config`
    ///
    /// Safe to call for features (or configurations) never added.
    pub fn remove_feature(&mut self, config: &PlatformConfig, feature: &VersionedId) -> bool {
        self.entries
            .get_mut(config)
            .is_some_and(|contents| contents.features.remove(feature))
    }

    pub fn bundles_for<'a>(
        &'a self,
        config: &PlatformConfig,
    ) -> impl Iterator<Item = &'a VersionedId> + 'a {
        self.entries
            .get(config)
            .into_iter()
            .flat_map(|contents| contents.bundles.iter())
    }

    pub fn features_for<'a>(
        &'a self,
        config: &PlatformConfig,
    ) -> impl Iterator<Item = &'a VersionedId> + 'a {
        self.entries
            .get(config)
            .into_iter()
            .flat_map(|contents| contents.features.iter())
    }

    /// Whether a bundle with this id (any version) is slated for `config`
    pub fn has_bundle(&self, config: &PlatformConfig, id: &str) -> bool {
        self.bundles_for(config).any(|b| b.id == id)
    }

    /// Whether a feature with this id (any version) is slated for `config`
    pub fn has_feature(&self, config: &PlatformConfig, id: &str) -> bool {
        self.features_for(config).any(|f| f.id == id)
    }

    /// Configurations that received at least one element
    pub fn configs(&self) -> impl Iterator<Item = &PlatformConfig> {
        self.entries.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .values()
            .all(|c| c.bundles.is_empty() && c.features.is_empty())
    }

    /// Owned snapshot of one configuration (empty if nothing was added for it)
    pub fn slice(&self, config: &PlatformConfig) -> ManifestSlice {
        ManifestSlice {
            config: config.clone(),
            bundles: self.bundles_for(config).cloned().collect(),
            features: self.features_for(config).cloned().collect(),
        }
    }

    /// Snapshot of every configuration, for reporting
    pub fn slices(&self) -> Vec<ManifestSlice> {
        self.configs().map(|config| self.slice(config)).collect()
    }
}
