//! Test fixtures shared by unit tests
//!
//! - [`create_temp_dir`]: scratch directory removed on drop
//! - [`RecordingWriter`]: a [`ScriptWriter`] that records every call instead
//!   of writing files, and can be told to fail for one element
//! - [`write_site`]: lays out a YAML site directory on disk
//!
//! ```ignore
//! use crate::test_fixtures::{Emitted, RecordingWriter};
//!
//! let mut writer = RecordingWriter::default();
//! // ... run the resolver ...
//! assert_eq!(writer.count_features(), 2);
//! ```

use std::path::Path;

use tempfile::TempDir;

use crate::assembly::ManifestSlice;
use crate::domain::{BundleDescriptor, FeatureDescriptor, VersionedId};
use crate::error::Result;
use crate::error::script::generation_failed;
use crate::script::{AssembleRequest, ScriptWriter};

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// One recorded writer call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emitted {
    Bundle(VersionedId),
    Feature(VersionedId),
    Assemble(VersionedId, Vec<ManifestSlice>),
    Packaging(AssembleRequest),
}

/// Script writer that records calls in order
#[derive(Debug, Default)]
pub struct RecordingWriter {
    pub emitted: Vec<Emitted>,
    fail_on: Option<String>,
}

impl RecordingWriter {
    /// Writer that fails whenever asked to script the element with this id
    pub fn failing_on(id: &str) -> Self {
        Self {
            emitted: Vec::new(),
            fail_on: Some(id.to_string()),
        }
    }

    fn check(&self, id: &str) -> Result<()> {
        if self.fail_on.as_deref() == Some(id) {
            return Err(generation_failed(id, "injected failure"));
        }
        Ok(())
    }

    pub fn bundle_ids(&self) -> Vec<&str> {
        self.emitted
            .iter()
            .filter_map(|e| match e {
                Emitted::Bundle(vid) => Some(vid.id.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn feature_ids(&self) -> Vec<&str> {
        self.emitted
            .iter()
            .filter_map(|e| match e {
                Emitted::Feature(vid) => Some(vid.id.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn assembled(&self) -> Vec<&str> {
        self.emitted
            .iter()
            .filter_map(|e| match e {
                Emitted::Assemble(vid, _) => Some(vid.id.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn packaging_requests(&self) -> Vec<&AssembleRequest> {
        self.emitted
            .iter()
            .filter_map(|e| match e {
                Emitted::Packaging(request) => Some(request),
                _ => None,
            })
            .collect()
    }
}

impl ScriptWriter for RecordingWriter {
    fn bundle_script(&mut self, bundle: &BundleDescriptor) -> Result<()> {
        self.check(&bundle.id)?;
        self.emitted.push(Emitted::Bundle(bundle.versioned_id()));
        Ok(())
    }

    fn feature_script(&mut self, feature: &FeatureDescriptor) -> Result<()> {
        self.check(&feature.id)?;
        self.emitted.push(Emitted::Feature(feature.versioned_id()));
        Ok(())
    }

    fn assemble_script(
        &mut self,
        feature: &FeatureDescriptor,
        slices: &[ManifestSlice],
    ) -> Result<()> {
        self.check(&feature.id)?;
        self.emitted
            .push(Emitted::Assemble(feature.versioned_id(), slices.to_vec()));
        Ok(())
    }

    fn packaging_script(&mut self, request: &AssembleRequest) -> Result<()> {
        self.emitted.push(Emitted::Packaging(request.clone()));
        Ok(())
    }
}

/// Write descriptors as a site directory under `root`
///
/// # Panics
///
/// Panics if a descriptor cannot be serialized or written.
pub fn write_site(root: &Path, features: &[FeatureDescriptor], bundles: &[BundleDescriptor]) {
    let features_dir = root.join("features");
    let bundles_dir = root.join("bundles");
    std::fs::create_dir_all(&features_dir).expect("Failed to create features dir");
    std::fs::create_dir_all(&bundles_dir).expect("Failed to create bundles dir");

    for feature in features {
        let yaml = serde_yaml::to_string(feature).expect("Failed to serialize feature");
        std::fs::write(features_dir.join(format!("{}.yaml", feature.versioned_id())), yaml)
            .expect("Failed to write feature");
    }
    for bundle in bundles {
        let yaml = serde_yaml::to_string(bundle).expect("Failed to serialize bundle");
        std::fs::write(bundles_dir.join(format!("{}.yaml", bundle.versioned_id())), yaml)
            .expect("Failed to write bundle");
    }
}
