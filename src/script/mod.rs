//! Script writers
//!
//! The closure resolver and the packager never produce script text
//! themselves; they hand resolved descriptors and manifest slices to a
//! [`ScriptWriter`]. [`ScriptDirectory`] is the file-backed implementation
//! used by the CLI.
//!
//! Writer failures surface as `ScriptGenerationFailed` and abort the run.

pub mod archive;
pub mod directory;

pub use archive::{ArchiveFormat, AssembleRequest};
pub use directory::ScriptDirectory;

use crate::assembly::ManifestSlice;
use crate::domain::{BundleDescriptor, FeatureDescriptor};
use crate::error::Result;

/// Flags that change the text of generated scripts, not which scripts are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptOptions {
    /// Add signing steps for bundle and feature jars
    pub sign: bool,
    /// Add JNLP manifest generation for features
    pub generate_jnlp: bool,
    /// End assemble scripts with an archive step
    pub generate_archive: bool,
    /// Stay silent about bundles without build properties
    pub ignore_missing_properties_file: bool,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            sign: false,
            generate_jnlp: false,
            generate_archive: true,
            ignore_missing_properties_file: false,
        }
    }
}

/// Consumer of resolved elements that emits build and packaging scripts
pub trait ScriptWriter {
    /// Build script for one bundle
    fn bundle_script(&mut self, bundle: &BundleDescriptor) -> Result<()>;

    /// Build script for one feature
    fn feature_script(&mut self, feature: &FeatureDescriptor) -> Result<()>;

    /// Assembly script for a feature, given the manifest of each of its configurations
    fn assemble_script(&mut self, feature: &FeatureDescriptor, slices: &[ManifestSlice])
    -> Result<()>;

    /// Final packaging script for one configuration
    fn packaging_script(&mut self, request: &AssembleRequest) -> Result<()>;
}
