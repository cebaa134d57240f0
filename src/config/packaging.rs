//! The `packaging:` section of featurepack.yaml

use serde::{Deserialize, Serialize};

use crate::packager::PackageRequest;
use crate::script::ArchiveFormat;

/// What the `package` command bundles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackagingConfig {
    /// Top-level feature ids
    pub features: Vec<String>,
    pub root_files: Vec<String>,
    pub root_dirs: Vec<String>,
    pub archive_format: ArchiveFormat,
    pub ignored_features: Vec<String>,
}

impl PackagingConfig {
    pub fn to_request(&self) -> PackageRequest {
        PackageRequest {
            features: self.features.clone(),
            root_files: self.root_files.clone(),
            root_dirs: self.root_dirs.clone(),
            archive_format: self.archive_format,
            ignored_features: self.ignored_features.clone(),
        }
    }
}
