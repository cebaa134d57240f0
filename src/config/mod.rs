//! Build configuration file handling
//!
//! This module contains data structures for `featurepack.yaml`:
//! - where the site and the output directory are
//! - which platform configurations are active
//! - which elements `generate` builds, and with which switches
//! - what `package` bundles into the final archive
//!
//! Every field is optional; command-line values override file values.

pub mod options;
pub mod packaging;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::classifier::parse_element;
use crate::domain::PlatformConfig;
use crate::error::Result;
use crate::error::config::{invalid, not_found, parse_failed};
use crate::error::fs::read_failed;

pub use options::BuildOptions;
pub use packaging::PackagingConfig;

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "featurepack.yaml";

/// Build configuration from featurepack.yaml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Site root holding `features/` and `bundles/`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<PathBuf>,

    /// Directory scripts are written to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Active platform configurations
    pub configs: Vec<PlatformConfig>,

    /// Element tokens built by `generate`
    pub elements: Vec<String>,

    pub options: BuildOptions,

    pub packaging: PackagingConfig,
}

impl BuildConfig {
    /// Parse build configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file does not exist and
    /// `ConfigParseFailed` (carrying the path) if it does not parse.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;
        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| parse_failed(path.display().to_string(), e.to_string()))?;
        config.validate()?;

        log::debug!("Loaded build configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` when given, else `featurepack.yaml` in `dir` when present, else defaults
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let default_path = dir.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            Self::from_file(&default_path)
        } else {
            log::debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate build configuration
    pub fn validate(&self) -> Result<()> {
        for token in &self.elements {
            parse_element(token)?;
        }

        if self.packaging.features.iter().any(|f| f.trim().is_empty()) {
            return Err(invalid("packaging.features contains an empty feature id"));
        }

        Ok(())
    }

    /// Configured platform configurations, or `*,*,*` when none are listed
    pub fn active_configs(&self) -> Vec<PlatformConfig> {
        if self.configs.is_empty() {
            vec![PlatformConfig::any()]
        } else {
            self.configs.clone()
        }
    }
}
