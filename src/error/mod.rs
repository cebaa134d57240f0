//! Error types and handling for featurepack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`element`]: Element token and platform configuration errors
//! - [`resolve`]: Feature and bundle resolution errors
//! - [`script`]: Script writer errors
//! - [`config`]: Build configuration and site errors
//! - [`fs`]: File system errors

pub mod config;
pub mod element;
pub mod fs;
pub mod resolve;
pub mod script;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for featurepack operations
#[derive(Error, Diagnostic, Debug)]
pub enum BuildError {
    // Element errors
    #[error("Malformed element '{token}': {reason}")]
    #[diagnostic(
        code(featurepack::element::malformed),
        help("Elements are written as <kind>@<id>[:<version>] with kind plugin, fragment or feature")
    )]
    MalformedElementSpec { token: String, reason: String },

    #[error("Invalid platform configuration '{input}': {reason}")]
    #[diagnostic(
        code(featurepack::element::invalid_config),
        help("Use three comma-separated axes such as linux,gtk,x86_64 (* for any)")
    )]
    InvalidPlatformConfig { input: String, reason: String },

    // Resolution errors
    #[error("Feature '{id}' ({version}) not found")]
    #[diagnostic(
        code(featurepack::resolve::feature_missing),
        help("Check that the feature is present in the site, or mark the reference optional")
    )]
    FeatureMissing {
        id: String,
        version: String,
        optional: bool,
    },

    #[error("Bundle '{id}' ({version}) not found")]
    #[diagnostic(
        code(featurepack::resolve::bundle_missing),
        help("Check that the bundle is present in the site")
    )]
    BundleMissing { id: String, version: String },

    #[error("Feature '{id}' exceeds the maximum include depth of {limit}")]
    #[diagnostic(code(featurepack::resolve::recursion_limit))]
    RecursionLimitExceeded { id: String, limit: usize },

    #[error("No active platform configuration")]
    #[diagnostic(
        code(featurepack::resolve::no_config),
        help("Pass at least one --config or list configs in the build configuration file")
    )]
    NoActiveConfiguration,

    // Script errors
    #[error("Failed to generate script for '{element}': {reason}")]
    #[diagnostic(code(featurepack::script::generation_failed))]
    ScriptGenerationFailed { element: String, reason: String },

    #[error("Unknown archive format: {format}")]
    #[diagnostic(
        code(featurepack::script::archive_format),
        help("Supported formats: zip, antZip, tar, folder")
    )]
    InvalidArchiveFormat { format: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(featurepack::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(featurepack::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(featurepack::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Site not found at: {path}")]
    #[diagnostic(
        code(featurepack::config::site_not_found),
        help("A site is a directory with features/ and bundles/ descriptor files")
    )]
    SiteNotFound { path: String },

    #[error("Invalid site descriptor {path}: {reason}")]
    #[diagnostic(code(featurepack::config::site_invalid))]
    SiteInvalid { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(featurepack::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(featurepack::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(featurepack::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for BuildError {
    fn from(err: std::io::Error) -> Self {
        BuildError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for BuildError {
    fn from(err: serde_yaml::Error) -> Self {
        BuildError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for BuildError {
    fn from(err: serde_json::Error) -> Self {
        BuildError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BuildError>;
