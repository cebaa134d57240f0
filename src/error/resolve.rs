//! Feature and bundle resolution errors

use super::BuildError;

fn describe_version(version: Option<&str>) -> String {
    version.map_or_else(|| "any version".to_string(), str::to_string)
}

/// Creates a feature missing error
pub fn feature_missing(id: impl Into<String>, version: Option<&str>, optional: bool) -> BuildError {
    BuildError::FeatureMissing {
        id: id.into(),
        version: describe_version(version),
        optional,
    }
}

/// Creates a bundle missing error
pub fn bundle_missing(id: impl Into<String>, version: Option<&str>) -> BuildError {
    BuildError::BundleMissing {
        id: id.into(),
        version: describe_version(version),
    }
}

/// Creates a recursion limit error
pub fn recursion_limit(id: impl Into<String>, limit: usize) -> BuildError {
    BuildError::RecursionLimitExceeded {
        id: id.into(),
        limit,
    }
}
