//! Build configuration and site errors

use super::BuildError;

/// Creates a configuration not found error
pub fn not_found(path: impl Into<String>) -> BuildError {
    BuildError::ConfigNotFound { path: path.into() }
}

/// Creates a configuration parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> BuildError {
    BuildError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid configuration error
pub fn invalid(message: impl Into<String>) -> BuildError {
    BuildError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a site not found error
pub fn site_not_found(path: impl Into<String>) -> BuildError {
    BuildError::SiteNotFound { path: path.into() }
}

/// Creates an invalid site descriptor error
pub fn site_invalid(path: impl Into<String>, reason: impl Into<String>) -> BuildError {
    BuildError::SiteInvalid {
        path: path.into(),
        reason: reason.into(),
    }
}
