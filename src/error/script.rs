//! Script writer errors

use super::BuildError;

/// Creates a script generation error
pub fn generation_failed(element: impl Into<String>, reason: impl Into<String>) -> BuildError {
    BuildError::ScriptGenerationFailed {
        element: element.into(),
        reason: reason.into(),
    }
}

/// Creates an unknown archive format error
pub fn invalid_archive_format(format: impl Into<String>) -> BuildError {
    BuildError::InvalidArchiveFormat {
        format: format.into(),
    }
}
