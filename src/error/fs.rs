//! File system errors

use super::BuildError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> BuildError {
    BuildError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> BuildError {
    BuildError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
