//! Element token and platform configuration errors

use super::BuildError;

/// Creates a malformed element error
pub fn malformed(token: impl Into<String>, reason: impl Into<String>) -> BuildError {
    BuildError::MalformedElementSpec {
        token: token.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid platform configuration error
pub fn invalid_config(input: impl Into<String>, reason: impl Into<String>) -> BuildError {
    BuildError::InvalidPlatformConfig {
        input: input.into(),
        reason: reason.into(),
    }
}
