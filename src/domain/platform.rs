//! Platform configuration domain type
//!
//! A platform configuration names one build target as an
//! `(os, ws, arch)` triple. Any axis may be the wildcard `*`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BuildError, Result, element::invalid_config};

/// Wildcard axis value
pub const ANY: &str = "*";

/// A target platform configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlatformConfig {
    /// Operating system family (e.g., "linux", "win32")
    pub os: String,
    /// Windowing system (e.g., "gtk", "cocoa")
    pub ws: String,
    /// CPU architecture (e.g., "x86_64")
    pub arch: String,
}

impl PlatformConfig {
    /// Create a configuration; empty axes become wildcards
    pub fn new(os: impl Into<String>, ws: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: axis(os.into()),
            ws: axis(ws.into()),
            arch: axis(arch.into()),
        }
    }

    /// The `*,*,*` configuration
    pub fn any() -> Self {
        Self::new(ANY, ANY, ANY)
    }

    /// Parse `os,ws,arch` (or `os-ws-arch` when no comma is present)
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let separator = if trimmed.contains(',') { ',' } else { '-' };
        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();

        if parts.len() != 3 {
            return Err(invalid_config(
                input,
                format!("expected 3 axes, found {}", parts.len()),
            ));
        }

        Ok(Self::new(parts[0], parts[1], parts[2]))
    }

    /// Whether every axis is the wildcard
    pub fn is_any(&self) -> bool {
        self.os == ANY && self.ws == ANY && self.arch == ANY
    }

    /// Axis-wise match: an axis matches when either side is the wildcard or both are equal
    pub fn matches(&self, other: &PlatformConfig) -> bool {
        axis_matches(&self.os, &other.os)
            && axis_matches(&self.ws, &other.ws)
            && axis_matches(&self.arch, &other.arch)
    }

    /// Whether an element with this `restriction` belongs to this configuration
    ///
    /// An empty restriction means the element is platform independent.
    pub fn admits(&self, restriction: &[PlatformConfig]) -> bool {
        restriction.is_empty() || self.is_any() || restriction.iter().any(|r| r.matches(self))
    }
}

fn axis(value: String) -> String {
    let value = value.trim();
    if value.is_empty() {
        ANY.to_string()
    } else {
        value.to_string()
    }
}

fn axis_matches(left: &str, right: &str) -> bool {
    left == ANY || right == ANY || left == right
}

/// Select the active configurations an element with `restriction` is packaged for
///
/// With `include_platform_independent` off, unrestricted elements belong to no configuration.
pub fn select_configs<'a>(
    active: &'a [PlatformConfig],
    restriction: &[PlatformConfig],
    include_platform_independent: bool,
) -> Vec<&'a PlatformConfig> {
    if restriction.is_empty() && !include_platform_independent {
        return Vec::new();
    }
    active.iter().filter(|c| c.admits(restriction)).collect()
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self::any()
    }
}

impl fmt::Display for PlatformConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.os, self.ws, self.arch)
    }
}

impl FromStr for PlatformConfig {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PlatformConfig {
    type Error = BuildError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<PlatformConfig> for String {
    fn from(config: PlatformConfig) -> Self {
        config.to_string()
    }
}
