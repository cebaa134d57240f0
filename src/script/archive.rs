//! Archive format selection and packaging requests

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::assembly::ManifestSlice;
use crate::error::{BuildError, Result, script::invalid_archive_format};

/// Archive produced by the packaging script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ArchiveFormat {
    #[default]
    Zip,
    /// Zip built by the build tool's own archiver
    AntZip,
    Tar,
    /// Plain directory, no archive
    Folder,
}

impl ArchiveFormat {
    /// File extension of the produced archive, if any
    pub fn extension(self) -> Option<&'static str> {
        match self {
            ArchiveFormat::Zip | ArchiveFormat::AntZip => Some("zip"),
            ArchiveFormat::Tar => Some("tar.gz"),
            ArchiveFormat::Folder => None,
        }
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArchiveFormat::Zip => "zip",
            ArchiveFormat::AntZip => "antZip",
            ArchiveFormat::Tar => "tar",
            ArchiveFormat::Folder => "folder",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ArchiveFormat {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "zip" => Ok(ArchiveFormat::Zip),
            "antzip" => Ok(ArchiveFormat::AntZip),
            "tar" => Ok(ArchiveFormat::Tar),
            "folder" => Ok(ArchiveFormat::Folder),
            _ => Err(invalid_archive_format(s)),
        }
    }
}

impl TryFrom<String> for ArchiveFormat {
    type Error = BuildError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ArchiveFormat> for String {
    fn from(format: ArchiveFormat) -> Self {
        format.to_string()
    }
}

/// Everything the packaging script writer needs for one configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssembleRequest {
    /// Files copied to the archive root
    pub root_files: Vec<String>,
    /// Directories copied to the archive root
    pub root_dirs: Vec<String>,
    pub archive_format: ArchiveFormat,
    pub slice: ManifestSlice,
}
