use clap::Parser;
use std::path::PathBuf;

use crate::domain::PlatformConfig;
use crate::script::ArchiveFormat;

/// Arguments for the package command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Package two features:\n    featurepack package --features org.example.sdk,org.example.tools\n\n\
                   Leave a feature out:\n    featurepack package --features org.example.sdk --ignore org.example.docs\n\n\
                   Add root files as a tarball:\n    featurepack package --features org.example.sdk --root-file readme.txt --format tar")]
pub struct PackageArgs {
    /// Comma-separated top-level feature ids.
    /// Defaults to `packaging.features` from the configuration file
    #[arg(long, value_name = "F1,F2", value_delimiter = ',')]
    pub features: Vec<String>,

    /// Site directory holding features/ and bundles/
    #[arg(long, value_name = "DIR")]
    pub site: Option<PathBuf>,

    /// Directory the packaging script is written to
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Active platform configuration as os,ws,arch (repeatable; the first one is packaged)
    #[arg(long = "config", short = 'c', value_name = "OS,WS,ARCH")]
    pub configs: Vec<PlatformConfig>,

    /// File copied to the archive root (repeatable)
    #[arg(long = "root-file", value_name = "FILE")]
    pub root_files: Vec<String>,

    /// Directory copied to the archive root (repeatable)
    #[arg(long = "root-dir", value_name = "DIR")]
    pub root_dirs: Vec<String>,

    /// Archive format (zip, antZip, tar, folder)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<ArchiveFormat>,

    /// Feature id left out of the package (repeatable)
    #[arg(long = "ignore", value_name = "FEATURE")]
    pub ignored: Vec<String>,

    /// Write the assembly manifest as JSON to this file
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,
}
