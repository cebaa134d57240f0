use clap::Parser;
use std::path::PathBuf;

use crate::domain::PlatformConfig;

/// Arguments for the generate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Generate scripts for a feature closure:\n    featurepack generate feature@org.example.sdk\n\n\
                   Pin a version:\n    featurepack generate feature@org.example.sdk:1.2.0\n\n\
                   Several configurations:\n    featurepack generate -c linux,gtk,x86_64 -c win32,win32,x86_64 feature@org.example.sdk\n\n\
                   Write the manifest report:\n    featurepack generate feature@org.example.sdk --manifest manifest.json")]
pub struct GenerateArgs {
    /// Elements to build as <kind>@<id>[:<version>] (kind: plugin, fragment, feature).
    /// Defaults to `elements` from the configuration file
    pub elements: Vec<String>,

    /// Site directory holding features/ and bundles/
    #[arg(long, value_name = "DIR")]
    pub site: Option<PathBuf>,

    /// Directory scripts are written to
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Active platform configuration as os,ws,arch (repeatable; * for any axis)
    #[arg(long = "config", short = 'c', value_name = "OS,WS,ARCH")]
    pub configs: Vec<PlatformConfig>,

    /// Do not write bundle build scripts
    #[arg(long)]
    pub no_children: bool,

    /// Do not descend into included features
    #[arg(long)]
    pub no_included_features: bool,

    /// Do not write assemble scripts
    #[arg(long)]
    pub no_assemble: bool,

    /// Do not add archive steps to assemble scripts
    #[arg(long)]
    pub no_archive: bool,

    /// Add signing steps
    #[arg(long)]
    pub sign: bool,

    /// Add JNLP generation steps
    #[arg(long)]
    pub jnlp: bool,

    /// Do not warn about bundles without build properties
    #[arg(long)]
    pub ignore_missing_properties: bool,

    /// Log skipped optional features at debug level only
    #[arg(long)]
    pub quiet_resolution_errors: bool,

    /// Deepest include level allowed below a requested feature
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(usize))]
    pub max_depth: Option<usize>,

    /// Write the assembly manifest as JSON to this file
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,
}
