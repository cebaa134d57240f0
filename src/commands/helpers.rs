//! Command helper utilities

use std::path::{Path, PathBuf};

use console::style;

use crate::assembly::AssemblyManifest;
use crate::config::BuildConfig;
use crate::domain::PlatformConfig;
use crate::error::fs::write_failed;
use crate::error::{BuildError, Result};

/// Site directory used when neither the command line nor the file names one
pub const DEFAULT_SITE_DIR: &str = "site";

/// Output directory used when neither the command line nor the file names one
pub const DEFAULT_OUTPUT_DIR: &str = "build";

/// Current working directory as a `BuildError`
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| BuildError::IoError {
        message: format!("Failed to get current directory: {e}"),
    })
}

/// Load the configuration file named on the command line, or the one in `cwd`
pub fn load_config(file: Option<PathBuf>, cwd: &Path) -> Result<BuildConfig> {
    BuildConfig::discover(file.as_deref(), cwd)
}

/// Apply command-line site, output and configuration overrides
pub fn apply_locations(
    config: &mut BuildConfig,
    site: Option<PathBuf>,
    output: Option<PathBuf>,
    configs: Vec<PlatformConfig>,
) {
    if site.is_some() {
        config.site = site;
    }
    if output.is_some() {
        config.output = output;
    }
    if !configs.is_empty() {
        config.configs = configs;
    }
}

/// Site and output directories, relative paths taken from `cwd`
pub fn locations(config: &BuildConfig, cwd: &Path) -> (PathBuf, PathBuf) {
    let site = config
        .site
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SITE_DIR));
    let output = config
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    (cwd.join(site), cwd.join(output))
}

/// Write the manifest as pretty JSON, one entry per configuration
pub fn write_manifest_report(path: &Path, manifest: &AssemblyManifest) -> Result<()> {
    let json = serde_json::to_string_pretty(&manifest.slices())?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| write_failed(parent.display().to_string(), e.to_string()))?;
    }
    std::fs::write(path, json + "\n")
        .map_err(|e| write_failed(path.display().to_string(), e.to_string()))?;
    log::info!("Wrote manifest report {}", path.display());
    Ok(())
}

/// Print the per-configuration summary
pub fn print_summary(manifest: &AssemblyManifest, scripts: usize, output: &Path) {
    println!(
        "{} {} script(s) in {}",
        style("Generated").green().bold(),
        scripts,
        style(output.display()).cyan()
    );

    for slice in manifest.slices() {
        println!(
            "  {}  {} bundle(s), {} feature(s)",
            style(&slice.config).bold(),
            slice.bundles.len(),
            slice.features.len()
        );
    }
}
