//! Package command
//!
//! Resolves the packaged features into one manifest and writes a single
//! packaging script for the first active configuration.

use std::path::PathBuf;

use crate::cli::PackageArgs;
use crate::commands::helpers;
use crate::config::PackagingConfig;
use crate::error::Result;
use crate::error::config::invalid;
use crate::packager::Packager;
use crate::script::ScriptDirectory;
use crate::site::Site;

/// Run the package command
pub fn run(file: Option<PathBuf>, args: PackageArgs) -> Result<()> {
    let cwd = helpers::current_dir()?;
    let mut config = helpers::load_config(file, &cwd)?;
    apply_packaging(&mut config.packaging, &args);
    let manifest_path = args.manifest.clone();
    helpers::apply_locations(&mut config, args.site, args.output, args.configs);

    if config.packaging.features.is_empty() {
        return Err(invalid(
            "no features to package; pass --features or list them under `packaging.features`",
        ));
    }

    let (site_path, output) = helpers::locations(&config, &cwd);
    let site = Site::load(&site_path)?;
    let mut writer = ScriptDirectory::new(&output, config.options.script_options());
    let configs = config.active_configs();

    let manifest = Packager::new(&site, &mut writer, &configs)
        .with_options(config.options.resolve_options())
        .run(&config.packaging.to_request())?;

    if let Some(path) = &manifest_path {
        helpers::write_manifest_report(&cwd.join(path), &manifest)?;
    }

    helpers::print_summary(&manifest, writer.written().len(), &output);
    Ok(())
}

/// Fold command-line packaging values into the loaded configuration
fn apply_packaging(packaging: &mut PackagingConfig, args: &PackageArgs) {
    if !args.features.is_empty() {
        packaging.features = args
            .features
            .iter()
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();
    }
    if !args.root_files.is_empty() {
        packaging.root_files.clone_from(&args.root_files);
    }
    if !args.root_dirs.is_empty() {
        packaging.root_dirs.clone_from(&args.root_dirs);
    }
    if let Some(format) = args.format {
        packaging.archive_format = format;
    }
    if !args.ignored.is_empty() {
        packaging.ignored_features.clone_from(&args.ignored);
    }
}
