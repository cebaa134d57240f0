//! Generate command
//!
//! Loads the site, runs the generator over the requested elements and
//! writes scripts into the output directory.

use std::path::PathBuf;

use crate::cli::GenerateArgs;
use crate::commands::helpers;
use crate::config::{BuildConfig, BuildOptions};
use crate::error::Result;
use crate::error::config::invalid;
use crate::generator::Generator;
use crate::progress::ProgressDisplay;
use crate::script::ScriptDirectory;
use crate::site::Site;

/// Run the generate command
pub fn run(file: Option<PathBuf>, args: GenerateArgs) -> Result<()> {
    let cwd = helpers::current_dir()?;
    let mut config = helpers::load_config(file, &cwd)?;
    apply_args(&mut config, &args);
    helpers::apply_locations(&mut config, args.site, args.output, args.configs);

    if config.elements.is_empty() {
        return Err(invalid(
            "no elements to generate; pass them as arguments or list them under `elements`",
        ));
    }

    let (site_path, output) = helpers::locations(&config, &cwd);
    let site = Site::load(&site_path)?;
    let mut writer = ScriptDirectory::new(&output, config.options.script_options());

    let progress = ProgressDisplay::new(u64::try_from(config.elements.len()).unwrap_or(u64::MAX));
    let result = Generator::new(&site, &mut writer, config.active_configs())
        .with_options(config.options.resolve_options())
        .with_progress(&progress)
        .run(&config.elements);

    let manifest = match result {
        Ok(manifest) => {
            progress.finish();
            manifest
        }
        Err(err) => {
            progress.abandon();
            return Err(err);
        }
    };

    if let Some(path) = &args.manifest {
        helpers::write_manifest_report(&cwd.join(path), &manifest)?;
    }

    helpers::print_summary(&manifest, writer.written().len(), &output);
    Ok(())
}

/// Fold command-line elements and switches into the loaded configuration
fn apply_args(config: &mut BuildConfig, args: &GenerateArgs) {
    if !args.elements.is_empty() {
        config.elements.clone_from(&args.elements);
    }
    apply_switches(&mut config.options, args);
}

fn apply_switches(options: &mut BuildOptions, args: &GenerateArgs) {
    if args.no_children {
        options.analyse_children = false;
    }
    if args.no_included_features {
        options.generate_included_features = false;
    }
    if args.no_assemble {
        options.generate_assemble_script = false;
    }
    if args.no_archive {
        options.generate_archive = false;
    }
    if args.sign {
        options.sign = true;
    }
    if args.jnlp {
        options.generate_jnlp = true;
    }
    if args.ignore_missing_properties {
        options.ignore_missing_properties_file = true;
    }
    if args.quiet_resolution_errors {
        options.report_resolution_errors = false;
    }
    if args.max_depth.is_some() {
        options.max_depth = args.max_depth;
    }
}
