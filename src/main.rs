//! featurepack - build and packaging script generator
//!
//! Resolves the transitive closure of features and bundles against a site,
//! writes one build script per element and collects per-platform assembly
//! manifests that drive the packaging scripts.

use clap::Parser;

mod assembly;
mod cache;
mod classifier;
mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod generator;
mod packager;
mod progress;
mod resolver;
mod script;
mod site;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

/// Set up `log` output; `RUST_LOG` wins over the verbosity flag
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(cli.file, args),
        Commands::Package(args) => commands::package::run(cli.file, args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
