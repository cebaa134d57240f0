//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - generate: Generate command arguments
//! - package: Package command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod generate;
pub mod package;

pub use completions::CompletionsArgs;
pub use generate::GenerateArgs;
pub use package::PackageArgs;

/// featurepack - build and packaging script generator
///
/// Resolve feature closures against a site and write build, assemble and packaging scripts.
#[derive(Parser, Debug)]
#[command(
    name = "featurepack",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Build and packaging script generator for feature-based distributions",
    long_about = "featurepack resolves the transitive closure of features and bundles \
                  (plugins and fragments) against a site, writes one build script per element, \
                  and assembles per-platform manifests into packaging scripts.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  featurepack generate feature@org.example.sdk          \x1b[90m# Scripts for a feature closure\x1b[0m\n   \
                  featurepack generate plugin@org.example.tool:1.0.0    \x1b[90m# Script for one bundle\x1b[0m\n   \
                  featurepack generate -c linux,gtk,x86_64 feature@sdk  \x1b[90m# Restrict to a configuration\x1b[0m\n   \
                  featurepack package --features sdk,docs --format tar  \x1b[90m# One packaging script\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Build configuration file (defaults to ./featurepack.yaml when present)
    #[arg(long, short = 'f', global = true, env = "FEATUREPACK_CONFIG")]
    pub file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate build scripts for elements and their closures
    Generate(GenerateArgs),

    /// Generate one packaging script for a list of features
    Package(PackageArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
