//! Cross-feature packaging
//!
//! The packager resolves several top-level features into one shared
//! manifest without writing per-element scripts, drops the ignored features,
//! and writes a single packaging script for the first active configuration.

pub mod ignore;

use crate::assembly::AssemblyManifest;
use crate::cache::CompiledElementCache;
use crate::domain::PlatformConfig;
use crate::error::{BuildError, Result};
use crate::resolver::{ClosureResolver, ResolveOptions, ScriptPolicy};
use crate::script::{ArchiveFormat, AssembleRequest, ScriptWriter};
use crate::site::Repository;

/// What to package and how
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageRequest {
    /// Top-level feature ids, resolved in order
    pub features: Vec<String>,
    pub root_files: Vec<String>,
    pub root_dirs: Vec<String>,
    pub archive_format: ArchiveFormat,
    /// Features removed from the first configuration after resolution
    pub ignored_features: Vec<String>,
}

/// Resolves a feature list and emits one packaging script
pub struct Packager<'a, R: ?Sized, W: ?Sized> {
    repository: &'a R,
    writer: &'a mut W,
    configs: &'a [PlatformConfig],
    options: ResolveOptions,
}

impl<'a, R, W> Packager<'a, R, W>
where
    R: Repository + ?Sized,
    W: ScriptWriter + ?Sized,
{
    pub fn new(repository: &'a R, writer: &'a mut W, configs: &'a [PlatformConfig]) -> Self {
        Self {
            repository,
            writer,
            configs,
            options: ResolveOptions::default(),
        }
    }

    /// Override depth and platform-independence handling
    ///
    /// Included features and children are always analysed when packaging.
    #[must_use]
    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = ResolveOptions {
            generate_included_features: true,
            analyse_children: true,
            ..options
        };
        self
    }

    /// Run the packager and return the filtered manifest
    ///
    /// # Errors
    ///
    /// Returns `NoActiveConfiguration` without any configuration, and any
    /// resolution or writer error. A missing top-level feature is fatal.
    pub fn run(&mut self, request: &PackageRequest) -> Result<AssemblyManifest> {
        let Some(first) = self.configs.first() else {
            return Err(BuildError::NoActiveConfiguration);
        };

        let mut manifest = AssemblyManifest::new();
        let mut cache = CompiledElementCache::new();

        {
            let mut resolver = ClosureResolver::new(self.repository, &mut *self.writer, self.configs)
                .with_options(self.options)
                .with_policy(ScriptPolicy::AccumulateOnly);

            for id in &request.features {
                log::debug!("Packaging feature {id}");
                resolver
                    .resolve(id, None, &mut manifest, &mut cache, false)?
                    .into_result()?;
            }
        }

        let removed = ignore::remove_ignored(
            &mut manifest,
            self.repository,
            first,
            &request.ignored_features,
        );
        if removed > 0 {
            log::info!("Removed {removed} ignored feature(s) from {first}");
        }

        let assemble = AssembleRequest {
            root_files: request.root_files.clone(),
            root_dirs: request.root_dirs.clone(),
            archive_format: request.archive_format,
            slice: manifest.slice(first),
        };
        self.writer.packaging_script(&assemble)?;

        Ok(manifest)
    }
}
