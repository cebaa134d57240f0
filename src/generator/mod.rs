//! Top-level generation
//!
//! The generator is the entry point for a `generate` run: it classifies the
//! requested element tokens, scripts the requested bundles, and resolves the
//! closure of every requested feature into one shared manifest.
//!
//! Requested bundles are scripted but not added to the manifest; only
//! elements reached through a feature are packaged.

use crate::assembly::AssemblyManifest;
use crate::cache::CompiledElementCache;
use crate::classifier::classify;
use crate::domain::PlatformConfig;
use crate::error::Result;
use crate::progress::ProgressDisplay;
use crate::resolver::{ClosureResolver, ResolveOptions, ScriptPolicy};
use crate::script::ScriptWriter;
use crate::site::Repository;

/// Entry point for script generation
pub struct Generator<'a, R: ?Sized, W: ?Sized> {
    repository: &'a R,
    writer: &'a mut W,
    configs: Vec<PlatformConfig>,
    options: ResolveOptions,
    progress: Option<&'a ProgressDisplay>,
}

impl<'a, R, W> Generator<'a, R, W>
where
    R: Repository + ?Sized,
    W: ScriptWriter + ?Sized,
{
    /// Create a generator; an empty configuration list means `*,*,*`
    pub fn new(repository: &'a R, writer: &'a mut W, configs: Vec<PlatformConfig>) -> Self {
        let configs = if configs.is_empty() {
            vec![PlatformConfig::any()]
        } else {
            configs
        };

        Self {
            repository,
            writer,
            configs,
            options: ResolveOptions::default(),
            progress: None,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: &'a ProgressDisplay) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn configs(&self) -> &[PlatformConfig] {
        &self.configs
    }

    /// Generate scripts for every requested element
    ///
    /// # Errors
    ///
    /// Returns `MalformedElementSpec` before any script is written if a token
    /// does not parse. Afterwards the first resolution or writer error aborts
    /// the run; the partially filled manifest is dropped.
    pub fn run<I, S>(&mut self, tokens: I) -> Result<AssemblyManifest>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let classified = classify(tokens)?;
        log::debug!(
            "Generating {} bundle(s) and {} feature(s) for {} configuration(s)",
            classified.bundles.len(),
            classified.features.len(),
            self.configs.len()
        );

        let mut manifest = AssemblyManifest::new();
        let mut cache = CompiledElementCache::new();
        let progress = self.progress;

        let mut resolver = ClosureResolver::new(self.repository, &mut *self.writer, &self.configs)
            .with_options(self.options)
            .with_policy(ScriptPolicy::PerFeature);

        for request in &classified.bundles {
            if let Some(progress) = progress {
                progress.update_element(&request.to_string());
            }
            resolver.script_bundle(&request.id, request.version.as_deref(), &mut cache)?;
            if let Some(progress) = progress {
                progress.inc_element();
            }
        }

        for request in &classified.features {
            if let Some(progress) = progress {
                progress.update_element(&request.to_string());
            }
            resolver
                .resolve(
                    &request.id,
                    request.version.as_deref(),
                    &mut manifest,
                    &mut cache,
                    false,
                )?
                .into_result()?;
            if let Some(progress) = progress {
                progress.inc_element();
            }
        }

        log::info!(
            "Processed {} element(s), {} configuration(s) populated",
            cache.len(),
            manifest.configs().count()
        );

        Ok(manifest)
    }
}
