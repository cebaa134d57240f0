//! Feature closure resolution
//!
//! This module handles:
//! - Walking feature→feature and feature→bundle references depth first
//! - Tolerating missing optional features while abandoning only that branch
//! - De-duplicating work across cyclic and diamond-shaped graphs through the
//!   compiled-element cache
//! - Fanning bundles and features out over the active configurations
//!
//! ## Visit order
//!
//! ```text
//! visit(feature)
//!   ├── cache hit? ─────────────────────────── done
//!   ├── resolve descriptor (missing → Missing*)
//!   ├── mark requested + resolved keys
//!   ├── visit(include) for each include      (optional misses are logged)
//!   ├── collect each bundle                  (script once, add per config)
//!   ├── add feature per config
//!   └── emit scripts per policy
//!
//! resolve(root)
//!   ├── visit(root)
//!   └── assemble script for root             (even when cached earlier)
//! ```
//!
//! A missing feature anywhere below an optional include abandons only that
//! include, whether the miss itself was optional or required.
//!
//! The manifest and the cache are owned by the caller and threaded through
//! every call, so several top-level resolutions can share them.

pub mod policy;

pub use policy::ScriptPolicy;

use crate::assembly::AssemblyManifest;
use crate::cache::CompiledElementCache;
use crate::domain::element::requested_version;
use crate::domain::platform::select_configs;
use crate::domain::{BundleRef, ElementKind, FeatureDescriptor, PlatformConfig};
use crate::error::resolve::recursion_limit;
use crate::error::{BuildError, Result};
use crate::script::ScriptWriter;
use crate::site::Repository;

/// Outcome of resolving one feature closure
///
/// Hard failures (missing bundles, writer errors, depth limit) are `Err`;
/// a missing feature is reported here so the caller decides whether the
/// reference that led to it was optional.
#[derive(Debug)]
pub enum Resolution {
    /// The closure was walked (or was already walked earlier in the run)
    Done,
    /// An optional feature is missing; only its branch was abandoned
    MissingOptional(BuildError),
    /// A required feature is missing somewhere in the closure
    MissingFatal(BuildError),
}

impl Resolution {
    pub fn is_done(&self) -> bool {
        matches!(self, Resolution::Done)
    }

    /// Turn a fatal miss into an error; optional misses count as success
    ///
    /// # Errors
    ///
    /// Returns the `FeatureMissing` error carried by `MissingFatal`.
    pub fn into_result(self) -> Result<()> {
        match self {
            Resolution::MissingFatal(err) => Err(err),
            Resolution::Done | Resolution::MissingOptional(_) => Ok(()),
        }
    }
}

/// Switches that gate collaborator calls and tolerance during resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Recurse into included features
    pub generate_included_features: bool,
    /// Write bundle build scripts
    pub analyse_children: bool,
    /// Log abandoned optional branches as warnings instead of debug output
    pub report_resolution_errors: bool,
    /// Write the assemble script of each root feature
    pub generate_assemble_script: bool,
    /// Add elements without a platform restriction to every configuration
    pub include_platform_independent: bool,
    /// Deepest include level allowed below a root feature
    pub max_depth: Option<usize>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            generate_included_features: true,
            analyse_children: true,
            report_resolution_errors: true,
            generate_assemble_script: true,
            include_platform_independent: true,
            max_depth: None,
        }
    }
}

/// Recursive resolver for feature closures
pub struct ClosureResolver<'a, R: ?Sized, W: ?Sized> {
    repository: &'a R,
    writer: &'a mut W,
    configs: &'a [PlatformConfig],
    options: ResolveOptions,
    policy: ScriptPolicy,
}

impl<'a, R, W> ClosureResolver<'a, R, W>
where
    R: Repository + ?Sized,
    W: ScriptWriter + ?Sized,
{
    /// Create a resolver over a fixed set of active configurations
    pub fn new(repository: &'a R, writer: &'a mut W, configs: &'a [PlatformConfig]) -> Self {
        Self {
            repository,
            writer,
            configs,
            options: ResolveOptions::default(),
            policy: ScriptPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ScriptPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Resolve the closure of a top-level feature into `manifest`
    ///
    /// With `tolerate_missing`, a missing top-level feature yields
    /// `MissingOptional` instead of `MissingFatal`.
    ///
    /// Once the closure is walked the root's assemble script is written, also
    /// when an earlier call in the run already visited the root.
    ///
    /// # Errors
    ///
    /// Returns `BundleMissing` for any unresolvable bundle reference,
    /// `ScriptGenerationFailed` when the writer fails, and
    /// `RecursionLimitExceeded` when `max_depth` is exceeded.
    pub fn resolve(
        &mut self,
        id: &str,
        version: Option<&str>,
        manifest: &mut AssemblyManifest,
        cache: &mut CompiledElementCache,
        tolerate_missing: bool,
    ) -> Result<Resolution> {
        let resolution = self.visit(id, version, manifest, cache, tolerate_missing, 0)?;

        if resolution.is_done()
            && self.options.generate_assemble_script
            && self.policy.emits_assemble_scripts()
        {
            let feature = self.repository.feature(id, requested_version(version))?;
            self.assemble(&feature, manifest)?;
        }

        Ok(resolution)
    }

    /// Write the build script of a bundle requested on its own
    ///
    /// The bundle is cached, so a feature referencing it later in the same
    /// run does not script it again. It is not added to the manifest.
    ///
    /// # Errors
    ///
    /// Returns `BundleMissing` or `ScriptGenerationFailed`.
    pub fn script_bundle(
        &mut self,
        id: &str,
        version: Option<&str>,
        cache: &mut CompiledElementCache,
    ) -> Result<()> {
        let requested = requested_version(version);
        let bundle = self.repository.bundle(id, requested)?;

        let fresh = !cache.contains(ElementKind::Bundle, id, requested)
            && !cache.contains(ElementKind::Bundle, &bundle.id, Some(&bundle.version));
        cache.mark_visited(ElementKind::Bundle, id, requested);
        cache.mark_visited(ElementKind::Bundle, &bundle.id, Some(&bundle.version));

        if !fresh {
            log::trace!("Bundle {} already scripted", bundle.versioned_id());
            return Ok(());
        }

        log::debug!("Scripting bundle {}", bundle.versioned_id());
        if self.policy.emits_element_scripts() {
            self.writer.bundle_script(&bundle)?;
        }
        Ok(())
    }

    fn visit(
        &mut self,
        id: &str,
        version: Option<&str>,
        manifest: &mut AssemblyManifest,
        cache: &mut CompiledElementCache,
        tolerate_missing: bool,
        depth: usize,
    ) -> Result<Resolution> {
        let requested = requested_version(version);

        if cache.contains(ElementKind::Feature, id, requested) {
            log::trace!("Feature {id} already processed");
            return Ok(Resolution::Done);
        }

        if let Some(limit) = self.options.max_depth.filter(|limit| depth > *limit) {
            let err = recursion_limit(id, limit);
            if tolerate_missing {
                return Ok(Resolution::MissingOptional(err));
            }
            return Err(err);
        }

        let feature = match self.repository.feature(id, requested) {
            Ok(feature) => feature,
            Err(BuildError::FeatureMissing { id, version, .. }) => {
                let err = BuildError::FeatureMissing {
                    id,
                    version,
                    optional: tolerate_missing,
                };
                return Ok(if tolerate_missing {
                    Resolution::MissingOptional(err)
                } else {
                    Resolution::MissingFatal(err)
                });
            }
            Err(err) => return Err(err),
        };

        if cache.contains(ElementKind::Feature, &feature.id, Some(&feature.version)) {
            log::trace!("Feature {} already processed", feature.versioned_id());
            return Ok(Resolution::Done);
        }
        cache.mark_visited(ElementKind::Feature, id, requested);
        cache.mark_visited(ElementKind::Feature, &feature.id, Some(&feature.version));

        log::debug!(
            "Resolving feature {} (depth {})",
            feature.versioned_id(),
            depth
        );

        if self.options.generate_included_features {
            for include in &feature.includes {
                let child = self.visit(
                    &include.id,
                    include.version.as_deref(),
                    manifest,
                    cache,
                    include.optional,
                    depth + 1,
                )?;

                match child {
                    Resolution::Done => {}
                    Resolution::MissingOptional(err) => self.report_abandoned(&feature, &err),
                    Resolution::MissingFatal(err) if include.optional => {
                        self.report_abandoned(&feature, &err);
                    }
                    Resolution::MissingFatal(err) => return Ok(Resolution::MissingFatal(err)),
                }
            }
        }

        for reference in &feature.bundles {
            self.collect_bundle(reference, manifest, cache)?;
        }

        for config in select_configs(
            self.configs,
            &feature.platforms,
            self.options.include_platform_independent,
        ) {
            manifest.add_feature(config, feature.versioned_id());
        }

        if self.policy.emits_element_scripts() {
            self.writer.feature_script(&feature)?;
        }

        Ok(Resolution::Done)
    }

    fn assemble(&mut self, feature: &FeatureDescriptor, manifest: &AssemblyManifest) -> Result<()> {
        let slices: Vec<_> = self
            .configs
            .iter()
            .filter(|config| config.admits(&feature.platforms))
            .map(|config| manifest.slice(config))
            .collect();
        self.writer.assemble_script(feature, &slices)
    }

    fn collect_bundle(
        &mut self,
        reference: &BundleRef,
        manifest: &mut AssemblyManifest,
        cache: &mut CompiledElementCache,
    ) -> Result<()> {
        let requested = requested_version(reference.version.as_deref());
        let bundle = self.repository.bundle(&reference.id, requested)?;

        let fresh = !cache.contains(ElementKind::Bundle, &reference.id, requested)
            && !cache.contains(ElementKind::Bundle, &bundle.id, Some(&bundle.version));

        if fresh {
            cache.mark_visited(ElementKind::Bundle, &reference.id, requested);
            cache.mark_visited(ElementKind::Bundle, &bundle.id, Some(&bundle.version));
            log::debug!("Collecting bundle {}", bundle.versioned_id());

            if self.options.analyse_children && self.policy.emits_element_scripts() {
                self.writer.bundle_script(&bundle)?;
            }
        } else {
            log::trace!("Bundle {} already scripted", bundle.versioned_id());
        }

        // The reference's own restriction wins over the bundle's
        let restriction = if reference.platforms.is_empty() {
            &bundle.platforms
        } else {
            &reference.platforms
        };

        for config in select_configs(
            self.configs,
            restriction,
            self.options.include_platform_independent,
        ) {
            manifest.add_bundle(config, bundle.versioned_id());
        }

        Ok(())
    }

    fn report_abandoned(&self, parent: &FeatureDescriptor, err: &BuildError) {
        if self.options.report_resolution_errors {
            log::warn!("Skipping optional feature of {}: {}", parent.id, err);
        } else {
            log::debug!("Skipping optional feature of {}: {}", parent.id, err);
        }
    }
}
