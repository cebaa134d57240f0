//! Generation switches

use serde::{Deserialize, Serialize};

use crate::resolver::ResolveOptions;
use crate::script::ScriptOptions;

/// The `options:` section of featurepack.yaml
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildOptions {
    pub generate_included_features: bool,
    pub analyse_children: bool,
    pub report_resolution_errors: bool,
    pub ignore_missing_properties_file: bool,
    pub sign: bool,
    pub generate_jnlp: bool,
    pub generate_assemble_script: bool,
    pub generate_archive: bool,
    pub include_platform_independent: bool,
    pub max_depth: Option<usize>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        let resolve = ResolveOptions::default();
        let script = ScriptOptions::default();
        Self {
            generate_included_features: resolve.generate_included_features,
            analyse_children: resolve.analyse_children,
            report_resolution_errors: resolve.report_resolution_errors,
            ignore_missing_properties_file: script.ignore_missing_properties_file,
            sign: script.sign,
            generate_jnlp: script.generate_jnlp,
            generate_assemble_script: resolve.generate_assemble_script,
            generate_archive: script.generate_archive,
            include_platform_independent: resolve.include_platform_independent,
            max_depth: resolve.max_depth,
        }
    }
}

impl BuildOptions {
    /// Switches consumed by the closure resolver
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            generate_included_features: self.generate_included_features,
            analyse_children: self.analyse_children,
            report_resolution_errors: self.report_resolution_errors,
            generate_assemble_script: self.generate_assemble_script,
            include_platform_independent: self.include_platform_independent,
            max_depth: self.max_depth,
        }
    }

    /// Switches consumed by the script writer
    pub fn script_options(&self) -> ScriptOptions {
        ScriptOptions {
            sign: self.sign,
            generate_jnlp: self.generate_jnlp,
            generate_archive: self.generate_archive,
            ignore_missing_properties_file: self.ignore_missing_properties_file,
        }
    }
}
