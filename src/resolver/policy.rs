//! Script emission policy
//!
//! The generator and the packager walk the same closure; they differ only in
//! which scripts are written along the way.

/// Which scripts the resolver emits while it walks a closure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScriptPolicy {
    /// Bundle and feature build scripts for every newly visited element, plus
    /// the assemble script of each root feature when enabled
    #[default]
    PerFeature,
    /// Only fill the manifest; no script is written during traversal
    AccumulateOnly,
}

impl ScriptPolicy {
    pub fn emits_element_scripts(self) -> bool {
        matches!(self, ScriptPolicy::PerFeature)
    }

    pub fn emits_assemble_scripts(self) -> bool {
        matches!(self, ScriptPolicy::PerFeature)
    }
}
