//! Compiled-element cache
//!
//! Records which `(kind, id, version)` triples already had their script
//! generated during one run. The resolver consults it before every visit,
//! which is what makes traversal of cyclic and diamond-shaped feature graphs
//! terminate and script each element at most once.
//!
//! Keys match exactly: the same id at two different versions occupies two
//! entries, so diamonds only collapse when both paths reach the same version.
//! A `None` version is its own key ("whatever is available").

use std::collections::BTreeSet;

use crate::domain::ElementKind;

/// Cache key for one element
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementKey {
    pub kind: ElementKind,
    pub id: String,
    pub version: Option<String>,
}

impl ElementKey {
    pub fn new(kind: ElementKind, id: &str, version: Option<&str>) -> Self {
        Self {
            kind,
            id: id.to_string(),
            version: version.map(str::to_string),
        }
    }
}

/// Set of elements already processed within one generation run
#[derive(Debug, Clone, Default)]
pub struct CompiledElementCache {
    visited: BTreeSet<ElementKey>,
}

impl CompiledElementCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the element was already processed
    pub fn contains(&self, kind: ElementKind, id: &str, version: Option<&str>) -> bool {
        self.visited.contains(&ElementKey::new(kind, id, version))
    }

    /// Record the element as processed
    ///
    /// Returns `true` when the element was not cached before, so callers can
    /// check and mark in one step.
    pub fn mark_visited(&mut self, kind: ElementKind, id: &str, version: Option<&str>) -> bool {
        self.visited.insert(ElementKey::new(kind, id, version))
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// Number of cached entries of one kind
    pub fn count(&self, kind: ElementKind) -> usize {
        self.visited.iter().filter(|key| key.kind == kind).count()
    }
}
