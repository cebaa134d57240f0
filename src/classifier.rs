//! Element classification
//!
//! Parses raw element tokens of the form `<kind>@<id>[:<version>]` and sorts
//! them into bundle requests and feature requests, preserving input order.
//!
//! ## Grammar
//!
//! ```text
//! token := kind "@" id [":" version]
//! kind  := "plugin" | "fragment" | "feature"
//! ```
//!
//! The first `@` splits the kind from the rest, and the first `:` after it
//! splits the id from the version. Ids containing `@` or `:` cannot be
//! expressed; no escaping is supported.

use crate::domain::{ElementKind, ElementRequest};
use crate::error::{Result, element::malformed};

/// Requests sorted by kind, each in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedElements {
    pub bundles: Vec<ElementRequest>,
    pub features: Vec<ElementRequest>,
}

impl ClassifiedElements {
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty() && self.features.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bundles.len() + self.features.len()
    }
}

/// Parse a single element token
///
/// # Errors
///
/// Returns `MalformedElementSpec` when the `@` separator is missing, the kind
/// is unknown, or the id is empty.
pub fn parse_element(token: &str) -> Result<ElementRequest> {
    let trimmed = token.trim();

    let Some(at) = trimmed.find('@') else {
        return Err(malformed(token, "missing '@' separator"));
    };

    let kind = match &trimmed[..at] {
        "plugin" | "fragment" => ElementKind::Bundle,
        "feature" => ElementKind::Feature,
        other => {
            return Err(malformed(
                token,
                format!("unknown kind '{other}', expected plugin, fragment or feature"),
            ));
        }
    };

    let rest = &trimmed[at + 1..];
    let (id, version) = match rest.find(':') {
        Some(colon) => (&rest[..colon], Some(&rest[colon + 1..])),
        None => (rest, None),
    };

    if id.is_empty() {
        return Err(malformed(token, "empty id"));
    }

    Ok(ElementRequest {
        kind,
        id: id.to_string(),
        version: version.filter(|v| !v.is_empty()).map(str::to_string),
    })
}

/// Classify an ordered list of tokens into bundles and features
///
/// Fails on the first malformed token; no partial result is returned.
pub fn classify<I, S>(tokens: I) -> Result<ClassifiedElements>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut classified = ClassifiedElements::default();

    for token in tokens {
        let request = parse_element(token.as_ref())?;
        match request.kind {
            ElementKind::Bundle => classified.bundles.push(request),
            ElementKind::Feature => classified.features.push(request),
        }
    }

    Ok(classified)
}
