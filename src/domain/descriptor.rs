//! Feature and bundle descriptors
//!
//! Descriptors are the resolved metadata a site hands out for one element.
//! They deserialize directly from the site's YAML descriptor files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::element::VersionedId;
use super::platform::PlatformConfig;

/// Resolved metadata for one feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureDescriptor {
    pub id: String,
    pub version: String,

    /// Human readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Configurations this feature is restricted to (empty: platform independent)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<PlatformConfig>,

    /// Included features, in declaration order
    #[serde(default)]
    pub includes: Vec<IncludedFeatureRef>,

    /// Directly referenced bundles, in declaration order
    #[serde(default)]
    pub bundles: Vec<BundleRef>,
}

/// A feature-to-feature reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludedFeatureRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Missing optional features are tolerated
    #[serde(default)]
    pub optional: bool,
}

/// A feature-to-bundle reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub fragment: bool,
    /// Configurations the bundle is restricted to (empty: defer to the bundle itself)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<PlatformConfig>,
}

/// Resolved metadata for one bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleDescriptor {
    pub id: String,
    pub version: String,

    #[serde(default)]
    pub fragment: bool,

    /// Host bundle id, for fragments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<PlatformConfig>,

    /// Build properties; `None` when the bundle ships none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, String>>,
}

impl FeatureDescriptor {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            label: None,
            platforms: Vec::new(),
            includes: Vec::new(),
            bundles: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_include(mut self, id: impl Into<String>) -> Self {
        self.includes.push(IncludedFeatureRef {
            id: id.into(),
            version: None,
            optional: false,
        });
        self
    }

    #[must_use]
    pub fn with_optional_include(mut self, id: impl Into<String>) -> Self {
        self.includes.push(IncludedFeatureRef {
            id: id.into(),
            version: None,
            optional: true,
        });
        self
    }

    #[must_use]
    pub fn with_bundle(mut self, id: impl Into<String>) -> Self {
        self.bundles.push(BundleRef::new(id));
        self
    }

    #[must_use]
    pub fn with_bundle_ref(mut self, bundle: BundleRef) -> Self {
        self.bundles.push(bundle);
        self
    }

    #[must_use]
    pub fn with_platform(mut self, config: PlatformConfig) -> Self {
        self.platforms.push(config);
        self
    }

    pub fn versioned_id(&self) -> VersionedId {
        VersionedId::new(&self.id, &self.version)
    }

    pub fn is_platform_independent(&self) -> bool {
        self.platforms.is_empty()
    }
}

impl BundleRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: None,
            fragment: false,
            platforms: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_platform(mut self, config: PlatformConfig) -> Self {
        self.platforms.push(config);
        self
    }
}

impl BundleDescriptor {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            fragment: false,
            host: None,
            platforms: Vec::new(),
            properties: None,
        }
    }

    /// Mark this bundle as a fragment of `host`
    #[must_use]
    pub fn fragment_of(mut self, host: impl Into<String>) -> Self {
        self.fragment = true;
        self.host = Some(host.into());
        self
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn versioned_id(&self) -> VersionedId {
        VersionedId::new(&self.id, &self.version)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_from_yaml() {
        let yaml = r#"
id: org.example.sdk
version: 1.2.0
platforms: ["linux,gtk,*"]
includes:
  - id: org.example.docs
    optional: true
  - id: org.example.core
    version: 1.0.0
bundles:
  - id: org.example.ui
  - id: org.example.ui.gtk
    fragment: true
    platforms: ["linux,gtk,*"]
"#;
        let feature: FeatureDescriptor = serde_yaml::from_str(yaml).expect("valid feature");
        assert_eq!(feature.versioned_id().to_string(), "org.example.sdk_1.2.0");
        assert!(!feature.is_platform_independent());
        assert_eq!(feature.includes.len(), 2);
        assert!(feature.includes[0].optional);
        assert_eq!(feature.includes[1].version.as_deref(), Some("1.0.0"));
        assert!(feature.bundles[1].fragment);
        assert_eq!(feature.bundles[1].platforms.len(), 1);
    }

    #[test]
    fn test_empty_feature_defaults() {
        let feature: FeatureDescriptor =
            serde_yaml::from_str("id: org.example.empty\nversion: 1.0.0\n").expect("valid");
        assert!(feature.includes.is_empty());
        assert!(feature.bundles.is_empty());
        assert!(feature.is_platform_independent());
    }

    #[test]
    fn test_bundle_from_yaml() {
        let yaml = r"
id: org.example.ui.gtk
version: 3.1.0
fragment: true
host: org.example.ui
properties:
  bin.includes: plugin.xml
";
        let bundle: BundleDescriptor = serde_yaml::from_str(yaml).expect("valid bundle");
        assert!(bundle.fragment);
        assert_eq!(bundle.host.as_deref(), Some("org.example.ui"));
        assert!(bundle.properties.is_some());
    }

    #[test]
    fn test_builders() {
        let feature = FeatureDescriptor::new("a", "1.0.0")
            .with_include("b")
            .with_optional_include("c")
            .with_bundle("x");
        assert!(!feature.includes[0].optional);
        assert!(feature.includes[1].optional);
        assert_eq!(feature.bundles[0].id, "x");

        let fragment = BundleDescriptor::new("x.nl", "1.0.0").fragment_of("x");
        assert!(fragment.fragment);
        assert_eq!(fragment.host.as_deref(), Some("x"));
    }
}
