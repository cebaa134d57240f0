//! Domain models for featurepack
//!
//! This module contains pure domain objects: element requests, platform
//! configurations and the feature/bundle descriptors a site hands out.

pub mod descriptor;
pub mod element;
pub mod platform;

pub use descriptor::{BundleDescriptor, BundleRef, FeatureDescriptor};
pub use element::{ElementKind, ElementRequest, VersionedId};
pub use platform::PlatformConfig;
