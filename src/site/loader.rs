//! Site loading from disk
//!
//! A site directory holds one YAML descriptor per element:
//!
//! ```text
//! site/
//! ├── features/
//! │   └── org.example.sdk_1.0.0.yaml
//! └── bundles/
//!     └── org.example.core_1.0.0.yaml
//! ```
//!
//! File names are not significant; the id and version come from the file
//! contents. Nested directories below `features/` and `bundles/` are scanned.
//!
//! Ids and versions name script directories, so they may not contain path
//! separators or be `.` or `..`.

use std::path::Path;

use walkdir::WalkDir;

use super::Site;
use crate::domain::{BundleDescriptor, FeatureDescriptor};
use crate::error::Result;
use crate::error::config::{site_invalid, site_not_found};
use crate::error::fs::read_failed;

const FEATURES_DIR: &str = "features";
const BUNDLES_DIR: &str = "bundles";

impl Site {
    /// Load every descriptor below `root`
    ///
    /// # Errors
    ///
    /// Returns `SiteNotFound` if `root` is not a directory, `FileReadFailed`
    /// for an unreadable entry and `SiteInvalid` for a descriptor that does
    /// not parse or carries an unusable id or version.
    pub fn load(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(site_not_found(root.display().to_string()));
        }

        let mut site = Site::new();

        for (dir, is_feature) in [(FEATURES_DIR, true), (BUNDLES_DIR, false)] {
            let base = root.join(dir);
            if !base.is_dir() {
                continue;
            }

            for entry in WalkDir::new(&base).sort_by_file_name() {
                let entry = entry.map_err(|e| {
                    let path = e.path().unwrap_or(base.as_path()).display().to_string();
                    read_failed(path, e.to_string())
                })?;
                if !entry.file_type().is_file() || !is_descriptor(entry.path()) {
                    continue;
                }

                let path = entry.path();
                let content = std::fs::read_to_string(path)
                    .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;

                if is_feature {
                    let feature: FeatureDescriptor = serde_yaml::from_str(&content)
                        .map_err(|e| site_invalid(path.display().to_string(), e.to_string()))?;
                    check_name(path, &feature.id, &feature.version)?;
                    site.add_feature(feature);
                } else {
                    let bundle: BundleDescriptor = serde_yaml::from_str(&content)
                        .map_err(|e| site_invalid(path.display().to_string(), e.to_string()))?;
                    check_name(path, &bundle.id, &bundle.version)?;
                    site.add_bundle(bundle);
                }
            }
        }

        log::debug!(
            "Loaded site {} with {} features and {} bundles",
            root.display(),
            site.feature_count(),
            site.bundle_count()
        );

        Ok(site)
    }
}

fn check_name(path: &Path, id: &str, version: &str) -> Result<()> {
    for value in [id, version] {
        if value.is_empty()
            || value == "."
            || value == ".."
            || value.contains(['/', '\\'])
        {
            return Err(site_invalid(
                path.display().to_string(),
                format!("'{value}' is not a usable element id or version"),
            ));
        }
    }
    Ok(())
}

fn is_descriptor(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == "yaml" || ext == "yml")
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::BuildError;
    use crate::site::Repository;
    use crate::test_fixtures::{create_temp_dir, write_site};

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().expect("has parent")).expect("create dirs");
        std::fs::write(path, content).expect("write descriptor");
    }

    #[test]
    fn test_load_site() {
        let temp = create_temp_dir();
        write(
            temp.path(),
            "features/sdk.yaml",
            "id: org.example.sdk\nversion: 1.0.0\nbundles:\n  - id: org.example.core\n",
        );
        write(
            temp.path(),
            "bundles/nested/core.yml",
            "id: org.example.core\nversion: 1.0.0\n",
        );
        write(temp.path(), "bundles/README.md", "not a descriptor");

        let site = Site::load(temp.path()).expect("site loads");
        assert_eq!(site.feature_count(), 1);
        assert_eq!(site.bundle_count(), 1);
        assert!(site.bundle("org.example.core", None).is_ok());
    }

    #[test]
    fn test_load_missing_site() {
        let temp = create_temp_dir();
        let err = Site::load(&temp.path().join("nope")).expect_err("missing site");
        assert!(matches!(err, BuildError::SiteNotFound { .. }));
    }

    #[test]
    fn test_load_invalid_descriptor() {
        let temp = create_temp_dir();
        write(temp.path(), "features/bad.yaml", "version: 1.0.0\n");
        let err = Site::load(temp.path()).expect_err("invalid descriptor");
        assert!(matches!(err, BuildError::SiteInvalid { path, .. } if path.ends_with("bad.yaml")));
    }

    #[test]
    fn test_load_rejects_path_like_ids() {
        let temp = create_temp_dir();
        write(
            temp.path(),
            "bundles/escape.yaml",
            "id: ../../outside\nversion: 1.0.0\n",
        );
        let err = Site::load(temp.path()).expect_err("path-like id");
        assert!(matches!(err, BuildError::SiteInvalid { reason, .. } if reason.contains("../../outside")));

        let temp = create_temp_dir();
        write(temp.path(), "features/dots.yaml", "id: org.example\nversion: ..\n");
        assert!(Site::load(temp.path()).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_load_reports_unreadable_directory() {
        use std::os::unix::fs::PermissionsExt;

        let temp = create_temp_dir();
        write(temp.path(), "features/locked/sdk.yaml", "id: sdk\nversion: 1.0.0\n");
        let locked = temp.path().join("features/locked");
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000))
            .expect("lock directory");

        // Privileged users can still list the directory
        let readable = std::fs::read_dir(&locked).is_ok();
        let result = Site::load(temp.path());

        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755))
            .expect("unlock directory");

        if !readable {
            let err = result.expect_err("unreadable directory");
            assert!(matches!(err, BuildError::FileReadFailed { path, .. } if path.ends_with("locked")));
        }
    }

    #[test]
    fn test_load_empty_site() {
        let temp = create_temp_dir();
        let site = Site::load(temp.path()).expect("empty site loads");
        assert_eq!(site.feature_count(), 0);
    }

    #[test]
    fn test_load_serialized_descriptors() {
        let temp = create_temp_dir();
        write_site(
            temp.path(),
            &[
                FeatureDescriptor::new("org.example.sdk", "1.0.0").with_include("org.example.docs"),
                FeatureDescriptor::new("org.example.sdk", "1.1.0"),
            ],
            &[BundleDescriptor::new("org.example.ui.nl", "1.0.0").fragment_of("org.example.ui")],
        );

        let site = Site::load(temp.path()).expect("site loads");
        let sdk = site.feature("org.example.sdk", None).expect("sdk resolves");
        assert_eq!(sdk.version, "1.1.0");
        let fragment = site.bundle("org.example.ui.nl", Some("0.0.0")).expect("fragment resolves");
        assert!(fragment.fragment);
    }
}
