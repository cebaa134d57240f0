//! Script writer that writes shell scripts into an output directory
//!
//! Layout:
//!
//! ```text
//! <output>/
//! ├── plugins/<id>_<version>/build.sh
//! ├── features/<id>_<version>/build.sh
//! ├── assemble.<feature-id>.sh
//! └── package.<os>.<ws>.<arch>.sh
//! ```

use std::fmt::Write as _;
use std::path::PathBuf;

use super::{AssembleRequest, ScriptOptions, ScriptWriter};
use crate::assembly::ManifestSlice;
use crate::domain::{BundleDescriptor, FeatureDescriptor, PlatformConfig};
use crate::domain::platform::ANY;
use crate::error::Result;
use crate::error::script::generation_failed;

const SHEBANG: &str = "#!/bin/sh\nset -e\n";

/// Writes generated scripts below a root directory
#[derive(Debug, Clone)]
pub struct ScriptDirectory {
    root: PathBuf,
    options: ScriptOptions,
    written: Vec<PathBuf>,
}

impl ScriptDirectory {
    pub fn new(root: impl Into<PathBuf>, options: ScriptOptions) -> Self {
        Self {
            root: root.into(),
            options,
            written: Vec::new(),
        }
    }

    /// Every script written so far, in write order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn write(&mut self, element: &str, relative: &str, content: &str) -> Result<()> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                generation_failed(element, format!("{}: {}", parent.display(), e))
            })?;
        }
        std::fs::write(&path, content)
            .map_err(|e| generation_failed(element, format!("{}: {}", path.display(), e)))?;

        log::info!("Wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }
}

/// File-name fragment for a configuration, e.g. `linux.gtk.x86_64`
pub fn config_suffix(config: &PlatformConfig) -> String {
    [&config.os, &config.ws, &config.arch]
        .iter()
        .map(|axis| if axis.as_str() == ANY { "any" } else { axis.as_str() })
        .collect::<Vec<_>>()
        .join(".")
}

fn render_slice(script: &mut String, slice: &ManifestSlice) {
    let _ = writeln!(script, "\n# configuration {}", slice.config);
    for bundle in &slice.bundles {
        let _ = writeln!(script, "copy_element plugins/{bundle}");
    }
    for feature in &slice.features {
        let _ = writeln!(script, "copy_element features/{feature}");
    }
}

impl ScriptWriter for ScriptDirectory {
    fn bundle_script(&mut self, bundle: &BundleDescriptor) -> Result<()> {
        let vid = bundle.versioned_id();
        let mut script = String::from(SHEBANG);
        let _ = writeln!(script, "# build script for bundle {vid}");

        if let Some(host) = &bundle.host {
            let _ = writeln!(script, "# fragment of {host}");
        }

        match &bundle.properties {
            Some(properties) => {
                for (key, value) in properties {
                    let _ = writeln!(
                        script,
                        "export BUILD_PROP_{}={}",
                        shell_name(key),
                        shell_quote(value)
                    );
                }
            }
            None if !self.options.ignore_missing_properties_file => {
                log::warn!("Bundle {vid} has no build properties");
            }
            None => {}
        }

        let _ = writeln!(script, "build_bundle {} {}", bundle.id, bundle.version);
        if self.options.sign {
            let _ = writeln!(script, "sign_jar plugins/{vid}.jar");
        }

        self.write(&vid.to_string(), &format!("plugins/{vid}/build.sh"), &script)
    }

    fn feature_script(&mut self, feature: &FeatureDescriptor) -> Result<()> {
        let vid = feature.versioned_id();
        let mut script = String::from(SHEBANG);
        let _ = writeln!(script, "# build script for feature {vid}");

        for include in &feature.includes {
            let marker = if include.optional { " # optional" } else { "" };
            let _ = writeln!(script, "build_feature {}{}", include.id, marker);
        }
        for bundle in &feature.bundles {
            let _ = writeln!(script, "gather_bundle {}", bundle.id);
        }
        if self.options.sign {
            let _ = writeln!(script, "sign_jar features/{vid}.jar");
        }
        if self.options.generate_jnlp {
            let _ = writeln!(script, "generate_jnlp {} {}", feature.id, feature.version);
        }

        self.write(&vid.to_string(), &format!("features/{vid}/build.sh"), &script)
    }

    fn assemble_script(
        &mut self,
        feature: &FeatureDescriptor,
        slices: &[ManifestSlice],
    ) -> Result<()> {
        let mut script = String::from(SHEBANG);
        let _ = writeln!(script, "# assemble script for feature {}", feature.versioned_id());

        for slice in slices {
            render_slice(&mut script, slice);
            if self.options.generate_archive {
                let _ = writeln!(
                    script,
                    "archive zip {}-{}.zip",
                    feature.id,
                    config_suffix(&slice.config)
                );
            }
        }

        self.write(
            &feature.versioned_id().to_string(),
            &format!("assemble.{}.sh", feature.id),
            &script,
        )
    }

    fn packaging_script(&mut self, request: &AssembleRequest) -> Result<()> {
        let suffix = config_suffix(&request.slice.config);
        let mut script = String::from(SHEBANG);
        let _ = writeln!(script, "# packaging script for {}", request.slice.config);

        for file in &request.root_files {
            let _ = writeln!(script, "copy_root_file {file}");
        }
        for dir in &request.root_dirs {
            let _ = writeln!(script, "copy_root_dir {dir}");
        }
        render_slice(&mut script, &request.slice);

        match request.archive_format.extension() {
            Some(extension) => {
                let _ = writeln!(
                    script,
                    "archive {} package.{}.{}",
                    request.archive_format, suffix, extension
                );
            }
            None => {
                let _ = writeln!(script, "# folder output, no archive");
            }
        }

        self.write(
            &request.slice.config.to_string(),
            &format!("package.{suffix}.sh"),
            &script,
        )
    }
}

/// Turn a property key such as `bin.includes` into `BIN_INCLUDES`
fn shell_name(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Single-quote a value so the shell takes it literally
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::VersionedId;
    use crate::script::ArchiveFormat;
    use crate::test_fixtures::create_temp_dir;

    #[test]
    fn test_config_suffix() {
        assert_eq!(
            config_suffix(&PlatformConfig::new("linux", "gtk", "x86_64")),
            "linux.gtk.x86_64"
        );
        assert_eq!(config_suffix(&PlatformConfig::any()), "any.any.any");
    }

    #[test]
    fn test_shell_name() {
        assert_eq!(shell_name("bin.includes"), "BIN_INCLUDES");
    }

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote("plugin.xml,."), "'plugin.xml,.'");
        assert_eq!(shell_quote("$HOME `id` \"x\""), "'$HOME `id` \"x\"'");
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
    }

    #[test]
    fn test_bundle_script_written() {
        let temp = create_temp_dir();
        let mut writer = ScriptDirectory::new(
            temp.path(),
            ScriptOptions {
                sign: true,
                ..ScriptOptions::default()
            },
        );
        let bundle = BundleDescriptor::new("org.foo", "1.0.0").with_property("bin.includes", ".");

        writer.bundle_script(&bundle).expect("script written");

        let content = std::fs::read_to_string(temp.path().join("plugins/org.foo_1.0.0/build.sh"))
            .expect("script exists");
        assert!(content.contains("build_bundle org.foo 1.0.0"));
        assert!(content.contains("BUILD_PROP_BIN_INCLUDES"));
        assert!(content.contains("sign_jar"));
        assert_eq!(writer.written().len(), 1);
    }

    #[test]
    fn test_feature_script_with_jnlp() {
        let temp = create_temp_dir();
        let mut writer = ScriptDirectory::new(
            temp.path(),
            ScriptOptions {
                generate_jnlp: true,
                ..ScriptOptions::default()
            },
        );
        let feature = FeatureDescriptor::new("org.bar", "2.0.0")
            .with_optional_include("org.docs")
            .with_bundle("org.foo");

        writer.feature_script(&feature).expect("script written");

        let content = std::fs::read_to_string(temp.path().join("features/org.bar_2.0.0/build.sh"))
            .expect("script exists");
        assert!(content.contains("build_feature org.docs # optional"));
        assert!(content.contains("gather_bundle org.foo"));
        assert!(content.contains("generate_jnlp org.bar 2.0.0"));
    }

    #[test]
    fn test_assemble_script_without_archive() {
        let temp = create_temp_dir();
        let mut writer = ScriptDirectory::new(
            temp.path(),
            ScriptOptions {
                generate_archive: false,
                ..ScriptOptions::default()
            },
        );
        let feature = FeatureDescriptor::new("org.bar", "2.0.0");
        let slice = ManifestSlice {
            config: PlatformConfig::new("linux", "gtk", "x86_64"),
            bundles: vec![VersionedId::new("org.foo", "1.0.0")],
            features: vec![feature.versioned_id()],
        };

        writer
            .assemble_script(&feature, &[slice])
            .expect("script written");

        let content = std::fs::read_to_string(temp.path().join("assemble.org.bar.sh"))
            .expect("script exists");
        assert!(content.contains("copy_element plugins/org.foo_1.0.0"));
        assert!(content.contains("copy_element features/org.bar_2.0.0"));
        assert!(!content.contains("archive zip"));
    }

    #[test]
    fn test_packaging_script() {
        let temp = create_temp_dir();
        let mut writer = ScriptDirectory::new(temp.path(), ScriptOptions::default());
        let request = AssembleRequest {
            root_files: vec!["readme.txt".to_string()],
            root_dirs: vec!["licenses".to_string()],
            archive_format: ArchiveFormat::Tar,
            slice: ManifestSlice {
                config: PlatformConfig::new("win32", "win32", "x86_64"),
                bundles: vec![],
                features: vec![],
            },
        };

        writer.packaging_script(&request).expect("script written");

        let content =
            std::fs::read_to_string(temp.path().join("package.win32.win32.x86_64.sh"))
                .expect("script exists");
        assert!(content.contains("copy_root_file readme.txt"));
        assert!(content.contains("copy_root_dir licenses"));
        assert!(content.contains("archive tar package.win32.win32.x86_64.tar.gz"));
    }

    #[test]
    fn test_write_failure_is_script_error() {
        let temp = create_temp_dir();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "file, not a directory").expect("write blocker");
        let mut writer = ScriptDirectory::new(&blocker, ScriptOptions::default());

        let err = writer
            .bundle_script(&BundleDescriptor::new("org.foo", "1.0.0"))
            .expect_err("cannot write below a file");
        assert!(matches!(
            err,
            crate::error::BuildError::ScriptGenerationFailed { .. }
        ));
    }
}
