//! Common test utilities for featurepack integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch project directory with a site under `site/`
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Add a feature descriptor to the site
    pub fn feature(&self, id: &str, yaml_body: &str) {
        self.write_file(
            &format!("site/features/{id}.yaml"),
            &format!("id: {id}\nversion: 1.0.0\n{yaml_body}"),
        );
    }

    /// Add a bundle descriptor to the site
    pub fn bundle(&self, id: &str, yaml_body: &str) {
        self.write_file(
            &format!("site/bundles/{id}.yaml"),
            &format!("id: {id}\nversion: 1.0.0\n{yaml_body}"),
        );
    }

    /// The sample site used by most tests
    ///
    /// ```text
    /// org.example.sdk ──includes──> org.example.core ──> bundle org.example.runtime
    ///        │          (optional)  org.example.docs  (absent)
    ///        └──bundles──> org.example.ui, org.example.ui.gtk (linux only)
    /// org.example.tools ──> bundle org.example.runtime
    /// ```
    pub fn sample_site(&self) {
        self.feature(
            "org.example.sdk",
            "includes:\n  - id: org.example.core\n  - id: org.example.docs\n    optional: true\n\
             bundles:\n  - id: org.example.ui\n  - id: org.example.ui.gtk\n    fragment: true\n    \
             platforms: [\"linux,gtk,*\"]\n",
        );
        self.feature(
            "org.example.core",
            "bundles:\n  - id: org.example.runtime\n",
        );
        self.feature(
            "org.example.tools",
            "bundles:\n  - id: org.example.runtime\n",
        );
        self.bundle(
            "org.example.ui",
            "properties:\n  bin.includes: plugin.xml\n",
        );
        self.bundle(
            "org.example.ui.gtk",
            "fragment: true\nhost: org.example.ui\n",
        );
        self.bundle("org.example.runtime", "");
    }

    /// A featurepack command running inside the workspace
    pub fn cmd(&self) -> Command {
        let mut cmd = featurepack_cmd();
        cmd.current_dir(&self.path)
            .env_remove("FEATUREPACK_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// The featurepack binary built for this test run
#[allow(deprecated)]
pub fn featurepack_cmd() -> Command {
    Command::cargo_bin("featurepack").expect("featurepack binary is built")
}
