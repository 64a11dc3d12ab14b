//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing bomprops components.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use bomprops::adapters::maven::LocalRepository;
use bomprops::core::models::{ArtifactRequest, BomSpec, Coordinates};
use tempfile::TempDir;

/// A temporary local Maven repository
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Get the root path of the repository
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A resolver over this repository
    pub fn resolver(&self) -> LocalRepository {
        LocalRepository::new(self.path())
    }

    /// Install a BOM declaring the given properties
    pub fn install_bom(&self, coordinates: &str, properties: &[(&str, &str)]) -> PathBuf {
        let body: String = properties
            .iter()
            .map(|(k, v)| format!("    <{k}>{v}</{k}>\n"))
            .collect();
        let coordinates: Coordinates = coordinates.parse().expect("bad coordinates");
        let pom = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>{}</groupId>
  <artifactId>{}</artifactId>
  <version>{}</version>
  <packaging>pom</packaging>
  <properties>
{body}  </properties>
</project>
"#,
            coordinates.group_id, coordinates.artifact_id, coordinates.version
        );
        self.install_raw(&coordinates, &pom)
    }

    /// Install a POM file with arbitrary content
    pub fn install_raw(&self, coordinates: &Coordinates, content: &str) -> PathBuf {
        let path = self.resolver().path_of(&ArtifactRequest::pom(coordinates.clone()));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

/// A spec for `coordinates` with the given prefix and includes
pub fn bom(coordinates: &str, prefix: &str, includes: &[&str]) -> BomSpec {
    let coordinates: Coordinates = coordinates.parse().expect("bad coordinates");
    BomSpec::new(&coordinates, prefix).with_includes(includes.iter().copied())
}

/// Build a property map from pairs
pub fn props(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
}
