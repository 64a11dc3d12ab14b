//! TOML parser for bomprops.toml files
//!
//! Handles locating, reading and deserializing the project configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::core::models::BomSpec;
use crate::paths::PROJECT_FILE;

/// Errors that can occur when loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("cannot read {path}: {source}")]
    Read {
        /// The file that was read
        path: PathBuf,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },

    /// The file could not be written
    #[error("cannot write {path}: {source}")]
    Write {
        /// The file that was written
        path: PathBuf,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has the wrong shape
    #[error("invalid {path}: {source}")]
    Parse {
        /// The file that was parsed
        path: PathBuf,
        /// The underlying error
        #[source]
        source: toml::de::Error,
    },
}

/// A bomprops.toml file structure
#[derive(Debug, Default, Deserialize)]
pub struct ProjectFile {
    /// BOMs to import, in order
    #[serde(default, rename = "bom")]
    pub boms: Vec<BomSpec>,

    /// Extra repositories to search
    #[serde(default)]
    pub repository: RepositoryConfig,

    /// Initial project properties
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

/// Repository section of bomprops.toml
#[derive(Debug, Default, Deserialize)]
pub struct RepositoryConfig {
    /// Repository roots searched after the local repository
    #[serde(default)]
    pub paths: Vec<PathBuf>,
}

impl ProjectFile {
    /// Parse a project file from a string
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Repository paths, with relative entries resolved against `base`
    #[must_use]
    pub fn repository_paths(&self, base: &Path) -> Vec<PathBuf> {
        self.repository.paths.iter().map(|p| base.join(p)).collect()
    }
}

/// Find the nearest bomprops.toml, from `from` up to the filesystem root
#[must_use]
pub fn find_project_file(from: &Path) -> Option<PathBuf> {
    let mut current = from.to_path_buf();

    // Normalize: if it's a file, start from parent
    if current.is_file() {
        current = current.parent().unwrap_or(from).to_path_buf();
    }

    loop {
        let candidate = current.join(PROJECT_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load a bomprops.toml file
pub fn load_file(path: &Path) -> Result<ProjectFile, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ProjectFile::parse(&content, path)
}
