//! Global configuration management
//!
//! User-level settings, stored at `~/.config/bomprops/config.toml`
//! (XDG standard):
//!
//! ```toml
//! [repository]
//! local = "/opt/maven/repository"
//! extra = ["/srv/mirror"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths;

/// Global bomprops configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Repository preferences
    #[serde(default)]
    pub repository: RepositorySettings,
}

/// Where to look for BOMs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySettings {
    /// Local repository replacing `~/.m2/repository`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<PathBuf>,
    /// Repositories searched after every other one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<PathBuf>,
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or use defaults if missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from a specific file, or use defaults
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path).map(|content| toml::from_str(&content)) {
            Ok(Ok(config)) => config,
            Ok(Err(e)) => {
                log::warn!("Ignoring malformed {}: {e}", path.display());
                Self::default()
            },
            Err(e) => {
                log::warn!("Ignoring unreadable {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// The primary local repository
    #[must_use]
    pub fn local_repository(&self) -> PathBuf {
        self.repository.local.clone().unwrap_or_else(paths::default_local_repository)
    }

    /// Repository roots in search order
    ///
    /// `explicit` roots (from the command line or environment) replace the
    /// local repository. `project` roots come next, then the user's extra
    /// repositories.
    #[must_use]
    pub fn repository_roots(&self, explicit: &[PathBuf], project: &[PathBuf]) -> Vec<PathBuf> {
        let mut roots = if explicit.is_empty() {
            vec![self.local_repository()]
        } else {
            explicit.to_vec()
        };
        roots.extend_from_slice(project);
        roots.extend(self.repository.extra.iter().cloned());
        roots
    }
}
