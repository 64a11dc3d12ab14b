//! Centralized path definitions for bomprops
//!
//! This module provides a single source of truth for all filesystem paths
//! used by bomprops.
//!
//! ## Layout
//!
//! ### Per-Project
//!
//! ```text
//! project/
//! └── bomprops.toml             # BOMs to import, extra repositories
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.config/bomprops/
//! └── config.toml               # Local repository override
//!
//! ~/.m2/repository/             # Default local Maven repository
//! ```

use std::path::PathBuf;

// =============================================================================
// Project-level paths
// =============================================================================

/// Project configuration filename
pub const PROJECT_FILE: &str = "bomprops.toml";

/// Environment variable overriding the local repository
pub const LOCAL_REPO_ENV: &str = "BOMPROPS_LOCAL_REPO";

/// Get path to `bomprops.toml` in the current directory.
#[must_use]
pub fn project_file() -> PathBuf {
    PathBuf::from(PROJECT_FILE)
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Global config directory name
const GLOBAL_DIR: &str = "bomprops";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global bomprops directory.
///
/// Returns `~/.config/bomprops/` on Linux, the platform equivalent elsewhere.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.config/bomprops/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Get the default local Maven repository.
///
/// Returns `~/.m2/repository`.
#[must_use]
pub fn default_local_repository() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(".m2")
        .join("repository")
}
