//! Artifact resolver port
//!
//! Defines the interface for turning coordinates into a local file.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::models::ArtifactRequest;

/// Errors raised while resolving an artifact
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No repository holds the artifact
    #[error("artifact {request} not found (searched: {})", display_paths(.searched))]
    NotFound {
        /// The request that failed
        request: String,
        /// Candidate files that were checked
        searched: Vec<PathBuf>,
    },

    /// Repository root is unusable
    #[error("repository root is not a directory: {0}")]
    InvalidRoot(PathBuf),

    /// IO error while probing the repository
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "nothing".to_string();
    }
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

/// Resolves an artifact request to a file on the local filesystem
///
/// Implementations may download, copy or simply locate the file; the
/// importer only needs a readable path back.
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactResolver {
    /// Resolve the request, returning the path of the artifact file
    fn resolve(&self, request: &ArtifactRequest) -> Result<PathBuf, ResolveError>;
}
