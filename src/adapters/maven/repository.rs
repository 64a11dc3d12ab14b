//! Local Maven repositories
//!
//! Implements the `ArtifactResolver` port by locating artifact files in one
//! or more repository directories laid out the Maven way.

use std::path::{Path, PathBuf};

use crate::core::models::ArtifactRequest;
use crate::core::ports::{ArtifactResolver, ResolveError};

use super::layout::artifact_path;

/// A repository directory on the local filesystem (e.g. `~/.m2/repository`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalRepository {
    root: PathBuf,
}

impl LocalRepository {
    /// Create a repository rooted at the given directory
    ///
    /// The directory does not have to exist; resolving against a missing
    /// root simply finds nothing.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root path
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the requested artifact would live in this repository
    #[must_use]
    pub fn path_of(&self, request: &ArtifactRequest) -> PathBuf {
        self.root.join(artifact_path(request))
    }
}

impl ArtifactResolver for LocalRepository {
    fn resolve(&self, request: &ArtifactRequest) -> Result<PathBuf, ResolveError> {
        if self.root.exists() && !self.root.is_dir() {
            return Err(ResolveError::InvalidRoot(self.root.clone()));
        }

        let path = self.path_of(request);
        if path.is_file() {
            Ok(path)
        } else {
            Err(ResolveError::NotFound {
                request: request.to_string(),
                searched: vec![path],
            })
        }
    }
}

/// Several repositories searched in order; the first hit wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryChain {
    repositories: Vec<LocalRepository>,
}

impl RepositoryChain {
    /// Create a chain from repositories in search order
    #[must_use]
    pub const fn new(repositories: Vec<LocalRepository>) -> Self {
        Self { repositories }
    }

    /// Build a chain from root directories, dropping duplicates
    pub fn from_roots<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut repositories: Vec<LocalRepository> = Vec::new();
        for root in roots {
            let repository = LocalRepository::new(root);
            if !repositories.contains(&repository) {
                repositories.push(repository);
            }
        }
        Self { repositories }
    }

    /// Repositories in search order
    #[must_use]
    pub fn repositories(&self) -> &[LocalRepository] {
        &self.repositories
    }
}

impl ArtifactResolver for RepositoryChain {
    fn resolve(&self, request: &ArtifactRequest) -> Result<PathBuf, ResolveError> {
        let mut searched = Vec::new();

        for repository in &self.repositories {
            match repository.resolve(request) {
                Ok(path) => return Ok(path),
                Err(ResolveError::NotFound { searched: paths, .. }) => searched.extend(paths),
                Err(e) => return Err(e),
            }
        }

        Err(ResolveError::NotFound {
            request: request.to_string(),
            searched,
        })
    }
}
