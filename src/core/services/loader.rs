//! BOM loader service - coordinates in, property table out
//!
//! Resolves the BOM's POM through an [`ArtifactResolver`], opens it and hands
//! the stream to a [`DescriptorReader`]. Failures are passed through
//! unchanged; nothing is retried.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::models::{ArtifactRequest, Coordinates, PropertyTable};
use crate::core::ports::{ArtifactResolver, DescriptorError, DescriptorReader, ResolveError};

/// Errors that can occur while loading a BOM
#[derive(Debug, Error)]
pub enum LoadError {
    /// The resolver could not produce a file
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The resolved file could not be opened
    #[error("cannot open {path}: {source}")]
    Open {
        /// The resolved descriptor path
        path: PathBuf,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },

    /// The descriptor could not be parsed
    #[error("cannot parse {path}: {source}")]
    Parse {
        /// The resolved descriptor path
        path: PathBuf,
        /// The underlying error
        #[source]
        source: DescriptorError,
    },
}

/// Loads the property table declared by a BOM
#[derive(Debug)]
pub struct BomLoader<'a, R: ?Sized, D: ?Sized> {
    resolver: &'a R,
    reader: &'a D,
}

impl<'a, R, D> BomLoader<'a, R, D>
where
    R: ArtifactResolver + ?Sized,
    D: DescriptorReader + ?Sized,
{
    /// Create a loader over the given collaborators
    pub const fn new(resolver: &'a R, reader: &'a D) -> Self {
        Self { resolver, reader }
    }

    /// Resolve the BOM's POM and return its `<properties>` block
    pub fn load(&self, coordinates: &Coordinates) -> Result<PropertyTable, LoadError> {
        let request = ArtifactRequest::pom(coordinates.clone());
        let path = self.resolver.resolve(&request)?;
        log::debug!("Resolved {request} to {}", path.display());

        // The file handle is dropped on every path out of this scope
        let file = File::open(&path).map_err(|source| LoadError::Open {
            path: path.clone(),
            source,
        })?;
        let mut input = BufReader::new(file);

        let descriptor = self
            .reader
            .read(&mut input)
            .map_err(|source| LoadError::Parse { path, source })?;

        Ok(descriptor.properties)
    }
}
