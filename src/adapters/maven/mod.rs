//! Maven repository adapter
//!
//! - [`layout`] - Coordinates to repository-relative paths
//! - [`repository`] - `ArtifactResolver` over local repository directories

pub mod layout;
pub mod repository;

pub use layout::artifact_path;
pub use repository::{LocalRepository, RepositoryChain};
