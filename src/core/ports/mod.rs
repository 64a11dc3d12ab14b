//! Port traits (interfaces) for external collaborators
//!
//! These traits are the boundary between the importer and the build
//! environment around it (repositories, descriptor formats, the project).
//!
//! Implementations live in the `adapters` module; tests inject mocks or
//! plain maps.

mod artifact_resolver;
mod descriptor_reader;
mod project_properties;

#[cfg(test)]
pub use artifact_resolver::MockArtifactResolver;
pub use artifact_resolver::{ArtifactResolver, ResolveError};
pub use descriptor_reader::{DescriptorError, DescriptorReader};
pub use project_properties::ProjectProperties;
