//! Domain models for bomprops
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`BomSpec`] - "Import these keys from that BOM under this prefix"
//! - [`Coordinates`] / [`ArtifactRequest`] - Where a descriptor lives
//! - [`ProjectDescriptor`] / [`PropertyTable`] - What a descriptor declares
//! - [`ImportReport`] - What a run inserted

mod bom;
mod descriptor;
mod report;

pub use bom::{ArtifactRequest, BomSpec, Coordinates, CoordinatesError, POM_EXTENSION};
pub use descriptor::{ProjectDescriptor, PropertyTable};
pub use report::{BomImport, ImportReport};
