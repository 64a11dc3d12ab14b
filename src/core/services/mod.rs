//! Business logic services
//!
//! - [`matcher`] - Match property keys against glob patterns
//! - [`validator`] - Check a BOM spec and compile its patterns
//! - [`loader`] - Resolve a BOM and read its property table
//! - [`importer`] - Drive the whole import into the project map

pub mod importer;
pub mod loader;
pub mod matcher;
pub mod validator;

pub use importer::{ImportError, PropertyImporter, copy_properties};
pub use loader::{BomLoader, LoadError};
pub use matcher::{KeyPattern, PatternError, matches, matches_any};
pub use validator::{ValidBom, ValidationError, validate};
