//! Core domain logic for bomprops
//!
//! This module contains the property importer. Artifact resolution, descriptor
//! parsing and the project property map are reached through port traits; the
//! only direct I/O is the loader opening a resolved descriptor file.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`BomSpec`, `Coordinates`, `PropertyTable`)
//! - `services/` - Matching, validation, loading and the import driver
//! - `ports/` - Trait definitions for external collaborators

pub mod models;
pub mod ports;
pub mod services;
