//! bomprops - Import properties declared in Maven BOMs into a project
//!
//! This library provides the BOM property importer: resolve BOM descriptors
//! from a repository, filter their `<properties>` with include/exclude globs
//! and publish the survivors under a prefix in a project property map.
//!
//! ```no_run
//! use std::collections::BTreeMap;
//!
//! use bomprops::adapters::maven::LocalRepository;
//! use bomprops::adapters::pom::PomReader;
//! use bomprops::core::models::{BomSpec, Coordinates};
//! use bomprops::core::services::copy_properties;
//!
//! let repo = LocalRepository::new("/home/me/.m2/repository");
//! let boms = [BomSpec::new(&Coordinates::new("org.junit", "junit-bom", "5.10.0"), "junit")
//!     .with_includes(["*.version"])];
//! let mut props = BTreeMap::new();
//!
//! copy_properties(&repo, &PomReader::new(), Some(&boms), &mut props).unwrap();
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
