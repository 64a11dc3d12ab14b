//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `maven/` - Artifact resolution from local Maven repositories
//! - `pom/` - POM XML parsing
//! - `toml/` - `bomprops.toml` parsing and the `init` template
//! - `properties/` - `.properties` output

pub mod maven;
pub mod pom;
pub mod properties;
pub mod toml;
