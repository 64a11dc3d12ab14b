//! POM descriptor adapter
//!
//! - [`reader`] - `DescriptorReader` for Maven POM XML

pub mod reader;

pub use reader::PomReader;
