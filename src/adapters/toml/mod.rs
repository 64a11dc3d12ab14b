//! TOML project configuration
//!
//! - [`parser`] - Read and deserialize bomprops.toml files
//! - [`writer`] - Create the bomprops.toml template

pub mod parser;
pub mod writer;

pub use parser::{ConfigError, ProjectFile, RepositoryConfig, find_project_file, load_file};
pub use writer::{TEMPLATE, write_template};
