//! Command implementations for the CLI

mod copy_properties;
mod init;
mod show;

pub use copy_properties::copy_properties;
pub use init::init;
pub use show::{Filter, show};
