//! Descriptor reader port
//!
//! Defines the interface for parsing an artifact descriptor from bytes.

use std::io::BufRead;

use thiserror::Error;

use crate::core::models::ProjectDescriptor;

/// Errors raised while parsing a descriptor
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The document is not well-formed or has an unexpected shape
    #[error("malformed descriptor: {0}")]
    Malformed(String),

    /// IO error while reading the stream
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses a descriptor from a byte stream
pub trait DescriptorReader {
    /// Read a whole descriptor from `input`
    fn read(&self, input: &mut dyn BufRead) -> Result<ProjectDescriptor, DescriptorError>;
}
