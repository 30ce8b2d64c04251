//! Typed errors for block documents.
//!
//! Folding itself cannot fail; these cover the layers around it: reading a
//! document, resolving its flags and parsing its style values.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a block document into an aggregate.
#[derive(Debug, Error, PartialEq)]
pub enum ComposeError {
    #[error("Unknown flag '{flag}' referenced by segment {index}")]
    UnknownFlag { flag: String, index: usize },
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Invalid flag assignment '{0}', expected NAME or NAME=true|false")]
    InvalidFlag(String),
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),
}

pub type ComposeResult<T> = std::result::Result<T, ComposeError>;
