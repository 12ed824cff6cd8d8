use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that reach the caller of a config model.
///
/// A missing file on load and a permission-denied write on save are not
/// represented here: both are absorbed by [`crate::ConfigFile`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    ReadFailure { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    WriteFailure { path: PathBuf, source: io::Error },

    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("invalid value for {attribute}: {value:?}")]
    InvalidValue { attribute: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
