/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types for the fixrepo converter.
//!
//! Only configuration and I/O problems are errors. Malformed records inside a
//! repository (dangling references, unknown types, missing symbolic names) are
//! tolerated by the resolver and never surface here.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`FixRepoError`] as the error type.
pub type Result<T> = std::result::Result<T, FixRepoError>;

/// Top-level error type for all fixrepo operations.
#[derive(Debug, Error)]
pub enum FixRepoError {
    /// Error while loading a repository version.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Error while resolving a repository into a dictionary.
    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// Error while rendering or writing the dictionary document.
    #[error("write error: {0}")]
    Write(#[from] WriteError),
}

/// Errors that occur while loading a repository version from disk.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The `<root>/<version>/Base` directory does not exist.
    #[error("directory not found: {}", path.display())]
    DirectoryNotFound {
        /// The directory that was expected.
        path: PathBuf,
    },

    /// A repository document could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The document being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A repository document is not well-formed or does not match the
    /// expected table layout.
    #[error("failed to parse {}: {reason}", path.display())]
    Parse {
        /// The document being parsed.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },
}

/// Errors that occur during resolution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The version string does not follow `FIX.<major>.<minor>[SP<n>]` or
    /// `FIXT.<major>.<minor>`. Only raised in strict mode.
    #[error("invalid version string: {0}")]
    InvalidVersion(String),
}

/// Errors that occur while rendering or writing the output document.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The XML writer rejected an event.
    #[error("failed to emit xml: {0}")]
    Emit(String),

    /// The rendered document is not valid UTF-8.
    #[error("rendered document is not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The output file or its parent directory could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// The output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
