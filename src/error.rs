use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Problems detected while resolving a configuration. Fatal: no traversal
/// starts while one of these is outstanding.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("extension list is empty")]
    EmptyExtensions,

    #[error("invalid extension '{0}'")]
    InvalidExtension(String),

    #[error("failed to resolve path '{path}': {source}")]
    PathResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create output directory '{path}': {source}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure of a single file copy. The destination may be left truncated.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("failed to open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create '{path}': {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy '{from}' to '{to}': {source}")]
    Stream {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to finalize '{path}': {source}")]
    Finalize {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CopyError {
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::Open { source, .. }
            | Self::Create { source, .. }
            | Self::Stream { source, .. }
            | Self::Finalize { source, .. } => source.kind(),
        }
    }
}
