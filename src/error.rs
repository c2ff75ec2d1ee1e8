use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a source file could not be scanned for an SPDX tag.
#[derive(Debug, Error)]
pub enum SourceReadError {
    #[error("failed to read {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("{path} is not valid UTF-8")]
    Decode { path: PathBuf },
}

impl SourceReadError {
    pub fn from_io(path: PathBuf, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::InvalidData {
            SourceReadError::Decode { path }
        } else {
            SourceReadError::Io { path, source: err }
        }
    }
}

#[derive(Debug, Error)]
pub enum UrlFileError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

impl UrlFileError {
    pub fn from_io(path: PathBuf, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            UrlFileError::NotFound(path)
        } else {
            UrlFileError::Io { path, source: err }
        }
    }
}
