use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while patching the target file
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("IO error: {source} (path: {})", path.display())]
    Io { source: io::Error, path: PathBuf },
}

/// Coarse classification of a [`PatchError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    PermissionDenied,
    Other,
}

impl PatchError {
    /// Create an error from an IO failure, classified by its kind
    pub fn io_error(err: io::Error, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { source: err, path },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PatchError::NotFound { .. } => ErrorKind::NotFound,
            PatchError::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            PatchError::Io { .. } => ErrorKind::Other,
        }
    }

    /// Path the failed operation was acting on
    pub fn path(&self) -> &Path {
        match self {
            PatchError::NotFound { path }
            | PatchError::PermissionDenied { path }
            | PatchError::Io { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, PatchError>;
