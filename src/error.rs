use std::path::PathBuf;

/// Errors surfaced by the persistence layer.
///
/// Task operations themselves are total; the only thing that can fail is
/// reading from or writing through to the storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(#[from] rusqlite::Error),

    #[error("failed to serialize task data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("could not determine data directory")]
    NoDataDir,

    #[error("storage path has no parent directory: {0}")]
    BadPath(PathBuf),
}
