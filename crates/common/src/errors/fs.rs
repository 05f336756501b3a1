use std::{
    io,
    path::{Path, PathBuf},
};

/// An IO error paired with the path it happened on.
#[derive(Debug, thiserror::Error)]
pub enum FsPathError {
    #[error("failed to read from {path:?}: {source}")]
    Read { source: io::Error, path: PathBuf },
    #[error("failed to write to {path:?}: {source}")]
    Write { source: io::Error, path: PathBuf },
    #[error("failed to create file {path:?}: {source}")]
    CreateFile { source: io::Error, path: PathBuf },
    #[error("failed to open file {path:?}: {source}")]
    Open { source: io::Error, path: PathBuf },
    #[error("failed to create dir {path:?}: {source}")]
    CreateDir { source: io::Error, path: PathBuf },
    #[error("failed to read dir {path:?}: {source}")]
    ReadDir { source: io::Error, path: PathBuf },
    #[error("failed to remove file {path:?}: {source}")]
    RemoveFile { source: io::Error, path: PathBuf },
    #[error("failed to deserialize JSON from {path:?}: {source}")]
    ReadJson { source: serde_json::Error, path: PathBuf },
    #[error("failed to serialize JSON to {path:?}: {source}")]
    WriteJson { source: serde_json::Error, path: PathBuf },
}

impl FsPathError {
    pub fn read(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Read { source, path: path.into() }
    }

    pub fn write(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Write { source, path: path.into() }
    }

    pub fn create_file(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::CreateFile { source, path: path.into() }
    }

    pub fn open(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Open { source, path: path.into() }
    }

    pub fn create_dir(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::CreateDir { source, path: path.into() }
    }

    pub fn read_dir(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::ReadDir { source, path: path.into() }
    }

    pub fn remove_file(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::RemoveFile { source, path: path.into() }
    }

    /// Returns the path the error happened on.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. }
            | Self::Write { path, .. }
            | Self::CreateFile { path, .. }
            | Self::Open { path, .. }
            | Self::CreateDir { path, .. }
            | Self::ReadDir { path, .. }
            | Self::RemoveFile { path, .. }
            | Self::ReadJson { path, .. }
            | Self::WriteJson { path, .. } => path,
        }
    }
}
