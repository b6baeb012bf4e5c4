//! Error types for every step of the cleanup pipeline.
//!
//! Each filesystem action that can fail has its own [`CleanError`] variant
//! carrying the path it was working on. The orchestrator wraps these in a
//! [`PipelineError`] that also records which stage was running.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while sorting, unpacking or pruning a directory tree.
#[derive(Debug, Error)]
pub enum CleanError {
    /// The recursive walk of a directory could not be performed.
    #[error("Failed to walk {}: {reason}", .path.display())]
    Walk { path: PathBuf, reason: String },

    /// Failed to create a category or extraction directory.
    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to move a file to its category directory.
    #[error("Failed to move {} to {}: {source}", .from.display(), .to.display())]
    FileMoveFailure {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to list the contents of a directory.
    #[error("Failed to read directory {}: {source}", .path.display())]
    ReadDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to delete an empty directory.
    #[error("Failed to remove directory {}: {source}", .path.display())]
    RemoveDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An archive could not be unpacked.
    #[error("Failed to extract {}: {source}", .archive.display())]
    ExtractionFailed {
        archive: PathBuf,
        #[source]
        source: ExtractError,
    },
}

impl CleanError {
    /// Returns the file or directory the failed action was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Walk { path, .. }
            | Self::DirectoryCreationFailed { path, .. }
            | Self::ReadDirFailed { path, .. }
            | Self::RemoveDirFailed { path, .. } => path,
            Self::FileMoveFailure { from, .. } => from,
            Self::ExtractionFailed { archive, .. } => archive,
        }
    }
}

/// Errors raised by the archive extraction facility.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Neither the file name nor its contents identify a supported format.
    #[error("unsupported archive format")]
    UnsupportedFormat,

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The pipeline stage that was running when a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Sort,
    Unpack,
    Prune,
    Report,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Sort => "sort",
            Stage::Unpack => "unpack",
            Stage::Prune => "prune",
            Stage::Report => "report",
        };
        f.write_str(name)
    }
}

/// A failure of the whole run, tagged with the stage that produced it.
#[derive(Debug, Error)]
#[error("{stage} step failed: {source}")]
pub struct PipelineError {
    pub stage: Stage,
    #[source]
    pub source: CleanError,
}

impl PipelineError {
    /// Wraps a step error with the stage it came from.
    pub fn new(stage: Stage, source: CleanError) -> Self {
        Self { stage, source }
    }
}

/// Result type for pipeline steps.
pub type CleanResult<T> = Result<T, CleanError>;
