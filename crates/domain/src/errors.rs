use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepairError {
    #[error("File not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("Invalid file pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Failed to create backup directory {}: {reason}", directory.display())]
    BackupDirectoryCreation { directory: PathBuf, reason: String },

    #[error("Failed to back up {} to {}: {reason}", path.display(), backup.display())]
    BackupCopy {
        path: PathBuf,
        backup: PathBuf,
        reason: String,
    },

    #[error("Failed to read {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },

    #[error("File is not valid UTF-8 text: {}", path.display())]
    InvalidEncoding { path: PathBuf },

    #[error("Failed to write {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },
}

impl RepairError {
    /// Short name of the operation that failed, for structured logging.
    pub fn operation(&self) -> &'static str {
        match self {
            RepairError::MissingFile { .. } | RepairError::InvalidPattern { .. } => "resolve",
            RepairError::BackupDirectoryCreation { .. } | RepairError::BackupCopy { .. } => {
                "backup"
            }
            RepairError::Read { .. } | RepairError::InvalidEncoding { .. } => "read",
            RepairError::Write { .. } => "write",
        }
    }
}
