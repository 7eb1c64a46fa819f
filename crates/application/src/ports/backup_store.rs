use std::path::Path;
use zonefix_domain::RepairError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupOutcome {
    Created,
    /// A backup with the same name was already there and was left as is.
    AlreadyExists,
}

pub trait BackupStore: Send + Sync {
    /// Creates the directory (and parents) if missing.
    fn ensure_directory(&self, directory: &Path) -> Result<(), RepairError>;

    /// Copies `source` byte-for-byte to `destination`, never overwriting.
    fn copy_verbatim(&self, source: &Path, destination: &Path)
        -> Result<BackupOutcome, RepairError>;
}
