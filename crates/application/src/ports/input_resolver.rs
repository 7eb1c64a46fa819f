use std::path::{Path, PathBuf};
use zonefix_domain::RepairError;

/// Expands one command-line input (a path or a glob pattern) into files.
pub trait InputResolver: Send + Sync {
    fn resolve(&self, input: &str) -> Result<Vec<PathBuf>, RepairError>;

    /// Key under which two spellings of the same file compare equal.
    fn identity(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }
}
