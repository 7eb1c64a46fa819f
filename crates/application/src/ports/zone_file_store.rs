use std::path::Path;
use zonefix_domain::RepairError;

/// Port for reading a zone file and replacing its contents.
pub trait ZoneFileStore: Send + Sync {
    /// Reads the whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> Result<String, RepairError>;

    /// Replaces the file's contents. Implementations must leave the original
    /// untouched when the write fails.
    fn replace_contents(&self, path: &Path, contents: &str) -> Result<(), RepairError>;
}
