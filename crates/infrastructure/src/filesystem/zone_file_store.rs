use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;
use zonefix_application::ports::ZoneFileStore;
use zonefix_domain::RepairError;

/// Zone files on the local filesystem.
///
/// Writes go to a temporary file next to the target which is then renamed
/// over it, so a failed write never truncates the original.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsZoneFileStore;

impl FsZoneFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl ZoneFileStore for FsZoneFileStore {
    fn read_to_string(&self, path: &Path) -> Result<String, RepairError> {
        let metadata = fs::metadata(path).map_err(|e| read_error(path, e))?;
        if !metadata.is_file() {
            return Err(RepairError::MissingFile {
                path: path.to_path_buf(),
            });
        }

        let bytes = fs::read(path).map_err(|e| read_error(path, e))?;
        debug!(path = %path.display(), bytes = bytes.len(), "Zone file read");

        String::from_utf8(bytes).map_err(|_| RepairError::InvalidEncoding {
            path: path.to_path_buf(),
        })
    }

    fn replace_contents(&self, path: &Path, contents: &str) -> Result<(), RepairError> {
        let write_error = |e: io::Error| RepairError::Write {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };

        // Rename onto the link target so symlinked zone files stay links.
        let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let directory = parent_directory(&target);

        let mut temp = NamedTempFile::new_in(&directory).map_err(write_error)?;
        temp.write_all(contents.as_bytes()).map_err(write_error)?;
        temp.as_file().sync_all().map_err(write_error)?;

        if let Ok(metadata) = fs::metadata(&target) {
            temp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(write_error)?;
        }

        temp.persist(&target).map_err(|e| write_error(e.error))?;
        debug!(path = %target.display(), bytes = contents.len(), "Zone file replaced");
        Ok(())
    }
}

fn parent_directory(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn read_error(path: &Path, e: io::Error) -> RepairError {
    match e.kind() {
        io::ErrorKind::NotFound => RepairError::MissingFile {
            path: path.to_path_buf(),
        },
        _ => RepairError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    }
}
