use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use tracing::debug;
use zonefix_application::ports::{BackupOutcome, BackupStore};
use zonefix_domain::RepairError;

#[derive(Debug, Default, Clone, Copy)]
pub struct FsBackupStore;

impl FsBackupStore {
    pub fn new() -> Self {
        Self
    }
}

impl BackupStore for FsBackupStore {
    fn ensure_directory(&self, directory: &Path) -> Result<(), RepairError> {
        if directory.is_dir() {
            return Ok(());
        }

        fs::create_dir_all(directory).map_err(|e| RepairError::BackupDirectoryCreation {
            directory: directory.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(directory = %directory.display(), "Backup directory created");
        Ok(())
    }

    fn copy_verbatim(
        &self,
        source: &Path,
        destination: &Path,
    ) -> Result<BackupOutcome, RepairError> {
        let copy_error = |e: io::Error| RepairError::BackupCopy {
            path: source.to_path_buf(),
            backup: destination.to_path_buf(),
            reason: e.to_string(),
        };

        let mut input = File::open(source).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => RepairError::MissingFile {
                path: source.to_path_buf(),
            },
            _ => copy_error(e),
        })?;

        let mut output = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(destination)
        {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Ok(BackupOutcome::AlreadyExists)
            }
            Err(e) => return Err(copy_error(e)),
        };

        let copied = io::copy(&mut input, &mut output).and_then(|bytes| {
            output.sync_all()?;
            Ok(bytes)
        });

        match copied {
            Ok(bytes) => {
                debug!(backup = %destination.display(), bytes, "Backup written");
                Ok(BackupOutcome::Created)
            }
            Err(e) => {
                // A half-written backup would block the next attempt.
                let _ = fs::remove_file(destination);
                Err(copy_error(e))
            }
        }
    }
}
