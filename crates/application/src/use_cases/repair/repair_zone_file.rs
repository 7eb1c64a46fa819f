use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use zonefix_domain::{BackupPolicy, RepairError, RepairReport};

use crate::ports::{BackupOutcome, BackupStore, ZoneFileStore};
use crate::services::repair_lines;

pub struct RepairZoneFileUseCase {
    store: Arc<dyn ZoneFileStore>,
    backups: Arc<dyn BackupStore>,
    backup: Option<BackupPolicy>,
}

impl RepairZoneFileUseCase {
    pub fn new(
        store: Arc<dyn ZoneFileStore>,
        backups: Arc<dyn BackupStore>,
        backup: Option<BackupPolicy>,
    ) -> Self {
        Self {
            store,
            backups,
            backup,
        }
    }

    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub fn execute(&self, path: &Path) -> Result<RepairReport, RepairError> {
        let original = self.store.read_to_string(path)?;

        let backup_path = match &self.backup {
            Some(policy) => self.back_up(path, policy)?,
            None => None,
        };

        let mut contents = String::with_capacity(original.len() + 64);
        let mut total_lines = 0;
        let mut changed_lines = 0;
        for rewritten in repair_lines(original.lines()) {
            total_lines += 1;
            if rewritten.changed {
                changed_lines += 1;
            }
            contents.push_str(rewritten.as_str());
            contents.push('\n');
        }

        self.store.replace_contents(path, &contents)?;

        info!(
            total_lines,
            changed_lines, "{} written successfully", path.display()
        );

        Ok(RepairReport {
            path: path.to_path_buf(),
            total_lines,
            changed_lines,
            backup_path,
        })
    }

    /// Returns the backup taken for this run, or `None` when an earlier
    /// backup under the same name was kept instead.
    fn back_up(
        &self,
        path: &Path,
        policy: &BackupPolicy,
    ) -> Result<Option<PathBuf>, RepairError> {
        self.backups.ensure_directory(&policy.directory)?;

        let destination = policy.backup_path_for(path);
        match self.backups.copy_verbatim(path, &destination)? {
            BackupOutcome::Created => {
                info!(
                    backup = %destination.display(),
                    "File {} backed up", path.display()
                );
                Ok(Some(destination))
            }
            BackupOutcome::AlreadyExists => {
                warn!(
                    backup = %destination.display(),
                    "Backup already exists, {} was not backed up",
                    path.display()
                );
                Ok(None)
            }
        }
    }
}
