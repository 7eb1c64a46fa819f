use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct BackupConfig {
    /// Copy each zone file aside before rewriting it
    #[serde(default)]
    pub enabled: bool,

    /// Where backups land, relative to the working directory unless absolute
    #[serde(default = "default_backup_directory")]
    pub directory: String,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            directory: default_backup_directory(),
        }
    }
}

pub fn default_backup_directory() -> String {
    "BACKUP".to_string()
}
