use crate::errors::RepairError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const BACKUP_SUFFIX: &str = ".bak";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupPolicy {
    pub directory: PathBuf,
}

impl BackupPolicy {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// `<directory>/<file name>.bak`
    pub fn backup_path_for(&self, source: &Path) -> PathBuf {
        let mut name: OsString = source
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| source.as_os_str().to_os_string());
        name.push(BACKUP_SUFFIX);
        self.directory.join(name)
    }
}

/// Everything one invocation needs, fixed before any file is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairConfig {
    pub inputs: Vec<String>,
    pub backup: Option<BackupPolicy>,
}

impl RepairConfig {
    pub fn new(inputs: Vec<String>, backup: Option<BackupPolicy>) -> Self {
        Self { inputs, backup }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairReport {
    pub path: PathBuf,
    pub total_lines: usize,
    pub changed_lines: usize,
    pub backup_path: Option<PathBuf>,
}

impl RepairReport {
    pub fn is_modified(&self) -> bool {
        self.changed_lines > 0
    }
}

pub type RepairOutcome = Result<RepairReport, RepairError>;

/// Per-file outcomes of a batch, in input order.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub outcomes: Vec<RepairOutcome>,
}

impl BatchSummary {
    pub fn new(outcomes: Vec<RepairOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_err()).count()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn reports(&self) -> impl Iterator<Item = &RepairReport> {
        self.outcomes.iter().filter_map(|o| o.as_ref().ok())
    }

    pub fn errors(&self) -> impl Iterator<Item = &RepairError> {
        self.outcomes.iter().filter_map(|o| o.as_ref().err())
    }
}
