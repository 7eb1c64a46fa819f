#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use zonefix_application::ports::{BackupOutcome, BackupStore, InputResolver, ZoneFileStore};
use zonefix_domain::RepairError;

#[derive(Clone, Default)]
pub struct MockZoneFileStore {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
    failing_writes: Arc<RwLock<HashSet<PathBuf>>>,
    writes: Arc<RwLock<Vec<PathBuf>>>,
}

impl MockZoneFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files(files: Vec<(&str, &str)>) -> Self {
        let store = Self::new();
        for (path, contents) in files {
            store.insert(path, contents);
        }
        store
    }

    pub fn insert(&self, path: &str, contents: &str) {
        self.files
            .write()
            .unwrap()
            .insert(PathBuf::from(path), contents.to_string());
    }

    pub fn contents(&self, path: &str) -> Option<String> {
        self.files.read().unwrap().get(Path::new(path)).cloned()
    }

    pub fn fail_writes_to(&self, path: &str) {
        self.failing_writes
            .write()
            .unwrap()
            .insert(PathBuf::from(path));
    }

    pub fn write_count(&self) -> usize {
        self.writes.read().unwrap().len()
    }
}

impl ZoneFileStore for MockZoneFileStore {
    fn read_to_string(&self, path: &Path) -> Result<String, RepairError> {
        self.files
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| RepairError::MissingFile {
                path: path.to_path_buf(),
            })
    }

    fn replace_contents(&self, path: &Path, contents: &str) -> Result<(), RepairError> {
        if self.failing_writes.read().unwrap().contains(path) {
            return Err(RepairError::Write {
                path: path.to_path_buf(),
                reason: "read-only file system".to_string(),
            });
        }
        self.writes.write().unwrap().push(path.to_path_buf());
        self.files
            .write()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[derive(Clone)]
pub struct MockBackupStore {
    source: MockZoneFileStore,
    directories: Arc<RwLock<HashSet<PathBuf>>>,
    backups: Arc<RwLock<HashMap<PathBuf, String>>>,
    fail_directory: Arc<RwLock<bool>>,
}

impl MockBackupStore {
    pub fn new(source: MockZoneFileStore) -> Self {
        Self {
            source,
            directories: Arc::new(RwLock::new(HashSet::new())),
            backups: Arc::new(RwLock::new(HashMap::new())),
            fail_directory: Arc::new(RwLock::new(false)),
        }
    }

    pub fn with_existing_backup(self, path: &str, contents: &str) -> Self {
        self.backups
            .write()
            .unwrap()
            .insert(PathBuf::from(path), contents.to_string());
        self
    }

    pub fn failing_directory(self) -> Self {
        *self.fail_directory.write().unwrap() = true;
        self
    }

    pub fn backup(&self, path: &str) -> Option<String> {
        self.backups.read().unwrap().get(Path::new(path)).cloned()
    }

    pub fn backup_count(&self) -> usize {
        self.backups.read().unwrap().len()
    }

    pub fn has_directory(&self, path: &str) -> bool {
        self.directories.read().unwrap().contains(Path::new(path))
    }
}

impl BackupStore for MockBackupStore {
    fn ensure_directory(&self, directory: &Path) -> Result<(), RepairError> {
        if *self.fail_directory.read().unwrap() {
            return Err(RepairError::BackupDirectoryCreation {
                directory: directory.to_path_buf(),
                reason: "permission denied".to_string(),
            });
        }
        self.directories
            .write()
            .unwrap()
            .insert(directory.to_path_buf());
        Ok(())
    }

    fn copy_verbatim(
        &self,
        source: &Path,
        destination: &Path,
    ) -> Result<BackupOutcome, RepairError> {
        let mut backups = self.backups.write().unwrap();
        if backups.contains_key(destination) {
            return Ok(BackupOutcome::AlreadyExists);
        }
        let contents = self.source.read_to_string(source)?;
        backups.insert(destination.to_path_buf(), contents);
        Ok(BackupOutcome::Created)
    }
}

#[derive(Clone, Default)]
pub struct MockInputResolver {
    patterns: Arc<RwLock<HashMap<String, Vec<PathBuf>>>>,
    invalid: Arc<RwLock<HashSet<String>>>,
    aliases: Arc<RwLock<HashMap<PathBuf, PathBuf>>>,
}

impl MockInputResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pattern(self, pattern: &str, paths: Vec<&str>) -> Self {
        self.patterns.write().unwrap().insert(
            pattern.to_string(),
            paths.into_iter().map(PathBuf::from).collect(),
        );
        self
    }

    pub fn with_alias(self, alias: &str, target: &str) -> Self {
        self.aliases
            .write()
            .unwrap()
            .insert(PathBuf::from(alias), PathBuf::from(target));
        self
    }

    pub fn with_invalid_pattern(self, pattern: &str) -> Self {
        self.invalid.write().unwrap().insert(pattern.to_string());
        self
    }
}

impl InputResolver for MockInputResolver {
    fn resolve(&self, input: &str) -> Result<Vec<PathBuf>, RepairError> {
        if self.invalid.read().unwrap().contains(input) {
            return Err(RepairError::InvalidPattern {
                pattern: input.to_string(),
                reason: "unclosed character class".to_string(),
            });
        }
        Ok(self
            .patterns
            .read()
            .unwrap()
            .get(input)
            .cloned()
            .unwrap_or_else(|| vec![PathBuf::from(input)]))
    }

    fn identity(&self, path: &Path) -> PathBuf {
        self.aliases
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or_else(|| path.to_path_buf())
    }
}
