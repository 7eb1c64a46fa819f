pub mod backup_store;
pub mod input_resolver;
pub mod zone_file_store;

pub use backup_store::FsBackupStore;
pub use input_resolver::GlobInputResolver;
pub use zone_file_store::FsZoneFileStore;
