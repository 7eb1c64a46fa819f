mod backup_store;
mod input_resolver;
mod zone_file_store;

pub use backup_store::{BackupOutcome, BackupStore};
pub use input_resolver::InputResolver;
pub use zone_file_store::ZoneFileStore;
