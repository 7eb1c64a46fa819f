pub mod backup;
pub mod errors;
pub mod logging;
pub mod root;

pub use backup::BackupConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
