//! zonefix Domain Layer
pub mod config;
pub mod errors;
pub mod record_marker;
pub mod repair;
pub mod zone_line;

pub use config::{CliOverrides, Config};
pub use errors::RepairError;
pub use record_marker::RecordTypeMarker;
pub use repair::{BackupPolicy, BatchSummary, RepairConfig, RepairOutcome, RepairReport};
pub use zone_line::ZoneLine;
