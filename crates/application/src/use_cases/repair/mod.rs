pub mod repair_batch;
pub mod repair_zone_file;

pub use repair_batch::RepairBatchUseCase;
pub use repair_zone_file::RepairZoneFileUseCase;
