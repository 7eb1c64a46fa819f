pub mod repair;

pub use repair::{RepairBatchUseCase, RepairZoneFileUseCase};
