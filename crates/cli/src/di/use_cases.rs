use std::sync::Arc;
use zonefix_application::use_cases::{RepairBatchUseCase, RepairZoneFileUseCase};
use zonefix_domain::RepairConfig;
use zonefix_infrastructure::filesystem::{FsBackupStore, FsZoneFileStore, GlobInputResolver};

pub struct UseCases {
    pub repair_batch: Arc<RepairBatchUseCase>,
}

impl UseCases {
    pub fn new(config: &RepairConfig) -> Self {
        let repair_zone_file = Arc::new(RepairZoneFileUseCase::new(
            Arc::new(FsZoneFileStore::new()),
            Arc::new(FsBackupStore::new()),
            config.backup.clone(),
        ));

        Self {
            repair_batch: Arc::new(RepairBatchUseCase::new(
                Arc::new(GlobInputResolver::new()),
                repair_zone_file,
            )),
        }
    }
}
