use rayon::prelude::*;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use zonefix_domain::{BatchSummary, RepairError};

use super::RepairZoneFileUseCase;
use crate::ports::InputResolver;

/// Repairs every file named by a list of paths and glob patterns.
///
/// Files are independent of each other and are spread over the rayon pool.
/// A failure on one file is recorded in the summary and never stops the
/// rest. A file matched by several inputs, under any spelling the resolver
/// maps to the same identity, is repaired once.
pub struct RepairBatchUseCase {
    resolver: Arc<dyn InputResolver>,
    repair: Arc<RepairZoneFileUseCase>,
}

impl RepairBatchUseCase {
    pub fn new(resolver: Arc<dyn InputResolver>, repair: Arc<RepairZoneFileUseCase>) -> Self {
        Self { resolver, repair }
    }

    #[instrument(skip(self, inputs), fields(inputs = inputs.len()))]
    pub fn execute(&self, inputs: &[String]) -> BatchSummary {
        let targets = self.resolve_targets(inputs);
        debug!(files = targets.len(), "Inputs resolved");

        let outcomes: Vec<_> = targets
            .into_par_iter()
            .map(|target| target.and_then(|path| self.repair.execute(&path)))
            .collect();

        let summary = BatchSummary::new(outcomes);
        for err in summary.errors() {
            error!(operation = err.operation(), error = %err, "Zone file repair failed");
        }
        info!(
            succeeded = summary.succeeded(),
            failed = summary.failed(),
            "Batch complete"
        );

        summary
    }

    fn resolve_targets(&self, inputs: &[String]) -> Vec<Result<PathBuf, RepairError>> {
        let mut seen = HashSet::new();
        let mut targets = Vec::new();

        for input in inputs {
            match self.resolver.resolve(input) {
                Ok(paths) if paths.is_empty() => targets.push(Err(RepairError::MissingFile {
                    path: PathBuf::from(input),
                })),
                Ok(paths) => targets.extend(
                    paths
                        .into_iter()
                        .filter(|path| seen.insert(self.resolver.identity(path)))
                        .map(Ok),
                ),
                Err(e) => targets.push(Err(e)),
            }
        }

        targets
    }
}
