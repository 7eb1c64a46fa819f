use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use zonefix_application::ports::InputResolver;
use zonefix_domain::RepairError;

const GLOB_META: [char; 3] = ['*', '?', '['];

/// Resolves command-line inputs as literal paths or glob patterns.
///
/// An input naming an existing path is taken literally, even when it
/// contains glob metacharacters. Anything else containing `*`, `?` or `[`
/// is expanded with [`glob::glob`] and only regular files are kept. A plain
/// name that does not exist is returned as-is; reading it reports the
/// missing file.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobInputResolver;

impl GlobInputResolver {
    pub fn new() -> Self {
        Self
    }
}

impl InputResolver for GlobInputResolver {
    fn resolve(&self, input: &str) -> Result<Vec<PathBuf>, RepairError> {
        let literal = Path::new(input);
        if literal.exists() || !input.contains(GLOB_META) {
            return Ok(vec![literal.to_path_buf()]);
        }

        let entries = glob::glob(input).map_err(|e| RepairError::InvalidPattern {
            pattern: input.to_string(),
            reason: e.to_string(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => paths.push(path),
                Ok(_) => {}
                Err(e) => {
                    warn!(pattern = %input, error = %e, "Skipping unreadable glob match");
                }
            }
        }

        Ok(paths)
    }

    /// Canonical path, so `./a.zone`, `sub/../a.zone` and symlinks to it
    /// collapse to one file. Paths that cannot be canonicalized keep their
    /// spelling.
    fn identity(&self, path: &Path) -> PathBuf {
        fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    }
}
