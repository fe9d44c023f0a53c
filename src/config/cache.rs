//! Resolved-rules caching.

use crate::config::{loader, merge};
use crate::domain::RuleSet;
use crate::error::ConfigError;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::UNIX_EPOCH;

/// Modification-time sentinel for "override disabled, path blank, or file
/// absent".
const NO_MTIME: i64 = -1;

/// Single-slot cache for the resolved rule set.
///
/// Owned by the caller and shared between validation requests rather than
/// living in process-global state. One lock guards the whole stat +
/// compare + rebuild sequence, so overlapping callers cannot both rebuild
/// and overwrite each other with inconsistent entries. No network or UI
/// work ever happens under the lock.
#[derive(Default)]
pub struct ConfigCache {
    slot: Mutex<Option<CacheEntry>>,
}

struct CacheEntry {
    rules: Arc<RuleSet>,
    override_enabled: bool,
    override_path: String,
    override_mtime: i64,
}

impl CacheEntry {
    fn matches(&self, enabled: bool, path: &str, mtime: i64) -> bool {
        self.override_enabled == enabled
            && self.override_path == path
            && self.override_mtime == mtime
    }
}

impl ConfigCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the current rule set.
    ///
    /// Returns the cached rules when the override settings and the
    /// override file's modification time are unchanged; otherwise reloads
    /// the default tree, re-merges the override, and replaces the slot.
    /// Performs blocking file I/O on a miss; call from a worker context,
    /// not a UI thread.
    pub fn resolve(
        &self,
        override_enabled: bool,
        override_path: &str,
    ) -> Result<Arc<RuleSet>, ConfigError> {
        // A poisoned lock only means another caller panicked mid-resolve;
        // the slot is replaced atomically, so its contents stay whole.
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);

        let mtime = override_mtime(override_enabled, override_path);
        if let Some(entry) = slot.as_ref() {
            if entry.matches(override_enabled, override_path, mtime) {
                tracing::debug!("rule cache hit");
                return Ok(Arc::clone(&entry.rules));
            }
            tracing::debug!("rule cache stale; rebuilding");
        }

        let default_tree = loader::load_default()?;
        let override_tree =
            if override_enabled { loader::load_override(override_path) } else { None };
        let merged = merge::merge(default_tree, override_tree);
        let rules = Arc::new(RuleSet::from_value(&merged));

        *slot = Some(CacheEntry {
            rules: Arc::clone(&rules),
            override_enabled,
            override_path: override_path.to_string(),
            override_mtime: mtime,
        });
        tracing::info!("rule cache updated");
        Ok(rules)
    }

    /// Clear the slot unconditionally.
    ///
    /// Called by the settings collaborator whenever the override flag or
    /// path changes, so a file swapped within the same timestamp
    /// granularity is still picked up on the next resolve.
    pub fn invalidate(&self) {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
        tracing::debug!("rule cache invalidated");
    }
}

fn override_mtime(enabled: bool, path: &str) -> i64 {
    if !enabled || path.trim().is_empty() {
        return NO_MTIME;
    }
    std::fs::metadata(Path::new(path))
        .and_then(|meta| meta.modified())
        .ok()
        .and_then(|modified| modified.duration_since(UNIX_EPOCH).ok())
        .map(|age| age.as_millis() as i64)
        .unwrap_or(NO_MTIME)
}
