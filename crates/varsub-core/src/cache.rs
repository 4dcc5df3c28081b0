//! Memoization of environment lookups for one editor context
//!
//! The cache is an explicit object owned by the entry point rather than
//! process-global state. It is append-only between invalidations: the host's
//! active-editor-change handler calls `clear()` (via
//! [`ConfigService::invalidate`](crate::ConfigService::invalidate)) to start
//! a fresh context.

use std::collections::HashMap;

/// Memoized accessor results, keyed by accessor identity
/// (e.g. `"file"`, `"workspaceFolder:backend"`).
///
/// Explicitly-unresolved results are memoized too, so a missing editor is
/// detected (and warned about) once per context, not once per occurrence.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    entries: HashMap<String, Option<String>>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the memoized result for `key`, computing and storing it on
    /// first access.
    pub(crate) fn get_or_compute(
        &mut self,
        key: &str,
        compute: impl FnOnce() -> Option<String>,
    ) -> Option<String> {
        if let Some(hit) = self.entries.get(key) {
            return hit.clone();
        }
        let value = compute();
        self.entries.insert(key.to_string(), value.clone());
        value
    }

    /// Drop every entry. Called when the active editor changes.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
