//! Public entry point for configuration resolution
//!
//! `ConfigService` owns the boundary collaborators and the per-context
//! resolution cache. Hosts wire their active-editor-change subscription to
//! [`ConfigService::invalidate`] so a new editor context always resolves
//! fresh.

use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::Value;
use varsub_host::{ConfigSource, EditorHost, ProcessEnv};

use crate::cache::ResolutionCache;
use crate::engine;
use crate::environment::Environment;
use crate::error::Result;
use crate::lookup;

/// Resolves configuration values against the current editor context.
pub struct ConfigService {
    store: Arc<dyn ConfigSource>,
    editor: Arc<dyn EditorHost>,
    process: Arc<dyn ProcessEnv>,
    cache: Mutex<ResolutionCache>,
}

impl ConfigService {
    pub fn new(
        store: Arc<dyn ConfigSource>,
        editor: Arc<dyn EditorHost>,
        process: Arc<dyn ProcessEnv>,
    ) -> Self {
        Self {
            store,
            editor,
            process,
            cache: Mutex::new(ResolutionCache::new()),
        }
    }

    /// Fetch configuration and substitute every resolvable token.
    ///
    /// Without a notation (or with an empty one) the full configuration
    /// snapshot is resolved. With a dotted notation, only the subtree at
    /// that path is extracted and resolved; a missing or denied path yields
    /// `Value::Null`, not an error. Scalar and empty extractions are
    /// returned as-is without a substitution pass.
    ///
    /// The underlying store is never mutated; the result is a new tree of
    /// the same shape as the selection.
    pub async fn get_config(&self, notation: Option<&str>) -> Result<Value> {
        self.resolve_notation(notation)
    }

    /// Resolve several dotted notations in one call, each independently.
    pub async fn get_configs(&self, notations: &[&str]) -> Result<Vec<Value>> {
        notations
            .iter()
            .map(|notation| self.resolve_notation(Some(notation)))
            .collect()
    }

    /// Drop all memoized environment values.
    ///
    /// Hosts call this from their active-editor-change handler; cached
    /// values never cross an editor-context boundary.
    pub fn invalidate(&self) {
        self.lock_cache().clear();
        tracing::debug!("resolution cache invalidated");
    }

    fn resolve_notation(&self, notation: Option<&str>) -> Result<Value> {
        tracing::debug!(?notation, "resolving configuration");
        let snapshot = self.store.snapshot();

        let selected = match notation {
            Some(path) if !path.is_empty() => match lookup::get_path(&snapshot, path) {
                Some(value) => value.clone(),
                None => return Ok(Value::Null),
            },
            _ => snapshot.clone(),
        };

        if !has_substitutable_content(&selected) {
            return Ok(selected);
        }

        let mut cache = self.lock_cache();
        let mut environment = Environment {
            editor: self.editor.as_ref(),
            process: self.process.as_ref(),
            cache: &mut cache,
        };
        engine::substitute(&selected, &mut environment, &snapshot)
    }

    fn lock_cache(&self) -> MutexGuard<'_, ResolutionCache> {
        match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Whether a selection can textually embed tokens at all: a non-empty
/// object, array, or string. Scalars pass through untouched.
fn has_substitutable_content(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::String(s) => !s.is_empty(),
        _ => false,
    }
}
