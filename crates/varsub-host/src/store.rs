//! Configuration store contract

use serde_json::Value;

/// Read-only source of the full configuration tree.
///
/// Consulted both for top-level reads and for `${config:path}` lookups.
/// The snapshot is a detached copy; the resolver never writes back.
pub trait ConfigSource: Send + Sync {
    /// Full configuration snapshot as a JSON tree.
    fn snapshot(&self) -> Value;
}
