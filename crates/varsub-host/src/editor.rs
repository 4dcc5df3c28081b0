//! Editor and workspace host contract
//!
//! The resolution engine only ever observes the editor through this trait.
//! Hosts embedding the library implement it against their own editor API;
//! tests use scripted fakes.

use crate::NormalizedPath;

/// A named workspace root open in the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRoot {
    /// Display name of the root, matched by `${workspaceFolder:NAME}`.
    pub name: String,

    /// Absolute path of the root.
    pub path: NormalizedPath,
}

impl WorkspaceRoot {
    pub fn new(name: impl Into<String>, path: impl Into<NormalizedPath>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Read-only view of the editor and workspace state.
///
/// All accessors reflect the state at call time; none of them block or
/// perform I/O beyond what the host already holds in memory. Missing state
/// is reported as `None`/empty, never as an error — the engine turns it
/// into an unresolved token.
pub trait EditorHost: Send + Sync {
    /// Absolute path of the active editor's document, if any editor is open.
    fn active_document(&self) -> Option<NormalizedPath>;

    /// 0-based line of the active cursor, if any editor is open.
    fn cursor_line(&self) -> Option<i64>;

    /// Text of every active selection, in selection order.
    fn selections(&self) -> Vec<String>;

    /// The workspace root containing the given document.
    fn workspace_root_for(&self, document: &NormalizedPath) -> Option<WorkspaceRoot>;

    /// All workspace roots currently open in the host.
    fn workspace_roots(&self) -> Vec<WorkspaceRoot>;

    /// Surface a non-fatal warning notification to the user.
    fn show_warning(&self, message: &str);
}
