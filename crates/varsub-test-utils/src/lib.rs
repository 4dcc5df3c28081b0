//! Shared test fixtures for the variable-substitution workspace.
//!
//! Scripted implementations of the host boundary traits so crate test
//! suites can describe an editor context declaratively instead of mocking
//! by hand. Dev-dependency only — never published.
//!
//! - [`ScriptedEditor`] — builder-style [`EditorHost`] with warning capture
//! - [`StaticEnv`] — fixed [`ProcessEnv`] values
//! - [`MemoryConfig`] — in-memory [`ConfigSource`] snapshot

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::Value;
use varsub_host::{ConfigSource, EditorHost, NormalizedPath, ProcessEnv, WorkspaceRoot};

/// Scripted [`EditorHost`] for tests.
///
/// State is set up through the builder methods; warnings shown by the code
/// under test are captured for assertion, and reads of the active document
/// are counted so cache behaviour can be verified.
#[derive(Debug, Default)]
pub struct ScriptedEditor {
    document: Mutex<Option<NormalizedPath>>,
    cursor_line: Option<i64>,
    selections: Vec<String>,
    active_root: Option<WorkspaceRoot>,
    named_roots: Vec<WorkspaceRoot>,
    warnings: Mutex<Vec<String>>,
    document_reads: AtomicUsize,
}

impl ScriptedEditor {
    /// An editor host with no open editor and no workspace.
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn with_document(self, path: &str) -> Self {
        *self.document.lock().unwrap() = Some(NormalizedPath::new(path));
        self
    }

    pub fn with_cursor_line(mut self, line: i64) -> Self {
        self.cursor_line = Some(line);
        self
    }

    pub fn with_selections(mut self, selections: &[&str]) -> Self {
        self.selections = selections.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Workspace root reported for the active document.
    pub fn with_active_root(mut self, name: &str, path: &str) -> Self {
        self.active_root = Some(WorkspaceRoot::new(name, path));
        self
    }

    /// Named roots reported by `workspace_roots`.
    pub fn with_named_root(mut self, name: &str, path: &str) -> Self {
        self.named_roots.push(WorkspaceRoot::new(name, path));
        self
    }

    /// Swap the active document mid-test, as an editor change would.
    pub fn set_document(&self, path: &str) {
        *self.document.lock().unwrap() = Some(NormalizedPath::new(path));
    }

    /// Warnings shown so far, in order.
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }

    /// Number of times the active document was read.
    pub fn document_reads(&self) -> usize {
        self.document_reads.load(Ordering::SeqCst)
    }
}

impl EditorHost for ScriptedEditor {
    fn active_document(&self) -> Option<NormalizedPath> {
        self.document_reads.fetch_add(1, Ordering::SeqCst);
        self.document.lock().unwrap().clone()
    }

    fn cursor_line(&self) -> Option<i64> {
        self.cursor_line
    }

    fn selections(&self) -> Vec<String> {
        self.selections.clone()
    }

    fn workspace_root_for(&self, _document: &NormalizedPath) -> Option<WorkspaceRoot> {
        self.active_root.clone()
    }

    fn workspace_roots(&self) -> Vec<WorkspaceRoot> {
        self.named_roots.clone()
    }

    fn show_warning(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}

/// Fixed [`ProcessEnv`] values for deterministic tests.
#[derive(Debug, Clone)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
    cwd: Option<String>,
    exec_path: Option<String>,
    separator: char,
}

impl Default for StaticEnv {
    fn default() -> Self {
        Self {
            vars: HashMap::new(),
            cwd: Some("/home/user/project".to_string()),
            exec_path: Some("/usr/local/bin/edit-host".to_string()),
            separator: '/',
        }
    }
}

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_cwd(mut self, cwd: &str) -> Self {
        self.cwd = Some(cwd.to_string());
        self
    }

    pub fn with_exec_path(mut self, exec_path: &str) -> Self {
        self.exec_path = Some(exec_path.to_string());
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

impl ProcessEnv for StaticEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn cwd(&self) -> Option<String> {
        self.cwd.clone()
    }

    fn exec_path(&self) -> Option<String> {
        self.exec_path.clone()
    }

    fn path_separator(&self) -> char {
        self.separator
    }
}

/// In-memory [`ConfigSource`] wrapping a JSON tree.
#[derive(Debug, Clone)]
pub struct MemoryConfig {
    tree: Value,
}

impl MemoryConfig {
    pub fn new(tree: Value) -> Self {
        Self { tree }
    }
}

impl ConfigSource for MemoryConfig {
    fn snapshot(&self) -> Value {
        self.tree.clone()
    }
}
