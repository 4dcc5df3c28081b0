//! Environment accessors
//!
//! Each root accessor reads exactly one piece of host state, warns through
//! the host when a precondition is missing ("No open editors" / "No open
//! workspaces"), and reports the miss as `None` — unresolved, never an
//! error. Derived accessors compose root accessors purely and do not warn
//! on their own, so one user action produces at most one warning per root.
//!
//! Results flow through the [`ResolutionCache`] keyed by accessor identity.
//! Cursor line and selections are deliberately uncached: both can change
//! without an editor-change signal, which is the cache's only invalidation
//! trigger.

use varsub_host::{EditorHost, NormalizedPath, ProcessEnv};

use crate::cache::ResolutionCache;
use crate::catalog::Accessor;

const NO_OPEN_EDITORS: &str = "No open editors";
const NO_OPEN_WORKSPACES: &str = "No open workspaces";

/// One resolution pass's view of the environment.
///
/// Borrows the host boundary objects and the current context's cache for
/// the duration of a single substitution call.
pub(crate) struct Environment<'a> {
    pub editor: &'a dyn EditorHost,
    pub process: &'a dyn ProcessEnv,
    pub cache: &'a mut ResolutionCache,
}

impl Environment<'_> {
    /// Dispatch a fixed-token accessor by identity.
    pub fn resolve(&mut self, accessor: Accessor) -> Option<String> {
        match accessor {
            Accessor::WorkspaceFolder => self.workspace_folder(),
            Accessor::WorkspaceFolderBasename => self.workspace_folder_basename(),
            Accessor::File => self.file(),
            Accessor::RelativeFile => self.relative_file(),
            Accessor::RelativeFileDirname => self.relative_file_dirname(),
            Accessor::FileBasename => self.file_basename(),
            Accessor::FileBasenameNoExtension => self.file_basename_no_extension(),
            Accessor::FileDirname => self.file_dirname(),
            Accessor::FileExtname => self.file_extname(),
            Accessor::Cwd => self.cwd(),
            Accessor::LineNumber => self.line_number(),
            Accessor::SelectedText => self.selected_text(),
            Accessor::ExecPath => self.exec_path(),
            Accessor::PathSeparator => self.path_separator(),
        }
    }

    /// Absolute path of the active file.
    fn file(&mut self) -> Option<String> {
        let editor = self.editor;
        self.cache.get_or_compute("file", || match editor.active_document() {
            Some(document) => Some(document.as_str().to_string()),
            None => {
                editor.show_warning(NO_OPEN_EDITORS);
                None
            }
        })
    }

    /// Absolute path of the workspace root containing the active file.
    ///
    /// An empty root path from the host counts as unresolved.
    fn workspace_folder(&mut self) -> Option<String> {
        let editor = self.editor;
        self.cache.get_or_compute("workspaceFolder", || {
            let Some(document) = editor.active_document() else {
                editor.show_warning(NO_OPEN_EDITORS);
                return None;
            };
            let Some(root) = editor.workspace_root_for(&document) else {
                editor.show_warning(NO_OPEN_WORKSPACES);
                return None;
            };
            if root.path.as_str().is_empty() {
                editor.show_warning(NO_OPEN_WORKSPACES);
                return None;
            }
            Some(root.path.as_str().to_string())
        })
    }

    /// Absolute path of the named workspace root, independent of the
    /// active editor.
    pub fn named_workspace_root(&mut self, name: &str) -> Option<String> {
        let editor = self.editor;
        self.cache
            .get_or_compute(&format!("workspaceFolder:{name}"), || {
                editor
                    .workspace_roots()
                    .into_iter()
                    .find(|root| root.name == name)
                    .map(|root| root.path.as_str().to_string())
            })
    }

    fn workspace_folder_basename(&mut self) -> Option<String> {
        let folder = self.workspace_folder()?;
        Some(NormalizedPath::new(&folder).basename().to_string())
    }

    fn relative_file(&mut self) -> Option<String> {
        let folder = self.workspace_folder()?;
        let file = self.file()?;
        Some(NormalizedPath::new(&file).relative_to(&NormalizedPath::new(&folder)))
    }

    fn relative_file_dirname(&mut self) -> Option<String> {
        let relative = self.relative_file()?;
        Some(NormalizedPath::new(&relative).dirname().as_str().to_string())
    }

    fn file_basename(&mut self) -> Option<String> {
        let file = self.file()?;
        Some(NormalizedPath::new(&file).basename().to_string())
    }

    fn file_basename_no_extension(&mut self) -> Option<String> {
        let file = self.file()?;
        Some(NormalizedPath::new(&file).basename_no_extension().to_string())
    }

    fn file_dirname(&mut self) -> Option<String> {
        let file = self.file()?;
        Some(NormalizedPath::new(&file).dirname().as_str().to_string())
    }

    /// Extension of the active file, empty string when there is none.
    /// An empty extension is a resolvable value, not a miss.
    fn file_extname(&mut self) -> Option<String> {
        let file = self.file()?;
        Some(NormalizedPath::new(&file).extension().to_string())
    }

    fn cwd(&mut self) -> Option<String> {
        let process = self.process;
        self.cache.get_or_compute("cwd", || process.cwd())
    }

    fn exec_path(&mut self) -> Option<String> {
        let process = self.process;
        self.cache.get_or_compute("execPath", || process.exec_path())
    }

    fn path_separator(&mut self) -> Option<String> {
        Some(self.process.path_separator().to_string())
    }

    /// 1-based cursor line. Uncached: the cursor moves without an
    /// editor-change signal.
    fn line_number(&mut self) -> Option<String> {
        match self.editor.cursor_line() {
            Some(line) => Some((line + 1).to_string()),
            None => {
                self.editor.show_warning(NO_OPEN_EDITORS);
                None
            }
        }
    }

    /// Comma-joined text of all selections. Uncached for the same reason
    /// as the cursor line; an empty joined text is a miss.
    fn selected_text(&mut self) -> Option<String> {
        if self.editor.active_document().is_none() {
            self.editor.show_warning(NO_OPEN_EDITORS);
            return None;
        }
        let joined = self.editor.selections().join(",");
        if joined.is_empty() { None } else { Some(joined) }
    }

    /// Value of a process environment variable. An empty value counts as
    /// unresolved, matching the host's historical truthiness check.
    pub fn process_var(&self, name: &str) -> Option<String> {
        self.process.var(name).filter(|value| !value.is_empty())
    }
}
