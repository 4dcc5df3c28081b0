//! Process environment contract and the system-backed implementation

/// Read-only view of the host process environment.
///
/// `cwd` and `exec_path` return `Option` because the underlying OS lookups
/// can fail; the engine treats `None` as an unresolved token.
pub trait ProcessEnv: Send + Sync {
    /// Value of the named environment variable.
    fn var(&self, name: &str) -> Option<String>;

    /// Current working directory of the process.
    fn cwd(&self) -> Option<String>;

    /// Path of the running host executable.
    fn exec_path(&self) -> Option<String>;

    /// Path separator of the host operating system.
    fn path_separator(&self) -> char;
}

/// [`ProcessEnv`] backed by `std::env`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnv;

impl SystemEnv {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessEnv for SystemEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn cwd(&self) -> Option<String> {
        match std::env::current_dir() {
            Ok(dir) => Some(dir.to_string_lossy().into_owned()),
            Err(e) => {
                tracing::warn!("failed to read current dir: {}", e);
                None
            }
        }
    }

    fn exec_path(&self) -> Option<String> {
        match std::env::current_exe() {
            Ok(exe) => Some(exe.to_string_lossy().into_owned()),
            Err(e) => {
                tracing::warn!("failed to read executable path: {}", e);
                None
            }
        }
    }

    fn path_separator(&self) -> char {
        std::path::MAIN_SEPARATOR
    }
}
