//! Host environment abstraction for the variable resolver
//!
//! Defines the boundary traits through which the resolution engine reads
//! editor, workspace, and process state, plus the normalized path type the
//! path-derived tokens are computed from. The engine never touches the host
//! directly; everything flows through these contracts:
//!
//! - [`EditorHost`] — active document, cursor, selections, workspace roots
//! - [`ProcessEnv`] — environment variables, cwd, executable path, separator
//! - [`ConfigSource`] — read-only configuration snapshot
//! - [`NormalizedPath`] — forward-slash path value with token derivations

pub mod editor;
pub mod path;
pub mod process;
pub mod store;

pub use editor::{EditorHost, WorkspaceRoot};
pub use path::NormalizedPath;
pub use process::{ProcessEnv, SystemEnv};
pub use store::ConfigSource;
