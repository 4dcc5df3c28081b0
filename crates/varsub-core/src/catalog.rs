//! The fixed set of recognized placeholder tokens
//!
//! Fixed-text tokens are declared in the order the engine runs them; the
//! pass order is part of the behavioural contract. The three parameterized
//! token classes (`${workspaceFolder:NAME}`, `${env:NAME}`, `${config:path}`)
//! get dedicated passes after the fixed table and are matched by regex.

use regex::Regex;
use std::sync::LazyLock;

/// Identity of the environment accessor backing a fixed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Accessor {
    WorkspaceFolder,
    WorkspaceFolderBasename,
    File,
    RelativeFile,
    RelativeFileDirname,
    FileBasename,
    FileBasenameNoExtension,
    FileDirname,
    FileExtname,
    Cwd,
    LineNumber,
    SelectedText,
    ExecPath,
    PathSeparator,
}

/// One fixed-text token class.
///
/// `text` doubles as the cheap pre-check substring and as the literal
/// replacement target. `requires_integer` gates the resolved value behind a
/// non-zero integer parse before it is accepted.
pub(crate) struct Token {
    pub text: &'static str,
    pub accessor: Accessor,
    pub requires_integer: bool,
}

const fn token(text: &'static str, accessor: Accessor) -> Token {
    Token {
        text,
        accessor,
        requires_integer: false,
    }
}

/// All fixed-text tokens, in resolution order.
pub(crate) const FIXED_TOKENS: &[Token] = &[
    token("${workspaceFolder}", Accessor::WorkspaceFolder),
    token("${workspaceFolderBasename}", Accessor::WorkspaceFolderBasename),
    token("${file}", Accessor::File),
    token("${relativeFile}", Accessor::RelativeFile),
    token("${relativeFileDirname}", Accessor::RelativeFileDirname),
    token("${fileBasename}", Accessor::FileBasename),
    token("${fileBasenameNoExtension}", Accessor::FileBasenameNoExtension),
    token("${fileDirname}", Accessor::FileDirname),
    token("${fileExtname}", Accessor::FileExtname),
    token("${cwd}", Accessor::Cwd),
    Token {
        text: "${lineNumber}",
        accessor: Accessor::LineNumber,
        requires_integer: true,
    },
    token("${selectedText}", Accessor::SelectedText),
    token("${execPath}", Accessor::ExecPath),
    token("${pathSeparator}", Accessor::PathSeparator),
];

/// `${workspaceFolder:NAME}` — named workspace root.
pub(crate) static NAMED_WORKSPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{workspaceFolder:([^}]+)\}").unwrap());

/// `${env:NAME}` — process environment variable.
pub(crate) static ENV_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{env:([^}]+)\}").unwrap());

/// `${config:path}` — dotted lookup into the full configuration.
pub(crate) static CONFIG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{config:([^}]+)\}").unwrap());
